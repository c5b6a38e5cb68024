use colored::*;
use nlu_bridge::prelude::*;
use serde_json::json;

use crate::args::OutputFormat;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn entity() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }
}

/// Error code reported in JSON output.
pub fn error_code(error: &NluError) -> &'static str {
    match error {
        NluError::Configuration(_) => "CONFIGURATION_ERROR",
        NluError::ModelLoading { .. } => "MODEL_LOADING_ERROR",
        NluError::Tokenization(_) => "TOKENIZATION_ERROR",
        NluError::InvalidAttribute { .. } => "INVALID_ATTRIBUTE",
        NluError::Logging(_) => "LOGGING_ERROR",
        NluError::Io(_) => "IO_ERROR",
        NluError::Other(_) => "OTHER_ERROR",
    }
}

/// Report an error on stderr in the requested format
pub fn output_error(error: &NluError, output_format: OutputFormat) {
    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "error": true,
                "code": error_code(error),
                "message": error.to_string(),
            });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => eprintln!("{}", format_error(&error.to_string())),
    }
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn tokens_json(tokens: &[Token]) -> serde_json::Value {
    json!({
        "count": tokens.len(),
        "tokens": tokens,
    })
}

pub fn entities_json(entities: &[Entity]) -> serde_json::Value {
    json!({
        "count": entities.len(),
        "entities": entities,
    })
}

pub fn print_token_list(tokens: &[Token]) {
    if tokens.is_empty() {
        println!("{}", format_info("No tokens produced."));
        return;
    }

    println!("{}", format_success(&format!("{} tokens:", tokens.len())));
    println!();
    println!(
        "{:<20} {:>6} {:>6}",
        "Token".color(CliColors::muted()).bold(),
        "Start".color(CliColors::muted()).bold(),
        "End".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(34).color(CliColors::muted()));

    for token in tokens {
        println!(
            "{:<20} {:>6} {:>6}",
            token.text.color(CliColors::entity()),
            token.start,
            token.end
        );
    }
}

pub fn print_entity_list(entities: &[Entity]) {
    if entities.is_empty() {
        println!("{}", format_info("No entities found."));
        return;
    }

    println!(
        "{}",
        format_success(&format!("Found {} entities:", entities.len()))
    );
    println!();
    println!(
        "{:<16} {:<20} {:>6} {:>6}  {}",
        "Type".color(CliColors::muted()).bold(),
        "Text".color(CliColors::muted()).bold(),
        "Start".color(CliColors::muted()).bold(),
        "End".color(CliColors::muted()).bold(),
        "Value".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(70).color(CliColors::muted()));

    for entity in entities {
        let value = entity
            .value
            .as_ref()
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<16} {:<20} {:>6} {:>6}  {}",
            entity.entity.color(CliColors::entity()),
            entity.text,
            entity.start,
            entity.end,
            value
        );
    }
}
