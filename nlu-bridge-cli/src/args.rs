//! Command argument structures

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "nlu-bridge-cli")]
#[command(about = "Tokenize text and extract entities with nlu-bridge components", long_about = None)]
#[command(version = nlu_bridge::VERSION)]
pub struct Cli {
    /// Configuration file (toml, yaml or json)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Output format - use json for tool integration
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub output: OutputFormat,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (only errors are logged)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error); overrides the configuration
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Override the tokenizer weight-set (name, Hub repo id or local path)
    #[arg(long, global = true)]
    pub model_weights: Option<String>,

    /// Override the recognizers-service url
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tokenize text with the pretrained tokenizer
    Tokenize(TokenizeArgs),

    /// Extract entities with recognizers-service
    Extract(ExtractArgs),

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// Text to tokenize
    pub text: String,

    /// Split the text as an intent name instead of tokenizing it
    #[arg(long)]
    pub intent: bool,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text to analyze
    pub text: String,

    /// Only keep these entity types (repeatable)
    #[arg(long = "entity", short = 'e')]
    pub entities: Vec<String>,

    /// Culture used to interpret the text (e.g. en-us, zh-cn)
    #[arg(long)]
    pub culture: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}
