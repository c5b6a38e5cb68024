use clap::Parser;
use nlu_bridge::message::INTENT;
use nlu_bridge::prelude::*;
use tracing::debug;

use nlu_bridge_cli::{
    Cli, CliContext, Commands, ExtractArgs, OutputFormat, TokenizeArgs, entities_json,
    output_error, print_entity_list, print_token_list, tokens_json,
};

#[tokio::main]
async fn main() {
    let cli_args = Cli::parse();
    let output_format = cli_args.output;

    if let Err(e) = run(cli_args).await {
        output_error(&e, output_format);
        std::process::exit(1);
    }
}

async fn run(cli_args: Cli) -> nlu_bridge::Result<()> {
    let context = CliContext::from_args(&cli_args)?;
    nlu_bridge::logging::init(&context.config.logging)?;
    debug!("Effective configuration: {:?}", context.config);

    match cli_args.command {
        Commands::Tokenize(args) => handle_tokenize(&context, args, cli_args.output),
        Commands::Extract(args) => handle_extract(&context, args, cli_args.output).await,
        Commands::Config => print_json(&context.config),
    }
}

fn handle_tokenize(
    context: &CliContext,
    args: TokenizeArgs,
    output_format: OutputFormat,
) -> nlu_bridge::Result<()> {
    let tokenizer = context.tokenizer()?;
    let tokens = if args.intent {
        tokenizer.splitting().split_name(&args.text, INTENT)
    } else {
        tokenizer.tokenize_text(&args.text)?
    };

    match output_format {
        OutputFormat::Json => print_json(&tokens_json(&tokens)),
        OutputFormat::Table => {
            print_token_list(&tokens);
            Ok(())
        }
    }
}

async fn handle_extract(
    context: &CliContext,
    args: ExtractArgs,
    output_format: OutputFormat,
) -> nlu_bridge::Result<()> {
    let extractor = context.extractor(&args.entities, args.culture.as_deref())?;

    let mut message = Message::new(args.text);
    extractor.process(&mut message).await?;

    match output_format {
        OutputFormat::Json => print_json(&entities_json(message.entities())),
        OutputFormat::Table => {
            print_entity_list(message.entities());
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> nlu_bridge::Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| NluError::Other(format!("Failed to serialize output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
