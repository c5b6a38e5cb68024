pub mod args;
pub mod context;
pub mod output;

pub use args::{Cli, Commands, ExtractArgs, OutputFormat, TokenizeArgs};
pub use context::CliContext;
pub use output::{
    CliColors, entities_json, error_code, format_error, format_info, format_success,
    output_error, print_entity_list, print_token_list, tokens_json,
};
