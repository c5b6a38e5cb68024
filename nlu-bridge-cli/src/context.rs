use nlu_bridge::config::ConfigLoader;
use nlu_bridge::logging::parse_log_level;
use nlu_bridge::prelude::*;

use crate::args::Cli;

/// Effective configuration for one CLI invocation.
pub struct CliContext {
    pub config: NluConfig,
}

impl CliContext {
    /// Merge default files, `--config`, environment and flag overrides.
    ///
    /// The configured log level is kept unless `--quiet`, `--verbose` or
    /// `--log-level` is given.
    pub fn from_args(cli: &Cli) -> nlu_bridge::Result<Self> {
        let mut loader = ConfigLoader::new();
        loader.load_default_files();
        if let Some(path) = &cli.config {
            loader.load_file(path)?;
        }
        loader.load_env();

        let mut builder = ConfigBuilder::from_config(loader.extract()?);
        if let Some(weights) = &cli.model_weights {
            builder = builder.with_model_weights(weights.as_str());
        }
        if let Some(url) = &cli.url {
            builder = builder.with_recognizers_url(url.as_str());
        }

        if cli.quiet {
            builder = builder.with_log_level(LogLevel::Error);
        } else if cli.verbose {
            builder = builder.with_log_level(LogLevel::Debug);
        } else if let Some(level) = &cli.log_level {
            builder = builder.with_log_level(parse_log_level(level)?);
        }

        let config = builder.build()?;

        Ok(Self { config })
    }

    pub fn tokenizer(&self) -> nlu_bridge::Result<PretrainedTokenizer> {
        PretrainedTokenizer::new(self.config.tokenizer.clone())
    }

    pub fn extractor(
        &self,
        entities: &[String],
        culture: Option<&str>,
    ) -> nlu_bridge::Result<RecognizersServiceExtractor> {
        let mut config = self.config.recognizers.clone();
        if !entities.is_empty() {
            config.entities = Some(entities.to_vec());
        }
        if let Some(culture) = culture {
            config.culture = culture.to_string();
        }
        RecognizersServiceExtractor::new(config)
    }
}
