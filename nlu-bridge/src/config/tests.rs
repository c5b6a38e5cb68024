#[cfg(test)]
mod tests {
    use crate::config::{
        ConfigBuilder, ConfigError, ConfigLoader, LogLevel, NluConfig, validation,
    };
    use crate::tokenization::ModelFamily;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = NluConfig::default();
        assert_eq!(config.tokenizer.model_name, ModelFamily::Bert);
        assert_eq!(config.tokenizer.model_weights, "bert-wwm-ext-chinese");
        assert!(!config.tokenizer.intent_tokenization_flag);
        assert_eq!(config.tokenizer.intent_split_symbol, "_");
        assert!(config.tokenizer.token_pattern.is_none());

        assert!(config.recognizers.entities.is_none());
        assert!(config.recognizers.units.is_none());
        assert!(config.recognizers.url.is_none());
        assert_eq!(config.recognizers.culture, "en-us");
        assert!(config.recognizers.show_numbers);
        assert!(config.recognizers.merge_results);
        assert_eq!(config.recognizers.timeout_duration(), Duration::from_secs(3));

        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_model_name(ModelFamily::Ernie)
            .with_recognizers_url("http://localhost:8000/recognize")
            .with_entities(["datetime", "number"])
            .with_culture("zh-cn")
            .with_timeout_secs(1.5)
            .with_log_level(LogLevel::Debug)
            .build()
            .unwrap();

        assert_eq!(config.tokenizer.model_name, ModelFamily::Ernie);
        assert_eq!(
            config.tokenizer.model_weights,
            ModelFamily::Ernie.default_weights()
        );
        assert_eq!(
            config.recognizers.url.as_deref(),
            Some("http://localhost:8000/recognize")
        );
        assert_eq!(
            config.recognizers.entities,
            Some(vec!["datetime".to_string(), "number".to_string()])
        );
        assert_eq!(config.recognizers.culture, "zh-cn");
        assert_eq!(
            config.recognizers.timeout_duration(),
            Duration::from_millis(1500)
        );
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_validation() {
        let config = NluConfig::default();
        assert!(validation::validate_config(&config).is_ok());

        let zero_timeout = ConfigBuilder::new().with_timeout_secs(0.0).build();
        assert!(matches!(zero_timeout, Err(ConfigError::ValidationError(_))));

        let bad_pattern = ConfigBuilder::new().with_token_pattern("(unclosed").build();
        assert!(matches!(bad_pattern, Err(ConfigError::ValidationError(_))));

        let empty_symbol = ConfigBuilder::new().with_intent_split("").build();
        assert!(matches!(empty_symbol, Err(ConfigError::ValidationError(_))));

        let bad_url = ConfigBuilder::new().with_recognizers_url("not a url").build();
        assert!(matches!(bad_url, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_loader_reads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nlu-bridge.yaml");
        std::fs::write(
            &path,
            "tokenizer:\n  model_name: roberta\n  model_weights: roberta-wwm-ext\n\
             recognizers:\n  url: http://config:8000\n  entities: [datetime]\n  timeout: 5\n",
        )
        .unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        let config = loader.extract().unwrap();

        assert_eq!(config.tokenizer.model_name, ModelFamily::Roberta);
        assert_eq!(config.tokenizer.model_weights, "roberta-wwm-ext");
        assert_eq!(config.recognizers.url.as_deref(), Some("http://config:8000"));
        assert_eq!(
            config.recognizers.entities,
            Some(vec!["datetime".to_string()])
        );
        assert_eq!(config.recognizers.timeout_duration(), Duration::from_secs(5));
        // Untouched keys keep their defaults
        assert_eq!(config.recognizers.culture, "en-us");
    }

    #[test]
    fn test_loader_rejects_unknown_model_family() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nlu-bridge.toml");
        std::fs::write(&path, "[tokenizer]\nmodel_name = \"gpt\"\n").unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        let err = loader.extract().unwrap_err();

        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().contains("gpt"));
    }

    #[test]
    fn test_loader_missing_and_unsupported_files() {
        let mut loader = ConfigLoader::new();
        assert!(matches!(
            loader.load_file("/definitely/not/here.toml"),
            Err(ConfigError::FileLoadError(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "x=1").unwrap();
        assert!(matches!(
            loader.load_file(&path),
            Err(ConfigError::FileLoadError(_))
        ));

        // A failed load leaves the defaults usable
        assert!(loader.extract().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = ConfigBuilder::new()
            .with_model_weights("/models/bert")
            .with_units(["meter"])
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: NluConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            config.tokenizer.model_weights,
            deserialized.tokenizer.model_weights
        );
        assert_eq!(config.recognizers.units, deserialized.recognizers.units);
        assert!(!json.contains("case_sensitive"));
    }
}
