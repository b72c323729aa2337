//! Configuration loading tests

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use bulk_ops::config::{Config, Validate};
    use bulk_ops::{BatchProcessor, ProcessorConfig};
    use std::io::Write;

    #[tokio::test]
    async fn test_config_file_drives_processor() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
processor:
  batch_size: 25
  max_concurrent: 2
database:
  url: "sqlite::memory:"
logging:
  level: "bulk_ops=debug"
"#
        )
        .unwrap();

        let config = assert_ok!(Config::from_file(file.path()).await);
        assert!(config.validate().is_ok());
        assert!(config.database.is_in_memory());

        let processor =
            assert_ok!(BatchProcessor::new(ProcessorConfig::from_settings(&config.processor)));
        assert_eq!(processor.config().batch_size, 25);
        assert_eq!(processor.config().max_concurrent, 2);
    }

    #[tokio::test]
    async fn test_example_config_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/bulk-import.example.yaml");
        let config = assert_ok!(Config::from_file(path).await);
        assert_eq!(config.processor.batch_size, 100);
        assert_eq!(config.processor.max_concurrent, 5);
    }

    #[test]
    fn test_zero_sizes_are_rejected() {
        let result = Config::from_yaml("processor:\n  batch_size: 0\n").and_then(Config::finish);
        assert!(result.is_err());

        assert!(BatchProcessor::new(ProcessorConfig::new().with_max_concurrent(0)).is_err());
    }
}
