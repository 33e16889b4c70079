use crate::core::extractor::EmailExtractor;
use crate::core::report;
use crate::core::{ConfigProvider, ExtractionResult, Pipeline, Report, Storage};
use crate::utils::error::Result;

pub struct EmailPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    extractor: EmailExtractor,
}

impl<S: Storage, C: ConfigProvider> EmailPipeline<S, C> {
    pub fn new(storage: S, config: C, extractor: EmailExtractor) -> Self {
        Self {
            storage,
            config,
            extractor,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for EmailPipeline<S, C> {
    fn extract(&self) -> Result<String> {
        let path = self.config.input_path();
        tracing::debug!("Reading input file: {}", path);

        let content = self.storage.read_text(path)?;
        tracing::info!(
            "✅ Read input file '{}' ({} characters)",
            path,
            content.chars().count()
        );
        Ok(content)
    }

    fn transform(&self, text: &str) -> Result<ExtractionResult> {
        let result = self.extractor.extract_detailed(text);

        tracing::debug!(
            "Scanned {} characters, {} raw matches, {} duplicates removed",
            result.characters_scanned,
            result.matches_found,
            result.duplicates_removed()
        );
        tracing::info!(
            "🔍 Scanning complete — {} unique email(s) found",
            result.emails.len()
        );
        Ok(result)
    }

    fn load(&self, report: &Report) -> Result<String> {
        let format = self.config.report_format();
        let output_path = self.config.output_path();

        let contents = report::render(report, format)?;
        tracing::debug!(
            "Writing {} report ({} bytes) to {}",
            format,
            contents.len(),
            output_path
        );
        self.storage.write_text(output_path, &contents)?;

        tracing::info!("✅ Results saved to '{}'", output_path);
        Ok(output_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReportFormat;
    use crate::utils::error::EtlError;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, contents: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .unwrap()
                .insert(path.to_string(), contents.to_string());
            storage
        }

        fn get_file(&self, path: &str) -> Option<String> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_text(&self, path: &str) -> Result<String> {
            self.get_file(path).ok_or_else(|| EtlError::InputNotFound {
                path: PathBuf::from(path),
            })
        }

        fn write_text(&self, path: &str, contents: &str) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), contents.to_string());
            Ok(())
        }
    }

    struct MockConfig {
        format: ReportFormat,
    }

    impl MockConfig {
        fn new(format: ReportFormat) -> Self {
            Self { format }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            "input.txt"
        }

        fn output_path(&self) -> &str {
            "extracted_emails.txt"
        }

        fn report_format(&self) -> ReportFormat {
            self.format
        }
    }

    fn pipeline(storage: MockStorage, format: ReportFormat) -> EmailPipeline<MockStorage, MockConfig> {
        EmailPipeline::new(storage, MockConfig::new(format), EmailExtractor::new().unwrap())
    }

    #[test]
    fn test_extract_reads_configured_input() {
        let storage = MockStorage::with_file("input.txt", "hello a@b.com");
        let pipeline = pipeline(storage, ReportFormat::Text);

        assert_eq!(pipeline.extract().unwrap(), "hello a@b.com");
    }

    #[test]
    fn test_extract_missing_input() {
        let pipeline = pipeline(MockStorage::default(), ReportFormat::Text);

        let err = pipeline.extract().unwrap_err();
        assert!(matches!(err, EtlError::InputNotFound { .. }));
    }

    #[test]
    fn test_transform_normalizes_and_sorts() {
        let pipeline = pipeline(MockStorage::default(), ReportFormat::Text);

        let result = pipeline
            .transform("Z@Example.org y@example.org z@example.ORG")
            .unwrap();
        assert_eq!(result.emails, vec!["y@example.org", "z@example.org"]);
        assert_eq!(result.matches_found, 3);
    }

    #[test]
    fn test_load_writes_text_report() {
        let storage = MockStorage::default();
        let pipeline = pipeline(storage.clone(), ReportFormat::Text);

        let report = Report::new(vec!["a@b.com".to_string()]);
        let output_path = pipeline.load(&report).unwrap();

        assert_eq!(output_path, "extracted_emails.txt");
        let written = storage.get_file("extracted_emails.txt").unwrap();
        assert!(written.contains("    1.  a@b.com\n"));
        assert!(written.contains("Total     : 1 unique email(s) found"));
    }

    #[test]
    fn test_load_replaces_previous_output() {
        let storage = MockStorage::with_file("extracted_emails.txt", "stale content");
        let pipeline = pipeline(storage.clone(), ReportFormat::Text);

        pipeline.load(&Report::new(vec![])).unwrap();

        let written = storage.get_file("extracted_emails.txt").unwrap();
        assert!(!written.contains("stale content"));
        assert!(written.contains("No email addresses were found in the input file."));
    }

    #[test]
    fn test_load_uses_configured_format() {
        let storage = MockStorage::default();
        let pipeline = pipeline(storage.clone(), ReportFormat::Json);

        pipeline.load(&Report::new(vec!["a@b.com".to_string()])).unwrap();

        let written = storage.get_file("extracted_emails.txt").unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["total"], 1);
    }
}
