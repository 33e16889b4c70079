use crate::domain::model::{ExtractionResult, Report, ReportFormat};
use crate::utils::error::Result;

/// File access used by the pipeline. Writes replace any prior content.
pub trait Storage {
    fn read_text(&self, path: &str) -> Result<String>;
    fn write_text(&self, path: &str, contents: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn report_format(&self) -> ReportFormat;
}

/// Loader → Extractor → Reporter, run in that order by the engine.
pub trait Pipeline {
    fn extract(&self) -> Result<String>;
    fn transform(&self, text: &str) -> Result<ExtractionResult>;
    fn load(&self, report: &Report) -> Result<String>;
}
