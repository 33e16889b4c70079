pub mod etl;
pub mod extractor;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{ExtractionResult, Report, ReportFormat, RunOutcome};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
