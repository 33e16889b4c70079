use crate::core::{Pipeline, Report, RunOutcome};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Reads the input, extracts addresses, then writes the report. A failed stage
    /// stops the run, so a missing input never touches the output path.
    pub fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting email extraction...");

        // Extract (loader)
        let text = self.pipeline.extract()?;
        self.monitor.log_stats("Load");

        // Transform (extractor)
        let result = self.pipeline.transform(&text)?;
        drop(text);
        self.monitor.log_stats("Extract");

        // Load (reporter)
        let report = Report::new(result.emails);
        let output_path = self.pipeline.load(&report)?;
        self.monitor.log_stats("Report");

        self.monitor.log_final_stats();
        Ok(RunOutcome {
            report,
            output_path,
        })
    }
}
