pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::core::{ConfigProvider, ReportFormat};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "email-extractor")]
    #[command(about = "Extract, deduplicate and sort email addresses found in a text file")]
    pub struct CliConfig {
        /// Text file to scan
        #[arg(short, long, env = "EMAIL_EXTRACTOR_INPUT", default_value = "input.txt")]
        pub input: String,

        /// Where the report is written (always overwritten)
        #[arg(
            short,
            long,
            env = "EMAIL_EXTRACTOR_OUTPUT",
            default_value = "extracted_emails.txt"
        )]
        pub output: String,

        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        pub format: ReportFormat,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[arg(long, help = "Log CPU and memory usage per stage")]
        pub monitor: bool,

        #[arg(short, long, help = "Do not print the summary to stdout")]
        pub quiet: bool,
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn output_path(&self) -> &str {
            &self.output
        }

        fn report_format(&self) -> ReportFormat {
            self.format
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input)?;
            validate_path("output", &self.output)?;
            validate_distinct_paths(&self.input, &self.output)
        }
    }

}
