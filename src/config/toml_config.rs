use crate::core::{ConfigProvider, ReportFormat};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_distinct_paths, validate_one_of, validate_path, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "extracted_emails.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let input = validate_required_field("input.path", &self.input.path)?;
        validate_path("input.path", input)?;
        validate_path("output.path", self.output_path())?;

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of(
                "output.format",
                &format.to_ascii_lowercase(),
                &ReportFormat::NAMES,
            )?;
        }

        validate_distinct_paths(input, self.output_path())
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.input.path.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.path.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn report_format(&self) -> ReportFormat {
        // 格式已在 validate 中檢查，無法解析時退回文字格式
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
path = "data/input.txt"

[output]
path = "data/emails.json"
format = "json"

[monitoring]
enabled = true
log_level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "data/input.txt");
        assert_eq!(config.output_path(), "data/emails.json");
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert!(config.monitoring_enabled());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_defaults() {
        let config = TomlConfig::from_toml_str("[input]\npath = \"input.txt\"\n").unwrap();

        assert_eq!(config.output_path(), DEFAULT_OUTPUT_PATH);
        assert_eq!(config.report_format(), ReportFormat::Text);
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EMAIL_EXTRACTOR_TEST_DIR", "/tmp/scan");

        let toml_content = r#"
[input]
path = "${EMAIL_EXTRACTOR_TEST_DIR}/input.txt"

[output]
path = "${EMAIL_EXTRACTOR_UNSET_VAR}/out.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "/tmp/scan/input.txt");
        assert_eq!(config.output_path(), "${EMAIL_EXTRACTOR_UNSET_VAR}/out.txt");

        std::env::remove_var("EMAIL_EXTRACTOR_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let missing_input = TomlConfig::from_toml_str("[input]\n").unwrap();
        assert!(matches!(
            missing_input.validate(),
            Err(EtlError::MissingConfigError { .. })
        ));

        let bad_format = TomlConfig::from_toml_str(
            "[input]\npath = \"in.txt\"\n[output]\nformat = \"xml\"\n",
        )
        .unwrap();
        assert!(matches!(
            bad_format.validate(),
            Err(EtlError::InvalidConfigValueError { .. })
        ));

        let same_paths = TomlConfig::from_toml_str(
            "[input]\npath = \"in.txt\"\n[output]\npath = \"in.txt\"\n",
        )
        .unwrap();
        assert!(same_paths.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[input\npath = ").unwrap_err();
        assert!(matches!(err, EtlError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[input]
path = "notes.txt"

[output]
format = "csv"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path(), "notes.txt");
        assert_eq!(config.report_format(), ReportFormat::Csv);
    }
}
