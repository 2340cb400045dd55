use crate::core::ConfigProvider;
use crate::utils::error::{ReadingError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_HISTORY_PATH: &str = "./readings.json";
pub const DEFAULT_USER_ID: &str = "local";
pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub seed: Option<u64>,
    pub strict_dates: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub enabled: Option<bool>,
    pub path: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReadingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USER})；找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReadingError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if self.history_enabled() {
            validate_path("history.path", self.history_path())?;
            validate_non_empty_string("history.user_id", self.user_id())?;
        }

        validate_one_of("output.format", self.output_format(), &OUTPUT_FORMATS)?;

        Ok(())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn seed(&self) -> Option<u64> {
        self.engine.seed
    }

    fn strict_dates(&self) -> bool {
        self.engine.strict_dates.unwrap_or(false)
    }

    fn history_enabled(&self) -> bool {
        self.history.enabled.unwrap_or(true)
    }

    fn history_path(&self) -> &str {
        self.history.path.as_deref().unwrap_or(DEFAULT_HISTORY_PATH)
    }

    fn user_id(&self) -> &str {
        self.history.user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
    }

    fn output_format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("text")
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
[engine]
seed = 42
strict_dates = true

[history]
enabled = true
path = "./data/readings.json"
user_id = "ann"

[output]
format = "json"

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.seed(), Some(42));
        assert!(config.strict_dates());
        assert_eq!(config.history_path(), "./data/readings.json");
        assert_eq!(config.user_id(), "ann");
        assert_eq!(config.output_format(), "json");
        assert!(config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.seed(), None);
        assert!(!config.strict_dates());
        assert!(config.history_enabled());
        assert_eq!(config.history_path(), DEFAULT_HISTORY_PATH);
        assert_eq!(config.user_id(), DEFAULT_USER_ID);
        assert_eq!(config.output_format(), "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ZODIAC_TEST_USER_ID", "env-user");

        let toml_content = r#"
[history]
user_id = "${ZODIAC_TEST_USER_ID}"
path = "${ZODIAC_TEST_UNSET_VARIABLE}/readings.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.user_id(), "env-user");
        assert_eq!(
            config.history_path(),
            "${ZODIAC_TEST_UNSET_VARIABLE}/readings.json"
        );

        std::env::remove_var("ZODIAC_TEST_USER_ID");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[history]\npath = \"\"\n").unwrap();
        assert!(config.validate().is_err());

        // 歷史關閉時不檢查路徑
        let config =
            TomlConfig::from_toml_str("[history]\nenabled = false\npath = \"\"\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[engine\nseed = ").unwrap_err();
        assert!(matches!(err, ReadingError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[history]\nuser_id = \"file-user\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.user_id(), "file-user");
    }
}
