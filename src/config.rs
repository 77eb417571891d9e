use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_API_BASE_ENV: &str = "OPENAI_API_BASE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
    pub anthropic: AnthropicConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Root of the web project whose sources are read
    pub project_root: PathBuf,
    /// Output directory for reports, relative to `project_root`
    pub docs_dir: PathBuf,
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    pub model: String,
    pub base_url: String,
    pub api_version: String,
    #[serde(
        default,
        serialize_with = "crate::utils::format::serialize_option_string",
        deserialize_with = "crate::utils::format::deserialize_option_string"
    )]
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub model: String,
    #[serde(
        default,
        serialize_with = "crate::utils::format::serialize_option_string",
        deserialize_with = "crate::utils::format::deserialize_option_string"
    )]
    pub fallback_model: Option<String>,
    /// Name shown in the banner prepended to fallback answers
    pub fallback_label: String,
    pub base_url: String,
    #[serde(
        default,
        serialize_with = "crate::utils::format::serialize_option_string",
        deserialize_with = "crate::utils::format::deserialize_option_string"
    )]
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                project_root: PathBuf::from("."),
                docs_dir: PathBuf::from("docs"),
                color: true,
            },
            anthropic: AnthropicConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: "claude-3-5-sonnet-20241022".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            api_key: None,
            max_tokens: 4000,
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: "gpt-5".to_string(),
            fallback_model: Some("gpt-4-turbo-preview".to_string()),
            fallback_label: "GPT-4 TURBO".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            max_tokens: 4000,
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}

impl AnthropicConfig {
    /// Key from the config file first, then the environment
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key.clone().or_else(|| env_non_empty(ANTHROPIC_API_KEY_ENV))
    }
}

impl OpenAiConfig {
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key.clone().or_else(|| env_non_empty(OPENAI_API_KEY_ENV))
    }

    /// `OPENAI_API_BASE` wins over the configured base URL
    pub fn resolved_base_url(&self) -> String {
        env_non_empty(OPENAI_API_BASE_ENV).unwrap_or_else(|| self.base_url.clone())
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save_to(&config_path)?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(config_path)?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.docs_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Docs directory cannot be empty".to_string()));
        }

        validate_provider(
            "anthropic",
            &self.anthropic.model,
            &self.anthropic.base_url,
            self.anthropic.max_tokens,
            self.anthropic.temperature,
        )?;
        validate_provider(
            "openai",
            &self.openai.model,
            &self.openai.base_url,
            self.openai.max_tokens,
            self.openai.temperature,
        )?;

        if self.openai.fallback_model.as_deref() == Some(self.openai.model.as_str()) {
            return Err(AppError::Config(
                "openai.fallback_model must differ from openai.model".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wisewords-advisor")
            .join("config.toml")
    }

    /// Absolute-or-relative directory the reports are written to
    pub fn docs_path(&self) -> PathBuf {
        self.general.project_root.join(&self.general.docs_dir)
    }
}

fn validate_provider(
    section: &str,
    model: &str,
    base_url: &str,
    max_tokens: u32,
    temperature: f64,
) -> AppResult<()> {
    if model.trim().is_empty() {
        return Err(AppError::Config(format!("{}.model cannot be empty", section)));
    }
    if base_url.trim().is_empty() {
        return Err(AppError::Config(format!("{}.base_url cannot be empty", section)));
    }
    if max_tokens == 0 {
        return Err(AppError::Config(format!(
            "{}.max_tokens must be greater than zero",
            section
        )));
    }
    if !(0.0..=2.0).contains(&temperature) {
        return Err(AppError::Config(format!(
            "{}.temperature must be between 0.0 and 2.0",
            section
        )));
    }
    Ok(())
}
