use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shroud_redact::RedactConfig;
use std::path::Path;

/// Settings for one `shroud` run: redaction rules plus tool options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// HMAC salt for stable tokens across files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(flatten)]
    pub redaction: RedactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl ToolConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents)
                .with_context(|| format!("Invalid TOML config {}", path.display()))?
        } else {
            // Default to YAML
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Invalid YAML config {}", path.display()))?
        };

        Ok(config)
    }

    /// Merge environment variables into config (env vars take precedence)
    pub fn merge_env(&mut self) {
        self.merge_env_from(|name| std::env::var(name).ok());
    }

    fn merge_env_from(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(salt) = var("SHROUD_SALT") {
            self.salt = Some(salt);
        }

        if let Some(level) = var("SHROUD_LOG_LEVEL") {
            self.logging.level = level;
        }
    }
}
