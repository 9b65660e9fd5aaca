//! Redaction configuration
//!
//! Mirrors the on-disk configuration shape. Every field is optional; an
//! absent field behaves as an empty list.

use serde::{Deserialize, Serialize};

/// Top-level redaction configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactConfig {
    /// Domains and hosts exempted from redaction
    pub allowlist: AllowlistConfig,

    /// Keys whose whole value is replaced (exact, case-sensitive match)
    pub keys_exact: Vec<String>,

    /// Keys whose whole value is replaced (case-insensitive match)
    pub keys_ci: Vec<String>,

    /// When non-empty, only strings under these keys are pattern-scanned
    pub scan_value_keys_ci: Vec<String>,

    /// Built-in or custom pattern names to leave out of the registry
    #[serde(alias = "disabled_patterns")]
    pub disable_patterns: Vec<String>,

    /// Operator-supplied patterns, appended after the built-ins in order
    pub custom_patterns: Vec<CustomPattern>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowlistConfig {
    /// Domain suffixes (matched case-insensitively against the end of a match)
    pub domains: Vec<String>,

    /// Host names (matched case-insensitively and exactly).
    ///
    /// Only hyphenated names ending in digits (`web-01`, `prod-db-03`) are
    /// detected as hosts, so entries like `localhost` never come into play.
    pub hosts: Vec<String>,
}

/// Custom regex pattern for redaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPattern {
    /// Name of the pattern
    #[serde(default = "default_custom_label")]
    pub name: String,

    /// Regex source, compiled case-insensitively
    pub pattern: String,

    /// Tag used in the emitted token, e.g. `[TICKET:1a2b]`
    #[serde(default = "default_custom_label")]
    pub tag: String,
}

impl CustomPattern {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            tag: tag.into(),
        }
    }
}

fn default_custom_label() -> String {
    "CUSTOM".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_deserializes_to_default() {
        let config: RedactConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RedactConfig::default());
    }

    #[test]
    fn test_full_config_deserialization() {
        let config: RedactConfig = serde_json::from_value(serde_json::json!({
            "allowlist": {"domains": ["example.com"], "hosts": ["localhost"]},
            "keys_exact": ["Password"],
            "keys_ci": ["apikey", "token"],
            "scan_value_keys_ci": ["message"],
            "disable_patterns": ["path"],
            "custom_patterns": [
                {"name": "ticket", "pattern": "TCK-\\d+", "tag": "TICKET"}
            ]
        }))
        .unwrap();

        assert_eq!(config.allowlist.domains, vec!["example.com"]);
        assert_eq!(config.allowlist.hosts, vec!["localhost"]);
        assert_eq!(config.keys_exact, vec!["Password"]);
        assert_eq!(config.keys_ci.len(), 2);
        assert_eq!(config.scan_value_keys_ci, vec!["message"]);
        assert_eq!(config.disable_patterns, vec!["path"]);
        assert_eq!(
            config.custom_patterns,
            vec![CustomPattern::new("ticket", "TCK-\\d+", "TICKET")]
        );
    }

    #[test]
    fn test_custom_pattern_defaults() {
        let pattern: CustomPattern =
            serde_json::from_str(r#"{"pattern": "secret_\\w+"}"#).unwrap();
        assert_eq!(pattern.name, "CUSTOM");
        assert_eq!(pattern.tag, "CUSTOM");
    }

    #[test]
    fn test_custom_pattern_requires_source() {
        let result: Result<CustomPattern, _> = serde_json::from_str(r#"{"name": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_disabled_patterns_alias() {
        let config: RedactConfig =
            serde_json::from_str(r#"{"disabled_patterns": ["KEY"]}"#).unwrap();
        assert_eq!(config.disable_patterns, vec!["KEY"]);
    }
}
