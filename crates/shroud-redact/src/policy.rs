//! Key-driven redaction policy

use crate::config::RedactConfig;
use std::collections::HashSet;

/// Decides from a mapping key whether its value is replaced wholesale or
/// scanned for patterns.
#[derive(Debug, Clone, Default)]
pub struct KeyPolicy {
    keys_exact: HashSet<String>,
    keys_ci: HashSet<String>,
    scan_keys_ci: HashSet<String>,
}

impl KeyPolicy {
    pub fn new(config: &RedactConfig) -> Self {
        Self {
            keys_exact: config.keys_exact.iter().cloned().collect(),
            keys_ci: config.keys_ci.iter().map(|k| k.to_lowercase()).collect(),
            scan_keys_ci: config
                .scan_value_keys_ci
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    /// True when the whole value under `key` must become a single token
    pub fn should_fully_redact(&self, key: &str) -> bool {
        self.keys_exact.contains(key) || self.keys_ci.contains(&key.to_lowercase())
    }

    /// True when string values under `key` are pattern-scanned.
    ///
    /// Without any scan keys configured every string is scanned. Once scan
    /// keys exist, only strings whose nearest enclosing key is one of them.
    pub fn should_scan(&self, key: Option<&str>) -> bool {
        if self.scan_keys_ci.is_empty() {
            return true;
        }
        key.is_some_and(|k| self.scan_keys_ci.contains(&k.to_lowercase()))
    }

    pub fn is_scan_restricted(&self) -> bool {
        !self.scan_keys_ci.is_empty()
    }
}
