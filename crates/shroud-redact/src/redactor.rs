//! Structure-preserving redaction of parsed documents

mod canonical;

pub use canonical::canonical_json;

use crate::allowlist::AllowlistFilter;
use crate::config::RedactConfig;
use crate::digest::digest;
use crate::error::Result;
use crate::policy::KeyPolicy;
use crate::registry::{Pattern, build_registry};
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Redacts a JSON tree in place of its sensitive strings.
///
/// Built once per configuration and salt; immutable afterwards, so one
/// instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Redactor {
    patterns: Vec<Pattern>,
    allowlist: AllowlistFilter,
    policy: KeyPolicy,
    salt: Option<String>,
}

impl Redactor {
    /// Create a redactor, compiling the pattern registry up front.
    ///
    /// Fails if any custom pattern is invalid; nothing is redacted with a
    /// partial registry.
    pub fn new(config: &RedactConfig, salt: Option<&str>) -> Result<Self> {
        let patterns = build_registry(config)?;
        let allowlist = AllowlistFilter::new(&config.allowlist);
        let policy = KeyPolicy::new(config);

        debug!(
            "Redactor ready: {} patterns, {} full-value keys, salted: {}, scan restricted: {}",
            patterns.len(),
            config.keys_exact.len() + config.keys_ci.len(),
            salt.is_some_and(|s| !s.is_empty()),
            policy.is_scan_restricted()
        );

        Ok(Self {
            patterns,
            allowlist,
            policy,
            salt: salt.filter(|s| !s.is_empty()).map(str::to_string),
        })
    }

    /// Patterns applied to every scanned string, in order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Redact a whole document
    pub fn redact(&self, document: Value) -> Value {
        self.walk(document, None)
    }

    /// Redact `node`, where `parent_key` is the nearest enclosing mapping key.
    ///
    /// The result has the same shape as the input: same node kinds, same keys
    /// in the same order, same sequence lengths.
    pub fn walk(&self, node: Value, parent_key: Option<&str>) -> Value {
        match node {
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| {
                        let value = if self.policy.should_fully_redact(&key) {
                            trace!("Replacing whole value of key '{}'", key);
                            Value::String(self.full_value_token(&key, &value))
                        } else {
                            self.walk(value, Some(&key))
                        };
                        (key, value)
                    })
                    .collect::<Map<String, Value>>(),
            ),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.walk(item, parent_key))
                    .collect(),
            ),
            Value::String(text) if self.policy.should_scan(parent_key) => {
                Value::String(self.redact_str(&text))
            }
            other => other,
        }
    }

    /// Run every pattern over `text`, each one seeing the previous output
    pub fn redact_str(&self, text: &str) -> String {
        let mut current = text.to_string();

        for pattern in &self.patterns {
            let replaced = match pattern.scan(&current, &self.allowlist, self.salt()) {
                Cow::Borrowed(_) => None,
                Cow::Owned(replaced) => Some(replaced),
            };
            if let Some(replaced) = replaced {
                current = replaced;
            }
        }

        current
    }

    /// `[REDACTED:digest]` over the key and the canonical form of its value
    pub fn full_value_token(&self, key: &str, value: &Value) -> String {
        let material = format!("{}|{}", key, canonical_json(value));
        format!("[REDACTED:{}]", digest(&material, self.salt()))
    }

    fn salt(&self) -> Option<&str> {
        self.salt.as_deref()
    }
}
