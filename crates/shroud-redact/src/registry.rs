//! Pattern registry
//!
//! An ordered list of named matchers. Each string leaf is passed through
//! every pattern in registry order, so order decides which category claims
//! a piece of text first.

mod builtin;

pub use builtin::default_patterns;

use crate::allowlist::{AllowCategory, AllowlistFilter};
use crate::config::{CustomPattern, RedactConfig};
use crate::digest::digest;
use crate::error::{Error, Result};
use crate::validator::Validator;
use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::debug;

/// A named matcher bound to a token tag
#[derive(Debug, Clone)]
pub struct Pattern {
    name: String,
    tag: String,
    regex: Regex,
    validator: Validator,
    allow: Option<AllowCategory>,
    standalone: bool,
}

impl Pattern {
    /// Compile a case-insensitive pattern with no validator and no allowlist
    pub fn new(name: impl Into<String>, source: &str, tag: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidPattern {
                name: name.clone(),
                source,
            })?;

        Ok(Self {
            name,
            tag: tag.into(),
            regex,
            validator: Validator::None,
            allow: None,
            standalone: false,
        })
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_allowlist(mut self, category: AllowCategory) -> Self {
        self.allow = Some(category);
        self
    }

    /// Reject matches glued to neighbouring identifier characters
    pub fn standalone(mut self) -> Self {
        self.standalone = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn validator(&self) -> Validator {
        self.validator
    }

    pub fn allow_category(&self) -> Option<AllowCategory> {
        self.allow
    }

    pub fn is_standalone(&self) -> bool {
        self.standalone
    }

    /// Replace every accepted match in `text` with `[TAG:digest]`.
    ///
    /// A match is kept verbatim when it touches identifier characters (for
    /// standalone patterns), is allowlisted, or fails the validator.
    pub fn scan<'t>(
        &self,
        text: &'t str,
        allowlist: &AllowlistFilter,
        salt: Option<&str>,
    ) -> Cow<'t, str> {
        self.regex.replace_all(text, |caps: &Captures<'_>| {
            let Some(whole) = caps.get(0) else {
                return String::new();
            };
            let matched = whole.as_str();

            if self.standalone && !is_isolated(text, whole.start(), whole.end()) {
                return matched.to_string();
            }
            if allowlist.is_allowed(self.allow, caps) {
                return matched.to_string();
            }
            if !self.validator.validate(matched) {
                return matched.to_string();
            }

            format!("[{}:{}]", self.tag, digest(matched, salt))
        })
    }
}

/// Neither neighbour of `text[start..end]` continues an identifier
fn is_isolated(text: &str, start: usize, end: usize) -> bool {
    let joins = |c: char| c.is_alphanumeric() || matches!(c, '-' | '_' | '@');

    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    !before.is_some_and(joins) && !after.is_some_and(joins)
}

/// Build the registry for a configuration: the built-ins minus disabled
/// names, followed by custom patterns in the order given.
///
/// Fails on the first custom pattern that does not compile; no partial
/// registry is ever returned.
pub fn build_registry(config: &RedactConfig) -> Result<Vec<Pattern>> {
    let disabled: HashSet<String> = config
        .disable_patterns
        .iter()
        .map(|name| name.to_uppercase())
        .collect();
    let is_enabled = |pattern: &Pattern| !disabled.contains(&pattern.name.to_uppercase());

    let mut patterns: Vec<Pattern> = default_patterns()?
        .into_iter()
        .filter(|pattern| is_enabled(pattern))
        .collect();

    for custom in &config.custom_patterns {
        let pattern = compile_custom(custom)?;
        if is_enabled(&pattern) {
            patterns.push(pattern);
        } else {
            debug!("Custom pattern '{}' is disabled", pattern.name);
        }
    }

    if !disabled.is_empty() {
        debug!("Disabled patterns: {:?}", config.disable_patterns);
    }
    debug!(
        "Built pattern registry with {} patterns ({} custom)",
        patterns.len(),
        config.custom_patterns.len()
    );

    Ok(patterns)
}

fn compile_custom(custom: &CustomPattern) -> Result<Pattern> {
    if custom.pattern.is_empty() {
        return Err(Error::Config(format!(
            "custom pattern '{}' has an empty pattern",
            custom.name
        )));
    }
    if custom.tag.is_empty() {
        return Err(Error::Config(format!(
            "custom pattern '{}' has an empty tag",
            custom.name
        )));
    }

    Pattern::new(custom.name.clone(), &custom.pattern, custom.tag.clone())
}
