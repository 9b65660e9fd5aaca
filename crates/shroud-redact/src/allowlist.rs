//! Operator-approved domains and hosts that are never redacted

use crate::config::AllowlistConfig;
use regex::Captures;
use serde::{Deserialize, Serialize};

/// Which allowlist a pattern consults before redacting a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowCategory {
    /// Match if a candidate ends with an approved domain suffix
    Domains,

    /// Match if a candidate equals an approved host name
    Hosts,
}

/// Case-folded allowlists built from configuration
#[derive(Debug, Clone, Default)]
pub struct AllowlistFilter {
    domains: Vec<String>,
    hosts: Vec<String>,
}

impl AllowlistFilter {
    pub fn new(config: &AllowlistConfig) -> Self {
        Self {
            domains: config.domains.iter().map(|d| d.to_lowercase()).collect(),
            hosts: config.hosts.iter().map(|h| h.to_lowercase()).collect(),
        }
    }

    /// Decide whether a match should be left as-is.
    ///
    /// Candidates are the non-empty capture groups of the match; when none
    /// participated, the whole match is the only candidate.
    pub fn is_allowed(&self, category: Option<AllowCategory>, captures: &Captures<'_>) -> bool {
        let Some(category) = category else {
            return false;
        };

        let mut candidates: Vec<&str> = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .collect();
        if candidates.is_empty() {
            candidates.extend(captures.get(0).map(|m| m.as_str()));
        }

        candidates
            .into_iter()
            .any(|candidate| self.allows(category, candidate))
    }

    fn allows(&self, category: AllowCategory, candidate: &str) -> bool {
        let candidate = candidate.to_lowercase();
        match category {
            AllowCategory::Domains => self
                .domains
                .iter()
                .any(|suffix| candidate.ends_with(suffix.as_str())),
            AllowCategory::Hosts => self.hosts.iter().any(|host| *host == candidate),
        }
    }
}
