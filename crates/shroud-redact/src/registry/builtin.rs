//! Built-in patterns, in the order they are applied

use crate::allowlist::AllowCategory;
use crate::error::Result;
use crate::registry::Pattern;
use crate::validator::Validator;

// IPv4 dotted quads, full eight-group IPv6 and `::`-compressed IPv6.
// Without eight groups an IPv6 match needs `::`, so `12:30:45` stays put.
const IP: &str = concat!(
    r"\b(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\b",
    r"|\b(?:[a-f0-9]{1,4}:){7}[a-f0-9]{1,4}\b",
    r"|\b(?:[a-f0-9]{1,4}:){1,7}:(?:[a-f0-9]{1,4}(?::[a-f0-9]{1,4}){0,5}\b)?",
    r"|::[a-f0-9]{1,4}(?::[a-f0-9]{1,4}){0,6}\b",
);

// Group 1 is the domain, checked against the domain allowlist
const EMAIL: &str = r"\b[a-z0-9._%+-]+@([a-z0-9.-]+\.[a-z]{2,})\b";

const DOMAIN: &str = r"\b([a-z0-9.-]+\.[a-z]{2,})\b";

// Hyphenated host names ending in a number: web-01, prod-db-03, ip-10-0-0-12
const HOST: &str = r"\b([a-z][a-z0-9]{1,20}(?:-[a-z0-9]{1,20}){0,4}-[a-z]{0,3}\d{2,4})\b";

const MAC: &str = r"\b(?:[0-9a-f]{2}[:-]){5}[0-9a-f]{2}\b";

// RFC 4122 versions 1 through 5 only
const GUID: &str =
    r"\b[a-f0-9]{8}-[a-f0-9]{4}-[1-5][a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}\b";

const URL: &str = r#"\bhttps?://[^\s"'>)]+"#;

const JWT: &str = r"\beyJ[0-9a-z_\-]+=*\.[0-9a-z_\-]+=*\.[0-9a-z_\-]+=*\b";

// Vendor prefixes, long hex strings, then any long opaque token
const KEY: &str = concat!(
    r"\b(?:sk-|AKIA|ghp_|ya29\.)[a-z0-9_\-]{10,}\b",
    r"|\b[a-f0-9]{32,64}\b",
    r"|\b[0-9a-z_\-]{24,}\b",
);

const CREDIT_CARD: &str = r"\b(?:\d[ -]*?){13,19}\b";

const SSN: &str = r"\b\d{3}-\d{2}-\d{4}\b";

const PATH: &str = concat!(
    r#"/[^\s:"'<>\[\]]+"#,
    r#"|\b[a-z]:\\[^\s:"'<>\[\]]*"#,
);

const USER: &str = r#"\buser(?:name)?\s*[:=]\s*"?([a-z0-9._\\\-]{1,64})"#;

/// Fresh copy of the built-in patterns.
///
/// Broad network identifiers come first so that specific categories claim
/// text before the catch-all key and path heuristics see it.
pub fn default_patterns() -> Result<Vec<Pattern>> {
    Ok(vec![
        Pattern::new("IP", IP, "IP")?,
        Pattern::new("EMAIL", EMAIL, "EMAIL")?.with_allowlist(AllowCategory::Domains),
        Pattern::new("DOMAIN", DOMAIN, "DOMAIN")?.with_allowlist(AllowCategory::Domains),
        Pattern::new("HOST", HOST, "HOST")?
            .with_allowlist(AllowCategory::Hosts)
            .standalone(),
        Pattern::new("MAC", MAC, "MAC")?,
        Pattern::new("GUID", GUID, "GUID")?,
        Pattern::new("URL", URL, "URL")?,
        Pattern::new("JWT", JWT, "JWT")?,
        Pattern::new("KEY", KEY, "KEY")?,
        Pattern::new("CREDITCARD", CREDIT_CARD, "CC")?.with_validator(Validator::Luhn),
        Pattern::new("SSN", SSN, "SSN")?,
        Pattern::new("PATH", PATH, "PATH")?.standalone(),
        Pattern::new("USER", USER, "USER")?,
    ])
}
