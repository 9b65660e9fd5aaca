//! Shroud structured-data redaction
//!
//! This crate redacts sensitive strings inside parsed JSON documents while
//! keeping the document's shape intact:
//! - IP, email, domain, host, MAC, GUID, URL, JWT, API key, card, SSN, path
//!   and username detection, plus operator-supplied patterns
//! - Deterministic `[TAG:digest]` tokens, optionally keyed by a salt
//! - Domain and host allowlists
//! - Key policies that replace a whole value with a single token

pub mod allowlist;
pub mod config;
pub mod digest;
pub mod error;
pub mod policy;
pub mod redactor;
pub mod registry;
pub mod validator;

pub use allowlist::{AllowCategory, AllowlistFilter};
pub use config::{AllowlistConfig, CustomPattern, RedactConfig};
pub use digest::digest;
pub use error::{Error, Result};
pub use policy::KeyPolicy;
pub use redactor::{Redactor, canonical_json};
pub use registry::{Pattern, build_registry, default_patterns};
pub use validator::{Validator, luhn_valid};
