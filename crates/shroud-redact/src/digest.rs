//! Short deterministic fingerprints for redaction tokens

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Number of hex characters kept from the full hash
pub const DIGEST_LEN: usize = 4;

/// Fingerprint `text` as four lowercase hex characters.
///
/// With a salt the fingerprint is an HMAC-SHA256 keyed by the salt, otherwise
/// a plain SHA-256. An empty salt counts as no salt. The output is truncated
/// to 16 bits, so collisions are expected: tokens correlate values, they do
/// not identify them.
pub fn digest(text: &str, salt: Option<&str>) -> String {
    let hash = match salt.filter(|s| !s.is_empty()) {
        Some(salt) => {
            let mut mac = HmacSha256::new_from_slice(salt.as_bytes())
                .expect("HMAC can take key of any size");
            mac.update(text.as_bytes());
            mac.finalize().into_bytes()
        }
        None => Sha256::digest(text.as_bytes()),
    };

    hash.iter()
        .take(DIGEST_LEN / 2)
        .map(|byte| format!("{:02x}", byte))
        .collect()
}
