//! Path signing with HMAC-SHA256
//!
//! The proxy rejects tampered requests by checking an HMAC-SHA256
//! signature computed over the unsigned transformation path. The MAC is
//! base64url-encoded (URL-safe alphabet, with padding) and carries the
//! scheme version tag `1.`:
//!
//! ```text
//! 1.RHzXnCAE5nCQUgFjgjAVdcNTKtKiiG-VJH3adXvXDZ8=
//! ```

use base64::{engine::general_purpose::URL_SAFE, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Version tag prefixed to every signature.
const SIGNATURE_VERSION: &str = "1.";

/// Compute the signature for a transformation path.
///
/// The path must already be normalized to start with `/` and must not
/// contain a `sig=` token; the signature always covers the unsigned path.
pub fn sign_path(secret: &str, path: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(path.as_bytes());
    format!(
        "{}{}",
        SIGNATURE_VERSION,
        URL_SAFE.encode(mac.finalize().into_bytes())
    )
}
