//! Short code generation.
//!
//! Codes are opaque: random bytes from the operating system encoded as
//! URL-safe base64 without padding.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of a generated code in characters.
pub const CODE_LENGTH: usize = CODE_LENGTH_BYTES / 3 * 4;

/// Generates a random short code.
///
/// Produces an 8-character code over `[A-Za-z0-9_-]`. Uniqueness is not
/// checked here; the store rejects duplicates and the caller retries.
///
/// # Errors
///
/// Returns the RNG error if the system random number generator fails.
pub fn generate_code() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer)?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
