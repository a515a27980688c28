//! Deterministic short code derivation.
//!
//! Codes are not random: the code for a URL is a fixed-length prefix of the
//! URL's MD5 digest. Resubmitting the same URL therefore maps to the same
//! code without a read-before-write, which is what makes the insert path
//! idempotent.

/// Number of hexadecimal characters kept from the digest.
const CODE_LENGTH: usize = 8;

/// Derives the short code for a URL.
///
/// Computes the MD5 digest of the UTF-8 bytes of `original` and keeps the
/// first 8 lowercase hexadecimal characters. Pure and deterministic; the
/// input is hashed exactly as submitted, with no normalization.
///
/// # Examples
///
/// ```
/// use urlshortener::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("https://example.com"), "c984d06a");
/// ```
pub fn generate_code(original: &str) -> String {
    let digest = md5::compute(original.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(CODE_LENGTH);
    hex
}
