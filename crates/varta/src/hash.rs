//! Content hashing for leaves and whole table documents.
//!
//! Two independent schemes give build output its identity:
//!
//! - [`leaf_hash`] identifies one concrete candidate string. It is the join
//!   key between extraction output and the translation store and must stay
//!   stable across runs for identical input.
//! - [`checksum`] / [`table_key`] identify a whole serialized table. The
//!   checksum reproduces an external reference bit-for-bit, so its steps
//!   must not be reordered or "simplified".

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Content hash of a leaf: `base64(md5(text + description))`.
///
/// No whitespace normalization is applied beyond what the caller already
/// did; two leaves with identical text and description collapse to the same
/// hash, deduplicating them across the whole corpus.
///
/// # Example
///
/// ```
/// use varta::hash::leaf_hash;
///
/// assert_eq!(leaf_hash("Hello!", "greeting"), "56A+7YWrIPdDNptZctW1zg==");
/// assert_eq!(leaf_hash("", ""), "1B2M2Y8AsgTpgAmY7PhCfg==");
/// ```
pub fn leaf_hash(text: &str, description: &str) -> String {
    let mut input = String::with_capacity(text.len() + description.len());
    input.push_str(text);
    input.push_str(description);
    let digest = md5::compute(input.as_bytes());
    STANDARD.encode(digest.0)
}

/// 32-bit one-at-a-time checksum over the UTF-8 bytes of `input`.
///
/// Each byte is accumulated with an add / shift-add / shift-xor step and the
/// running sum goes through a three-step finalization. The empty string
/// hashes to `0`. Codepoints above the basic multilingual plane contribute
/// their full 4-byte UTF-8 encoding.
///
/// # Example
///
/// ```
/// use varta::hash::checksum;
///
/// assert_eq!(checksum(""), 0);
/// assert_eq!(checksum("a"), 3_392_050_242);
/// ```
pub fn checksum(input: &str) -> u32 {
    let mut hash: u32 = 0;
    for byte in input.bytes() {
        hash = hash.wrapping_add(byte as u32);
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash.wrapping_add(hash << 15)
}

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Render a checksum in base 62 using `0-9a-zA-Z`.
///
/// Zero renders as the empty string, matching the reference encoding.
pub fn to_base_62(mut value: u32) -> String {
    let base = ALPHABET.len() as u32;
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[value.rem_euclid(base) as usize]);
        value = value.div_euclid(base);
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Identity of a whole serialized table document: base-62 of its
/// [`checksum`].
pub fn table_key(input: &str) -> String {
    to_base_62(checksum(input))
}
