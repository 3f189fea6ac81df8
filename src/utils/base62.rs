//! Base62 encoding of record ids into short codes.
//!
//! The alphabet order is fixed: digits, then lowercase, then uppercase. It
//! decides which strings are ever handed out, so changing it would remap every
//! existing id to a different code.

/// Digit alphabet, most significant value last.
///
/// This is the "alternative" ordering of the `base62` crate.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encodes `n` as a base62 string, most significant digit first.
///
/// `0` encodes to `"0"`; every other value has no leading zero digit, which
/// keeps the mapping injective. Codes are only ever matched by exact string,
/// so there is no decoder.
///
/// # Examples
///
/// ```
/// use seqshort::utils::base62::encode;
///
/// assert_eq!(encode(1), "1");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(n: u64) -> String {
    ::base62::encode_alternative(u128::from(n))
}
