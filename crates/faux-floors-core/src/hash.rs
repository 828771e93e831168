//! Host string hashing
//!
//! The host seeds every definition's short hash from a stable hash of its
//! name. Saved games store short hashes, so the function must match the
//! host bit for bit: the same name must produce the same value on every
//! platform and in every session.

/// Stable 32-bit string hash, as computed by the host
///
/// Starts at 23 and folds in each UTF-16 code unit as `h * 31 + unit`
/// with wrapping 32-bit signed arithmetic.
///
/// # Example
///
/// ```
/// use faux_floors_core::hash::stable_string_hash;
///
/// assert_eq!(stable_string_hash(""), 23);
/// assert_eq!(stable_string_hash("A"), 23 * 31 + 65);
/// assert_eq!(stable_string_hash("Granite"), stable_string_hash("Granite"));
/// ```
pub fn stable_string_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(23i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Seed short hash for a name hash
///
/// The host reduces the signed name hash modulo `u16::MAX` (65535, not
/// 65536) and truncates to 16 bits, so negative hashes wrap into the
/// upper half of the range. Zero is possible here; the allocator skips it.
pub fn short_hash_seed(name_hash: i32) -> u16 {
    (name_hash % u16::MAX as i32) as u16
}
