//! Opaque generator keys and pure sub-key derivation.
//!
//! A [`PathKey`] is 32 bytes of key material. There is no process-wide
//! generator: every derived key is a SHA-256 digest of a domain tag, the
//! parent key and the folded-in data, so derivation is one-way, deterministic
//! and free of call-order effects.

use super::error::PathError;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Length of key material in bytes.
pub const KEY_LEN: usize = 32;

const SEED_DOMAIN: &[u8] = b"liepath.key.v1";
const FOLD_DOMAIN: &[u8] = b"liepath.fold_in.v1";

/// Opaque, immutable generator key.
///
/// Identity is the exact byte value. Keys are `Copy` and carry no state, so
/// they can be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use path_core::types::PathKey;
///
/// let key = PathKey::from_seed(42);
/// let again = PathKey::from_seed(42);
/// assert_eq!(key, again);
///
/// // Hex round-trip
/// let parsed: PathKey = key.to_hex().parse().unwrap();
/// assert_eq!(parsed, key);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathKey {
    bytes: [u8; KEY_LEN],
}

impl PathKey {
    /// Creates a key from a 64-bit seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            bytes: digest(&[SEED_DOMAIN, &seed.to_le_bytes()]),
        }
    }

    /// Wraps raw key material without further mixing.
    #[inline]
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Parses a key from exactly 64 hexadecimal characters.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSeed`] when the text has the wrong length
    /// or contains a non-hex character.
    pub fn from_hex(text: &str) -> Result<Self, PathError> {
        let text = text.trim();
        if text.len() != KEY_LEN * 2 {
            return Err(PathError::InvalidSeed(format!(
                "expected {} hex characters, got {}",
                KEY_LEN * 2,
                text.len()
            )));
        }
        if !text.is_ascii() {
            return Err(PathError::InvalidSeed(
                "key contains non-ASCII characters".to_string(),
            ));
        }

        let mut bytes = [0u8; KEY_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &text[2 * i..2 * i + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| {
                PathError::InvalidSeed(format!("invalid hex pair '{}' at offset {}", pair, 2 * i))
            })?;
        }
        Ok(Self { bytes })
    }

    /// Returns the raw key material.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// Returns the key as 64 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Derives a child key by folding arbitrary data into this key.
    #[inline]
    pub fn fold_in(&self, data: &[u8]) -> Self {
        Self {
            bytes: digest(&[FOLD_DOMAIN, &self.bytes, data]),
        }
    }

    /// Derives a child key from a 64-bit integer.
    #[inline]
    pub fn fold_in_u64(&self, data: u64) -> Self {
        self.fold_in(&data.to_le_bytes())
    }

    /// Derives the per-time key used for point evaluation.
    ///
    /// The full 64-bit representation of `t` is folded in, so times that
    /// differ in any bit give unrelated keys. See [`canonical_time_bits`]
    /// for the treatment of signed zero and NaN.
    #[inline]
    pub fn fold_in_time(&self, t: f64) -> Self {
        self.fold_in_u64(canonical_time_bits(t))
    }
}

/// Fixed-width representation of a time value used for key derivation.
///
/// `-0.0` maps to the bits of `+0.0` and every NaN maps to the canonical
/// quiet NaN, so values that compare equal (or are all NaN) share a key.
///
/// # Examples
///
/// ```rust
/// use path_core::types::canonical_time_bits;
///
/// assert_eq!(canonical_time_bits(-0.0), canonical_time_bits(0.0));
/// assert_ne!(canonical_time_bits(0.5), canonical_time_bits(0.25));
/// ```
#[inline]
pub fn canonical_time_bits(t: f64) -> u64 {
    if t == 0.0 {
        0
    } else if t.is_nan() {
        f64::NAN.to_bits()
    } else {
        t.to_bits()
    }
}

fn digest(parts: &[&[u8]]) -> [u8; KEY_LEN] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

impl fmt::Debug for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathKey({})", self.to_hex())
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for PathKey {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u64> for PathKey {
    fn from(seed: u64) -> Self {
        Self::from_seed(seed)
    }
}
