//! Deterministic 'dice' derived from input text.  Every pseudo-random decision made by the
//! generators is a fixed function of one of these seeds, so the same name always produces the same
//! image.

use md5::{Digest, Md5};

/// Number of bytes in a [`Seed`]
pub const SEED_LEN: usize = 16;

/// A fixed-length byte sequence derived from a string.  The bytes are treated as independent
/// draws, and the same byte may feed several unrelated decisions (usually through a different
/// modulus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Derives the `Seed` of a string.  This never fails: the empty string has a seed like any
    /// other.
    pub fn derive(input: &str) -> Self {
        let digest = Md5::digest(input.as_bytes());
        let mut bytes = [0u8; SEED_LEN];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Derives a second, decorrelated `Seed` from the same input by hashing it with a fixed
    /// suffix appended.  Multi-colour generators use this to get extra colours from one name.
    pub fn derive_with_suffix(input: &str, suffix: &str) -> Self {
        Self::derive(&format!("{}{}", input, suffix))
    }

    /* DECISIONS */

    /// The raw byte at `offset`.  Offsets wrap around, so any `usize` is a valid offset.
    pub fn byte(&self, offset: usize) -> u8 {
        self.0[offset % SEED_LEN]
    }

    /// The byte at `offset`, reduced modulo `m`.  `m` must be non-zero.
    pub fn modulo(&self, offset: usize, m: usize) -> usize {
        self.byte(offset) as usize % m
    }

    /// `min + (byte % len)`, i.e. a draw from `min..min + len`
    pub fn span(&self, offset: usize, min: i32, len: i32) -> i32 {
        min + (self.byte(offset) as i32 % len)
    }

    /// Picks one of `options` using the byte at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn pick<'a, T>(&self, offset: usize, options: &'a [T]) -> &'a T {
        &options[self.modulo(offset, options.len())]
    }

    /// The byte at `offset` scaled into `[0, 1]`
    pub fn unit(&self, offset: usize) -> f64 {
        self.byte(offset) as f64 / 255.0
    }

    /// Big-endian combination of the bytes at `offset` and `offset + 1`
    pub fn u16_be(&self, offset: usize) -> u16 {
        (self.byte(offset) as u16) << 8 | self.byte(offset + 1) as u16
    }

    pub fn is_even(&self, offset: usize) -> bool {
        self.byte(offset) % 2 == 0
    }

    /// Lower-case hex string of the first `len` bytes, used to build document-unique ids
    pub fn hex_prefix(&self, len: usize) -> String {
        self.0[..len.min(SEED_LEN)]
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}
