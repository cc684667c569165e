use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated puzzle.
///
/// Seeds are written as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use symbolhunt_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily 2026-10-16");
/// let parsed: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(parsed, seed);
/// # Ok::<(), symbolhunt_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Error returned when parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected text in bytes.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("invalid hex digit at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        offset: usize,
    },
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from a phrase by hashing it with SHA-256.
    ///
    /// Equal phrases give equal puzzles, which is how shared and daily
    /// puzzles are named.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the deterministic random source for this seed.
    #[must_use]
    pub fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.as_bytes();
        if text.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: text.len() });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi =
                hex_value(text[2 * i]).ok_or(SeedParseError::InvalidDigit { offset: 2 * i })?;
            let lo = hex_value(text[2 * i + 1])
                .ok_or(SeedParseError::InvalidDigit { offset: 2 * i + 1 })?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
