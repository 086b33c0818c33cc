use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Seed that fully determines a randomized layout.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal digits, so a
/// layout can be shared and replayed.
///
/// # Examples
///
/// ```
/// use hanoi_generator::LayoutSeed;
///
/// let seed = LayoutSeed::from_bytes([0xab; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<LayoutSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutSeed([u8; 32]);

impl LayoutSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw bytes of this seed.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl Display for LayoutSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`LayoutSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text does not have exactly 64 characters.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the rejected text in bytes.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex digit at position {index}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        index: usize,
    },
}

impl FromStr for LayoutSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }

        let digit = |index: usize| {
            char::from(s.as_bytes()[index])
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidDigit { index })
        };

        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let high = digit(2 * i)?;
            let low = digit(2 * i + 1)?;
            #[expect(clippy::cast_possible_truncation)]
            let value = (high << 4 | low) as u8;
            *byte = value;
        }
        Ok(Self(bytes))
    }
}
