//! The three options and their integer encoding.
//!
//! ## Encoding
//!
//! Options are encoded as `0`, `1`, `2` in a fixed cyclic order where each
//! option beats the one before it (modulo 3):
//!
//! | Choice   | Index | Letter |
//! |----------|-------|--------|
//! | Rock     | 0     | `r`    |
//! | Paper    | 1     | `p`    |
//! | Scissors | 2     | `s`    |

use serde::{Deserialize, Serialize};

use super::RuleError;

/// The number of options.
pub const OPTION_COUNT: usize = 3;

/// All options in encoding order.
pub const OPTIONS: [Choice; OPTION_COUNT] = [Choice::Rock, Choice::Paper, Choice::Scissors];

const RPS_BYTES: [u8; OPTION_COUNT] = [
    OPTIONS[0].letter_byte(),
    OPTIONS[1].letter_byte(),
    OPTIONS[2].letter_byte(),
];

/// Valid choice letters, in encoding order.
///
/// Position `i` holds the lowercase first letter of `OPTIONS[i]`'s name.
pub const RPS: &str = match std::str::from_utf8(&RPS_BYTES) {
    Ok(letters) => letters,
    Err(_) => panic!("option names must start with an ASCII letter"),
};

/// One of the three options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Choice {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Choice {
    /// Get the integer encoding (0, 1 or 2).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Decode an integer encoding.
    ///
    /// ```
    /// use rps_engine::core::Choice;
    ///
    /// assert_eq!(Choice::from_index(1), Ok(Choice::Paper));
    /// assert!(Choice::from_index(3).is_err());
    /// ```
    pub const fn from_index(index: u8) -> Result<Self, RuleError> {
        match index {
            0 => Ok(Choice::Rock),
            1 => Ok(Choice::Paper),
            2 => Ok(Choice::Scissors),
            other => Err(RuleError::InvalidIndex(other as i64)),
        }
    }

    /// Display name ("Rock", "Paper", "Scissors").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    /// Lowercase letter abbreviation: the first letter of `name()`.
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter_byte() as char
    }

    const fn letter_byte(self) -> u8 {
        self.name().as_bytes()[0].to_ascii_lowercase()
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Choice {
    type Error = RuleError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl TryFrom<i64> for Choice {
    type Error = RuleError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .map_err(|_| RuleError::InvalidIndex(index))
            .and_then(Self::from_index)
    }
}

impl From<Choice> for u8 {
    fn from(choice: Choice) -> u8 {
        choice.index()
    }
}
