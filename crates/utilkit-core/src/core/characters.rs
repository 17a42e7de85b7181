//! Character set tables
//!
//! Each table is available as a `&'static str` and as a `&'static [char]`.

use crate::error::CliError;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALL: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

static LOWERCASE_CHARS: LazyLock<Vec<char>> = LazyLock::new(|| LOWERCASE.chars().collect());
static UPPERCASE_CHARS: LazyLock<Vec<char>> = LazyLock::new(|| UPPERCASE.chars().collect());
static NUMBER_CHARS: LazyLock<Vec<char>> = LazyLock::new(|| NUMBERS.chars().collect());
static LETTER_CHARS: LazyLock<Vec<char>> = LazyLock::new(|| LETTERS.chars().collect());
static ALL_CHARS: LazyLock<Vec<char>> = LazyLock::new(|| ALL.chars().collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterSet {
    Lowercase,
    Uppercase,
    Numbers,
    Letters,
    All,
}

impl CharacterSet {
    pub const ALL_SETS: [CharacterSet; 5] = [
        CharacterSet::Lowercase,
        CharacterSet::Uppercase,
        CharacterSet::Numbers,
        CharacterSet::Letters,
        CharacterSet::All,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharacterSet::Lowercase => "lowercase",
            CharacterSet::Uppercase => "uppercase",
            CharacterSet::Numbers => "numbers",
            CharacterSet::Letters => "letters",
            CharacterSet::All => "all",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterSet::Lowercase => LOWERCASE,
            CharacterSet::Uppercase => UPPERCASE,
            CharacterSet::Numbers => NUMBERS,
            CharacterSet::Letters => LETTERS,
            CharacterSet::All => ALL,
        }
    }

    pub fn chars(self) -> &'static [char] {
        match self {
            CharacterSet::Lowercase => LOWERCASE_CHARS.as_slice(),
            CharacterSet::Uppercase => UPPERCASE_CHARS.as_slice(),
            CharacterSet::Numbers => NUMBER_CHARS.as_slice(),
            CharacterSet::Letters => LETTER_CHARS.as_slice(),
            CharacterSet::All => ALL_CHARS.as_slice(),
        }
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterSet {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterSet::ALL_SETS
            .into_iter()
            .find(|set| set.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "Unknown character set '{}': expected one of lowercase, uppercase, numbers, letters, all",
                    s
                ))
            })
    }
}
