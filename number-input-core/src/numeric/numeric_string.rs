use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

static NUMERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("numeric pattern is valid"));

/// Errors produced when text cannot be treated as a signed integer string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberFormatError {
    /// Nothing left to interpret once separators and whitespace are removed.
    #[error("numeric text is empty")]
    Empty,

    /// Characters outside the digit/sign/separator alphabet, or a misplaced sign.
    #[error("invalid numeric text '{0}'")]
    InvalidFormat(String),

    /// Well-formed, but too large for a 64-bit signed integer.
    #[error("numeric text '{0}' is out of range")]
    OutOfRange(String),
}

/// A validated raw integer string: an optional leading `-` followed by one or
/// more ASCII digits, with no separators or whitespace.
///
/// Leading zeros are kept as typed, so `"000000"` stays six characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericString(String);

impl NumericString {
    /// Validates `s` without trimming or stripping anything.
    pub fn parse(s: &str) -> Result<Self, NumberFormatError> {
        if s.is_empty() {
            return Err(NumberFormatError::Empty);
        }
        if !NUMERIC_PATTERN.is_match(s) {
            return Err(NumberFormatError::InvalidFormat(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// The unsigned digit portion.
    pub fn digits(&self) -> &str {
        self.0.strip_prefix('-').unwrap_or(&self.0)
    }
}

impl From<i64> for NumericString {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for NumericString {
    type Err = NumberFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for NumericString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NumericString {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}
