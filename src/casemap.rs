//! IRC case-mapping functions.
//!
//! IRC compares nicknames and channel names case-insensitively, and some
//! servers treat additional characters as equivalent (e.g., `[` and `{`).
//! The active rules are advertised through the ISUPPORT `CASEMAPPING` token.
//!
//! Identifiers keep an upper-cased shadow of their text, so every mapping
//! here folds towards upper case.

use std::str::FromStr;

/// Case-folding rules for identifier comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseMapping {
    /// Only `a`-`z` are folded.
    Ascii,
    /// ASCII plus `{}|^` folded to `[]\~`.
    Rfc1459,
    /// ASCII plus `{}|` folded to `[]\`.
    StrictRfc1459,
    /// Full Unicode upper-casing.
    #[default]
    Unicode,
}

impl CaseMapping {
    /// The ISUPPORT `CASEMAPPING` value for this mapping.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Rfc1459 => "rfc1459",
            Self::StrictRfc1459 => "strict-rfc1459",
            Self::Unicode => "unicode",
        }
    }

    /// Fold a string to its comparison form.
    pub fn fold(self, s: &str) -> String {
        match self {
            Self::Unicode => s.to_uppercase(),
            Self::Ascii => s.to_ascii_uppercase(),
            Self::Rfc1459 | Self::StrictRfc1459 => s.chars().map(|c| self.fold_char(c)).collect(),
        }
    }

    fn fold_char(self, c: char) -> char {
        match (self, c) {
            (Self::Rfc1459 | Self::StrictRfc1459, '{') => '[',
            (Self::Rfc1459 | Self::StrictRfc1459, '}') => ']',
            (Self::Rfc1459 | Self::StrictRfc1459, '|') => '\\',
            (Self::Rfc1459, '^') => '~',
            _ => c.to_ascii_uppercase(),
        }
    }
}

impl FromStr for CaseMapping {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" => Ok(Self::Ascii),
            "rfc1459" => Ok(Self::Rfc1459),
            "strict-rfc1459" => Ok(Self::StrictRfc1459),
            "unicode" | "rfc7613" => Ok(Self::Unicode),
            _ => Err(()),
        }
    }
}

/// Convert a string to IRC upper case using RFC 1459 case mapping.
///
/// In addition to ASCII upper-casing, this maps:
/// - `{` → `[`
/// - `}` → `]`
/// - `|` → `\`
/// - `^` → `~`
pub fn irc_to_upper(s: &str) -> String {
    CaseMapping::Rfc1459.fold(s)
}

/// Compare two strings using IRC case-insensitive comparison.
///
/// Uses the RFC 1459 case mapping where certain characters are equivalent.
pub fn irc_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.chars().zip(b.chars()).all(|(ca, cb)| {
        CaseMapping::Rfc1459.fold_char(ca) == CaseMapping::Rfc1459.fold_char(cb)
    })
}
