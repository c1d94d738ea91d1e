//! Error types for the IRC protocol object layer.
//!
//! This module defines the top-level [`ProtocolError`] returned by every
//! parse and construct operation, plus the detailed causes for mode-string
//! and NAMES-entry grammar violations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol object errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProtocolError {
    /// An identifier or mode list was built from empty input.
    #[error("input is null or empty")]
    Empty,

    /// A nickname, username or channel name failed validation.
    #[error("invalid {kind}: {string:?}")]
    InvalidIdentifier {
        /// Which identifier type was being built.
        kind: &'static str,
        /// The raw input.
        string: String,
        /// The underlying validation failure.
        #[source]
        cause: ValidationError,
    },

    /// Failed to parse a mode string.
    #[error("invalid mode string: {string:?}")]
    InvalidModeString {
        /// The raw mode string.
        string: String,
        /// The underlying parse error.
        #[source]
        cause: ModeParseError,
    },

    /// Failed to parse a NAMES reply entry.
    #[error("invalid names entry: {string:?}")]
    InvalidNameListEntry {
        /// The raw token.
        string: String,
        /// The underlying parse error.
        #[source]
        cause: NameListParseError,
    },

    /// The same mode character appears twice where repetition is not allowed.
    #[error("duplicate mode: {mode}")]
    DuplicateMode {
        /// The repeated mode character.
        mode: char,
    },

    /// A slice operation fell outside the bounds of a mode string.
    #[error("range {start}+{count} out of bounds for length {len}")]
    OutOfRange {
        /// First index of the requested slice.
        start: usize,
        /// Number of elements requested.
        count: usize,
        /// Length of the mode string.
        len: usize,
    },
}

impl ProtocolError {
    /// Returns true for grammar violations (bad identifier, bad mode string,
    /// bad NAMES token), as opposed to empty input, duplicates or range errors.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentifier { .. }
                | Self::InvalidModeString { .. }
                | Self::InvalidNameListEntry { .. }
        )
    }

    pub(crate) fn mode_string(string: &str, cause: ModeParseError) -> Self {
        Self::InvalidModeString {
            string: string.to_owned(),
            cause,
        }
    }

    pub(crate) fn name_list_entry(string: &str, cause: NameListParseError) -> Self {
        Self::InvalidNameListEntry {
            string: string.to_owned(),
            cause,
        }
    }
}

/// Errors encountered when parsing mode strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModeParseError {
    /// The input was blank or its flags token held only `+`/`-` signs.
    #[error("no mode characters")]
    NoModes,

    /// A mode requires a parameter but the parameter list ran out.
    #[error("mode '{mode}' requires parameter #{index} but none was provided")]
    MissingParameter {
        /// The mode character lacking a parameter.
        mode: char,
        /// Zero-based index of the missing parameter.
        index: usize,
    },

    /// More parameters were supplied than the modes consume.
    #[error("{count} unused mode parameter(s)")]
    UnusedParameters {
        /// Number of parameters left over.
        count: usize,
    },

    /// The mode character cannot appear on the wire (`+`, `-`, whitespace).
    #[error("invalid mode character: {mode:?}")]
    InvalidModeChar {
        /// The offending character.
        mode: char,
    },

    /// A mode parameter is empty, starts with `:` or contains whitespace,
    /// or a member-rank mode lacks its nickname parameter.
    #[error("invalid parameter for mode '{mode}'")]
    InvalidParameter {
        /// The mode the parameter belongs to.
        mode: char,
    },

    /// The mode character is not part of the known alphabet.
    #[error("unknown mode: {mode}")]
    UnknownMode {
        /// The unrecognised mode character.
        mode: char,
    },
}

/// Errors encountered when parsing a single NAMES reply token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NameListParseError {
    /// The token is empty or no character of it can start a nickname.
    #[error("no nickname found")]
    MissingNickname,

    /// A `!` was present without a following `@host` part.
    #[error("missing '@' after username")]
    MissingHost,

    /// The nickname portion failed validation.
    #[error("invalid nickname: {0}")]
    InvalidNickname(#[source] ValidationError),

    /// The username portion failed validation.
    #[error("invalid username: {0}")]
    InvalidUsername(#[source] ValidationError),

    /// The hostname portion was empty.
    #[error("empty hostname")]
    EmptyHostname,
}
