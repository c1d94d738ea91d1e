//! Validated identifier types: nicknames, usernames and channel names.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::casemap::CaseMapping;
use crate::error::{ProtocolError, Result};
use crate::validation::{
    validate_channel_name, validate_nickname, validate_nickname_with_max_len, validate_username,
    ValidationError,
};

use super::Identifier;

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $validate:path) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "String", into = "String")
        )]
        pub struct $name(Identifier);

        impl $name {
            /// Validate and wrap the given text.
            pub fn parse(raw: &str) -> Result<Self> {
                Self::parse_with_casemapping(raw, CaseMapping::default())
            }

            /// Validate and wrap the given text, comparing under `mapping`.
            pub fn parse_with_casemapping(raw: &str, mapping: CaseMapping) -> Result<Self> {
                Self::check(raw, $validate)?;
                Ok(Self(Identifier::with_casemapping(raw, mapping)))
            }

            /// Like [`Self::parse`], discarding the error.
            pub fn try_parse(raw: &str) -> Option<Self> {
                Self::parse(raw).ok()
            }

            /// Borrow the underlying identifier.
            pub fn as_identifier(&self) -> &Identifier {
                &self.0
            }

            /// Unwrap into the underlying identifier.
            pub fn into_identifier(self) -> Identifier {
                self.0
            }

            #[allow(dead_code)]
            pub(crate) fn from_identifier_unchecked(id: Identifier) -> Self {
                Self(id)
            }

            fn check(
                raw: &str,
                validate: impl FnOnce(&str) -> std::result::Result<(), ValidationError>,
            ) -> Result<()> {
                if raw.is_empty() {
                    return Err(ProtocolError::Empty);
                }
                validate(raw).map_err(|cause| ProtocolError::InvalidIdentifier {
                    kind: $kind,
                    string: raw.to_owned(),
                    cause,
                })
            }
        }

        impl Deref for $name {
            type Target = Identifier;

            fn deref(&self) -> &Identifier {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = ProtocolError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ProtocolError;

            fn try_from(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ProtocolError;

            fn try_from(s: String) -> Result<Self> {
                Self::check(&s, $validate)?;
                Ok(Self(Identifier::new(s)))
            }
        }

        impl From<$name> for Identifier {
            fn from(value: $name) -> Identifier {
                value.0
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0.into_string()
            }
        }

        impl PartialEq<Identifier> for $name {
            fn eq(&self, other: &Identifier) -> bool {
                self.0.equals(other)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0.equals_str(other)
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0.equals_str(other)
            }
        }
    };
}

define_identifier!(
    /// A validated IRC nickname.
    ///
    /// ```
    /// use slirc_objects::Nickname;
    ///
    /// let nick = Nickname::parse("Guest_42").unwrap();
    /// assert_eq!(nick, "guest_42");
    /// assert!(Nickname::parse("42Guest").is_err());
    /// ```
    Nickname,
    "nickname",
    validate_nickname
);

define_identifier!(
    /// A validated IRC username (ident).
    Username,
    "username",
    validate_username
);

define_identifier!(
    /// A validated IRC channel name.
    ChannelName,
    "channel name",
    validate_channel_name
);

impl Nickname {
    /// Validate against the server's `NICKLEN` in addition to the grammar.
    pub fn parse_with_max_len(raw: &str, max_len: usize) -> Result<Self> {
        Self::check(raw, |s| validate_nickname_with_max_len(s, max_len))?;
        Ok(Self(Identifier::new(raw)))
    }
}
