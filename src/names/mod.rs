//! NAMES reply (`RPL_NAMREPLY`, numeric 353) entries.

mod parse;

use std::fmt;
use std::str::FromStr;

use crate::casemap::CaseMapping;
use crate::error::{NameListParseError, ProtocolError, Result};
use crate::identifier::{Identifier, Nickname, Username};
use crate::status::ChannelUserStatus;
use crate::validation::{validate_nickname, validate_username};

/// One member from a NAMES reply.
///
/// Depending on the negotiated capabilities the server may send several
/// status prefixes (`multi-prefix`) and the full `nick!user@host`
/// (`userhost-in-names`); the username and hostname are only present in the
/// latter case.
///
/// # Examples
///
/// ```
/// use slirc_objects::NameListEntry;
///
/// let entry = NameListEntry::parse("@+User2!OtherUser@123.abc.com").unwrap();
/// assert_eq!(entry.nickname().as_str(), "User2");
/// assert_eq!(entry.status_prefixes(), Some("@+"));
/// assert_eq!(entry.username().map(|u| u.as_str()), Some("OtherUser"));
/// assert_eq!(entry.hostname(), Some("123.abc.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameListEntry {
    nickname: Nickname,
    username: Option<Username>,
    hostname: Option<String>,
    status_prefixes: Option<String>,
}

impl NameListEntry {
    /// Parse a single space-free NAMES token.
    pub fn parse(token: &str) -> Result<Self> {
        Self::parse_with_casemapping(token, CaseMapping::default())
    }

    /// Parse a token whose identifiers compare under `mapping`.
    pub fn parse_with_casemapping(token: &str, mapping: CaseMapping) -> Result<Self> {
        let result = Self::build(token, mapping)
            .map_err(|cause| ProtocolError::name_list_entry(token, cause));

        #[cfg(feature = "tracing")]
        if let Err(ref error) = result {
            tracing::debug!(token, %error, "rejected names entry");
        }

        result
    }

    /// Parse every token of a NAMES reply's member list.
    pub fn parse_all(line: &str) -> Result<Vec<Self>> {
        line.split_whitespace().map(Self::parse).collect()
    }

    fn build(token: &str, mapping: CaseMapping) -> std::result::Result<Self, NameListParseError> {
        let raw = parse::parse_entry(token).ok_or(NameListParseError::MissingNickname)?;

        validate_nickname(raw.nickname).map_err(NameListParseError::InvalidNickname)?;
        let nickname =
            Nickname::from_identifier_unchecked(Identifier::with_casemapping(raw.nickname, mapping));

        let (username, hostname) = match raw.userhost {
            None => (None, None),
            Some((_, None)) => return Err(NameListParseError::MissingHost),
            Some((_, Some(""))) => return Err(NameListParseError::EmptyHostname),
            Some((user, Some(host))) => {
                validate_username(user).map_err(NameListParseError::InvalidUsername)?;
                let user =
                    Username::from_identifier_unchecked(Identifier::with_casemapping(user, mapping));
                (Some(user), Some(host.to_owned()))
            }
        };

        let status_prefixes = Some(raw.prefixes)
            .filter(|p| !p.is_empty())
            .map(str::to_owned);

        Ok(Self {
            nickname,
            username,
            hostname,
            status_prefixes,
        })
    }

    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    pub fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// The status prefix characters exactly as sent, if any.
    pub fn status_prefixes(&self) -> Option<&str> {
        self.status_prefixes.as_deref()
    }

    /// The channel rank flags denoted by the status prefixes.
    pub fn status(&self) -> ChannelUserStatus {
        self.status_prefixes
            .as_deref()
            .map(ChannelUserStatus::from_prefixes)
            .unwrap_or_default()
    }
}

impl FromStr for NameListEntry {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for NameListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefixes) = &self.status_prefixes {
            f.write_str(prefixes)?;
        }
        write!(f, "{}", self.nickname)?;
        if let (Some(user), Some(host)) = (&self.username, &self.hostname) {
            write!(f, "!{}@{}", user, host)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cause(err: ProtocolError) -> NameListParseError {
        match err {
            ProtocolError::InvalidNameListEntry { cause, .. } => cause,
            other => panic!("Expected InvalidNameListEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_nickname() {
        let entry = NameListEntry::parse("User1").unwrap();
        assert_eq!(entry.nickname().as_str(), "User1");
        assert!(entry.username().is_none());
        assert!(entry.hostname().is_none());
        assert!(entry.status_prefixes().is_none());
        assert_eq!(entry.status(), ChannelUserStatus::NONE);
    }

    #[test]
    fn test_namesx_only() {
        let entry = NameListEntry::parse("@User2").unwrap();
        assert_eq!(entry.nickname().as_str(), "User2");
        assert_eq!(entry.status_prefixes(), Some("@"));
        assert_eq!(entry.status(), ChannelUserStatus::OPERATOR);
    }

    #[test]
    fn test_uhnames_only() {
        let entry = NameListEntry::parse("User1!User@123.abc.com").unwrap();
        assert_eq!(entry.nickname().as_str(), "User1");
        assert_eq!(entry.username().unwrap().as_str(), "User");
        assert_eq!(entry.hostname(), Some("123.abc.com"));
        assert!(entry.status_prefixes().is_none());
    }

    #[test]
    fn test_namesx_and_uhnames() {
        let entry = NameListEntry::parse("@+User2!OtherUser@123.abc.com").unwrap();
        assert_eq!(entry.nickname().as_str(), "User2");
        assert_eq!(entry.status_prefixes(), Some("@+"));
        assert_eq!(entry.username().unwrap().as_str(), "OtherUser");
        assert_eq!(entry.hostname(), Some("123.abc.com"));
        assert_eq!(
            entry.status(),
            ChannelUserStatus::OPERATOR | ChannelUserStatus::VOICE
        );
    }

    #[test]
    fn test_display_round_trip() {
        for token in ["User1", "@User2", "a!b@c", "~&@%+[x]!~id@host"] {
            let entry = NameListEntry::parse(token).unwrap();
            assert_eq!(entry.to_string(), token);
        }
    }

    #[test]
    fn test_errors() {
        let err = NameListEntry::parse("").unwrap_err();
        assert!(err.is_format_error());
        assert_eq!(cause(err), NameListParseError::MissingNickname);
        assert_eq!(
            cause(NameListEntry::parse("@+").unwrap_err()),
            NameListParseError::MissingNickname
        );
        assert_eq!(
            cause(NameListEntry::parse("123").unwrap_err()),
            NameListParseError::MissingNickname
        );
        assert_eq!(
            cause(NameListEntry::parse("nick!user").unwrap_err()),
            NameListParseError::MissingHost
        );
        assert_eq!(
            cause(NameListEntry::parse("nick!user@").unwrap_err()),
            NameListParseError::EmptyHostname
        );
        assert!(matches!(
            cause(NameListEntry::parse("nick!@host").unwrap_err()),
            NameListParseError::InvalidUsername(_)
        ));
        assert!(matches!(
            cause(NameListEntry::parse("@-dash").unwrap_err()),
            NameListParseError::InvalidNickname(_)
        ));
        assert!(NameListEntry::parse("nick@host").unwrap_err().is_format_error());
    }

    #[test]
    fn test_parse_all() {
        let entries = NameListEntry::parse_all("@alice +bob  carol").unwrap();
        let nicks: Vec<&str> = entries.iter().map(|e| e.nickname().as_str()).collect();
        assert_eq!(nicks, vec!["alice", "bob", "carol"]);

        assert!(NameListEntry::parse_all("alice @").is_err());
    }

    #[test]
    fn test_casemapping_applies() {
        let entry = NameListEntry::parse_with_casemapping("@[Bot]", CaseMapping::Rfc1459).unwrap();
        assert_eq!(entry.nickname(), &"{bot}");
    }
}
