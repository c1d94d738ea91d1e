//! # slirc-objects
//!
//! Typed IRC protocol objects for clients and servers: the values that the
//! wire carries as bare strings, validated once and compared the way IRC
//! compares them.
//!
//! ## Features
//!
//! - Case-insensitive identifiers with nickname, username and channel name
//!   validation, honouring the server's `CASEMAPPING`
//! - Channel and user mode strings: parse, render, combine and slice
//! - NAMES reply entries in all four `multi-prefix` / `userhost-in-names`
//!   shapes
//! - Channel member rank flags with roster ordering
//! - ISUPPORT (RPL_ISUPPORT) parsing for the tokens that configure the above

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Mode strings
//!
//! ```rust
//! use slirc_objects::ChannelModeString;
//!
//! let first: ChannelModeString = "+o alice".parse().unwrap();
//! let second: ChannelModeString = "-b *!*@spam".parse().unwrap();
//!
//! let both = first.combine(&second).unwrap();
//! assert_eq!(both.to_string(), "+o-b alice *!*@spam");
//! ```
//!
//! ### NAMES entries and identifiers
//!
//! ```rust
//! use slirc_objects::{ChannelUserStatus, Identifier, NameListEntry, Nickname};
//!
//! let entry = NameListEntry::parse("@+Alice!alice@example.org").unwrap();
//! assert_eq!(entry.status(), ChannelUserStatus::OPERATOR | ChannelUserStatus::VOICE);
//!
//! let nick = Nickname::parse("ALICE").unwrap();
//! assert_eq!(entry.nickname(), &nick);
//! assert_eq!(Identifier::new("alice"), Identifier::new("Alice"));
//! ```

pub mod casemap;
pub mod error;
pub mod identifier;
pub mod isupport;
pub mod mode;
pub mod names;
pub mod status;
pub mod validation;

pub use self::casemap::{irc_eq, irc_to_upper, CaseMapping};
pub use self::error::{ModeParseError, NameListParseError, ProtocolError, Result};
pub use self::identifier::{ChannelName, Identifier, Nickname, Username};
pub use self::isupport::{ChanModes, Isupport, IsupportEntry, PrefixSpec};
pub use self::mode::{
    ChannelMode, ChannelModeString, ClientModeString, Mode, ModeConfig, ModeString, ModeType,
    UserMode,
};
pub use self::names::NameListEntry;
pub use self::status::{roster_cmp, sort_roster, ChannelUser, ChannelUserStatus, StatusChange};
pub use self::validation::ValidationError;
