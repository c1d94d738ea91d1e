//! Channel member rank flags and roster ordering.
//!
//! A member's rank arrives as status prefix symbols in NAMES, WHO and
//! extended JOIN replies, and changes through `MODE` commands carrying the
//! matching mode letters.
//!
//! | Flag            | Symbol | Mode |
//! |-----------------|--------|------|
//! | `OWNER`         | `~`    | `q`  |
//! | `PROTECTED`     | `&`    | `a`  |
//! | `OPERATOR`      | `@`    | `o`  |
//! | `HALF_OPERATOR` | `%`    | `h`  |
//! | `VOICE`         | `+`    | `v`  |

use std::cmp::Ordering;

use bitflags::bitflags;

use crate::identifier::Nickname;
use crate::mode::{ChannelModeString, Mode};
use crate::names::NameListEntry;

bitflags! {
    /// Channel rank flags held by one member.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(transparent)
    )]
    pub struct ChannelUserStatus: u8 {
        const VOICE = 1;
        const HALF_OPERATOR = 2;
        const OPERATOR = 4;
        const PROTECTED = 8;
        const OWNER = 16;
    }
}

/// Flags from highest to lowest rank, with their prefix symbol and mode letter.
const RANKED: [(ChannelUserStatus, char, char); 5] = [
    (ChannelUserStatus::OWNER, '~', 'q'),
    (ChannelUserStatus::PROTECTED, '&', 'a'),
    (ChannelUserStatus::OPERATOR, '@', 'o'),
    (ChannelUserStatus::HALF_OPERATOR, '%', 'h'),
    (ChannelUserStatus::VOICE, '+', 'v'),
];

impl ChannelUserStatus {
    /// No rank.
    pub const NONE: Self = Self::empty();

    /// The flag for one prefix symbol.
    pub fn from_prefix_char(c: char) -> Option<Self> {
        RANKED.iter().find(|(_, p, _)| *p == c).map(|(f, _, _)| *f)
    }

    /// The flag for one mode letter.
    pub fn from_mode_char(c: char) -> Option<Self> {
        RANKED.iter().find(|(_, _, m)| *m == c).map(|(f, _, _)| *f)
    }

    /// Combine every recognised prefix symbol; anything else is ignored.
    pub fn from_prefixes(prefixes: &str) -> Self {
        prefixes
            .chars()
            .filter_map(Self::from_prefix_char)
            .fold(Self::NONE, |acc, f| acc | f)
    }

    /// The single highest flag set, or `NONE`.
    pub fn highest(self) -> Self {
        RANKED
            .iter()
            .map(|(f, _, _)| *f)
            .find(|f| self.contains(*f))
            .unwrap_or(Self::NONE)
    }

    /// Numeric rank of the highest flag: 5 for owner down to 1 for voice,
    /// 0 for no rank.
    pub fn rank(self) -> u8 {
        RANKED
            .iter()
            .position(|(f, _, _)| self.contains(*f))
            .map_or(0, |idx| (RANKED.len() - idx) as u8)
    }

    /// Prefix symbol of the highest flag.
    pub fn prefix_char(self) -> Option<char> {
        RANKED
            .iter()
            .find(|(f, _, _)| self.contains(*f))
            .map(|(_, p, _)| *p)
    }

    /// All prefix symbols, highest first, as sent with `multi-prefix`.
    pub fn prefixes(self) -> String {
        RANKED
            .iter()
            .filter(|(f, _, _)| self.contains(*f))
            .map(|(_, p, _)| *p)
            .collect()
    }
}

impl Default for ChannelUserStatus {
    fn default() -> Self {
        Self::NONE
    }
}

/// A before/after pair returned when a member's rank changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusChange {
    pub old: ChannelUserStatus,
    pub new: ChannelUserStatus,
}

/// A channel member as tracked in a roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelUser {
    pub nickname: Nickname,
    pub status: ChannelUserStatus,
}

impl ChannelUser {
    pub fn new(nickname: Nickname, status: ChannelUserStatus) -> Self {
        Self { nickname, status }
    }

    /// Build a member from a NAMES entry.
    pub fn from_entry(entry: &NameListEntry) -> Self {
        Self::new(entry.nickname().clone(), entry.status())
    }

    /// Apply one channel mode change if it targets this member's rank.
    ///
    /// Returns the change so the caller can notify observers; `None` when
    /// the mode is not a rank mode, names someone else, or changes nothing.
    pub fn apply_mode(&mut self, mode: &Mode) -> Option<StatusChange> {
        let flag = ChannelUserStatus::from_mode_char(mode.mode_char())?;
        if !self.nickname.equals_str(mode.parameter()?) {
            return None;
        }

        let old = self.status;
        self.status.set(flag, mode.is_added());
        (old != self.status).then_some(StatusChange {
            old,
            new: self.status,
        })
    }

    /// Apply every mode of a channel mode string, reporting the net change.
    pub fn apply_modes(&mut self, modes: &ChannelModeString) -> Option<StatusChange> {
        let old = self.status;
        for mode in modes {
            self.apply_mode(mode);
        }
        (old != self.status).then_some(StatusChange {
            old,
            new: self.status,
        })
    }
}

/// Roster order: higher rank first, then nickname, case-insensitively.
pub fn roster_cmp(a: &ChannelUser, b: &ChannelUser) -> Ordering {
    b.status
        .rank()
        .cmp(&a.status.rank())
        .then_with(|| a.nickname.compare(&b.nickname))
}

/// Sort members into roster order.
pub fn sort_roster(users: &mut [ChannelUser]) {
    users.sort_by(roster_cmp);
}
