//! IRC mode types for users and channels.
//!
//! A [`Mode`] is a single mode character with its direction (`+`/`-`) and
//! an optional parameter. The typed alphabets [`ChannelMode`] and
//! [`UserMode`] give meaning to known characters and decide how a
//! [`ModeString`](super::ModeString) of that kind treats repeated modes.
//!
//! # Reference
//! - RFC 2812 Section 3.1.5 (User Modes)
//! - RFC 2812 Section 3.2.3 (Channel Modes)
//! - Modern IRC documentation: <https://modern.ircdocs.horse/>

use std::cmp::Ordering;
use std::fmt;

/// Channel modes that grant a rank to a member and take a nickname parameter.
///
/// Matches the common `PREFIX=(qaohv)~&@%+` advertisement.
pub const CHANNEL_USER_MODES: &str = "qaohv";

/// Trait for mode alphabets that a mode string can be built over.
///
/// Implemented by [`UserMode`] and [`ChannelMode`].
pub trait ModeType: fmt::Display + fmt::Debug + Clone + PartialEq {
    /// Parse a mode character into its typed representation.
    fn from_char(c: char) -> Self;

    /// Returns true if the character is outside the known alphabet.
    fn is_unknown(&self) -> bool;

    /// Returns true if a mode string of this kind may repeat `c`.
    fn allows_repeat(c: char) -> bool;

    /// Returns true if `c` consumes a parameter in both directions,
    /// regardless of the server-advertised parameter classes.
    fn always_takes_param(_c: char) -> bool {
        false
    }
}

/// User modes as defined in RFC 2812.
///
/// User modes modify the behavior of how the server and other users
/// interact with a particular user.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum UserMode {
    /// 'a' - User is away
    Away,
    /// 'i' - User is invisible (not shown in WHO/NAMES unless shared channel)
    Invisible,
    /// 'w' - User receives WALLOPS messages
    Wallops,
    /// 'r' - Restricted user connection
    Restricted,
    /// 'o' - User is an IRC operator
    Oper,
    /// 'O' - User is a local operator
    LocalOper,
    /// 's' - User receives server notices
    ServerNotices,
    /// Unknown mode character
    Unknown(char),
}

impl ModeType for UserMode {
    fn from_char(c: char) -> Self {
        match c {
            'a' => Self::Away,
            'i' => Self::Invisible,
            'w' => Self::Wallops,
            'r' => Self::Restricted,
            'o' => Self::Oper,
            'O' => Self::LocalOper,
            's' => Self::ServerNotices,
            _ => Self::Unknown(c),
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    fn allows_repeat(_c: char) -> bool {
        false
    }
}

impl fmt::Display for UserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Away => 'a',
            Self::Invisible => 'i',
            Self::Wallops => 'w',
            Self::Restricted => 'r',
            Self::Oper => 'o',
            Self::LocalOper => 'O',
            Self::ServerNotices => 's',
            Self::Unknown(c) => *c,
        };
        write!(f, "{}", c)
    }
}

/// Channel modes as defined in RFC 2812, plus the owner, admin and
/// half-operator ranks from the common `PREFIX=(qaohv)~&@%+`.
///
/// Channel modes control channel behavior and user privileges within channels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ChannelMode {
    // === List modes ===
    /// 'b' - Ban mask
    Ban,
    /// 'e' - Ban exception mask
    Exception,
    /// 'I' - Invite exception mask
    InviteException,

    // === Modes with a parameter ===
    /// 'k' - Channel key
    Key,
    /// 'l' - User limit
    Limit,

    // === Modes without arguments ===
    /// 'i' - Invite only
    InviteOnly,
    /// 'm' - Moderated (only voiced+ can speak)
    Moderated,
    /// 'n' - No external messages
    NoExternalMessages,
    /// 'p' - Private
    Private,
    /// 's' - Secret (hidden from LIST, WHO)
    Secret,
    /// 't' - Only ops can change topic
    ProtectedTopic,

    // === Prefix modes (grant channel privileges) ===
    /// 'q' - Channel owner (~)
    Owner,
    /// 'a' - Channel admin / protected (&)
    Admin,
    /// 'o' - Channel operator (@)
    Oper,
    /// 'h' - Half-operator (%)
    Halfop,
    /// 'v' - Voice (+)
    Voice,

    /// Unknown mode character
    Unknown(char),
}

impl ChannelMode {
    /// Returns true for the member-rank modes (`q a o h v`).
    pub fn is_user_mode(&self) -> bool {
        matches!(
            self,
            Self::Owner | Self::Admin | Self::Oper | Self::Halfop | Self::Voice
        )
    }
}

impl ModeType for ChannelMode {
    fn from_char(c: char) -> Self {
        match c {
            'b' => Self::Ban,
            'e' => Self::Exception,
            'I' => Self::InviteException,
            'k' => Self::Key,
            'l' => Self::Limit,
            'i' => Self::InviteOnly,
            'm' => Self::Moderated,
            'n' => Self::NoExternalMessages,
            'p' => Self::Private,
            's' => Self::Secret,
            't' => Self::ProtectedTopic,
            'q' => Self::Owner,
            'a' => Self::Admin,
            'o' => Self::Oper,
            'h' => Self::Halfop,
            'v' => Self::Voice,
            _ => Self::Unknown(c),
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    fn allows_repeat(c: char) -> bool {
        CHANNEL_USER_MODES.contains(c)
    }

    fn always_takes_param(c: char) -> bool {
        CHANNEL_USER_MODES.contains(c)
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Ban => 'b',
            Self::Exception => 'e',
            Self::InviteException => 'I',
            Self::Key => 'k',
            Self::Limit => 'l',
            Self::InviteOnly => 'i',
            Self::Moderated => 'm',
            Self::NoExternalMessages => 'n',
            Self::Private => 'p',
            Self::Secret => 's',
            Self::ProtectedTopic => 't',
            Self::Owner => 'q',
            Self::Admin => 'a',
            Self::Oper => 'o',
            Self::Halfop => 'h',
            Self::Voice => 'v',
            Self::Unknown(c) => *c,
        };
        write!(f, "{}", c)
    }
}

/// A single mode change: character, direction and optional parameter.
///
/// Two notions of equality apply. `PartialEq`, `Eq` and `Hash` are
/// structural and compare all three fields, so `+o alice` and `-o bob` are
/// different values. "The same mode" means the same character whatever the
/// direction or parameter; that relation is [`Mode::same_mode`] (ordering:
/// [`Mode::compare_mode`]) and it is what duplicate detection in a
/// [`ModeString`](super::ModeString) uses. Use it, not `==`, to ask whether
/// two changes touch the same mode.
///
/// ```
/// use slirc_objects::Mode;
///
/// let grant = Mode::plus('o', Some("alice"));
/// let revoke = Mode::minus('o', Some("bob"));
/// assert_ne!(grant, revoke);
/// assert!(grant.same_mode(&revoke));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mode {
    mode: char,
    added: bool,
    parameter: Option<String>,
}

impl Mode {
    /// Create a mode change.
    pub fn new(mode: char, added: bool, parameter: Option<String>) -> Self {
        Self {
            mode,
            added,
            parameter,
        }
    }

    /// Create a mode addition with optional argument.
    pub fn plus(mode: char, arg: Option<&str>) -> Self {
        Self::new(mode, true, arg.map(String::from))
    }

    /// Create a mode removal with optional argument.
    pub fn minus(mode: char, arg: Option<&str>) -> Self {
        Self::new(mode, false, arg.map(String::from))
    }

    /// The mode character.
    pub fn mode_char(&self) -> char {
        self.mode
    }

    /// Returns true if this is adding a mode (+)
    pub fn is_added(&self) -> bool {
        self.added
    }

    /// Returns true if this is removing a mode (-)
    pub fn is_removed(&self) -> bool {
        !self.added
    }

    /// Get the argument if present.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Get the mode flag string (e.g., "+o", "-v")
    pub fn flag(&self) -> String {
        format!("{}{}", if self.added { '+' } else { '-' }, self.mode)
    }

    /// Interpret the character in a typed alphabet.
    pub fn decode<T: ModeType>(&self) -> T {
        T::from_char(self.mode)
    }

    /// True if both values name the same mode character, whatever their
    /// direction or parameter.
    pub fn same_mode(&self, other: &Mode) -> bool {
        self.mode == other.mode
    }

    /// Order by mode character only.
    pub fn compare_mode(&self, other: &Mode) -> Ordering {
        self.mode.cmp(&other.mode)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flag())?;
        if let Some(a) = &self.parameter {
            write!(f, " {}", a)?;
        }
        Ok(())
    }
}
