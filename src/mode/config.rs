//! Parameter classes for mode parsing, derived from server capabilities.

use crate::isupport::{ChanModes, Isupport, PrefixSpec};

/// Which mode characters consume a parameter.
///
/// Servers advertise this through ISUPPORT `CHANMODES=A,B,C,D` and
/// `PREFIX=(modes)symbols`. Type A (lists), type B and prefix modes take a
/// parameter whether set or unset; type C only when set; type D never.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeConfig {
    /// Modes taking a parameter in both directions.
    pub always_param: String,
    /// Modes taking a parameter only when added.
    pub add_only_param: String,
}

/// `CHANMODES` assumed when the server does not advertise one.
pub const DEFAULT_CHANMODES: &str = "beI,k,l,imnpst";

/// `PREFIX` assumed when the server does not advertise one.
pub const DEFAULT_PREFIX: &str = "(qaohv)~&@%+";

impl ModeConfig {
    /// Create a config from explicit parameter classes.
    pub fn new(always_param: impl Into<String>, add_only_param: impl Into<String>) -> Self {
        Self {
            always_param: always_param.into(),
            add_only_param: add_only_param.into(),
        }
    }

    /// Build from parsed `CHANMODES` and `PREFIX` values.
    pub fn from_tokens(chanmodes: &ChanModes<'_>, prefix: Option<&PrefixSpec<'_>>) -> Self {
        let mut always_param = String::with_capacity(16);
        always_param.push_str(chanmodes.a);
        always_param.push_str(chanmodes.b);
        if let Some(prefix) = prefix {
            always_param.push_str(prefix.modes);
        }
        Self::new(always_param, chanmodes.c)
    }

    /// Build from a server's ISUPPORT advertisement, falling back to the
    /// defaults for any token it omits.
    pub fn from_isupport(isupport: &Isupport<'_>) -> Self {
        let default_chanmodes = ChanModes::parse(DEFAULT_CHANMODES);
        let default_prefix = PrefixSpec::parse(DEFAULT_PREFIX);

        let chanmodes = isupport.chanmodes().or(default_chanmodes);
        let prefix = isupport.prefix().or(default_prefix);

        match chanmodes {
            Some(chanmodes) => Self::from_tokens(&chanmodes, prefix.as_ref()),
            None => Self::default(),
        }
    }

    /// Returns true if mode `c` consumes a parameter in the given direction.
    pub fn takes_param(&self, c: char, added: bool) -> bool {
        self.always_param.contains(c) || (added && self.add_only_param.contains(c))
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self::new("beIkqaohv", "l")
    }
}
