//! IRC mode string parsing.

use std::str::FromStr;

use crate::error::{ModeParseError, ProtocolError, Result};

use super::config::ModeConfig;
use super::string::ModeString;
use super::types::{Mode, ModeType};

enum PlusMinus {
    Plus,
    Minus,
}

impl<T: ModeType> ModeString<T> {
    /// Parse a mode change such as `+ov-b alice bob *!*@spam`.
    ///
    /// `always_param` lists the modes that take a parameter in both
    /// directions; `add_only_param` lists the modes that take one only when
    /// set. Parameters are consumed left to right in flag order.
    ///
    /// # Examples
    ///
    /// ```
    /// use slirc_objects::ChannelModeString;
    ///
    /// let modes = ChannelModeString::parse("+ov-b alice bob ban!mask", "b", "").unwrap();
    /// assert_eq!(modes.len(), 3);
    /// assert_eq!(modes.to_string(), "+ov-b alice bob ban!mask");
    /// ```
    pub fn parse(text: &str, always_param: &str, add_only_param: &str) -> Result<Self> {
        let result = Self::parse_inner(text, always_param, add_only_param);

        #[cfg(feature = "tracing")]
        if let Err(ref error) = result {
            tracing::debug!(input = text, %error, "rejected mode string");
        }

        result
    }

    /// Parse using the parameter classes from a [`ModeConfig`].
    pub fn parse_with(text: &str, config: &ModeConfig) -> Result<Self> {
        Self::parse(text, &config.always_param, &config.add_only_param)
    }

    fn parse_inner(text: &str, always_param: &str, add_only_param: &str) -> Result<Self> {
        let mut pieces = text.split_whitespace();
        let flags = pieces
            .next()
            .ok_or_else(|| ProtocolError::mode_string(text, ModeParseError::NoModes))?;
        let args: Vec<&str> = pieces.collect();

        let modes = parse_modes::<T>(flags, &args, always_param, add_only_param)
            .map_err(|cause| ProtocolError::mode_string(text, cause))?;

        Self::new(modes)
    }
}

impl<T: ModeType> FromStr for ModeString<T> {
    type Err = ProtocolError;

    /// Parse with [`ModeConfig::default`].
    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, &ModeConfig::default())
    }
}

fn parse_modes<T>(
    flags: &str,
    args: &[&str],
    always_param: &str,
    add_only_param: &str,
) -> std::result::Result<Vec<Mode>, ModeParseError>
where
    T: ModeType,
{
    use self::PlusMinus::*;

    let mut res = vec![];
    let mut cur_mod = Plus;
    let mut next_arg = 0;

    for c in flags.chars() {
        match c {
            '+' => cur_mod = Plus,
            '-' => cur_mod = Minus,
            _ => {
                let takes_arg = T::always_takes_param(c)
                    || always_param.contains(c)
                    || (matches!(cur_mod, Plus) && add_only_param.contains(c));

                let arg = if takes_arg {
                    let arg = args.get(next_arg).ok_or(ModeParseError::MissingParameter {
                        mode: c,
                        index: next_arg,
                    })?;
                    next_arg += 1;
                    Some(arg.to_string())
                } else {
                    None
                };

                res.push(Mode::new(c, matches!(cur_mod, Plus), arg));
            }
        }
    }

    if res.is_empty() {
        return Err(ModeParseError::NoModes);
    }

    if next_arg < args.len() {
        return Err(ModeParseError::UnusedParameters {
            count: args.len() - next_arg,
        });
    }

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{ChannelModeString, ClientModeString};

    fn cause(err: ProtocolError) -> ModeParseError {
        match err {
            ProtocolError::InvalidModeString { cause, .. } => cause,
            other => panic!("Expected InvalidModeString, got {:?}", other),
        }
    }

    #[test]
    fn test_parameters_follow_flag_order() {
        let modes = ChannelModeString::parse("+ov-b alice bob ban!mask", "b", "o").unwrap();
        assert_eq!(
            modes.modes(),
            &[
                Mode::plus('o', Some("alice")),
                Mode::plus('v', Some("bob")),
                Mode::minus('b', Some("ban!mask")),
            ]
        );
    }

    #[test]
    fn test_default_polarity_is_add() {
        let modes = ClientModeString::parse("iw", "", "").unwrap();
        assert!(modes.iter().all(Mode::is_added));
    }

    #[test]
    fn test_add_only_param_not_consumed_on_removal() {
        let modes = ChannelModeString::parse("+l-l 10", "", "l");
        // the two 'l' entries collide
        assert_eq!(modes.unwrap_err(), ProtocolError::DuplicateMode { mode: 'l' });

        let modes = ChannelModeString::parse("-l+k key", "k", "l").unwrap();
        assert_eq!(modes.modes()[0], Mode::minus('l', None));
        assert_eq!(modes.modes()[1], Mode::plus('k', Some("key")));
    }

    #[test]
    fn test_always_param_consumed_on_removal() {
        let modes = ChannelModeString::parse("-k secret", "k", "l").unwrap();
        assert_eq!(modes.modes()[0], Mode::minus('k', Some("secret")));
    }

    #[test]
    fn test_missing_parameter() {
        let err = ChannelModeString::parse("+k", "k", "").unwrap_err();
        assert!(err.is_format_error());
        assert_eq!(
            cause(err),
            ModeParseError::MissingParameter { mode: 'k', index: 0 }
        );

        let err = ChannelModeString::parse("+oo alice", "", "").unwrap_err();
        assert_eq!(
            cause(err),
            ModeParseError::MissingParameter { mode: 'o', index: 1 }
        );
    }

    #[test]
    fn test_empty_input() {
        for text in ["", "   "] {
            let err = ChannelModeString::parse(text, "b", "l").unwrap_err();
            assert!(err.is_format_error());
            assert_eq!(cause(err), ModeParseError::NoModes);
        }
    }

    #[test]
    fn test_signs_only() {
        let err = ClientModeString::parse("+-", "", "").unwrap_err();
        assert_eq!(cause(err), ModeParseError::NoModes);
    }

    #[test]
    fn test_unused_parameters() {
        let err = ClientModeString::parse("+i extra", "", "").unwrap_err();
        assert_eq!(cause(err), ModeParseError::UnusedParameters { count: 1 });
    }

    #[test]
    fn test_unknown_chars_accepted() {
        let modes = ChannelModeString::parse("+Xy", "", "").unwrap();
        assert_eq!(modes.len(), 2);
        assert!(modes.validate_known().is_err());
    }

    #[test]
    fn test_client_modes_do_not_imply_params() {
        // 'o' is a user-mode only for channels
        let modes = ClientModeString::parse("+o", "", "").unwrap();
        assert_eq!(modes.modes()[0], Mode::plus('o', None));
    }

    #[test]
    fn test_from_str_uses_default_config() {
        let modes: ChannelModeString = "+kl-b key 5 *!*@host".parse().unwrap();
        assert_eq!(modes.modes()[1], Mode::plus('l', Some("5")));
        assert_eq!(modes.modes()[2], Mode::minus('b', Some("*!*@host")));
    }
}
