//! Validation rules for IRC identifiers.
//!
//! # Protocol Element Validation
//!
//! - Nicknames: first character is a letter or one of ``[\]^_`{|}``,
//!   the rest may also contain digits and `-`
//! - Usernames: no NUL, CR, LF, space or `@`
//! - Channel names: must start with `#`, `&`, `+` or `!` and contain no
//!   space, comma, BEL or NUL
//!
//! Length limits are not part of the grammar; servers advertise them through
//! ISUPPORT (`NICKLEN`, `CHANNELLEN`) and callers apply them with the
//! `*_with_max_len` variants.

/// Characters that are invalid in channel names per RFC 2812.
const INVALID_CHAN_CHARS: &[char] = &[' ', ',', '\x07', '\x00'];

/// Valid channel prefix characters.
pub const CHANNEL_PREFIXES: &[char] = &['#', '&', '+', '!'];

/// Characters that are invalid anywhere in a username.
const INVALID_USER_CHARS: &[char] = &['\x00', '\r', '\n', ' ', '@'];

/// Maximum channel name length per RFC 2812.
pub const MAX_CHANNEL_NAME_LEN: usize = 200;

/// Result of validation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty.
    Empty,
    /// The input was too long.
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length.
        actual: usize,
    },
    /// Invalid character found at position.
    InvalidChar {
        /// The invalid character.
        ch: char,
        /// Position in the string.
        position: usize,
    },
    /// Missing required prefix.
    MissingPrefix,
    /// Invalid first character.
    InvalidFirstChar {
        /// The invalid character.
        ch: char,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "input is empty"),
            ValidationError::TooLong { max, actual } => {
                write!(f, "input too long: {} chars (max {})", actual, max)
            }
            ValidationError::InvalidChar { ch, position } => {
                write!(f, "invalid character {:?} at position {}", ch, position)
            }
            ValidationError::MissingPrefix => write!(f, "missing required prefix"),
            ValidationError::InvalidFirstChar { ch } => {
                write!(f, "invalid first character: {:?}", ch)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check if a character is valid as the first character of a nickname.
///
/// Letters plus the ranges `[`..`` ` `` and `{`..`}`.
#[inline]
pub fn is_valid_nick_first_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ('['..='`').contains(&c) || ('{'..='}').contains(&c)
}

/// Check if a character is valid after the first character of a nickname.
#[inline]
pub fn is_valid_nick_char(c: char) -> bool {
    is_valid_nick_first_char(c) || c.is_ascii_digit() || c == '-'
}

/// Check if a character can begin the nickname part of a NAMES token.
///
/// This is the alphabet used to locate where status prefixes end. It is a
/// little wider than [`is_valid_nick_first_char`]: it also admits `-`, which
/// is then rejected by nickname validation.
#[inline]
pub fn is_nick_start_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, '[' | ']' | '\\' | '`' | '_' | '^' | '{' | '}' | '|' | '-')
}

/// Validate an IRC nickname.
///
/// # Examples
///
/// ```
/// use slirc_objects::validation::validate_nickname;
///
/// assert!(validate_nickname("Nick").is_ok());
/// assert!(validate_nickname("Nick_123").is_ok());
/// assert!(validate_nickname("[test]").is_ok());
/// assert!(validate_nickname("").is_err()); // Empty
/// assert!(validate_nickname("123nick").is_err()); // Starts with digit
/// assert!(validate_nickname("nick name").is_err()); // Contains space
/// ```
pub fn validate_nickname(nick: &str) -> Result<(), ValidationError> {
    let mut chars = nick.chars();
    let first = chars.next().ok_or(ValidationError::Empty)?;

    if !is_valid_nick_first_char(first) {
        return Err(ValidationError::InvalidFirstChar { ch: first });
    }

    for (i, c) in chars.enumerate() {
        if !is_valid_nick_char(c) {
            return Err(ValidationError::InvalidChar {
                ch: c,
                position: i + 1,
            });
        }
    }

    Ok(())
}

/// Validate an IRC nickname with a custom maximum length.
///
/// This is useful when you have ISUPPORT NICKLEN information.
pub fn validate_nickname_with_max_len(nick: &str, max_len: usize) -> Result<(), ValidationError> {
    validate_nickname(nick)?;
    check_len(nick, max_len)
}

/// Validate an IRC username (ident).
///
/// # Examples
///
/// ```
/// use slirc_objects::validation::validate_username;
///
/// assert!(validate_username("~user").is_ok());
/// assert!(validate_username("user@host").is_err());
/// assert!(validate_username("").is_err());
/// ```
pub fn validate_username(user: &str) -> Result<(), ValidationError> {
    if user.is_empty() {
        return Err(ValidationError::Empty);
    }

    match user.chars().position(|c| INVALID_USER_CHARS.contains(&c)) {
        Some(0) => Err(ValidationError::InvalidFirstChar {
            ch: user.chars().next().unwrap_or_default(),
        }),
        Some(position) => Err(ValidationError::InvalidChar {
            ch: user.chars().nth(position).unwrap_or_default(),
            position,
        }),
        None => Ok(()),
    }
}

/// Validate an IRC channel name.
///
/// # Examples
///
/// ```
/// use slirc_objects::validation::validate_channel_name;
///
/// assert!(validate_channel_name("#rust").is_ok());
/// assert!(validate_channel_name("&local").is_ok());
/// assert!(validate_channel_name("rust").is_err());
/// assert!(validate_channel_name("#a,b").is_err());
/// ```
pub fn validate_channel_name(name: &str) -> Result<(), ValidationError> {
    validate_channel_name_with_max_len(name, MAX_CHANNEL_NAME_LEN)
}

/// Validate an IRC channel name with a custom maximum length (ISUPPORT CHANNELLEN).
pub fn validate_channel_name_with_max_len(
    name: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    let first = name.chars().next().ok_or(ValidationError::Empty)?;
    if !CHANNEL_PREFIXES.contains(&first) {
        return Err(ValidationError::MissingPrefix);
    }

    for (i, c) in name.chars().enumerate().skip(1) {
        if INVALID_CHAN_CHARS.contains(&c) {
            return Err(ValidationError::InvalidChar { ch: c, position: i });
        }
    }

    check_len(name, max_len)
}

fn check_len(s: &str, max: usize) -> Result<(), ValidationError> {
    let actual = s.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_validation() {
        assert!(validate_nickname("nick").is_ok());
        assert!(validate_nickname("Nick-Name").is_ok());
        assert!(validate_nickname("`tick").is_ok());
        assert!(validate_nickname("}brace").is_ok());

        assert_eq!(validate_nickname(""), Err(ValidationError::Empty));
        assert_eq!(
            validate_nickname("-nick"),
            Err(ValidationError::InvalidFirstChar { ch: '-' })
        );
        assert_eq!(
            validate_nickname("nick!user"),
            Err(ValidationError::InvalidChar {
                ch: '!',
                position: 4
            })
        );
        // '~' sits just past the `{`..`}` range
        assert!(validate_nickname("~nick").is_err());
    }

    #[test]
    fn test_nickname_max_len() {
        assert!(validate_nickname_with_max_len("abcde", 5).is_ok());
        assert_eq!(
            validate_nickname_with_max_len("abcdef", 5),
            Err(ValidationError::TooLong { max: 5, actual: 6 })
        );
    }

    #[test]
    fn test_username_validation() {
        assert!(validate_username("user").is_ok());
        assert!(validate_username("~ident").is_ok());
        assert!(validate_username("u.s-e_r").is_ok());

        assert_eq!(validate_username(""), Err(ValidationError::Empty));
        assert_eq!(
            validate_username("@user"),
            Err(ValidationError::InvalidFirstChar { ch: '@' })
        );
        assert_eq!(
            validate_username("us er"),
            Err(ValidationError::InvalidChar {
                ch: ' ',
                position: 2
            })
        );
        assert!(validate_username("user\r").is_err());
    }

    #[test]
    fn test_channel_validation() {
        assert!(validate_channel_name("#chan").is_ok());
        assert!(validate_channel_name("+modeless").is_ok());
        assert!(validate_channel_name("!12345chan").is_ok());

        assert_eq!(validate_channel_name(""), Err(ValidationError::Empty));
        assert_eq!(
            validate_channel_name("chan"),
            Err(ValidationError::MissingPrefix)
        );
        assert!(validate_channel_name("#with space").is_err());
        assert!(validate_channel_name("#bell\x07").is_err());

        let long = format!("#{}", "a".repeat(200));
        assert!(validate_channel_name(&long).is_err());
    }

    #[test]
    fn test_nick_start_alphabet() {
        for c in "aZ[]\\`_^{}|-".chars() {
            assert!(is_nick_start_char(c), "{:?}", c);
        }
        for c in "@+%~&0!".chars() {
            assert!(!is_nick_start_char(c), "{:?}", c);
        }
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::Empty.to_string(), "input is empty");
        assert_eq!(
            ValidationError::InvalidFirstChar { ch: '1' }.to_string(),
            "invalid first character: '1'"
        );
    }
}
