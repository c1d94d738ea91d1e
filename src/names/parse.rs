//! Nom-based NAMES token parser.
//!
//! One routine covers all four token shapes a server may send, depending on
//! whether `multi-prefix` (NAMESX) and `userhost-in-names` (UHNAMES) are
//! active:
//!
//! ```text
//! nick
//! @+nick
//! nick!user@host
//! @+nick!user@host
//! ```

use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::char,
    combinator::{opt, rest},
    error::{context, VerboseError},
    sequence::{pair, preceded},
    IResult,
};

use crate::validation::is_nick_start_char;

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// The pieces of a NAMES token as borrowed slices, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RawEntry<'a> {
    pub prefixes: &'a str,
    pub nickname: &'a str,
    pub userhost: Option<(&'a str, Option<&'a str>)>,
}

/// Everything before the first nickname-start character.
fn status_prefixes(input: &str) -> ParseResult<&str, &str> {
    context("parsing status prefixes", take_till(is_nick_start_char))(input)
}

/// The nickname runs up to `!` or the end of the token.
fn nick_part(input: &str) -> ParseResult<&str, &str> {
    context("parsing nickname", take_till1(|c: char| c == '!'))(input)
}

/// `!user` optionally followed by `@host`.
fn user_host(input: &str) -> ParseResult<&str, (&str, Option<&str>)> {
    context(
        "parsing user@host",
        preceded(
            char('!'),
            pair(take_till(|c: char| c == '@'), opt(preceded(char('@'), rest))),
        ),
    )(input)
}

/// Split a NAMES token. Returns `None` when no nickname can be found.
pub(super) fn parse_entry(input: &str) -> Option<RawEntry<'_>> {
    let (input, prefixes) = status_prefixes(input).ok()?;
    let (input, nickname) = nick_part(input).ok()?;
    let (_, userhost) = opt(user_host)(input).ok()?;

    Some(RawEntry {
        prefixes,
        nickname,
        userhost,
    })
}
