//! ISUPPORT (`RPL_ISUPPORT`, numeric 005) token parsing.
//!
//! Only the tokens that shape the protocol objects in this crate get typed
//! accessors: `CHANMODES` and `PREFIX` drive [`ModeConfig`](crate::ModeConfig),
//! `CASEMAPPING` drives identifier comparison, `NICKLEN` bounds nicknames and
//! `MODES` bounds how many modes one command may carry.

use crate::casemap::CaseMapping;

/// A single `KEY` or `KEY=value` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsupportEntry<'a> {
    pub key: &'a str,
    pub value: Option<&'a str>,
}

/// The accumulated tokens of one or more `RPL_ISUPPORT` lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Isupport<'a> {
    entries: Vec<IsupportEntry<'a>>,
}

impl<'a> Isupport<'a> {
    /// Parse bare ISUPPORT tokens. A `-KEY` token withdraws an earlier `KEY`.
    pub fn parse_params(params: &[&'a str]) -> Self {
        let mut isupport = Isupport::default();
        isupport.extend(params);
        isupport
    }

    /// Parse the arguments of an `RPL_ISUPPORT` reply: the first argument
    /// is the client's nickname and a trailing human-readable text is skipped.
    pub fn from_response_args(args: &[&'a str]) -> Option<Self> {
        if args.is_empty() {
            return None;
        }

        let mut tokens = &args[1..];

        if let Some(last) = tokens.last() {
            if last.contains(' ') {
                tokens = &tokens[..tokens.len().saturating_sub(1)];
            }
        }
        Some(Self::parse_params(tokens))
    }

    /// Merge more tokens, e.g. from a further 005 line.
    pub fn extend(&mut self, params: &[&'a str]) {
        for &p in params {
            if p.starts_with(':') {
                break;
            }
            if p.is_empty() {
                continue;
            }
            if let Some(key) = p.strip_prefix('-') {
                self.entries.retain(|e| !e.key.eq_ignore_ascii_case(key));
                continue;
            }
            let (key, value) = match p.split_once('=') {
                Some((k, v)) => (k, Some(v)),
                None => (p, None),
            };
            self.entries.push(IsupportEntry { key, value });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &IsupportEntry<'a>> {
        self.entries.iter()
    }

    /// Look up a token. `Some(None)` means the key is present without a value.
    pub fn get(&self, key: &str) -> Option<Option<&'a str>> {
        self.entries
            .iter()
            .rfind(|e| e.key.eq_ignore_ascii_case(key))
            .map(|e| e.value)
    }

    pub fn casemapping(&self) -> Option<CaseMapping> {
        self.get("CASEMAPPING").flatten().and_then(|s| s.parse().ok())
    }

    pub fn prefix(&self) -> Option<PrefixSpec<'a>> {
        self.get("PREFIX").flatten().and_then(PrefixSpec::parse)
    }

    pub fn chanmodes(&self) -> Option<ChanModes<'a>> {
        self.get("CHANMODES").flatten().and_then(ChanModes::parse)
    }

    pub fn nicklen(&self) -> Option<usize> {
        self.get("NICKLEN").flatten().and_then(|s| s.parse().ok())
    }

    /// Maximum number of parameterised modes per `MODE` command.
    pub fn modes(&self) -> Option<usize> {
        self.get("MODES").flatten().and_then(|s| s.parse().ok())
    }
}

/// A `PREFIX=(modes)symbols` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixSpec<'a> {
    pub modes: &'a str,
    pub prefixes: &'a str,
}

impl<'a> PrefixSpec<'a> {
    pub fn parse(s: &'a str) -> Option<Self> {
        if let Some(open) = s.find('(') {
            if let Some(close) = s[open + 1..].find(')') {
                let close = open + 1 + close;
                let modes = &s[open + 1..close];
                let prefixes = &s[close + 1..];
                if !modes.is_empty() && !prefixes.is_empty() {
                    return Some(PrefixSpec { modes, prefixes });
                }
            }
        } else if !s.is_empty() {
            return Some(PrefixSpec { modes: "", prefixes: s });
        }
        None
    }

    /// The status symbol granted by mode `mode`, e.g. `o` → `@`.
    pub fn symbol_for(&self, mode: char) -> Option<char> {
        let idx = self.modes.chars().position(|m| m == mode)?;
        self.prefixes.chars().nth(idx)
    }

    /// The mode letter behind status symbol `symbol`, e.g. `@` → `o`.
    pub fn mode_for(&self, symbol: char) -> Option<char> {
        let idx = self.prefixes.chars().position(|p| p == symbol)?;
        self.modes.chars().nth(idx)
    }
}

/// A `CHANMODES=A,B,C,D` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChanModes<'a> {
    /// Type A: list modes, parameter in both directions.
    pub a: &'a str,
    /// Type B: parameter in both directions.
    pub b: &'a str,
    /// Type C: parameter only when set.
    pub c: &'a str,
    /// Type D: never a parameter.
    pub d: &'a str,
}

impl<'a> ChanModes<'a> {
    pub fn parse(s: &'a str) -> Option<Self> {
        let mut parts = s.splitn(4, ',');
        let (a, b, c, d) = (parts.next()?, parts.next()?, parts.next()?, parts.next()?);
        Some(ChanModes { a, b, c, d })
    }
}
