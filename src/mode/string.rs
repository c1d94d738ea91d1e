//! Validated, immutable collections of mode changes.

use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use crate::error::{ModeParseError, ProtocolError, Result};

use super::types::{ChannelMode, Mode, ModeType, UserMode};

/// Mode string for channel `MODE` commands; member-rank modes may repeat.
pub type ChannelModeString = ModeString<ChannelMode>;

/// Mode string for user (client) `MODE` commands; no mode may repeat.
pub type ClientModeString = ModeString<UserMode>;

/// An ordered, non-empty, duplicate-checked sequence of [`Mode`]s.
///
/// The type parameter selects the mode alphabet and with it the duplicate
/// policy: [`ChannelModeString`] lets the member-rank modes (`q a o h v`)
/// repeat so several nicknames can be opped at once, [`ClientModeString`]
/// rejects every repetition.
///
/// Values are immutable. Combining and slicing return new instances, and the
/// canonical wire form is rendered once and cached.
pub struct ModeString<T: ModeType> {
    modes: Vec<Mode>,
    rendered: OnceLock<String>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: ModeType> ModeString<T> {
    /// Build a mode string from individual modes.
    ///
    /// Fails with [`ProtocolError::Empty`] for an empty list,
    /// [`ProtocolError::DuplicateMode`] when a character repeats outside the
    /// kind's exemption set, and [`ProtocolError::InvalidModeString`] when a
    /// member-rank mode has no nickname parameter.
    pub fn new(modes: Vec<Mode>) -> Result<Self> {
        if modes.is_empty() {
            return Err(ProtocolError::Empty);
        }

        for mode in &modes {
            check_wire_safe(mode)?;
            if T::always_takes_param(mode.mode_char()) && mode.parameter().is_none() {
                return Err(ProtocolError::mode_string(
                    &mode.to_string(),
                    ModeParseError::InvalidParameter {
                        mode: mode.mode_char(),
                    },
                ));
            }
        }

        for (i, mode) in modes.iter().enumerate() {
            if T::allows_repeat(mode.mode_char()) {
                continue;
            }
            if modes[..i].iter().any(|earlier| earlier.same_mode(mode)) {
                return Err(ProtocolError::DuplicateMode {
                    mode: mode.mode_char(),
                });
            }
        }

        Ok(Self::from_checked(modes))
    }

    fn from_checked(modes: Vec<Mode>) -> Self {
        Self {
            modes,
            rendered: OnceLock::new(),
            _kind: PhantomData,
        }
    }

    /// Number of modes.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Always false for a constructed value; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// The modes in their original order.
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// Iterate over the modes in their original order.
    pub fn iter(&self) -> std::slice::Iter<'_, Mode> {
        self.modes.iter()
    }

    /// Get the mode at `index`.
    pub fn get(&self, index: usize) -> Option<&Mode> {
        self.modes.get(index)
    }

    /// Modes being added, in order.
    pub fn added(&self) -> impl Iterator<Item = &Mode> {
        self.modes.iter().filter(|m| m.is_added())
    }

    /// Modes being removed, in order.
    pub fn removed(&self) -> impl Iterator<Item = &Mode> {
        self.modes.iter().filter(|m| m.is_removed())
    }

    /// Returns true if any entry uses the mode character `c`.
    pub fn contains_mode(&self, c: char) -> bool {
        self.modes.iter().any(|m| m.mode_char() == c)
    }

    /// Check every character against the kind's known alphabet.
    pub fn validate_known(&self) -> Result<()> {
        match self.modes.iter().find(|m| m.decode::<T>().is_unknown()) {
            Some(m) => Err(ProtocolError::mode_string(
                self.as_str(),
                ModeParseError::UnknownMode { mode: m.mode_char() },
            )),
            None => Ok(()),
        }
    }

    /// Concatenate `self` then `other`, re-checking duplicates.
    pub fn combine(&self, other: &Self) -> Result<Self> {
        let mut modes = Vec::with_capacity(self.len() + other.len());
        modes.extend(self.modes.iter().cloned());
        modes.extend(other.modes.iter().cloned());
        Self::new(modes)
    }

    /// Append a single mode, re-checking duplicates.
    pub fn with_mode(&self, mode: Mode) -> Result<Self> {
        let mut modes = self.modes.clone();
        modes.push(mode);
        Self::new(modes)
    }

    /// Combine two optional mode strings; an absent side is the identity.
    pub fn combine_optional(left: Option<&Self>, right: Option<&Self>) -> Result<Option<Self>> {
        match (left, right) {
            (None, None) => Ok(None),
            (Some(l), None) => Ok(Some(l.clone())),
            (None, Some(r)) => Ok(Some(r.clone())),
            (Some(l), Some(r)) => l.combine(r).map(Some),
        }
    }

    /// Return a copy with `count` modes starting at `start` removed.
    ///
    /// Removing every mode yields `Ok(None)`, since a mode string is never
    /// empty. Indices outside the string are [`ProtocolError::OutOfRange`].
    pub fn remove(&self, start: usize, count: usize) -> Result<Option<Self>> {
        let len = self.len();
        let end = start
            .checked_add(count)
            .filter(|&end| end <= len)
            .ok_or(ProtocolError::OutOfRange { start, count, len })?;

        if count == len {
            return Ok(None);
        }

        let modes = self.modes[..start]
            .iter()
            .chain(&self.modes[end..])
            .cloned()
            .collect();
        Ok(Some(Self::from_checked(modes)))
    }

    /// Split into consecutive pieces of at most `max_modes` modes each,
    /// for servers advertising an ISUPPORT `MODES` limit.
    pub fn split_chunks(&self, max_modes: usize) -> Vec<Self> {
        self.modes
            .chunks(max_modes.max(1))
            .map(|chunk| Self::from_checked(chunk.to_vec()))
            .collect()
    }

    /// The canonical wire form.
    ///
    /// All additions follow one `+`, all removals follow one `-`, then the
    /// parameters of the additions and finally those of the removals.
    pub fn as_str(&self) -> &str {
        self.rendered.get_or_init(|| self.render())
    }

    fn render(&self) -> String {
        let mut out = String::new();

        let mut flags = |sign: char, added: bool| {
            let mut chars = self.modes.iter().filter(|m| m.is_added() == added).peekable();
            if chars.peek().is_some() {
                out.push(sign);
                out.extend(chars.map(Mode::mode_char));
            }
        };
        flags('+', true);
        flags('-', false);

        let params = self
            .added()
            .chain(self.removed())
            .filter_map(Mode::parameter);
        for param in params {
            out.push(' ');
            out.push_str(param);
        }

        out
    }
}

fn check_wire_safe(mode: &Mode) -> Result<()> {
    let c = mode.mode_char();
    if matches!(c, '+' | '-') || c.is_whitespace() || c.is_control() {
        return Err(ProtocolError::mode_string(
            &mode.to_string(),
            ModeParseError::InvalidModeChar { mode: c },
        ));
    }
    match mode.parameter() {
        Some(p) if p.is_empty() || p.starts_with(':') || p.contains(char::is_whitespace) => {
            Err(ProtocolError::mode_string(
                &mode.to_string(),
                ModeParseError::InvalidParameter { mode: c },
            ))
        }
        _ => Ok(()),
    }
}

impl<T: ModeType> Clone for ModeString<T> {
    fn clone(&self) -> Self {
        Self {
            modes: self.modes.clone(),
            rendered: self.rendered.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T: ModeType> PartialEq for ModeString<T> {
    fn eq(&self, other: &Self) -> bool {
        self.modes == other.modes
    }
}

impl<T: ModeType> Eq for ModeString<T> {}

impl<T: ModeType> fmt::Debug for ModeString<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModeString").field(&self.modes).finish()
    }
}

impl<T: ModeType> fmt::Display for ModeString<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a, T: ModeType> IntoIterator for &'a ModeString<T> {
    type Item = &'a Mode;
    type IntoIter = std::slice::Iter<'a, Mode>;

    fn into_iter(self) -> Self::IntoIter {
        self.modes.iter()
    }
}

impl<T: ModeType> TryFrom<Vec<Mode>> for ModeString<T> {
    type Error = ProtocolError;

    fn try_from(modes: Vec<Mode>) -> Result<Self> {
        Self::new(modes)
    }
}
