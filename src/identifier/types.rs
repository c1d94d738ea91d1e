//! The case-insensitive identifier value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::casemap::CaseMapping;

/// Case-insensitive, case-preserving IRC identifier.
///
/// The original text is kept verbatim for display, alongside an upper-cased
/// shadow used for every comparison. `PartialEq`, `Eq`, `Hash` and `Ord` all
/// work on the shadow, so `Nick`, `NICK` and `nick` are one key in a map.
/// Use [`Identifier::compare_ordinal`] when a case-sensitive, display-stable
/// order is wanted instead.
///
/// # Examples
///
/// ```
/// use slirc_objects::Identifier;
///
/// let a = Identifier::new("ChanServ");
/// let b = Identifier::new("chanserv");
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "ChanServ");
/// assert!(a.starts_with("CHAN"));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct Identifier {
    raw: String,
    folded: String,
    mapping: CaseMapping,
}

impl Identifier {
    /// Wrap a string using the default (Unicode) case mapping.
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_casemapping(raw, CaseMapping::default())
    }

    /// Wrap a string using the given case mapping for comparisons.
    pub fn with_casemapping(raw: impl Into<String>, mapping: CaseMapping) -> Self {
        let raw = raw.into();
        let folded = mapping.fold(&raw);
        Self {
            raw,
            folded,
            mapping,
        }
    }

    /// The original-case text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The folded (upper-cased) comparison form.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// The case mapping this identifier was built with.
    pub fn casemapping(&self) -> CaseMapping {
        self.mapping
    }

    /// Length of the original text in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the identifier holds no text.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Case-insensitive equality.
    pub fn equals(&self, other: &Identifier) -> bool {
        self.folded == other.folded
    }

    /// Case-insensitive equality against plain text.
    pub fn equals_str(&self, other: &str) -> bool {
        self.folded == self.mapping.fold(other)
    }

    /// Case-insensitive ordering.
    pub fn compare(&self, other: &Identifier) -> Ordering {
        self.folded.cmp(&other.folded)
    }

    /// Ordinal ordering of the original-case text.
    pub fn compare_ordinal(&self, other: &Identifier) -> Ordering {
        self.raw.cmp(&other.raw)
    }

    /// Case-insensitive substring test.
    pub fn contains(&self, needle: &str) -> bool {
        self.folded.contains(&self.mapping.fold(needle))
    }

    /// Case-insensitive prefix test.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.folded.starts_with(&self.mapping.fold(prefix))
    }

    /// Case-insensitive suffix test.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.folded.ends_with(&self.mapping.fold(suffix))
    }

    /// Consume the identifier, returning the original-case text.
    pub fn into_string(self) -> String {
        self.raw
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Identifier {}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.equals_str(other)
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.equals_str(other)
    }
}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for Identifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Identifier {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.raw
    }
}
