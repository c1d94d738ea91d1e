//! Case-insensitive IRC identifiers.
//!
//! [`Identifier`] is the base value type: it keeps the original text for
//! display and compares through a folded shadow. [`Nickname`], [`Username`]
//! and [`ChannelName`] wrap it with grammar validation.

mod types;
mod validated;

pub use self::types::Identifier;
pub use self::validated::{ChannelName, Nickname, Username};
