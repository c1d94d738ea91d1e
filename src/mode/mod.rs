//! IRC user and channel mode strings.

mod config;
mod parse;
mod string;
mod types;

pub use self::config::{ModeConfig, DEFAULT_CHANMODES, DEFAULT_PREFIX};
pub use self::string::{ChannelModeString, ClientModeString, ModeString};
pub use self::types::{ChannelMode, Mode, ModeType, UserMode, CHANNEL_USER_MODES};
