//! Parlor engine: the opening-switch protocol and host capability seams.
mod host;
mod switch;
mod types;

pub use host::{ChatHost, NotifySink};
pub use switch::{switch_opening, SwipeIndicator};
pub use types::{
    ApplyOptions, ChatMessage, HostCallError, RefreshMode, RetrieveOptions, SwipeSet, SwitchError,
};
