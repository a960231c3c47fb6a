use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One chat message as the host returns it.
///
/// Hosts attach many more fields; only the swipe collection matters here,
/// everything else is ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub swipes: Option<SwipeSet>,
}

/// The variant collection attached to a message.
///
/// Hosts disagree on the shape: some expose an ordered array, others an
/// object keyed by decimal index strings. Both normalize through `get`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SwipeSet {
    Ordered(Vec<Option<String>>),
    Keyed(BTreeMap<String, Option<String>>),
}

impl SwipeSet {
    /// Resolves the variant at `index`. Null and empty entries are absent.
    pub fn get(&self, index: u32) -> Option<&str> {
        let entry = match self {
            SwipeSet::Ordered(entries) => entries.get(index as usize)?.as_deref(),
            SwipeSet::Keyed(entries) => entries.get(&index.to_string())?.as_deref(),
        };
        entry.filter(|text| !text.is_empty())
    }
}

/// Options for [`crate::ChatHost::retrieve`], serialized to the host verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RetrieveOptions {
    pub include_swipe: bool,
}

/// Options for [`crate::ChatHost::apply`], serialized to the host verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApplyOptions {
    pub swipe_id: u32,
    pub refresh: RefreshMode,
}

/// Refresh directive sent along with an applied message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshMode {
    None,
    DisplayAndRenderCurrent,
}

/// Failure reported by a host bridge call (rejected promise or thrown error).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HostCallError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwitchError {
    #[error("message 0 not found (messages[0])")]
    MessageNotFound,
    #[error("opening swipe {index} not found, add swipes in order first")]
    SwipeNotFound { index: u32 },
    #[error(transparent)]
    Host(#[from] HostCallError),
}
