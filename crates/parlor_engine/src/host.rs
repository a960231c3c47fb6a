use parlor_core::Severity;

use crate::{ApplyOptions, ChatMessage, HostCallError, RetrieveOptions};

/// Notification delivery seam. Implementations must never fail; delivery is
/// best effort down the channel chain (host command, log, alert).
pub trait NotifySink {
    fn notify(&self, severity: Severity, message: &str);
}

/// Chat capabilities the host may expose.
///
/// Detection is all-or-nothing: either both operations exist or the switch
/// flow degrades without calling the host at all. Futures are `?Send`
/// because the browser runtime is single-threaded.
#[async_trait::async_trait(?Send)]
pub trait ChatHost {
    /// Fetches the messages in `range` (host range syntax, e.g. `"0"`).
    async fn retrieve(
        &self,
        range: &str,
        options: RetrieveOptions,
    ) -> Result<Vec<ChatMessage>, HostCallError>;

    /// Replaces the content of message `message_id`.
    async fn apply(
        &self,
        content: &str,
        message_id: u32,
        options: ApplyOptions,
    ) -> Result<(), HostCallError>;
}
