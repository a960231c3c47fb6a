use parlor_core::Severity;
use parlor_logging::{parlor_debug, parlor_warn};

use crate::{ApplyOptions, ChatHost, NotifySink, RefreshMode, RetrieveOptions, SwitchError};

/// Visual feedback hooks on the element that triggered a switch.
pub trait SwipeIndicator {
    fn set_disabled(&self, on: bool);
    fn set_selected(&self, on: bool);
}

/// Switches message 0 to the opening variant at `swipe`.
///
/// The indicator is marked disabled+selected up front and rolled back to
/// unselected on failure; the disabled state is released on every exit path.
/// Without the host capability the flow degrades to a warning plus a manual
/// hint and never calls the host.
pub async fn switch_opening(
    host: Option<&dyn ChatHost>,
    swipe: u32,
    clicked: Option<&dyn SwipeIndicator>,
    notify: &dyn NotifySink,
) {
    if let Some(el) = clicked {
        el.set_disabled(true);
        el.set_selected(true);
    }

    let Some(host) = host else {
        parlor_warn!("switch-opening without getChatMessages/setChatMessage, degrading");
        notify.notify(
            Severity::Warning,
            "this environment does not expose getChatMessages / setChatMessage, cannot switch the opening automatically.",
        );
        notify.notify(
            Severity::Info,
            "you can switch swipes on message 0 by hand instead.",
        );
        if let Some(el) = clicked {
            el.set_disabled(false);
        }
        return;
    };

    match resolve_and_apply(host, swipe).await {
        Ok(()) => notify.notify(Severity::Success, &format!("switched to opening {swipe}.")),
        Err(err) => {
            notify.notify(Severity::Error, &format!("switch failed: {err}"));
            if let Some(el) = clicked {
                el.set_selected(false);
            }
        }
    }

    if let Some(el) = clicked {
        el.set_disabled(false);
    }
}

/// The pipeline behind a switch: retrieve message 0, resolve the variant,
/// apply it with a full refresh.
async fn resolve_and_apply(host: &dyn ChatHost, swipe: u32) -> Result<(), SwitchError> {
    let messages = host
        .retrieve("0", RetrieveOptions { include_swipe: true })
        .await?;
    let message = messages.first().ok_or(SwitchError::MessageNotFound)?;

    let content = message
        .swipes
        .as_ref()
        .and_then(|swipes| swipes.get(swipe))
        .ok_or(SwitchError::SwipeNotFound { index: swipe })?;

    parlor_debug!("applying opening swipe {} ({} bytes)", swipe, content.len());
    host.apply(
        content,
        0,
        ApplyOptions {
            swipe_id: swipe,
            refresh: RefreshMode::DisplayAndRenderCurrent,
        },
    )
    .await?;

    Ok(())
}
