use parlor_core::Severity;
use parlor_engine::NotifySink;

use super::notify::EchoNotifier;

/// Opens `url` in a new tab without handing the target an opener or a
/// referrer. A popup-blocked open (null window, no throw) stays silent.
pub(super) fn open_link(url: &str) {
    let notifier = EchoNotifier;
    if url.is_empty() {
        notifier.notify(Severity::Error, "missing link url (data-url).");
        return;
    }

    let Some(window) = web_sys::window() else {
        notify_open_failed(&notifier, url);
        return;
    };
    if window
        .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
        .is_err()
    {
        notify_open_failed(&notifier, url);
    }
}

fn notify_open_failed(notifier: &EchoNotifier, url: &str) {
    notifier.notify(
        Severity::Error,
        &format!("could not open the link, copy it manually: {url}"),
    );
}
