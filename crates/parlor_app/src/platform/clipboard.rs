use parlor_core::Severity;
use parlor_engine::NotifySink;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlTextAreaElement;

use super::notify::EchoNotifier;

/// Copies `text` to the clipboard, preferring the async clipboard API with a
/// hidden-textarea legacy fallback.
///
/// Every outcome is reported through the notifier; failures carry the text
/// so the user can copy it by hand.
pub(super) async fn copy_text(text: String) {
    let notifier = EchoNotifier;
    if text.is_empty() {
        notifier.notify(Severity::Warning, "nothing to copy.");
        return;
    }

    if modern_clipboard_available() {
        match write_with_clipboard_api(&text).await {
            Ok(()) => notifier.notify(Severity::Success, "copied to clipboard!"),
            Err(_) => notify_copy_failed(&notifier, &text),
        }
        return;
    }

    match copy_through_textarea(&text) {
        Ok(true) => notifier.notify(Severity::Success, "copied to clipboard!"),
        _ => notify_copy_failed(&notifier, &text),
    }
}

fn notify_copy_failed(notifier: &EchoNotifier, text: &str) {
    notifier.notify(
        Severity::Error,
        &format!("copy failed, copy it manually: {text}"),
    );
}

/// Duck-typed probe for `navigator.clipboard.writeText`; old embedded
/// webviews ship without it.
fn modern_clipboard_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(clipboard) =
        js_sys::Reflect::get(window.navigator().as_ref(), &JsValue::from_str("clipboard"))
    else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map(|write| write.is_function())
        .unwrap_or(false)
}

async fn write_with_clipboard_api(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.map(|_| ())
}

/// Legacy path: off-screen textarea, select, `document.execCommand("copy")`.
/// The textarea is detached again on every branch that attached it.
fn copy_through_textarea(text: &str) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body is unavailable"))?;

    let textarea = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| JsValue::from_str("textarea element has an unexpected type"))?;
    textarea.set_value(text);
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", "-999999px")?;
    style.set_property("top", "0")?;

    body.append_child(&textarea)?;
    let _ = textarea.focus();
    textarea.select();
    let copied = document.exec_command("copy");
    let _ = body.remove_child(&textarea);

    copied
}
