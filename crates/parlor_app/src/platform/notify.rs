use parlor_core::{echo_command, Severity};
use parlor_engine::NotifySink;
use parlor_logging::{parlor_error, parlor_info, parlor_warn};
use wasm_bindgen::{JsCast, JsValue};

/// Notification chain: the host echo command where available, else the log
/// facade, with a blocking alert added for warnings and errors.
pub(super) struct EchoNotifier;

impl EchoNotifier {
    /// Sends the echo command through `window.triggerSlash`. False when the
    /// host does not expose it as a function or the call itself failed.
    fn echo_through_host(severity: Severity, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Ok(value) = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("triggerSlash"))
        else {
            return false;
        };
        if !value.is_function() {
            return false;
        }

        let command = echo_command(severity, message);
        let trigger: &js_sys::Function = value.unchecked_ref();
        trigger
            .call1(&JsValue::UNDEFINED, &JsValue::from_str(&command))
            .is_ok()
    }
}

impl NotifySink for EchoNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        if Self::echo_through_host(severity, message) {
            return;
        }

        match severity {
            Severity::Info | Severity::Success => parlor_info!("{message}"),
            Severity::Warning => parlor_warn!("{message}"),
            Severity::Error => parlor_error!("{message}"),
        }

        if matches!(severity, Severity::Warning | Severity::Error) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
    }
}
