use parlor_engine::{ApplyOptions, ChatHost, ChatMessage, HostCallError, RetrieveOptions};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

/// Bridge to the chat functions the host publishes on `window`.
///
/// Detection is all-or-nothing and re-run per operation, so a host that
/// finishes loading after this module still gets picked up.
pub(super) struct SlashHost {
    get_messages: js_sys::Function,
    set_message: js_sys::Function,
}

impl SlashHost {
    pub(super) fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let get_messages = global_function(&window, "getChatMessages")?;
        let set_message = global_function(&window, "setChatMessage")?;
        Some(Self {
            get_messages,
            set_message,
        })
    }

    /// Awaits a host call. Hosts may answer with a plain value instead of a
    /// promise; resolving normalizes both.
    async fn finish_call(result: Result<JsValue, JsValue>) -> Result<JsValue, HostCallError> {
        let value = result.map_err(js_error_message)?;
        JsFuture::from(js_sys::Promise::resolve(&value))
            .await
            .map_err(js_error_message)
    }
}

#[async_trait::async_trait(?Send)]
impl ChatHost for SlashHost {
    async fn retrieve(
        &self,
        range: &str,
        options: RetrieveOptions,
    ) -> Result<Vec<ChatMessage>, HostCallError> {
        let options = serde_wasm_bindgen::to_value(&options).map_err(serde_error_message)?;
        let call = self
            .get_messages
            .call2(&JsValue::UNDEFINED, &JsValue::from_str(range), &options);
        let messages = Self::finish_call(call).await?;
        serde_wasm_bindgen::from_value(messages).map_err(serde_error_message)
    }

    async fn apply(
        &self,
        content: &str,
        message_id: u32,
        options: ApplyOptions,
    ) -> Result<(), HostCallError> {
        let options = serde_wasm_bindgen::to_value(&options).map_err(serde_error_message)?;
        let call = self.set_message.call3(
            &JsValue::UNDEFINED,
            &JsValue::from_str(content),
            &JsValue::from(message_id),
            &options,
        );
        Self::finish_call(call).await?;
        Ok(())
    }
}

fn global_function(window: &Window, name: &str) -> Option<js_sys::Function> {
    let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(name)).ok()?;
    if value.is_function() {
        Some(value.unchecked_into())
    } else {
        None
    }
}

/// Prefers the JS error's `message` property, falling back to the debug
/// rendering of the raw value.
fn js_error_message(error: JsValue) -> HostCallError {
    let message = js_sys::Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| format!("{error:?}"));
    HostCallError { message }
}

fn serde_error_message(error: serde_wasm_bindgen::Error) -> HostCallError {
    HostCallError {
        message: error.to_string(),
    }
}
