use std::cell::RefCell;

use parlor_core::{dispatch, InstallGuard, Severity};
use parlor_engine::NotifySink;
use parlor_logging::parlor_info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

mod clipboard;
mod dom;
mod effects;
mod host;
mod markup;
mod notify;
mod opener;

use effects::EffectRunner;
use notify::EchoNotifier;

thread_local! {
    static INSTALL: InstallGuard = const { InstallGuard::new() };
    static CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(Event)>>> = const { RefCell::new(None) };
}

/// Wires the delegated click listener into the page and announces readiness.
///
/// The page may inject this module any number of times; only the first call
/// does any work.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    if !INSTALL.with(|guard| guard.try_begin()) {
        return Ok(());
    }

    console_error_panic_hook::set_once();
    parlor_logging::initialize_for_web();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;

    let runner = EffectRunner::new(document.clone());
    let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event| {
        handle_click(&runner, &event);
    }));
    document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    // The listener stays for the lifetime of the page, so the closure must
    // outlive this call.
    CLICK_HANDLER.with(|slot| *slot.borrow_mut() = Some(callback));

    parlor_info!("click delegation installed on document");
    EchoNotifier.notify(Severity::Info, "home page interactions loaded.");
    Ok(())
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    install()
}

fn handle_click(runner: &EffectRunner, event: &Event) {
    let Some(element) = dom::action_element(event) else {
        return;
    };
    let click = dom::read_click(&element);
    runner.run(&element, dispatch(&click));
}
