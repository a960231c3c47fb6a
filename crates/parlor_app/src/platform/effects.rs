use parlor_core::Effect;
use parlor_engine::{switch_opening, ChatHost, NotifySink};
use parlor_logging::parlor_debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use super::clipboard;
use super::dom::{self, DomSwipeIndicator};
use super::host::SlashHost;
use super::notify::EchoNotifier;
use super::opener;

/// Executes the effects one dispatched click produced, in order.
///
/// Asynchronous legs (clipboard, switch) are spawned onto the page's single
/// thread; synchronous legs run before the handler returns, so the selection
/// group is already cleared when a switch begins.
pub(super) struct EffectRunner {
    document: Document,
}

impl EffectRunner {
    pub(super) fn new(document: Document) -> Self {
        Self { document }
    }

    pub(super) fn run(&self, clicked: &Element, effects: Vec<Effect>) {
        for effect in effects {
            self.run_one(clicked, effect);
        }
    }

    fn run_one(&self, clicked: &Element, effect: Effect) {
        match effect {
            Effect::Notify { severity, message } => {
                EchoNotifier.notify(severity, &message);
            }
            Effect::CopyText { text } => {
                parlor_debug!("copying {} bytes to the clipboard", text.len());
                spawn_local(clipboard::copy_text(text));
            }
            Effect::OpenLink { url } => {
                opener::open_link(&url);
            }
            Effect::ClearSelection => {
                dom::clear_selected_openings(&self.document, clicked);
            }
            Effect::BeginSwitch { swipe } => {
                let indicator = DomSwipeIndicator::new(clicked.clone());
                spawn_local(async move {
                    let host = SlashHost::detect();
                    let notifier = EchoNotifier;
                    switch_opening(
                        host.as_ref().map(|h| h as &dyn ChatHost),
                        swipe,
                        Some(&indicator),
                        &notifier,
                    )
                    .await;
                });
            }
        }
    }
}
