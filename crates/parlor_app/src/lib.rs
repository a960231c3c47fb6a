//! Browser glue for the parlor home page: one delegated click listener over
//! declarative `data-*` attributes (copy a contact id, open a link, switch
//! the opening swipe of message 0).
#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
pub use platform::install;

#[cfg(not(target_arch = "wasm32"))]
pub fn install() {
    parlor_logging::parlor_warn!("parlor page interactions only run in a browser (wasm32)");
}
