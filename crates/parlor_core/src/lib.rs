//! Parlor core: pure click dispatch and effect model.
mod click;
mod dispatch;
mod effect;
mod guard;
mod notify;

pub use click::{Action, RawClick};
pub use dispatch::dispatch;
pub use effect::Effect;
pub use guard::InstallGuard;
pub use notify::{echo_command, Severity};
