use std::cell::Cell;

/// Once-flag guarding module installation.
///
/// The host page may inject the script several times; only the first
/// `try_begin` wins, and later loads must leave the document untouched.
#[derive(Debug)]
pub struct InstallGuard {
    installed: Cell<bool>,
}

impl InstallGuard {
    pub const fn new() -> Self {
        Self {
            installed: Cell::new(false),
        }
    }

    /// Claims the install slot. Returns true exactly once.
    pub fn try_begin(&self) -> bool {
        !self.installed.replace(true)
    }

    pub fn is_installed(&self) -> bool {
        self.installed.get()
    }
}

impl Default for InstallGuard {
    fn default() -> Self {
        Self::new()
    }
}
