use std::fmt;

/// Notification severity, rendered lowercase into the host echo command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Formats the slash command the host notification channel consumes.
pub fn echo_command(severity: Severity, message: &str) -> String {
    format!("/echo severity={severity} {message}")
}
