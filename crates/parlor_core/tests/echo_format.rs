use parlor_core::{echo_command, Severity};

#[test]
fn echo_command_renders_lowercase_severity() {
    assert_eq!(
        echo_command(Severity::Success, "copied to clipboard!"),
        "/echo severity=success copied to clipboard!"
    );
    assert_eq!(
        echo_command(Severity::Warning, "nothing to copy."),
        "/echo severity=warning nothing to copy."
    );
}

#[test]
fn severity_display_matches_host_levels() {
    assert_eq!(Severity::Info.to_string(), "info");
    assert_eq!(Severity::Success.to_string(), "success");
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Error.to_string(), "error");
}
