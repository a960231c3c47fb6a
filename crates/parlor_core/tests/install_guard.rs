use parlor_core::InstallGuard;

#[test]
fn first_begin_wins() {
    let guard = InstallGuard::new();

    assert!(!guard.is_installed());
    assert!(guard.try_begin());
    assert!(guard.is_installed());
}

#[test]
fn later_begins_are_rejected() {
    let guard = InstallGuard::new();

    assert!(guard.try_begin());
    assert!(!guard.try_begin());
    assert!(!guard.try_begin());
    assert!(guard.is_installed());
}
