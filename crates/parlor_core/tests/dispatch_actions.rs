use std::sync::Once;

use parlor_core::{dispatch, Action, Effect, RawClick, Severity};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(parlor_logging::initialize_for_tests);
}

fn click(action: &str) -> RawClick {
    RawClick {
        action: action.to_string(),
        qq: None,
        url: None,
        swipe: None,
    }
}

#[test]
fn copy_qq_emits_copy_effect_with_payload() {
    init_logging();
    let mut copy = click("copy-qq");
    copy.qq = Some("123456789".to_string());

    assert_eq!(
        dispatch(&copy),
        vec![Effect::CopyText {
            text: "123456789".to_string(),
        }]
    );
}

#[test]
fn copy_qq_defaults_to_empty_payload() {
    init_logging();
    let copy = click("copy-qq");

    assert_eq!(
        dispatch(&copy),
        vec![Effect::CopyText {
            text: String::new(),
        }]
    );
}

#[test]
fn open_link_emits_open_effect() {
    init_logging();
    let mut open = click("open-link");
    open.url = Some("https://example.com/group".to_string());

    assert_eq!(
        dispatch(&open),
        vec![Effect::OpenLink {
            url: "https://example.com/group".to_string(),
        }]
    );
}

#[test]
fn open_link_defaults_to_empty_url() {
    init_logging();
    let open = click("open-link");

    assert_eq!(
        dispatch(&open),
        vec![Effect::OpenLink { url: String::new() }]
    );
}

#[test]
fn switch_opening_clears_group_before_switching() {
    init_logging();
    let mut switch = click("switch-opening");
    switch.swipe = Some("2".to_string());

    assert_eq!(
        dispatch(&switch),
        vec![Effect::ClearSelection, Effect::BeginSwitch { swipe: 2 }]
    );
}

#[test]
fn switch_opening_accepts_padded_index() {
    init_logging();
    let mut switch = click("switch-opening");
    switch.swipe = Some(" 3 ".to_string());

    assert_eq!(
        dispatch(&switch),
        vec![Effect::ClearSelection, Effect::BeginSwitch { swipe: 3 }]
    );
}

#[test]
fn switch_opening_rejects_missing_index() {
    init_logging();
    let switch = click("switch-opening");

    assert_eq!(
        dispatch(&switch),
        vec![Effect::Notify {
            severity: Severity::Error,
            message: "missing or invalid swipe index (data-swipe, expected a number)."
                .to_string(),
        }]
    );
}

#[test]
fn switch_opening_rejects_non_numeric_index() {
    init_logging();
    let mut switch = click("switch-opening");
    switch.swipe = Some("abc".to_string());

    let effects = dispatch(&switch);
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::Notify { severity, message } => {
            assert_eq!(*severity, Severity::Error);
            assert!(message.contains("missing or invalid swipe index"));
        }
        other => panic!("expected error notification, got {other:?}"),
    }
}

#[test]
fn switch_opening_rejects_fractional_index() {
    init_logging();
    let mut switch = click("switch-opening");
    switch.swipe = Some("1.5".to_string());

    assert!(matches!(
        dispatch(&switch).as_slice(),
        [Effect::Notify {
            severity: Severity::Error,
            ..
        }]
    ));
}

#[test]
fn switch_opening_rejects_negative_index() {
    init_logging();
    let mut switch = click("switch-opening");
    switch.swipe = Some("-1".to_string());

    assert!(matches!(
        dispatch(&switch).as_slice(),
        [Effect::Notify {
            severity: Severity::Error,
            ..
        }]
    ));
}

#[test]
fn unknown_action_warns_and_does_nothing_else() {
    init_logging();
    let unknown = click("self-destruct");

    assert_eq!(
        dispatch(&unknown),
        vec![Effect::Notify {
            severity: Severity::Warning,
            message: "unknown action: self-destruct".to_string(),
        }]
    );
}

#[test]
fn action_markers_round_trip() {
    for action in [Action::CopyQq, Action::OpenLink, Action::SwitchOpening] {
        assert_eq!(Action::from_marker(action.marker()), Some(action));
    }
    // Markers are matched literally, not case-folded.
    assert_eq!(Action::from_marker("Copy-QQ"), None);
    assert_eq!(Action::from_marker(""), None);
}
