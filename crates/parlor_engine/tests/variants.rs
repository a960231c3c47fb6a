use parlor_engine::{ApplyOptions, ChatMessage, RefreshMode, RetrieveOptions, SwipeSet};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn ordered_swipes_resolve_by_position() {
    let swipes: SwipeSet = serde_json::from_value(json!(["first", "second", "third"])).unwrap();

    assert_eq!(swipes.get(0), Some("first"));
    assert_eq!(swipes.get(2), Some("third"));
    assert_eq!(swipes.get(3), None);
}

#[test]
fn keyed_swipes_resolve_by_index_string() {
    let swipes: SwipeSet = serde_json::from_value(json!({ "0": "first", "2": "third" })).unwrap();

    assert_eq!(swipes.get(0), Some("first"));
    assert_eq!(swipes.get(1), None);
    assert_eq!(swipes.get(2), Some("third"));
}

#[test]
fn null_and_empty_entries_count_as_absent() {
    let ordered: SwipeSet = serde_json::from_value(json!([null, "", "kept"])).unwrap();
    assert_eq!(ordered.get(0), None);
    assert_eq!(ordered.get(1), None);
    assert_eq!(ordered.get(2), Some("kept"));

    let keyed: SwipeSet = serde_json::from_value(json!({ "0": null, "1": "" })).unwrap();
    assert_eq!(keyed.get(0), None);
    assert_eq!(keyed.get(1), None);
}

#[test]
fn message_swipes_are_optional() {
    let bare: ChatMessage = serde_json::from_value(json!({ "mes": "hello" })).unwrap();
    assert_eq!(bare.swipes, None);

    let nulled: ChatMessage = serde_json::from_value(json!({ "swipes": null })).unwrap();
    assert_eq!(nulled.swipes, None);
}

#[test]
fn message_ignores_unknown_host_fields() {
    let message: ChatMessage = serde_json::from_value(json!({
        "name": "Seraphina",
        "is_user": false,
        "mes": "hello",
        "swipes": ["a", "b"],
    }))
    .unwrap();

    assert_eq!(message.swipes.unwrap().get(1), Some("b"));
}

#[test]
fn retrieve_options_serialize_to_host_shape() {
    let value = serde_json::to_value(RetrieveOptions { include_swipe: true }).unwrap();

    assert_eq!(value, json!({ "include_swipe": true }));
}

#[test]
fn apply_options_serialize_to_host_shape() {
    let value = serde_json::to_value(ApplyOptions {
        swipe_id: 2,
        refresh: RefreshMode::DisplayAndRenderCurrent,
    })
    .unwrap();

    assert_eq!(
        value,
        json!({ "swipe_id": 2, "refresh": "display_and_render_current" })
    );
}

#[test]
fn refresh_none_serializes_snake_case() {
    let value = serde_json::to_value(RefreshMode::None).unwrap();

    assert_eq!(value, json!("none"));
}
