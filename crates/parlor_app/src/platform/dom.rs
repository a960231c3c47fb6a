use parlor_core::RawClick;
use parlor_engine::SwipeIndicator;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use super::markup::{
    ATTR_ACTION, ATTR_QQ, ATTR_SWIPE, ATTR_URL, CLASS_DISABLED, CLASS_SELECTED, SELECTOR_ACTION,
    SELECTOR_SELECTED_OPENING,
};

/// Finds the nearest actioned ancestor of the click target, if any.
///
/// Text-node targets and clicks outside every `[data-action]` subtree
/// resolve to `None`; the caller ignores those events.
pub(super) fn action_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    let element = target.dyn_ref::<Element>()?;
    element.closest(SELECTOR_ACTION).ok().flatten()
}

pub(super) fn read_click(element: &Element) -> RawClick {
    RawClick {
        action: element.get_attribute(ATTR_ACTION).unwrap_or_default(),
        qq: element.get_attribute(ATTR_QQ),
        url: element.get_attribute(ATTR_URL),
        swipe: element.get_attribute(ATTR_SWIPE),
    }
}

/// Drops the selected state from every opening card except `keep`.
pub(super) fn clear_selected_openings(document: &Document, keep: &Element) {
    let Ok(selected) = document.query_selector_all(SELECTOR_SELECTED_OPENING) else {
        return;
    };
    for index in 0..selected.length() {
        let Some(node) = selected.item(index) else {
            continue;
        };
        let Some(element) = node.dyn_ref::<Element>() else {
            continue;
        };
        if element != keep {
            let _ = element.class_list().remove_1(CLASS_SELECTED);
        }
    }
}

/// Class-list feedback on the clicked opening card.
pub(super) struct DomSwipeIndicator {
    element: Element,
}

impl DomSwipeIndicator {
    pub(super) fn new(element: Element) -> Self {
        Self { element }
    }
}

impl SwipeIndicator for DomSwipeIndicator {
    fn set_disabled(&self, on: bool) {
        let classes = self.element.class_list();
        let _ = if on {
            classes.add_1(CLASS_DISABLED)
        } else {
            classes.remove_1(CLASS_DISABLED)
        };
    }

    fn set_selected(&self, on: bool) {
        let classes = self.element.class_list();
        let _ = if on {
            classes.add_1(CLASS_SELECTED)
        } else {
            classes.remove_1(CLASS_SELECTED)
        };
    }
}
