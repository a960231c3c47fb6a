pub const ATTR_ACTION: &str = "data-action";
pub const ATTR_QQ: &str = "data-qq";
pub const ATTR_URL: &str = "data-url";
pub const ATTR_SWIPE: &str = "data-swipe";

pub const CLASS_DISABLED: &str = "is-disabled";
pub const CLASS_SELECTED: &str = "is-selected";

pub const SELECTOR_ACTION: &str = "[data-action]";
pub const SELECTOR_SELECTED_OPENING: &str = "[data-action=\"switch-opening\"].is-selected";
