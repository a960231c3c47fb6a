/// Attribute snapshot taken from the element carrying the action marker.
///
/// Values arrive exactly as the DOM returns them; defaults and number
/// parsing are applied by `dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClick {
    pub action: String,
    pub qq: Option<String>,
    pub url: Option<String>,
    pub swipe: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Copy the `data-qq` payload to the clipboard.
    CopyQq,
    /// Open the `data-url` target in a new tab.
    OpenLink,
    /// Switch message 0 to the opening variant named by `data-swipe`.
    SwitchOpening,
}

impl Action {
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "copy-qq" => Some(Action::CopyQq),
            "open-link" => Some(Action::OpenLink),
            "switch-opening" => Some(Action::SwitchOpening),
            _ => None,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Action::CopyQq => "copy-qq",
            Action::OpenLink => "open-link",
            Action::SwitchOpening => "switch-opening",
        }
    }
}
