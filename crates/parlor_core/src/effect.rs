#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify { severity: crate::Severity, message: String },
    CopyText { text: String },
    OpenLink { url: String },
    ClearSelection,
    BeginSwitch { swipe: u32 },
}
