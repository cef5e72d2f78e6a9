use serde::{Deserialize, Serialize};

/// Name of the `CustomEvent` dispatched on `window` after every tab activation
pub const TAB_VIEW_EVENT: &str = "tab_view";

/// Name of the `CustomEvent` dispatched on `window` after the glass skin changes
pub const SKIN_CHANGED_EVENT: &str = "skinChanged";

/// Detail of the `tab_view` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabViewEvent {
    pub service: String,
}

/// Detail of the `skinChanged` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinChangedEvent {
    /// `glass`, or `default` when the effect is off
    pub skin: String,
    pub variant: String,
    pub label: String,
}
