//! Widget enable checks driven by an agent's supported-feature list

use serde::{Deserialize, Serialize};

/// Query sent by the host to decide whether a scanner widget is usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEnabledArgs {
    /// Feature name the widget is bound to (e.g. `"ZoomIn"`)
    pub widget: String,
    /// Whether the widget should be enabled
    #[serde(default)]
    pub enabled: bool,
    /// Set once some agent has answered the query
    #[serde(default)]
    pub handled: bool,
}

impl CheckEnabledArgs {
    /// Create an unanswered query for a widget
    #[must_use]
    pub fn new(widget: impl Into<String>) -> Self {
        Self {
            widget: widget.into(),
            enabled: false,
            handled: false,
        }
    }
}

/// Enable the widget when its feature is in `features`.
///
/// Names compare ASCII case-insensitively. A widget outside the list is left
/// untouched so the host can fall back to its own defaults.
pub fn enable_supported(features: &[&str], arg: &mut CheckEnabledArgs) {
    if features
        .iter()
        .any(|feature| feature.eq_ignore_ascii_case(&arg.widget))
    {
        arg.enabled = true;
        arg.handled = true;
    }
}
