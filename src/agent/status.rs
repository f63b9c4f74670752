//! Scanner panel status for the focused window

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the default scanner panel has been shown for the foreground window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    /// Not shown yet; the next focus change shows it
    #[default]
    Hidden,
    /// Already shown for the current window
    Shown,
}

impl PanelState {
    /// Check if the panel has been shown for the current window
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hidden => "Hidden",
            Self::Shown => "Shown",
        };
        write!(f, "{s}")
    }
}
