//! Services the hosting framework provides to an agent.
//!
//! The agent never reaches for process-wide singletons. Everything it needs
//! (keyboard synthesis, panels, the task switcher, the foreground window and
//! the framework's default agent behavior) arrives through the traits below,
//! bundled as [`Host`].

mod recording;

pub use recording::{HostCall, RecordingHost};

use crate::command::CommandRequest;
use crate::keys::{Chord, Key};
use crate::widget::{self, CheckEnabledArgs};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Snapshot of the foreground window as reported by the focus monitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    /// Opaque native window handle
    pub handle: u64,
    /// Name of the owning process (e.g. `"chrome"`)
    pub process_name: String,
    /// Window title
    pub title: String,
    /// True when focus moved to a window other than the previous one
    #[serde(default)]
    pub is_new_window: bool,
}

impl WindowInfo {
    /// Describe a window that already had focus before this event
    #[must_use]
    pub fn new(handle: u64, process_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            handle,
            process_name: process_name.into(),
            title: title.into(),
            is_new_window: false,
        }
    }

    /// Mark the window as newly focused
    #[must_use]
    pub const fn new_window(mut self) -> Self {
        self.is_new_window = true;
        self
    }
}

/// Request to display a named panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelRequest {
    /// Symbolic panel name
    pub panel: String,
    /// Category label used by the panel manager to pick a panel variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Window the panel is shown for
    pub window: WindowInfo,
    /// Position the panel relative to the current screen instead of the window
    #[serde(default)]
    pub use_current_screen_as_parent: bool,
}

impl PanelRequest {
    /// Request `panel` for `window`, without a category
    #[must_use]
    pub fn new(panel: impl Into<String>, window: WindowInfo) -> Self {
        Self {
            panel: panel.into(),
            category: None,
            window,
            use_current_screen_as_parent: false,
        }
    }

    /// Set the category label
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Anchor the panel to the current screen
    #[must_use]
    pub const fn anchored_to_screen(mut self) -> Self {
        self.use_current_screen_as_parent = true;
        self
    }
}

/// Keyboard synthesis.
pub trait Keyboard {
    /// Press and release `chord.key` while `chord.modifier` is held
    ///
    /// # Errors
    ///
    /// Returns an error if the input could not be injected.
    fn send_chord(&mut self, chord: Chord) -> Result<()>;

    /// Press and release a single key
    ///
    /// # Errors
    ///
    /// Returns an error if the input could not be injected.
    fn send_key(&mut self, key: Key) -> Result<()>;
}

/// The framework's text-control input subsystem.
///
/// While paused it ignores keystrokes, so synthesized control chords are not
/// mistaken for user input.
pub trait TextControl {
    /// Stop reacting to keyboard input
    ///
    /// # Errors
    ///
    /// Returns an error if the subsystem rejects the request.
    fn pause(&mut self) -> Result<()>;

    /// Start reacting to keyboard input again
    ///
    /// # Errors
    ///
    /// Returns an error if the subsystem rejects the request.
    fn resume(&mut self) -> Result<()>;
}

/// Panel display.
pub trait Panels {
    /// Display a panel
    ///
    /// # Errors
    ///
    /// Returns an error if the panel cannot be shown.
    fn show_panel(&mut self, request: PanelRequest) -> Result<()>;
}

/// The framework's window switcher.
pub trait TaskSwitcher {
    /// Show the switcher listing only windows owned by `process_name`
    ///
    /// # Errors
    ///
    /// Returns an error if the switcher cannot be shown.
    fn show_task_switcher(&mut self, process_name: &str) -> Result<()>;
}

/// Foreground window lookup.
pub trait ForegroundWindow {
    /// Describe the window that currently has focus
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be queried.
    fn foreground_window_info(&mut self) -> Result<WindowInfo>;
}

/// Behavior every agent gets from the framework unless it does better.
pub trait DefaultAgent {
    /// Default reaction to a focus change
    ///
    /// # Errors
    ///
    /// Returns an error if the default handling fails.
    fn default_focus_changed(&mut self, window: &WindowInfo) -> Result<()>;

    /// Default handling for a command the agent does not recognize
    ///
    /// # Errors
    ///
    /// Returns an error if the default handling fails.
    fn run_default_command(&mut self, request: &CommandRequest) -> Result<()>;

    /// Shared enable check over an agent's feature list
    fn check_widget_enabled(&mut self, features: &[&str], arg: &mut CheckEnabledArgs) {
        widget::enable_supported(features, arg);
    }
}

/// Every service an agent may call.
pub trait Host: Keyboard + TextControl + Panels + TaskSwitcher + ForegroundWindow + DefaultAgent {}

impl<T> Host for T where
    T: Keyboard + TextControl + Panels + TaskSwitcher + ForegroundWindow + DefaultAgent
{
}
