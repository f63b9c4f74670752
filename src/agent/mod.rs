//! Application agents and the contract the host drives them through

mod chrome;
mod status;

pub use chrome::{ChromeAgent, Dispatch, SUPPORTED_FEATURES};
pub use status::PanelState;

use crate::command::CommandRequest;
use crate::host::WindowInfo;
use crate::widget::CheckEnabledArgs;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A process an agent wants to be activated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentProcessInfo {
    /// Lowercase process name without extension
    pub name: String,
}

impl AgentProcessInfo {
    /// Create process info for `name`
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Check whether a running process name refers to this process.
    ///
    /// Matching ignores ASCII case and a trailing `.exe`.
    #[must_use]
    pub fn matches(&self, process_name: &str) -> bool {
        let trimmed = process_name.trim();
        let stem = trimmed
            .len()
            .checked_sub(4)
            .filter(|&split| {
                trimmed.is_char_boundary(split) && trimmed[split..].eq_ignore_ascii_case(".exe")
            })
            .map_or(trimmed, |split| &trimmed[..split]);
        stem.eq_ignore_ascii_case(&self.name)
    }
}

/// Entry points the agent-management runtime calls on an application agent.
///
/// The runtime calls these serially from its event thread.
pub trait AppAgent {
    /// Processes this agent handles
    fn processes_supported(&self) -> Vec<AgentProcessInfo>;

    /// Whether the agent should be active for `process_name`
    fn supports_process(&self, process_name: &str) -> bool {
        self.processes_supported()
            .iter()
            .any(|process| process.matches(process_name))
    }

    /// Decide whether a scanner widget is enabled in the current context
    fn check_widget_enabled(&mut self, arg: &mut CheckEnabledArgs);

    /// The user asked for a context menu
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot show the menu.
    fn on_context_menu_request(&mut self, window: &WindowInfo) -> Result<()>;

    /// Foreground focus changed within a supported process.
    ///
    /// Returns whether the event was handled.
    ///
    /// # Errors
    ///
    /// Returns an error if a host call fails.
    fn on_focus_changed(&mut self, window: &WindowInfo) -> Result<bool>;

    /// Focus moved to a process this agent does not handle
    fn on_focus_lost(&mut self);

    /// Run a command. Returns whether the command was handled.
    ///
    /// # Errors
    ///
    /// Returns an error if a host call fails.
    fn on_run_command(&mut self, request: CommandRequest) -> Result<bool>;
}
