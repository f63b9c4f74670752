//! Commands issued by the host when the user picks an action.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-initiated command.
///
/// The host names commands with free-form strings. The ones this agent acts
/// on get their own variant; everything else is kept verbatim in
/// [`Command::Other`] so it can be handed back to the host's default handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Command {
    /// Show the task switcher limited to browser windows
    SwitchAppWindow,
    /// Focus the address bar
    ChromeAddressBar,
    /// Show the zoom menu panel
    ChromeZoomMenu,
    /// Open "Save As" through the File menu
    SaveFile,
    /// Zoom in
    ZoomIn,
    /// Zoom out
    ZoomOut,
    /// Reset zoom to 100%
    ZoomFit,
    /// Open the find bar
    Find,
    /// Navigate back
    GoBackward,
    /// Navigate forward
    GoForward,
    /// Any command this agent does not handle itself
    Other(String),
}

impl Command {
    /// Commands this agent acts on, in dispatch-table order.
    pub const KNOWN: &'static [Self] = &[
        Self::SwitchAppWindow,
        Self::ChromeAddressBar,
        Self::ChromeZoomMenu,
        Self::SaveFile,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::ZoomFit,
        Self::Find,
        Self::GoBackward,
        Self::GoForward,
    ];

    /// Identifier used by the host for this command
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::SwitchAppWindow => "SwitchAppWindow",
            Self::ChromeAddressBar => "ChromeAddressBar",
            Self::ChromeZoomMenu => "ChromeZoomMenu",
            Self::SaveFile => "SaveFile",
            Self::ZoomIn => "CmdZoomIn",
            Self::ZoomOut => "CmdZoomOut",
            Self::ZoomFit => "CmdZoomFit",
            Self::Find => "CmdFind",
            Self::GoBackward => "ChromeGoBackward",
            Self::GoForward => "ChromeGoForward",
            Self::Other(name) => name,
        }
    }

    /// Whether this agent has its own handling for the command
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Command {
    fn from(name: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|command| command.name() == name)
            .cloned()
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }
}

impl From<String> for Command {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<Command> for String {
    fn from(command: Command) -> Self {
        match command {
            Command::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A command together with its optional, command-specific argument.
///
/// The argument is not interpreted here; it travels with the request so the
/// host's default handler sees exactly what the host sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Command to run
    pub command: Command,
    /// Loosely typed argument supplied by the host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<serde_json::Value>,
}

impl CommandRequest {
    /// Create a request without an argument
    #[must_use]
    pub const fn new(command: Command) -> Self {
        Self { command, arg: None }
    }

    /// Attach an argument to the request
    #[must_use]
    pub fn with_arg(mut self, arg: serde_json::Value) -> Self {
        self.arg = Some(arg);
        self
    }
}

impl From<&str> for CommandRequest {
    fn from(name: &str) -> Self {
        Self::new(Command::from(name))
    }
}
