//! A host that records every call instead of touching the desktop.

use super::{
    DefaultAgent, ForegroundWindow, Keyboard, PanelRequest, Panels, TaskSwitcher, TextControl,
    WindowInfo,
};
use crate::command::CommandRequest;
use crate::keys::{Chord, Key};
use crate::widget::{self, CheckEnabledArgs};
use anyhow::{Result, bail};
use serde::Serialize;
use tracing::debug;

/// One call made by an agent into its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    /// [`Keyboard::send_chord`]
    SendChord {
        /// Chord sent
        chord: Chord,
    },
    /// [`Keyboard::send_key`]
    SendKey {
        /// Key sent
        key: Key,
    },
    /// [`TextControl::pause`]
    PauseTextControl,
    /// [`TextControl::resume`]
    ResumeTextControl,
    /// [`Panels::show_panel`]
    ShowPanel {
        /// Panel requested
        request: PanelRequest,
    },
    /// [`TaskSwitcher::show_task_switcher`]
    ShowTaskSwitcher {
        /// Process the switcher was scoped to
        process_name: String,
    },
    /// [`ForegroundWindow::foreground_window_info`]
    ForegroundWindowInfo,
    /// [`DefaultAgent::default_focus_changed`]
    DefaultFocusChanged {
        /// Window passed along
        window: WindowInfo,
    },
    /// [`DefaultAgent::run_default_command`]
    RunDefaultCommand {
        /// Request passed along
        request: CommandRequest,
    },
    /// [`DefaultAgent::check_widget_enabled`]
    CheckWidgetEnabled {
        /// Feature list supplied by the agent
        features: Vec<String>,
        /// Query as received, before the enable check ran
        arg: CheckEnabledArgs,
    },
}

impl HostCall {
    /// Whether the call synthesizes keyboard input
    #[must_use]
    pub const fn is_keyboard(&self) -> bool {
        matches!(self, Self::SendChord { .. } | Self::SendKey { .. })
    }

    /// Whether the call displays a panel or the task switcher
    #[must_use]
    pub const fn is_display(&self) -> bool {
        matches!(self, Self::ShowPanel { .. } | Self::ShowTaskSwitcher { .. })
    }
}

/// In-memory [`super::Host`] that logs calls in order.
///
/// `foreground_window_info` answers with a fixed window. Keyboard, panel and
/// text-control failures can be switched on to exercise error paths; the
/// failing call is still recorded.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    foreground: WindowInfo,
    fail_keyboard: bool,
    fail_panels: bool,
    fail_text_control: bool,
}

impl RecordingHost {
    /// Create a host whose foreground window is `foreground`
    #[must_use]
    pub const fn new(foreground: WindowInfo) -> Self {
        Self {
            calls: Vec::new(),
            foreground,
            fail_keyboard: false,
            fail_panels: false,
            fail_text_control: false,
        }
    }

    /// Make every keyboard call fail
    #[must_use]
    pub const fn with_failing_keyboard(mut self) -> Self {
        self.fail_keyboard = true;
        self
    }

    /// Make every panel request fail
    #[must_use]
    pub const fn with_failing_panels(mut self) -> Self {
        self.fail_panels = true;
        self
    }

    /// Make pausing and resuming the text control fail
    #[must_use]
    pub const fn with_failing_text_control(mut self) -> Self {
        self.fail_text_control = true;
        self
    }

    /// Switch panel failures on or off
    pub const fn set_failing_panels(&mut self, failing: bool) {
        self.fail_panels = failing;
    }

    /// Calls recorded so far
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Remove and return the recorded calls
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// Replace the window reported as foreground
    pub fn set_foreground(&mut self, window: WindowInfo) {
        self.foreground = window;
    }

    fn record(&mut self, call: HostCall) {
        debug!(?call, "Host call");
        self.calls.push(call);
    }

    fn keyboard_result(&self) -> Result<()> {
        if self.fail_keyboard {
            bail!("Keyboard synthesis unavailable");
        }
        Ok(())
    }

    fn text_control_result(&self) -> Result<()> {
        if self.fail_text_control {
            bail!("Text control unavailable");
        }
        Ok(())
    }
}

impl Keyboard for RecordingHost {
    fn send_chord(&mut self, chord: Chord) -> Result<()> {
        self.record(HostCall::SendChord { chord });
        self.keyboard_result()
    }

    fn send_key(&mut self, key: Key) -> Result<()> {
        self.record(HostCall::SendKey { key });
        self.keyboard_result()
    }
}

impl TextControl for RecordingHost {
    fn pause(&mut self) -> Result<()> {
        self.record(HostCall::PauseTextControl);
        self.text_control_result()
    }

    fn resume(&mut self) -> Result<()> {
        self.record(HostCall::ResumeTextControl);
        self.text_control_result()
    }
}

impl Panels for RecordingHost {
    fn show_panel(&mut self, request: PanelRequest) -> Result<()> {
        self.record(HostCall::ShowPanel { request });
        if self.fail_panels {
            bail!("Panel manager unavailable");
        }
        Ok(())
    }
}

impl TaskSwitcher for RecordingHost {
    fn show_task_switcher(&mut self, process_name: &str) -> Result<()> {
        self.record(HostCall::ShowTaskSwitcher {
            process_name: process_name.to_string(),
        });
        Ok(())
    }
}

impl ForegroundWindow for RecordingHost {
    fn foreground_window_info(&mut self) -> Result<WindowInfo> {
        self.record(HostCall::ForegroundWindowInfo);
        Ok(self.foreground.clone())
    }
}

impl DefaultAgent for RecordingHost {
    fn default_focus_changed(&mut self, window: &WindowInfo) -> Result<()> {
        self.record(HostCall::DefaultFocusChanged {
            window: window.clone(),
        });
        Ok(())
    }

    fn run_default_command(&mut self, request: &CommandRequest) -> Result<()> {
        self.record(HostCall::RunDefaultCommand {
            request: request.clone(),
        });
        Ok(())
    }

    fn check_widget_enabled(&mut self, features: &[&str], arg: &mut CheckEnabledArgs) {
        self.record(HostCall::CheckWidgetEnabled {
            features: features.iter().map(ToString::to_string).collect(),
            arg: arg.clone(),
        });
        widget::enable_supported(features, arg);
    }
}
