//! Application agent for the Chrome browser

use super::{AgentProcessInfo, AppAgent, PanelState};
use crate::command::{Command, CommandRequest};
use crate::config::Config;
use crate::host::{Host, PanelRequest, WindowInfo};
use crate::keys::{Chord, Key};
use crate::widget::CheckEnabledArgs;
use anyhow::{Context, Result};
use tracing::{debug, trace};

/// Features this agent supports. Widgets bound to these features are enabled
/// while a browser window has focus.
pub const SUPPORTED_FEATURES: &[&str] = &[
    "OpenFile",
    "SaveFile",
    "Find",
    "ContextualMenu",
    "ZoomIn",
    "ZoomOut",
    "ZoomFit",
    "SelectMode",
    "SwitchAppWindow",
];

/// Outcome of [`ChromeAgent::run_command`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Dispatch {
    /// The agent performed the command
    Handled,
    /// The agent does not know the command; the host's default handler should
    /// run it
    Forward(CommandRequest),
}

/// Agent that drives Chrome with keyboard shortcuts and browser panels.
#[derive(Debug)]
pub struct ChromeAgent<H> {
    host: H,
    config: Config,
    panel: PanelState,
}

impl<H: Host> ChromeAgent<H> {
    /// Create an agent with the default configuration
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, Config::default())
    }

    /// Create an agent with an explicit configuration
    #[must_use]
    pub const fn with_config(host: H, config: Config) -> Self {
        Self {
            host,
            config,
            panel: PanelState::Hidden,
        }
    }

    /// The injected host
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the injected host
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the agent, returning its host
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the scanner has been shown for the current window
    #[must_use]
    pub const fn panel_state(&self) -> PanelState {
        self.panel
    }

    /// Perform a command without consulting the host's default handler.
    ///
    /// Known commands are carried out here. Anything else comes back as
    /// [`Dispatch::Forward`] with no host call made.
    ///
    /// # Errors
    ///
    /// Returns an error if a host call fails.
    pub fn run_command(&mut self, request: CommandRequest) -> Result<Dispatch> {
        match &request.command {
            Command::SwitchAppWindow => {
                self.host.show_task_switcher(&self.config.process_name)?;
            }
            Command::ChromeAddressBar => {
                self.host.send_chord(Chord::new(Key::LControlKey, Key::L))?;
            }
            Command::ChromeZoomMenu => {
                let window = self.host.foreground_window_info()?;
                let request = PanelRequest::new(&self.config.panels.zoom_menu, window)
                    .with_category(&self.config.category)
                    .anchored_to_screen();
                self.host.show_panel(request)?;
            }
            Command::SaveFile => {
                // File menu, then "Save As".
                self.host.send_chord(Chord::new(Key::LMenu, Key::F))?;
                self.host.send_key(Key::A)?;
            }
            Command::ZoomIn => self.zoom(Key::Add)?,
            Command::ZoomOut => self.zoom(Key::Subtract)?,
            Command::ZoomFit => self.zoom(Key::D0)?,
            Command::Find => {
                self.host.send_chord(Chord::new(Key::LControlKey, Key::F))?;
            }
            Command::GoBackward => {
                self.host.send_key(Key::BrowserBack)?;
            }
            Command::GoForward => {
                self.host.send_chord(Chord::new(Key::LMenu, Key::Right))?;
            }
            Command::Other(name) => {
                trace!(command = %name, "Forwarding unrecognized command");
                return Ok(Dispatch::Forward(request));
            }
        }

        debug!(command = %request.command, "Command handled");
        Ok(Dispatch::Handled)
    }

    /// Send a Control chord with the text control paused, so the synthesized
    /// keys are not read back as user input.
    ///
    /// Resume runs even when the chord fails.
    fn zoom(&mut self, key: Key) -> Result<()> {
        self.host.pause()?;
        let sent = self.host.send_chord(Chord::new(Key::LControlKey, key));
        let resumed = self.host.resume();
        sent.and(resumed)
    }

    fn show_default_panel(&mut self, window: &WindowInfo) -> Result<()> {
        self.host.default_focus_changed(window)?;
        self.host.show_panel(PanelRequest::new(
            &self.config.panels.default_panel,
            window.clone(),
        ))?;
        self.panel = PanelState::Shown;
        Ok(())
    }
}

impl<H: Host> AppAgent for ChromeAgent<H> {
    fn processes_supported(&self) -> Vec<AgentProcessInfo> {
        vec![AgentProcessInfo::new(&self.config.process_name)]
    }

    fn check_widget_enabled(&mut self, arg: &mut CheckEnabledArgs) {
        self.host.check_widget_enabled(SUPPORTED_FEATURES, arg);
    }

    fn on_context_menu_request(&mut self, window: &WindowInfo) -> Result<()> {
        let request = PanelRequest::new(&self.config.panels.context_menu, window.clone())
            .with_category(&self.config.category);
        self.host
            .show_panel(request)
            .context("Failed to show context menu")
    }

    fn on_focus_changed(&mut self, window: &WindowInfo) -> Result<bool> {
        debug!(
            process = %window.process_name,
            title = %window.title,
            new_window = window.is_new_window,
            panel = %self.panel,
            "Focus changed"
        );

        if window.is_new_window {
            self.panel = PanelState::Hidden;
        }

        if !self.panel.is_shown() {
            self.show_default_panel(window)
                .context("Failed to show scanner for focused window")?;
        }

        Ok(true)
    }

    fn on_focus_lost(&mut self) {
        debug!("Focus lost");
        self.panel = PanelState::Hidden;
    }

    fn on_run_command(&mut self, request: CommandRequest) -> Result<bool> {
        let name = request.command.to_string();
        if let Dispatch::Forward(request) = self
            .run_command(request)
            .with_context(|| format!("Failed to run command {name}"))?
        {
            self.host
                .run_default_command(&request)
                .with_context(|| format!("Default handler failed for command {name}"))?;
        }
        // Reported as handled even when the default handler ran it.
        Ok(true)
    }
}
