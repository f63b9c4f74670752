//! Chrome agent - assistive-technology application agent for the Chrome browser
//!
//! The agent turns scanner commands ("zoom in", "find", "switch window") into
//! synthesized keyboard input for Chrome and shows the alphabet scanner once
//! per focused browser window. Everything it touches on the desktop goes
//! through the [`host::Host`] traits, so the same agent runs against a real
//! framework or a [`host::RecordingHost`].

pub mod agent;
pub mod command;
pub mod config;
pub mod host;
pub mod keys;
pub mod paths;
pub mod widget;

pub use agent::{AppAgent, ChromeAgent, Dispatch, PanelState};
pub use command::{Command, CommandRequest};
pub use config::Config;
pub use host::{Host, RecordingHost, WindowInfo};
