//! Test fixture wrapping an agent around a recording host

use chrome_agent::host::HostCall;
use chrome_agent::keys::{Chord, Key};
use chrome_agent::{ChromeAgent, RecordingHost, WindowInfo};

/// Agent wired to a recording host with a browser window in the foreground
pub struct AgentFixture {
    /// Agent under test
    pub agent: ChromeAgent<RecordingHost>,
    /// Window reported as foreground
    pub window: WindowInfo,
}

impl AgentFixture {
    pub fn new() -> Self {
        let window = WindowInfo::new(0x0042_0a10, "chrome", "Chromium Project - Google Chrome");
        Self {
            agent: ChromeAgent::new(RecordingHost::new(window.clone())),
            window,
        }
    }

    /// Same agent, with the recording host adjusted by `configure`
    /// (e.g. `RecordingHost::with_failing_keyboard`)
    pub fn with_host(configure: impl FnOnce(RecordingHost) -> RecordingHost) -> Self {
        let fixture = Self::new();
        Self {
            agent: ChromeAgent::new(configure(RecordingHost::new(fixture.window.clone()))),
            ..fixture
        }
    }

    /// Calls recorded so far
    pub fn calls(&self) -> &[HostCall] {
        self.agent.host().calls()
    }
}

/// Expected call for a chord
pub fn chord(modifier: Key, key: Key) -> HostCall {
    HostCall::SendChord {
        chord: Chord::new(modifier, key),
    }
}

/// Number of times the alphabet scanner was requested
pub fn default_panel_count(calls: &[HostCall]) -> usize {
    calls
        .iter()
        .filter(|call| {
            matches!(call, HostCall::ShowPanel { request } if request.panel == "Alphabet")
        })
        .count()
}
