//! Common test utilities shared across integration tests

pub mod fixture;

pub use fixture::{AgentFixture, chord, default_panel_count};
