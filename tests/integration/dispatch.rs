//! Command dispatch through the host-facing entry point

use crate::common::{AgentFixture, chord};
use chrome_agent::host::{HostCall, PanelRequest};
use chrome_agent::keys::Key;
use chrome_agent::{AppAgent, Command, CommandRequest, Dispatch, RecordingHost};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case::address_bar("ChromeAddressBar", vec![chord(Key::LControlKey, Key::L)])]
#[case::save_file(
    "SaveFile",
    vec![chord(Key::LMenu, Key::F), HostCall::SendKey { key: Key::A }]
)]
#[case::zoom_in(
    "CmdZoomIn",
    vec![
        HostCall::PauseTextControl,
        chord(Key::LControlKey, Key::Add),
        HostCall::ResumeTextControl,
    ]
)]
#[case::zoom_out(
    "CmdZoomOut",
    vec![
        HostCall::PauseTextControl,
        chord(Key::LControlKey, Key::Subtract),
        HostCall::ResumeTextControl,
    ]
)]
#[case::zoom_fit(
    "CmdZoomFit",
    vec![
        HostCall::PauseTextControl,
        chord(Key::LControlKey, Key::D0),
        HostCall::ResumeTextControl,
    ]
)]
#[case::find("CmdFind", vec![chord(Key::LControlKey, Key::F)])]
#[case::go_backward("ChromeGoBackward", vec![HostCall::SendKey { key: Key::BrowserBack }])]
#[case::go_forward("ChromeGoForward", vec![chord(Key::LMenu, Key::Right)])]
#[case::switch_app_window(
    "SwitchAppWindow",
    vec![HostCall::ShowTaskSwitcher { process_name: "chrome".to_string() }]
)]
fn test_command_produces_exact_calls(
    #[case] name: &str,
    #[case] expected: Vec<HostCall>,
) -> anyhow::Result<()> {
    let mut fixture = AgentFixture::new();

    let handled = fixture.agent.on_run_command(CommandRequest::from(name))?;

    assert!(handled);
    assert_eq!(fixture.calls(), expected.as_slice());
    Ok(())
}

#[test]
fn test_zoom_menu_is_anchored_to_screen() -> anyhow::Result<()> {
    let mut fixture = AgentFixture::new();

    assert!(
        fixture
            .agent
            .on_run_command(CommandRequest::from("ChromeZoomMenu"))?
    );

    let expected = vec![
        HostCall::ForegroundWindowInfo,
        HostCall::ShowPanel {
            request: PanelRequest::new("ChromeBrowserZoomMenu", fixture.window.clone())
                .with_category("Chrome")
                .anchored_to_screen(),
        },
    ];
    assert_eq!(fixture.calls(), expected.as_slice());
    Ok(())
}

#[test]
fn test_every_known_command_is_handled_without_forwarding() -> anyhow::Result<()> {
    for command in Command::KNOWN {
        let mut fixture = AgentFixture::new();
        let dispatch = fixture
            .agent
            .run_command(CommandRequest::new(command.clone()))?;
        assert_eq!(dispatch, Dispatch::Handled, "{command}");
        assert!(
            !fixture
                .calls()
                .iter()
                .any(|call| matches!(call, HostCall::RunDefaultCommand { .. })),
            "{command} reached the default handler"
        );
    }
    Ok(())
}

#[test]
fn test_unknown_command_reaches_default_handler_with_argument() -> anyhow::Result<()> {
    let mut fixture = AgentFixture::new();
    let request = CommandRequest::from("OpenFile").with_arg(json!(["a.html", 3]));

    assert!(fixture.agent.on_run_command(request.clone())?);

    assert_eq!(
        fixture.calls(),
        &[HostCall::RunDefaultCommand { request }]
    );
    Ok(())
}

#[test]
fn test_zoom_chord_failure_still_resumes_text_control() {
    let mut fixture = AgentFixture::with_host(RecordingHost::with_failing_keyboard);

    let result = fixture
        .agent
        .on_run_command(CommandRequest::from("CmdZoomFit"));

    assert!(result.is_err());
    assert_eq!(fixture.calls().last(), Some(&HostCall::ResumeTextControl));
}

#[rstest]
#[case::zoom_in("CmdZoomIn")]
#[case::zoom_out("CmdZoomOut")]
#[case::zoom_fit("CmdZoomFit")]
fn test_zoom_sends_nothing_when_pause_fails(#[case] name: &str) {
    let mut fixture = AgentFixture::with_host(RecordingHost::with_failing_text_control);

    let result = fixture.agent.on_run_command(CommandRequest::from(name));

    assert!(result.is_err());
    assert_eq!(fixture.calls(), &[HostCall::PauseTextControl]);
}

#[test]
fn test_save_file_stops_after_failed_chord() {
    let mut fixture = AgentFixture::with_host(RecordingHost::with_failing_keyboard);

    assert!(
        fixture
            .agent
            .on_run_command(CommandRequest::from("SaveFile"))
            .is_err()
    );
    assert_eq!(fixture.calls(), &[chord(Key::LMenu, Key::F)]);
}

proptest! {
    #[test]
    fn prop_unrecognized_commands_forward_without_side_effects(name in "[A-Za-z][A-Za-z0-9]{0,24}") {
        prop_assume!(!Command::from(name.as_str()).is_known());

        let mut fixture = AgentFixture::new();
        let request = CommandRequest::from(name.as_str());
        let handled = fixture
            .agent
            .on_run_command(request.clone())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert!(handled);
        prop_assert_eq!(fixture.calls(), &[HostCall::RunDefaultCommand { request }]);
        prop_assert!(!fixture.calls().iter().any(|call| call.is_keyboard() || call.is_display()));
    }
}
