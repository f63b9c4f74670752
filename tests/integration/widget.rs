//! Widget enable queries

use crate::common::AgentFixture;
use chrome_agent::AppAgent;
use chrome_agent::agent::SUPPORTED_FEATURES;
use chrome_agent::host::HostCall;
use chrome_agent::widget::CheckEnabledArgs;
use pretty_assertions::assert_eq;

#[test]
fn test_query_is_passed_with_feature_list_unmodified() {
    let mut fixture = AgentFixture::new();
    let mut arg = CheckEnabledArgs::new("ZoomIn");

    fixture.agent.check_widget_enabled(&mut arg);

    assert_eq!(
        fixture.calls(),
        &[HostCall::CheckWidgetEnabled {
            features: SUPPORTED_FEATURES.iter().map(ToString::to_string).collect(),
            arg: CheckEnabledArgs::new("ZoomIn"),
        }]
    );
    assert!(arg.enabled);
    assert!(arg.handled);
}

#[test]
fn test_feature_list_order() {
    assert_eq!(
        SUPPORTED_FEATURES,
        &[
            "OpenFile",
            "SaveFile",
            "Find",
            "ContextualMenu",
            "ZoomIn",
            "ZoomOut",
            "ZoomFit",
            "SelectMode",
            "SwitchAppWindow",
        ]
    );
}

#[test]
fn test_unsupported_widget_left_for_host() {
    let mut fixture = AgentFixture::new();
    let mut arg = CheckEnabledArgs::new("Print");

    fixture.agent.check_widget_enabled(&mut arg);

    assert!(!arg.enabled);
    assert!(!arg.handled);
}
