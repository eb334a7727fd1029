// Host-side tests for scene configuration defaults and validation.

use billboard_core::*;

#[test]
fn default_config_is_valid() {
    let config = SceneConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.min_instances, 1);
    assert_eq!(config.max_instances, 4);
    assert_eq!(config.button_anchors.len(), 5);
}

#[test]
fn default_actions() {
    let config = SceneConfig::default();
    assert_eq!(config.action_for(ButtonId(2)), Some(PanelAction::Confirm));
    assert_eq!(config.action_for(ButtonId(5)), Some(PanelAction::Close));
    assert_eq!(config.action_for(ButtonId(1)), None);
}

#[test]
fn validation_errors() {
    let base = SceneConfig::default;

    let c = SceneConfig { min_instances: 0, ..base() };
    assert_eq!(c.validate(), Err(ConfigError::ZeroMinimum));

    let c = SceneConfig { min_instances: 3, max_instances: 2, ..base() };
    assert_eq!(c.validate(), Err(ConfigError::MinAboveMax { min: 3, max: 2 }));

    let c = SceneConfig { max_instances: 6, ..base() };
    assert_eq!(c.validate(), Err(ConfigError::LayoutTooSmall { layout: 4, max: 6 }));

    let mut c = base();
    c.layout.spacing = 0.0;
    assert_eq!(c.validate(), Err(ConfigError::NonPositiveSpacing(0.0)));

    let c = SceneConfig { ring_size: -1.0, ..base() };
    assert_eq!(c.validate(), Err(ConfigError::NonPositiveMarkerSize));

    let c = SceneConfig {
        actions: vec![(ButtonId(9), PanelAction::Close)],
        ..base()
    };
    assert_eq!(c.validate(), Err(ConfigError::UnknownButton(9, 5)));
}
