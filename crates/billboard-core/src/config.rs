use crate::camera::OrbitConfig;
use crate::constants::*;
use crate::error::ConfigError;
use crate::hit::ButtonId;
use crate::layout::Layout;
use glam::{Vec2, Vec3};

/// What a billboard button does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    /// Hide the panel.
    Close,
    /// Hide the panel, start auto-rotating and show the decorative overlays.
    Confirm,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecorationConfig {
    pub offset: Vec3,
    pub size: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub model_path: String,
    pub layout: Layout,
    pub min_instances: usize,
    pub max_instances: usize,
    pub button_anchors: Vec<Vec3>,
    pub button_size: f32,
    pub ring_size: f32,
    pub actions: Vec<(ButtonId, PanelAction)>,
    pub decorations: Vec<DecorationConfig>,
    pub animate_on_click: bool,
    pub animation_cooldown_sec: f64,
    pub instance_pick_radius: f32,
    pub instance_pick_offset: Vec3,
    pub orbit: OrbitConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            model_path: MODEL_PATH.to_string(),
            layout: Layout::new(vec3(LAYOUT_CENTER), LAYOUT_SPACING, MAX_INSTANCES),
            min_instances: MIN_INSTANCES,
            max_instances: MAX_INSTANCES,
            button_anchors: BUTTON_ANCHORS.iter().copied().map(vec3).collect(),
            button_size: BUTTON_SIZE,
            ring_size: RING_SIZE,
            actions: vec![
                (ButtonId(CONFIRM_BUTTON), PanelAction::Confirm),
                (ButtonId(CLOSE_BUTTON), PanelAction::Close),
            ],
            decorations: vec![DecorationConfig {
                offset: vec3(CHIP_OFFSET),
                size: Vec2::new(CHIP_SIZE[0], CHIP_SIZE[1]),
            }],
            animate_on_click: true,
            animation_cooldown_sec: ANIMATION_COOLDOWN_SEC,
            instance_pick_radius: INSTANCE_PICK_RADIUS,
            instance_pick_offset: vec3(INSTANCE_PICK_OFFSET),
            orbit: OrbitConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_instances == 0 {
            return Err(ConfigError::ZeroMinimum);
        }
        if self.min_instances > self.max_instances {
            return Err(ConfigError::MinAboveMax {
                min: self.min_instances,
                max: self.max_instances,
            });
        }
        if self.layout.max_instances < self.max_instances {
            return Err(ConfigError::LayoutTooSmall {
                layout: self.layout.max_instances,
                max: self.max_instances,
            });
        }
        if !(self.layout.spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing(self.layout.spacing));
        }
        if !(self.button_size > 0.0 && self.ring_size > 0.0) {
            return Err(ConfigError::NonPositiveMarkerSize);
        }
        let buttons = self.button_anchors.len();
        if let Some((id, _)) = self
            .actions
            .iter()
            .find(|(id, _)| id.0 == 0 || id.0 as usize > buttons)
        {
            return Err(ConfigError::UnknownButton(id.0, buttons));
        }
        Ok(())
    }

    pub fn action_for(&self, button: ButtonId) -> Option<PanelAction> {
        self.actions
            .iter()
            .find(|(id, _)| *id == button)
            .map(|(_, action)| *action)
    }
}
