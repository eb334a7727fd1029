use glam::Vec3;

// Default scene tuning. Units are model-space metres; the model is roughly 2cm tall.

// Asset
pub const MODEL_PATH: &str = "./assets/scene_model.glb";

// Instance layout
pub const LAYOUT_CENTER: [f32; 3] = [0.0, -0.011, 0.001];
pub const LAYOUT_SPACING: f32 = 0.03; // distance between adjacent slots along X
pub const MIN_INSTANCES: usize = 1;
pub const MAX_INSTANCES: usize = 4;

// Billboard buttons, anchored to the first instance
pub const BUTTON_SIZE: f32 = 0.0018;
pub const RING_SIZE: f32 = 0.0024; // ring sits behind its button and overhangs it
pub const BUTTON_ANCHORS: [[f32; 3]; 5] = [
    [-0.001, 0.0205, 0.007],
    [-0.001, 0.015, 0.007],
    [0.006, 0.015, 0.007],
    [0.002, 0.01, 0.007],
    [0.0006, 0.0058, 0.007],
];
pub const CONFIRM_BUTTON: u32 = 2;
pub const CLOSE_BUTTON: u32 = 5;

// Decorative chip overlay shown after confirm
pub const CHIP_OFFSET: [f32; 3] = [0.01, 0.02, 0.03];
pub const CHIP_SIZE: [f32; 2] = [0.008, 0.01];

// Click-to-animate
pub const ANIMATION_COOLDOWN_SEC: f64 = 1.0;
pub const INSTANCE_PICK_RADIUS: f32 = 0.012;
pub const INSTANCE_PICK_OFFSET: [f32; 3] = [0.0, 0.012, 0.0]; // model origin sits at its base

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.015, 0.001, 0.05];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.01;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const ORBIT_MIN_DISTANCE: f32 = 0.01;
pub const ORBIT_MAX_DISTANCE: f32 = 0.2;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per pixel of drag
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.5; // radians per second

#[inline]
pub fn vec3(a: [f32; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}
