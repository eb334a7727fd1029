// Rendering and input tuning for the web frontend.
// Scene-level behavior (layout, buttons, camera pose) lives in
// `billboard_core::constants`; this module only holds presentation values.

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.05, 0.07, 0.11];

// Directional key lights as (direction towards light, intensity)
pub const LIGHTS: [([f32; 3], f32); 6] = [
    ([0.1, 1.0, 3.0], 0.35),
    ([0.1, 1.0, -3.0], 0.35),
    ([5.0, 2.0, 3.0], 0.25),
    ([-5.0, 2.0, 3.0], 0.25),
    ([-5.0, 2.0, -3.0], 0.2),
    ([5.0, 2.0, -3.0], 0.2),
];
pub const AMBIENT: f32 = 0.15;

// Billboards
pub const MAX_BILLBOARDS: usize = 32;
pub const BUTTON_COLOR: [f32; 4] = [0.06, 0.38, 0.99, 0.95];
pub const RING_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
pub const DECORATION_COLOR: [f32; 4] = [0.85, 0.92, 1.0, 0.85];

// Click-to-animate presentation: the model turns once over the clip length
pub const FALLBACK_CLIP_SEC: f32 = 2.0; // used when the asset carries no clips

// Input
pub const WHEEL_ZOOM_PER_PIXEL: f32 = 0.001;
