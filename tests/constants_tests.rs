// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use billboard_core::constants as core;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_consistent() {
    assert!(core::MIN_INSTANCES >= 1);
    assert!(core::MIN_INSTANCES <= core::MAX_INSTANCES);
    assert!(core::LAYOUT_SPACING > 0.0);
    assert!(MAX_BILLBOARDS >= core::BUTTON_ANCHORS.len() * 2 + 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rings_overhang_their_buttons() {
    assert!(core::BUTTON_SIZE > 0.0);
    assert!(core::RING_SIZE > core::BUTTON_SIZE);
}

#[test]
fn mapped_buttons_exist() {
    let n = core::BUTTON_ANCHORS.len() as u32;
    for b in [core::CONFIRM_BUTTON, core::CLOSE_BUTTON] {
        assert!(b >= 1 && b <= n);
    }
    assert_ne!(core::CONFIRM_BUTTON, core::CLOSE_BUTTON);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_home_is_inside_zoom_limits() {
    let home = core::vec3(core::CAMERA_EYE) - core::vec3(core::CAMERA_TARGET);
    assert!(home.length() >= core::ORBIT_MIN_DISTANCE);
    assert!(home.length() <= core::ORBIT_MAX_DISTANCE);
    assert!(core::CAMERA_ZNEAR < core::CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn presentation_values_are_in_range() {
    for c in [BUTTON_COLOR, RING_COLOR, DECORATION_COLOR] {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
    let total: f32 = LIGHTS.iter().map(|(_, i)| *i).sum::<f32>() + AMBIENT;
    assert!(total > 0.5 && total < 2.5);
    assert!(FALLBACK_CLIP_SEC > 0.0);
    assert!(WHEEL_ZOOM_PER_PIXEL > 0.0);
}
