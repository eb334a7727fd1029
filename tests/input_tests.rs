// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_ndc_maps_corners() {
    assert_eq!(client_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
}

#[test]
fn client_to_ndc_handles_empty_canvas() {
    assert_eq!(client_to_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(client_to_ndc(10.0, 10.0, 800.0, -1.0), Vec2::ZERO);
}

#[test]
fn wheel_zoom_direction_and_clamp() {
    assert!(wheel_zoom_factor(100.0, 0.001) > 1.0);
    assert!(wheel_zoom_factor(-100.0, 0.001) < 1.0);
    assert_eq!(wheel_zoom_factor(0.0, 0.001), 1.0);
    assert_eq!(wheel_zoom_factor(1e6, 0.001), 2.0);
    assert_eq!(wheel_zoom_factor(-1e6, 0.001), 0.5);
}

#[test]
fn keys_map_to_commands() {
    for key in ["+", "=", "ArrowRight"] {
        assert_eq!(command_for_key(key), Some(KeyCommand::AddModel));
    }
    for key in ["-", "_", "ArrowLeft"] {
        assert_eq!(command_for_key(key), Some(KeyCommand::RemoveModel));
    }
    assert_eq!(command_for_key("b"), Some(KeyCommand::TogglePanel));
    assert_eq!(command_for_key("R"), Some(KeyCommand::ResetView));
    assert_eq!(command_for_key("Enter"), Some(KeyCommand::Fullscreen));
    assert_eq!(command_for_key("x"), None);
}

#[test]
fn focused_controls_keep_their_keys() {
    assert!(!scene_handles_keys_for(Some("BUTTON")));
    assert!(!scene_handles_keys_for(Some("button")));
    assert!(!scene_handles_keys_for(Some("INPUT")));
    assert!(!scene_handles_keys_for(Some("TEXTAREA")));
    assert!(scene_handles_keys_for(Some("CANVAS")));
    assert!(scene_handles_keys_for(Some("BODY")));
    assert!(scene_handles_keys_for(None));
}

#[test]
fn drag_state_starts_inactive() {
    let d = DragState::default();
    assert!(!d.active);
    assert_eq!(d.last, Vec2::ZERO);
}
