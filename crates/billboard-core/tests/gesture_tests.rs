// Host-side tests for click/drag classification.

use billboard_core::GestureState;
use glam::Vec2;

#[test]
fn same_point_is_a_click() {
    let mut g = GestureState::default();
    g.pointer_down(Vec2::new(10.0, 20.0));
    g.pointer_up(Vec2::new(10.0, 20.0));
    assert!(g.is_click());
    assert!(!g.is_drag());
}

#[test]
fn any_movement_is_a_drag() {
    let mut g = GestureState::default();
    g.pointer_down(Vec2::new(10.0, 20.0));
    g.pointer_up(Vec2::new(11.0, 20.0));
    assert!(g.is_drag());

    g.pointer_down(Vec2::new(10.0, 20.0));
    g.pointer_up(Vec2::new(10.0, 20.5));
    assert!(g.is_drag());
}

#[test]
fn only_the_initial_state_is_not_a_drag() {
    let g = GestureState::default();
    assert!(!g.is_drag());
    assert!(g.is_click());
}

#[test]
fn down_without_up_is_a_drag() {
    let mut g = GestureState::default();
    g.pointer_down(Vec2::new(10.0, 20.0));
    assert!(g.is_drag());
    assert!(!g.is_click());
}

#[test]
fn up_without_down_is_a_drag() {
    let mut g = GestureState::default();
    g.pointer_up(Vec2::new(10.0, 20.0));
    assert!(g.is_drag());
}

#[test]
fn new_down_clears_previous_up() {
    let mut g = GestureState::default();
    g.pointer_down(Vec2::new(0.0, 0.0));
    g.pointer_up(Vec2::new(0.0, 0.0));
    assert!(g.is_click());
    g.pointer_down(Vec2::new(3.0, 3.0));
    assert_eq!(g.up, None);
    assert!(g.is_drag());
    g.pointer_up(Vec2::new(3.0, 3.0));
    assert!(g.is_click());
}
