// Host-side tests for billboard picking and button resolution.

use billboard_core::*;
use glam::{Quat, Vec2, Vec3};

#[test]
fn every_pick_position_resolves_to_its_pair() {
    let k = 5;
    for p in 0..(2 * k) {
        let expected = (p as u32 + 1 + 1) / 2; // ceil((p + 1) / 2)
        assert_eq!(resolve_button(p), ButtonId(expected), "position {}", p);
    }
    assert_eq!(resolve_button(0), ButtonId(1));
    assert_eq!(resolve_button(1), ButtonId(1));
    assert_eq!(resolve_button(8), ButtonId(5));
    assert_eq!(resolve_button(9), ButtonId(5));
}

#[test]
fn ray_quad_hits_inside_and_misses_outside() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z);
    let size = Vec2::splat(0.2);
    let t = ray_quad(&ray, Vec3::ZERO, Quat::IDENTITY, size).expect("hit");
    assert!((t - 1.0).abs() < 1e-5);

    let off = Ray::new(Vec3::new(0.2, 0.0, 1.0), Vec3::NEG_Z);
    assert!(ray_quad(&off, Vec3::ZERO, Quat::IDENTITY, size).is_none());

    // quad behind the origin
    let away = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Z);
    assert!(ray_quad(&away, Vec3::ZERO, Quat::IDENTITY, size).is_none());

    // edge-on quad cannot be hit
    let edge = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    let side = Ray::new(Vec3::new(0.5, 0.0, 1.0), Vec3::NEG_Z);
    assert!(ray_quad(&side, Vec3::ZERO, edge, size).is_none());
}

#[test]
fn ray_quad_is_double_sided() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Z);
    assert!(ray_quad(&ray, Vec3::ZERO, Quat::IDENTITY, Vec2::splat(0.1)).is_some());
}

#[test]
fn ray_sphere_from_inside_reports_exit() {
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    let t = ray_sphere(&ray, Vec3::ZERO, 2.0).expect("hit");
    assert!((t - 2.0).abs() < 1e-5);
    let miss = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
    assert!(ray_sphere(&miss, Vec3::ZERO, 1.0).is_none());
}

#[test]
fn nearest_hit_prefers_smallest_t_then_first() {
    assert_eq!(nearest_hit(vec![(0, 2.0), (1, 1.0), (2, 3.0)]), Some((1, 1.0)));
    assert_eq!(nearest_hit(vec![(0, 1.0), (1, 1.0)]), Some((0, 1.0)));
    assert_eq!(nearest_hit(Vec::<(usize, f32)>::new()), None);
}

fn panel() -> Panel {
    let anchors = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.01, 0.0),
        Vec3::new(0.0, 0.02, 0.0),
    ];
    Panel::new(0, &anchors, 0.0018, 0.0024)
}

fn ray_at(x: f32, y: f32) -> Ray {
    Ray::new(Vec3::new(x, y, 1.0), Vec3::NEG_Z)
}

#[test]
fn panel_lists_buttons_before_their_rings() {
    let p = panel();
    let kinds: Vec<_> = p.markers().iter().map(|m| (m.kind, m.button)).collect();
    assert_eq!(kinds[0], (MarkerKind::Button, Some(ButtonId(1))));
    assert_eq!(kinds[1], (MarkerKind::Ring, Some(ButtonId(1))));
    assert_eq!(kinds[4], (MarkerKind::Button, Some(ButtonId(3))));
    assert_eq!(kinds[5], (MarkerKind::Ring, Some(ButtonId(3))));
    assert_eq!(p.button_count(), 3);
}

#[test]
fn button_and_ring_hits_resolve_to_the_same_button() {
    let p = panel();
    let owner = |_slot: usize| Some(Vec3::ZERO);
    // dead center: both planes hit, button comes first
    assert_eq!(p.hit_test(&ray_at(0.0, 0.01), owner), Some(ButtonId(2)));
    // outside the button but inside the ring overhang
    assert_eq!(p.hit_test(&ray_at(0.001, 0.01), owner), Some(ButtonId(2)));
    assert_eq!(p.hit_test(&ray_at(0.0, 0.02), owner), Some(ButtonId(3)));
    assert_eq!(p.hit_test(&ray_at(0.0, 0.05), owner), None);
}

#[test]
fn markers_follow_their_owner() {
    let p = panel();
    let owner = |_slot: usize| Some(Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(p.hit_test(&ray_at(0.0, 0.0), owner), None);
    assert_eq!(p.hit_test(&ray_at(1.0, 0.0), owner), Some(ButtonId(1)));
}

#[test]
fn missing_owner_or_empty_panel_is_no_hit() {
    let p = panel();
    assert_eq!(p.hit_test(&ray_at(0.0, 0.0), |_| None), None);

    let empty = Panel::new(0, &[], 0.0018, 0.0024);
    assert_eq!(empty.hit_test(&ray_at(0.0, 0.0), |_| Some(Vec3::ZERO)), None);
}

#[test]
fn closed_panel_is_not_pickable_until_reopened() {
    let mut p = panel();
    let owner = |_slot: usize| Some(Vec3::ZERO);
    p.close();
    assert_eq!(p.state(), PanelState::Hidden);
    assert!(p.markers().iter().all(|m| !m.attached));
    assert_eq!(p.hit_test(&ray_at(0.0, 0.0), owner), None);

    p.open();
    assert_eq!(p.state(), PanelState::Visible);
    assert_eq!(p.hit_test(&ray_at(0.0, 0.0), owner), Some(ButtonId(1)));
}

#[test]
fn decorations_are_never_picked() {
    let mut p = panel();
    let idx = p.add_decorative(0, Vec3::new(0.5, 0.5, 0.0), Vec2::splat(0.1));
    assert!(!p.markers()[idx].attached);
    p.attach_decorations();
    assert!(p.markers()[idx].attached);
    assert_eq!(p.hit_test(&ray_at(0.5, 0.5), |_| Some(Vec3::ZERO)), None);

    // closing the panel leaves decorations alone
    p.close();
    assert!(p.markers()[idx].attached);
}

#[test]
fn orient_only_touches_attached_markers() {
    let mut p = panel();
    let idx = p.add_decorative(0, Vec3::ZERO, Vec2::splat(0.1));
    let rot = Quat::from_rotation_y(0.7);
    p.orient(rot);
    assert!(p.markers()[0].rotation.abs_diff_eq(rot, 1e-6));
    assert!(p.markers()[idx].rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
}

#[test]
fn rotated_billboard_is_hit_along_its_normal() {
    let mut p = panel();
    let rot = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    p.orient(rot);
    // quad now faces +X, so a ray along -X through the first anchor hits it
    let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::NEG_X);
    assert_eq!(p.hit_test(&ray, |_| Some(Vec3::ZERO)), Some(ButtonId(1)));
    assert_eq!(p.hit_test(&ray_at(0.5, 0.0), |_| Some(Vec3::ZERO)), None);
}
