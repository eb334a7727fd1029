// Host-side tests for the centered instance layout.

use billboard_core::{Layout, LayoutError};
use glam::Vec3;

const EPS: f32 = 1e-6;

fn layout() -> Layout {
    Layout::new(Vec3::new(0.0, -0.011, 0.001), 0.03, 4)
}

fn assert_close(a: Vec3, b: Vec3) {
    assert!((a - b).abs().max_element() < EPS, "{:?} != {:?}", a, b);
}

#[test]
fn known_counts_match_closed_form() {
    let l = layout();
    let c = l.center;
    let s = l.spacing;
    let x = |dx: f32| c + Vec3::new(dx, 0.0, 0.0);

    let one = l.positions(1).unwrap();
    assert_eq!(one.len(), 1);
    assert_close(one[0], c);

    let two = l.positions(2).unwrap();
    assert_close(two[0], x(-0.5 * s));
    assert_close(two[1], x(0.5 * s));

    let three = l.positions(3).unwrap();
    assert_close(three[0], x(-s));
    assert_close(three[1], c);
    assert_close(three[2], x(s));

    let four = l.positions(4).unwrap();
    assert_close(four[0], x(-1.5 * s));
    assert_close(four[1], x(-0.5 * s));
    assert_close(four[2], x(0.5 * s));
    assert_close(four[3], x(1.5 * s));
}

#[test]
fn positions_are_symmetric_and_ordered() {
    let l = layout();
    for n in 1..=4 {
        let p = l.positions(n).unwrap();
        for i in 0..n {
            let mirrored = p[n - 1 - i];
            assert_close((p[i] + mirrored) * 0.5, l.center);
            // only X varies
            assert!((p[i].y - l.center.y).abs() < EPS);
            assert!((p[i].z - l.center.z).abs() < EPS);
        }
        for pair in p.windows(2) {
            assert!(pair[0].x < pair[1].x, "slots must increase along X");
            assert!(((pair[1].x - pair[0].x) - l.spacing).abs() < EPS);
        }
    }
}

#[test]
fn spacing_for_two_and_four() {
    let l = layout();
    let two = l.positions(2).unwrap();
    assert!(((two[1].x - two[0].x) - l.spacing).abs() < EPS);
    let four = l.positions(4).unwrap();
    assert!(((four[3].x - four[0].x) - 3.0 * l.spacing).abs() < EPS);
}

#[test]
fn repeated_calls_are_identical() {
    let l = layout();
    for n in 1..=4 {
        assert_eq!(l.positions(n).unwrap(), l.positions(n).unwrap());
    }
}

#[test]
fn out_of_range_counts_are_rejected() {
    let l = layout();
    assert_eq!(l.positions(0), Err(LayoutError::EmptyLayout));
    assert_eq!(
        l.positions(5),
        Err(LayoutError::TooManyInstances { count: 5, max: 4 })
    );
}
