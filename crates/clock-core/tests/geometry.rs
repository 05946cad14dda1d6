// File: crates/clock-core/tests/geometry.rs
// Purpose: Surface geometry derivation and tick placement.

use clock_core::{Point, SurfaceGeometry, Transform};

#[test]
fn derive_400_square_with_default_padding() {
    let g = SurfaceGeometry::from_size(400, 400);
    assert_eq!(g.padding, 100.0);
    assert_eq!(g.center_x, 200.0);
    assert_eq!(g.center_y, 200.0);
    assert_eq!(g.radius, 100.0);
    assert_eq!(g.hand_truncation, 20.0);
    // 400 / 7 truncates to 57
    assert_eq!(g.hour_hand_truncation, 57.0);
    assert_eq!(g.hour_hand_radius(), 23.0);
    assert_eq!(g.hand_radius(), 80.0);
    assert_eq!(g.face_radius(), 120.0);
}

#[test]
fn radius_follows_shorter_side() {
    for &(w, h) in &[(640u32, 480u32), (480, 640), (1024, 300), (301, 999)] {
        let g = SurfaceGeometry::derive(w, h, 100.0);
        let want = w.min(h) as f32 / 2.0 - 100.0;
        assert_eq!(g.radius, want, "{w}x{h}");
        assert!(g.radius > 0.0);
        assert_eq!(g.center_x, (w / 2) as f32);
        assert_eq!(g.center_y, (h / 2) as f32);
    }
}

#[test]
fn derivation_is_idempotent() {
    let a = SurfaceGeometry::derive(733, 517, 100.0);
    let b = SurfaceGeometry::derive(733, 517, 100.0);
    assert_eq!(a, b);
    assert_eq!(a.radius.to_bits(), b.radius.to_bits());
}

#[test]
fn small_surface_is_degenerate_not_an_error() {
    let g = SurfaceGeometry::derive(150, 150, 100.0);
    assert_eq!(g.radius, -25.0);
    assert!(g.is_degenerate());

    let zero = SurfaceGeometry::derive(0, 0, 100.0);
    assert!(zero.is_degenerate());
    assert_eq!(zero.hand_truncation, 0.0);
}

#[test]
fn tick_marks_sit_on_twelve_hour_positions() {
    let g = SurfaceGeometry::derive(400, 400, 100.0);
    let ticks = g.tick_marks();
    assert_eq!(ticks.len(), 12);

    // 12, 3, 6 and 9 o'clock rims
    let expect = [
        (0, Point::new(200.0, 100.0)),
        (3, Point::new(300.0, 200.0)),
        (6, Point::new(200.0, 300.0)),
        (9, Point::new(100.0, 200.0)),
    ];
    for (i, want) in expect {
        assert!(ticks[i].0.distance(want) < 1e-3, "tick {i}: {:?}", ticks[i].0);
    }

    for (rim, inner) in &ticks {
        assert!((rim.distance(g.center()) - 100.0).abs() < 1e-3);
        assert!((inner.distance(g.center()) - 90.0).abs() < 1e-3);
        assert!((rim.distance(*inner) - 10.0).abs() < 1e-3);
    }
}

#[test]
fn twelve_tick_rotations_close_the_circle() {
    let pivot = Point::new(200.0, 200.0);
    let step = Transform::rotation_about(30.0, pivot);
    let mut t = Transform::IDENTITY;
    for _ in 0..12 {
        t = t.after(&step);
    }
    assert!(t.approx_eq(&Transform::IDENTITY, 1e-3), "{t:?}");
}
