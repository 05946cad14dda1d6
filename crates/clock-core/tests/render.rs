// File: crates/clock-core/tests/render.rs
// Purpose: Frame drawing against a recording surface (draw order, coordinates, styles).

use clock_core::{
    ClockRenderer, DrawCmd, GeometryPolicy, Point, RecordingSurface, StyleConfig, TimeSample,
    Transform,
};
use skia_safe::Color;

fn t(h: u32, m: u32, s: u32) -> TimeSample {
    TimeSample::new(h, m, s).expect("valid time")
}

fn hands(surface: &RecordingSurface) -> Vec<(Point, Point)> {
    // Face ticks come first; the last three lines are hour, minute, second.
    let lines = surface.lines().map(|(a, b, _)| (a, b)).collect::<Vec<_>>();
    lines[lines.len() - 3..].to_vec()
}

#[test]
fn three_oclock_end_to_end() {
    let mut renderer = ClockRenderer::new(StyleConfig::default());
    let mut surface = RecordingSurface::new(400, 400);

    let frame = renderer
        .render_frame(Some(&mut surface), t(3, 0, 0))
        .expect("frame drawn");
    assert_eq!(frame.geometry.radius, 100.0);
    assert!(frame.angles.hour.abs() < 1e-6);

    let h = hands(&surface);
    let (from, to) = h[0];
    assert_eq!(from, Point::new(200.0, 200.0));
    // (100 - 20 - 57) to the right of center
    assert!((to.x - 223.0).abs() < 0.5, "{to:?}");
    assert!((to.y - 200.0).abs() < 0.5, "{to:?}");

    // Minute and second hands at 12 o'clock, 80 long
    for (_, end) in &h[1..] {
        assert!((end.x - 200.0).abs() < 0.5);
        assert!((end.y - 120.0).abs() < 0.5);
    }
}

#[test]
fn draw_order_face_ticks_hands() {
    let mut renderer = ClockRenderer::default();
    let mut surface = RecordingSurface::new(400, 400);
    renderer.render_frame(Some(&mut surface), t(10, 10, 30));

    let cmds = surface.cmds();
    // circle + 12 * (line + rotate) + 3 hands
    assert_eq!(cmds.len(), 1 + 24 + 3);
    match cmds[0] {
        DrawCmd::Circle { center, radius, .. } => {
            assert_eq!(center, Point::new(200.0, 200.0));
            assert_eq!(radius, 120.0);
        }
        ref other => panic!("expected face circle first, got {other:?}"),
    }
    for pair in cmds[1..25].chunks(2) {
        assert!(matches!(pair[0], DrawCmd::Line { .. }));
        assert!(matches!(pair[1], DrawCmd::Rotate { degrees, .. } if degrees == 30.0));
    }
    assert_eq!(surface.total_rotation(), 360.0);
    assert!(surface.transform().approx_eq(&Transform::IDENTITY, 1e-3));
}

#[test]
fn ticks_land_on_hour_positions_and_hands_are_unrotated() {
    let mut renderer = ClockRenderer::default();
    let mut surface = RecordingSurface::new(400, 400);
    let frame = renderer.render_frame(Some(&mut surface), t(0, 15, 0)).unwrap();

    let lines = surface.lines().map(|(a, b, _)| (a, b)).collect::<Vec<_>>();
    let expected = frame.geometry.tick_marks();
    for (got, want) in lines[..12].iter().zip(expected.iter()) {
        assert!(got.0.distance(want.0) < 1e-2, "{got:?} vs {want:?}");
        assert!(got.1.distance(want.1) < 1e-2, "{got:?} vs {want:?}");
    }

    // After a full turn the minute hand at :15 must point right, not be left rotated.
    let (_, minute_end) = lines[13];
    assert!((minute_end.x - 280.0).abs() < 0.5, "{minute_end:?}");
    assert!((minute_end.y - 200.0).abs() < 0.5, "{minute_end:?}");
}

#[test]
fn strokes_come_from_style() {
    let style = StyleConfig {
        face_color: Color::BLUE,
        face_stroke_width: 3.0,
        hour_color: Color::RED,
        hour_width: 9.0,
        minute_color: Color::GREEN,
        minute_width: 5.0,
        second_color: Color::YELLOW,
        second_width: 1.0,
        ..StyleConfig::default()
    };
    let mut renderer = ClockRenderer::new(style);
    let mut surface = RecordingSurface::new(500, 500);
    renderer.render_frame(Some(&mut surface), t(1, 2, 3));

    let (_, _, face) = surface.circles().next().unwrap();
    assert_eq!(face, style.face_stroke());

    let strokes = surface.lines().map(|(_, _, s)| s).collect::<Vec<_>>();
    assert!(strokes[..12].iter().all(|s| *s == style.face_stroke()));
    assert_eq!(strokes[12], style.hour_stroke());
    assert_eq!(strokes[13], style.minute_stroke());
    assert_eq!(strokes[14], style.second_stroke());
}

#[test]
fn absent_surface_is_a_noop() {
    let mut renderer = ClockRenderer::default().with_policy(GeometryPolicy::Cached);
    assert!(renderer.render_frame(None, t(12, 0, 0)).is_none());
    assert!(renderer.cached_geometry().is_none());
}

#[test]
fn cached_policy_keeps_first_geometry() {
    let mut renderer = ClockRenderer::default().with_policy(GeometryPolicy::Cached);
    let mut surface = RecordingSurface::new(400, 400);
    let first = renderer.render_frame(Some(&mut surface), t(1, 0, 0)).unwrap();

    surface.clear();
    surface.resize(800, 600);
    let second = renderer.render_frame(Some(&mut surface), t(1, 0, 1)).unwrap();
    assert_eq!(first.geometry, second.geometry);
    assert_eq!(renderer.cached_geometry(), Some(first.geometry));
}

#[test]
fn per_frame_policy_follows_resize() {
    let mut renderer = ClockRenderer::default();
    let mut surface = RecordingSurface::new(400, 400);
    let first = renderer.render_frame(Some(&mut surface), t(1, 0, 0)).unwrap();

    surface.clear();
    surface.resize(800, 600);
    let second = renderer.render_frame(Some(&mut surface), t(1, 0, 0)).unwrap();
    assert_eq!(first.geometry.radius, 100.0);
    assert_eq!(second.geometry.radius, 200.0);
    assert_eq!(second.geometry.center(), Point::new(400.0, 300.0));
    assert!(renderer.cached_geometry().is_none());
}

#[test]
fn degenerate_surface_still_draws() {
    let mut renderer = ClockRenderer::default();
    let mut surface = RecordingSurface::new(120, 120);
    let frame = renderer.render_frame(Some(&mut surface), t(9, 45, 30)).unwrap();
    assert!(frame.geometry.is_degenerate());
    assert_eq!(surface.lines().count(), 15);
    assert!(surface.lines().all(|(a, b, _)| a.x.is_finite() && b.y.is_finite()));
}

#[test]
fn custom_padding() {
    let mut renderer = ClockRenderer::default().with_padding(20.0);
    let mut surface = RecordingSurface::new(300, 300);
    let frame = renderer.render_frame(Some(&mut surface), t(0, 0, 0)).unwrap();
    assert_eq!(frame.geometry.radius, 130.0);
    assert_eq!(renderer.derive_geometry(300, 300), frame.geometry);
}
