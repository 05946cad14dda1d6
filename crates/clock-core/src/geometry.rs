// File: crates/clock-core/src/geometry.rs
// Summary: Surface geometry of the clock face plus lightweight point/transform helpers.

use crate::types::{
    DEFAULT_PADDING, FACE_OUTSET, HAND_TRUNCATION_DIVISOR, HOUR_HAND_TRUNCATION_DIVISOR,
    TICK_COUNT, TICK_LENGTH, TICK_STEP_DEGREES,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Layout of the face on a surface of a given pixel size.
///
/// Contract: a pure function of `(width, height, padding)`. `radius` may be zero or
/// negative when the surface is smaller than twice the padding; drawing then degenerates
/// (hands shrink to or past the center) but never fails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
    pub width: u32,
    pub height: u32,
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub hand_truncation: f32,
    pub hour_hand_truncation: f32,
    pub padding: f32,
}

impl SurfaceGeometry {
    /// Derive the layout. Center and truncations use integer pixel division,
    /// the radius is fractional (`min/2 - padding`).
    pub fn derive(width: u32, height: u32, padding: f32) -> Self {
        let min_dim = width.min(height);
        Self {
            width,
            height,
            center_x: (width / 2) as f32,
            center_y: (height / 2) as f32,
            radius: min_dim as f32 / 2.0 - padding,
            hand_truncation: (min_dim / HAND_TRUNCATION_DIVISOR) as f32,
            hour_hand_truncation: (min_dim / HOUR_HAND_TRUNCATION_DIVISOR) as f32,
            padding,
        }
    }

    /// Geometry with the default padding.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::derive(width, height, DEFAULT_PADDING)
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius.is_nan() || self.radius <= 0.0
    }

    pub fn face_radius(&self) -> f32 {
        self.radius + FACE_OUTSET
    }

    /// Length of the minute and second hands.
    pub fn hand_radius(&self) -> f32 {
        self.radius - self.hand_truncation
    }

    pub fn hour_hand_radius(&self) -> f32 {
        self.radius - self.hand_truncation - self.hour_hand_truncation
    }

    /// The 12 o'clock tick in the unrotated frame: rim point, then inner point.
    pub fn top_tick(&self) -> (Point, Point) {
        let rim = self.center_y - self.radius;
        (
            Point::new(self.center_x, rim),
            Point::new(self.center_x, rim + TICK_LENGTH),
        )
    }

    /// Endpoint of a hand of length `length` at `angle` radians (0 = 3 o'clock, clockwise
    /// in screen space because y grows downward).
    pub fn hand_endpoint(&self, angle: f64, length: f32) -> Point {
        let length = length as f64;
        Point::new(
            (self.center_x as f64 + angle.cos() * length) as f32,
            (self.center_y as f64 + angle.sin() * length) as f32,
        )
    }

    /// All tick segments in device space, clockwise from 12 o'clock.
    pub fn tick_marks(&self) -> Vec<(Point, Point)> {
        let (rim, inner) = self.top_tick();
        (0..TICK_COUNT)
            .map(|i| {
                let t = Transform::rotation_about(TICK_STEP_DEGREES * i as f32, self.center());
                (t.apply(rim), t.apply(inner))
            })
            .collect()
    }
}

/// 2D affine transform `[a c e; b d f]`, mapping `(x, y)` to
/// `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    /// Rotation by `degrees` (clockwise on a y-down surface) about `pivot`.
    pub fn rotation_about(degrees: f32, pivot: Point) -> Self {
        let (sin, cos) = (degrees as f64).to_radians().sin_cos();
        let (sin, cos) = (sin as f32, cos as f32);
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: pivot.x - cos * pivot.x + sin * pivot.y,
            f: pivot.y - sin * pivot.x - cos * pivot.y,
        }
    }

    /// `self` applied after `first`, i.e. `self.apply(first.apply(p))`.
    pub fn after(&self, first: &Transform) -> Self {
        Self {
            a: self.a * first.a + self.c * first.b,
            b: self.b * first.a + self.d * first.b,
            c: self.a * first.c + self.c * first.d,
            d: self.b * first.c + self.d * first.d,
            e: self.a * first.e + self.c * first.f + self.e,
            f: self.b * first.e + self.d * first.f + self.f,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    pub fn approx_eq(&self, other: &Transform, eps: f32) -> bool {
        [
            self.a - other.a,
            self.b - other.b,
            self.c - other.c,
            self.d - other.d,
            self.e - other.e,
            self.f - other.f,
        ]
        .iter()
        .all(|v| v.abs() <= eps)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
