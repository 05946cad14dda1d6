// File: crates/clock-core/src/surface.rs
// Summary: Drawing surface contract plus a recording surface that produces a draw command list.

use crate::geometry::{Point, Transform};
use crate::style::Stroke;

/// Host-provided 2D drawing target.
///
/// Implementations must accept zero or negative radii and zero-length lines without
/// failing. `rotate` applies a persistent transform to every later draw in the frame.
pub trait DrawSurface {
    /// Current pixel size `(width, height)`.
    fn size(&self) -> (u32, u32);
    fn draw_circle(&mut self, center: Point, radius: f32, stroke: Stroke);
    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke);
    fn rotate(&mut self, degrees: f32, pivot: Point);
}

/// Renderer-agnostic draw command. Coordinates are in device space, i.e. with the
/// rotation active at record time already applied.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle { center: Point, radius: f32, stroke: Stroke },
    Line { from: Point, to: Point, stroke: Stroke },
    Rotate { degrees: f32, pivot: Point },
}

/// Records draw calls instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    transform: Transform,
    total_rotation: f32,
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            transform: Transform::IDENTITY,
            total_rotation: 0.0,
            cmds: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Drops recorded commands and resets the transform. Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.cmds.clear();
        self.transform = Transform::IDENTITY;
        self.total_rotation = 0.0;
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Sum of all rotation angles issued since the last `clear`, in degrees.
    pub fn total_rotation(&self) -> f32 {
        self.total_rotation
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Stroke)> + '_ {
        self.cmds.iter().filter_map(|c| match *c {
            DrawCmd::Line { from, to, stroke } => Some((from, to, stroke)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f32, Stroke)> + '_ {
        self.cmds.iter().filter_map(|c| match *c {
            DrawCmd::Circle { center, radius, stroke } => Some((center, radius, stroke)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_circle(&mut self, center: Point, radius: f32, stroke: Stroke) {
        // Rotations preserve radii.
        let center = self.transform.apply(center);
        self.cmds.push(DrawCmd::Circle { center, radius, stroke });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let from = self.transform.apply(from);
        let to = self.transform.apply(to);
        self.cmds.push(DrawCmd::Line { from, to, stroke });
    }

    fn rotate(&mut self, degrees: f32, pivot: Point) {
        self.transform = self.transform.after(&Transform::rotation_about(degrees, pivot));
        self.total_rotation += degrees;
        self.cmds.push(DrawCmd::Rotate { degrees, pivot });
    }
}
