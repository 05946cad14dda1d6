// File: crates/clock-core/src/skia.rs
// Summary: Skia backend: DrawSurface adapter over a Canvas and an owned CPU raster target.

use skia_safe as skia;

use crate::error::{ClockError, Result};
use crate::geometry::Point;
use crate::style::Stroke;
use crate::surface::DrawSurface;

/// Draws onto a borrowed Skia canvas of a known pixel size.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    width: u32,
    height: u32,
    paint: skia::Paint,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, width: u32, height: u32) -> Self {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        Self { canvas, width, height, paint }
    }

    fn apply(&mut self, stroke: Stroke) -> &skia::Paint {
        self.paint.set_color(stroke.color);
        // Skia ignores negative widths; clamp to a hairline instead.
        self.paint.set_stroke_width(stroke.width.max(0.0));
        &self.paint
    }
}

impl DrawSurface for SkiaSurface<'_> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_circle(&mut self, center: Point, radius: f32, stroke: Stroke) {
        let canvas = self.canvas;
        let paint = self.apply(stroke);
        // Negative radii only come from degenerate geometry; draw the magnitude.
        canvas.draw_circle((center.x, center.y), radius.abs(), paint);
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let canvas = self.canvas;
        let paint = self.apply(stroke);
        canvas.draw_line((from.x, from.y), (to.x, to.y), paint);
    }

    fn rotate(&mut self, degrees: f32, pivot: Point) {
        self.canvas.rotate(degrees, Some(skia::Point::new(pivot.x, pivot.y)));
    }
}

/// Owned N32 premultiplied raster surface.
pub struct Raster {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl Raster {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ClockError::Surface { width, height })?;
        Ok(Self { surface, width, height })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    /// Clears to `color` and resets the canvas transform.
    pub fn clear(&mut self, color: skia::Color) {
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.clear(color);
    }

    /// Run `f` with a DrawSurface over this raster's canvas.
    pub fn draw<R>(&mut self, f: impl FnOnce(&mut SkiaSurface<'_>) -> R) -> R {
        let (w, h) = (self.width.max(0) as u32, self.height.max(0) as u32);
        let canvas = self.surface.canvas();
        let mut target = SkiaSurface::new(canvas, w, h);
        f(&mut target)
    }

    pub fn to_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ClockError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Read back unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.width.max(0) as u32, self.height.max(0) as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ClockError::Surface { width: self.width, height: self.height });
        }
        Ok((pixels, w, h, stride))
    }
}
