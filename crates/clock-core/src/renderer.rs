// File: crates/clock-core/src/renderer.rs
// Summary: ClockRenderer draws face, ticks and hands onto a DrawSurface; headless PNG/RGBA output via Skia.

use skia_safe as skia;

use crate::geometry::SurfaceGeometry;
use crate::skia::Raster;
use crate::style::StyleConfig;
use crate::surface::DrawSurface;
use crate::time::{HandAngles, TimeSample};
use crate::types::{DEFAULT_PADDING, HEIGHT, TICK_COUNT, TICK_STEP_DEGREES, WIDTH};
use crate::error::Result;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: skia::Color::WHITE,
        }
    }
}

/// When the face layout is (re)computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeometryPolicy {
    /// Recompute from the surface size on every frame; follows resizes.
    #[default]
    PerFrame,
    /// Derive once from the first frame's surface and keep it.
    Cached,
}

/// What a frame drew.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedFrame {
    pub time: TimeSample,
    pub geometry: SurfaceGeometry,
    pub angles: HandAngles,
}

pub struct ClockRenderer {
    style: StyleConfig,
    padding: f32,
    policy: GeometryPolicy,
    cached: Option<SurfaceGeometry>,
    warned_degenerate: bool,
}

impl ClockRenderer {
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            padding: DEFAULT_PADDING,
            policy: GeometryPolicy::default(),
            cached: None,
            warned_degenerate: false,
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self.cached = None;
        self
    }

    pub fn with_policy(mut self, policy: GeometryPolicy) -> Self {
        self.policy = policy;
        self.cached = None;
        self
    }

    pub fn style(&self) -> &StyleConfig { &self.style }
    pub fn padding(&self) -> f32 { self.padding }
    pub fn policy(&self) -> GeometryPolicy { self.policy }

    /// Geometry held by the `Cached` policy, if already derived.
    pub fn cached_geometry(&self) -> Option<SurfaceGeometry> {
        self.cached
    }

    pub fn derive_geometry(&self, width: u32, height: u32) -> SurfaceGeometry {
        SurfaceGeometry::derive(width, height, self.padding)
    }

    /// Draw one frame for `now`. An absent surface skips the frame and leaves the
    /// renderer untouched.
    pub fn render_frame(
        &mut self,
        surface: Option<&mut dyn DrawSurface>,
        now: TimeSample,
    ) -> Option<RenderedFrame> {
        let Some(surface) = surface else {
            log::trace!("no surface; skipping frame at {now}");
            return None;
        };

        let geometry = self.resolve_geometry(surface.size());
        if geometry.is_degenerate() && !self.warned_degenerate {
            log::warn!(
                "surface {}x{} leaves no room for padding {} (radius {}); drawing degenerates",
                geometry.width, geometry.height, geometry.padding, geometry.radius
            );
            self.warned_degenerate = true;
        }

        let angles = self.draw(surface, &geometry, now);
        log::trace!("frame {now} on {}x{}", geometry.width, geometry.height);
        Some(RenderedFrame { time: now, geometry, angles })
    }

    fn resolve_geometry(&mut self, (width, height): (u32, u32)) -> SurfaceGeometry {
        match self.policy {
            GeometryPolicy::PerFrame => self.derive_geometry(width, height),
            GeometryPolicy::Cached => match self.cached {
                Some(g) => g,
                None => {
                    let g = self.derive_geometry(width, height);
                    log::debug!("derived geometry {g:?}");
                    self.cached = Some(g);
                    g
                }
            },
        }
    }

    /// Draw face, ticks and hands; pure with respect to the renderer.
    fn draw(&self, surface: &mut dyn DrawSurface, g: &SurfaceGeometry, now: TimeSample) -> HandAngles {
        draw_face(surface, g, &self.style);
        draw_ticks(surface, g, &self.style);
        let angles = now.angles();
        draw_hands(surface, g, &self.style, &angles);
        angles
    }

    /// Render the face at `now` to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        now: TimeSample,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts, now)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions, now: TimeSample) -> Result<Vec<u8>> {
        let mut raster = self.rasterize(opts, now)?;
        raster.to_png()
    }

    /// Render to unpremultiplied RGBA8: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions, now: TimeSample) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut raster = self.rasterize(opts, now)?;
        raster.to_rgba8()
    }

    fn rasterize(&self, opts: &RenderOptions, now: TimeSample) -> Result<Raster> {
        let mut raster = Raster::new(opts.width, opts.height)?;
        raster.clear(opts.background);
        let g = self.derive_geometry(opts.width.max(0) as u32, opts.height.max(0) as u32);
        raster.draw(|s| self.draw(s, &g, now));
        Ok(raster)
    }
}

impl Default for ClockRenderer {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_face(surface: &mut dyn DrawSurface, g: &SurfaceGeometry, style: &StyleConfig) {
    surface.draw_circle(g.center(), g.face_radius(), style.face_stroke());
}

/// Twelve ticks drawn at 12 o'clock, rotating the surface between them.
/// The twelve rotations add up to a full turn, so the frame ends where it started.
fn draw_ticks(surface: &mut dyn DrawSurface, g: &SurfaceGeometry, style: &StyleConfig) {
    let (rim, inner) = g.top_tick();
    let stroke = style.face_stroke();
    for _ in 0..TICK_COUNT {
        surface.draw_line(rim, inner, stroke);
        surface.rotate(TICK_STEP_DEGREES, g.center());
    }
}

fn draw_hands(surface: &mut dyn DrawSurface, g: &SurfaceGeometry, style: &StyleConfig, a: &HandAngles) {
    let center = g.center();
    surface.draw_line(center, g.hand_endpoint(a.hour, g.hour_hand_radius()), style.hour_stroke());
    surface.draw_line(center, g.hand_endpoint(a.minute, g.hand_radius()), style.minute_stroke());
    surface.draw_line(center, g.hand_endpoint(a.second, g.hand_radius()), style.second_stroke());
}
