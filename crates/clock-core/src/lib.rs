// File: crates/clock-core/src/lib.rs
// Summary: Core library entry point; exports the clock renderer, repaint loop and Skia backend.

pub mod error;
pub mod types;
pub mod geometry;
pub mod time;
pub mod style;
pub mod surface;
pub mod skia;
pub mod renderer;
pub mod schedule;
pub mod widget;
pub mod logging;

pub use error::{ClockError, Result};
pub use geometry::{Point, SurfaceGeometry, Transform};
pub use time::{ClockSource, FixedClock, HandAngles, SystemClock, TimeSample};
pub use style::{Stroke, StyleConfig};
pub use surface::{DrawCmd, DrawSurface, RecordingSurface};
pub use skia::{Raster, SkiaSurface};
pub use renderer::{ClockRenderer, GeometryPolicy, RenderOptions, RenderedFrame};
pub use schedule::{Scheduler, TaskHandle, TimerQueue};
pub use widget::{Cadence, ClockWidget, Lifecycle};
pub use logging::{init_logging, LoggingConfig};
