// File: crates/clock-core/src/types.rs
// Summary: Shared constants (surface size, face layout, repaint cadence).

use std::time::Duration;

/// Default surface width in pixels.
pub const WIDTH: i32 = 400;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Inset between the surface's shorter edge and the tick ring, in pixels.
pub const DEFAULT_PADDING: f32 = 100.0;

/// The face circle is drawn this far outside the tick ring.
pub const FACE_OUTSET: f32 = 20.0;

/// Length of a tick mark, measured from the tick ring toward the center.
pub const TICK_LENGTH: f32 = 10.0;
/// Number of tick marks on the face.
pub const TICK_COUNT: u32 = 12;
/// Rotation applied between two consecutive ticks, in degrees.
pub const TICK_STEP_DEGREES: f32 = 360.0 / TICK_COUNT as f32;

/// Divisor of the shorter side giving the truncation shared by all hands.
pub const HAND_TRUNCATION_DIVISOR: u32 = 20;
/// Divisor of the shorter side giving the extra truncation of the hour hand.
pub const HOUR_HAND_TRUNCATION_DIVISOR: u32 = 7;

/// Delayed re-invocation used by the legacy dual-scheduling cadence.
pub const LEGACY_REPAINT_DELAY: Duration = Duration::from_millis(500);
/// Interval of the default fixed cadence.
pub const DEFAULT_REPAINT_INTERVAL: Duration = Duration::from_millis(1000);
