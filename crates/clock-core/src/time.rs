// File: crates/clock-core/src/time.rs
// Summary: Time samples, hand angle math, and clock sources (system local time, fixed).

use std::f64::consts::{FRAC_PI_2, PI};

use chrono::{Local, Timelike};

use crate::error::{ClockError, Result};

/// Wall-clock reading taken once per frame.
/// Contract: `hour < 24`, `minute < 60`, `second < 60`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeSample {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeSample {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0, second: 0 };

    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ClockError::InvalidTime { hour, minute, second });
        }
        Ok(Self { hour, minute, second })
    }

    /// Sample any chrono time value. Leap seconds are folded into second 59.
    pub fn from_time<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second().min(59),
        }
    }

    pub fn hour(&self) -> u32 { self.hour }
    pub fn minute(&self) -> u32 { self.minute }
    pub fn second(&self) -> u32 { self.second }

    /// Hour position on the 60-division dial (each hour is 5 units).
    pub fn hour_fraction(&self) -> f64 {
        (self.hour as f64 + self.minute as f64 / 60.0) * 5.0
    }

    pub fn minute_fraction(&self) -> f64 {
        self.minute as f64 + self.second as f64 / 60.0
    }

    /// Whole seconds only: the second hand ticks, it does not sweep.
    pub fn second_fraction(&self) -> f64 {
        self.second as f64
    }

    pub fn angles(&self) -> HandAngles {
        HandAngles {
            hour: dial_angle(self.hour_fraction()),
            minute: dial_angle(self.minute_fraction()),
            second: dial_angle(self.second_fraction()),
        }
    }
}

impl std::fmt::Display for TimeSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Angle in radians for a position `f` on a 60-division dial; `f = 0` points to 12 o'clock.
#[inline]
pub fn dial_angle(f: f64) -> f64 {
    PI * f / 30.0 - FRAC_PI_2
}

/// Per-frame hand angles, radians, screen space (y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Source of the current local time.
pub trait ClockSource {
    fn now(&self) -> TimeSample;
}

/// Local system time through chrono.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> TimeSample {
        TimeSample::from_time(&Local::now())
    }
}

/// Always reports the same sample.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub TimeSample);

impl ClockSource for FixedClock {
    fn now(&self) -> TimeSample {
        self.0
    }
}

