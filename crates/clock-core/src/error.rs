// File: crates/clock-core/src/error.rs
// Summary: Library error type for the fallible edges (time input, style attributes, raster output).

use thiserror::Error;

pub type Result<T, E = ClockError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("invalid time {hour:02}:{minute:02}:{second:02} (expected 0-23, 0-59, 0-59)")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("unknown style attribute `{0}`")]
    UnknownAttribute(String),

    #[error("invalid color `{value}` for `{key}`")]
    InvalidColor { key: String, value: String },

    #[error("invalid stroke width `{value}` for `{key}`")]
    InvalidWidth { key: String, value: String },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
