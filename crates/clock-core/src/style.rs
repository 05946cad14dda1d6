// File: crates/clock-core/src/style.rs
// Summary: Stroke colors/widths for the face and hands, presets, and host attribute parsing.

use skia_safe as skia;

use crate::error::{ClockError, Result};

/// Color and width of one stroked primitive. Passed by value into every draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: skia::Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Immutable style of a clock face.
/// Contract: values are passed through as given; the drawing surface clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleConfig {
    pub name: &'static str,
    pub face_color: skia::Color,
    pub face_stroke_width: f32,
    pub hour_color: skia::Color,
    pub hour_width: f32,
    pub minute_color: skia::Color,
    pub minute_width: f32,
    pub second_color: skia::Color,
    pub second_width: f32,
}

pub const DEFAULT_STROKE_WIDTH: f32 = 8.0;

impl StyleConfig {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            face_color: skia::Color::BLACK,
            face_stroke_width: DEFAULT_STROKE_WIDTH,
            hour_color: skia::Color::BLACK,
            hour_width: DEFAULT_STROKE_WIDTH,
            minute_color: skia::Color::BLACK,
            minute_width: DEFAULT_STROKE_WIDTH,
            second_color: skia::Color::BLACK,
            second_width: DEFAULT_STROKE_WIDTH,
        }
    }

    pub fn night() -> Self {
        Self {
            name: "night",
            face_color: skia::Color::from_argb(255, 180, 180, 190),
            face_stroke_width: 6.0,
            hour_color: skia::Color::from_argb(255, 235, 235, 245),
            hour_width: 10.0,
            minute_color: skia::Color::from_argb(255, 235, 235, 245),
            minute_width: 6.0,
            second_color: skia::Color::from_argb(255, 255, 230, 70),
            second_width: 2.0,
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            face_color: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            face_stroke_width: 10.0,
            hour_color: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            hour_width: 12.0,
            minute_color: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            minute_width: 8.0,
            second_color: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            second_width: 4.0,
        }
    }

    pub fn blueprint() -> Self {
        // Solarized blue on base3-ish paper
        Self {
            name: "blueprint",
            face_color: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
            face_stroke_width: 4.0,
            hour_color: skia::Color::from_argb(255, 0x07, 0x36, 0x42),
            hour_width: 8.0,
            minute_color: skia::Color::from_argb(255, 0x07, 0x36, 0x42),
            minute_width: 5.0,
            second_color: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f),
            second_width: 2.0,
        }
    }

    pub fn face_stroke(&self) -> Stroke { Stroke::new(self.face_color, self.face_stroke_width) }
    pub fn hour_stroke(&self) -> Stroke { Stroke::new(self.hour_color, self.hour_width) }
    pub fn minute_stroke(&self) -> Stroke { Stroke::new(self.minute_color, self.minute_width) }
    pub fn second_stroke(&self) -> Stroke { Stroke::new(self.second_color, self.second_width) }

    /// Build a style from host key/value attributes on top of the classic defaults.
    ///
    /// Recognized keys (aliases in parentheses): `faceColor` (`watchColor`),
    /// `faceStrokeWidth` (`strokeWidth`), `hourColor` (`handHourColor`),
    /// `hourWidth` (`handHourWidth`), and the same pairs for `minute` and `second`.
    pub fn from_attributes<'a, I>(attrs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::classic().with_attributes(attrs)
    }

    /// Override fields of `self` from host attributes. Later keys win.
    pub fn with_attributes<'a, I>(mut self, attrs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in attrs {
            let key = key.trim();
            match key {
                "faceColor" | "watchColor" => self.face_color = parse_color(key, value)?,
                "faceStrokeWidth" | "strokeWidth" => self.face_stroke_width = parse_width(key, value)?,
                "hourColor" | "handHourColor" => self.hour_color = parse_color(key, value)?,
                "hourWidth" | "handHourWidth" => self.hour_width = parse_width(key, value)?,
                "minuteColor" | "handMinuteColor" => self.minute_color = parse_color(key, value)?,
                "minuteWidth" | "handMinuteWidth" => self.minute_width = parse_width(key, value)?,
                "secondColor" | "handSecondColor" => self.second_color = parse_color(key, value)?,
                "secondWidth" | "handSecondWidth" => self.second_width = parse_width(key, value)?,
                _ => return Err(ClockError::UnknownAttribute(key.to_string())),
            }
        }
        Ok(self)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in style presets.
pub fn presets() -> Vec<StyleConfig> {
    vec![
        StyleConfig::classic(),
        StyleConfig::night(),
        StyleConfig::high_contrast(),
        StyleConfig::blueprint(),
    ]
}

/// Find a preset by its `name`, falling back to classic.
pub fn find(name: &str) -> StyleConfig {
    for s in presets() { if s.name.eq_ignore_ascii_case(name) { return s; } }
    StyleConfig::classic()
}

/// Parse `#RGB`, `#RRGGBB`, `#AARRGGBB` or a basic color name.
pub fn parse_color(key: &str, value: &str) -> Result<skia::Color> {
    let invalid = || ClockError::InvalidColor { key: key.to_string(), value: value.to_string() };
    let v = value.trim();

    if let Some(hex) = v.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let n = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        return match hex.len() {
            3 => {
                // #RGB expands each nibble
                let (r, g, b) = ((n >> 8) & 0xf, (n >> 4) & 0xf, n & 0xf);
                Ok(skia::Color::from_argb(255, (r * 17) as u8, (g * 17) as u8, (b * 17) as u8))
            }
            6 => Ok(skia::Color::new(0xff00_0000 | n)),
            8 => Ok(skia::Color::new(n)),
            _ => Err(invalid()),
        };
    }

    let named = match v.to_ascii_lowercase().as_str() {
        "black" => skia::Color::BLACK,
        "white" => skia::Color::WHITE,
        "gray" | "grey" => skia::Color::GRAY,
        "red" => skia::Color::RED,
        "green" => skia::Color::GREEN,
        "blue" => skia::Color::BLUE,
        "yellow" => skia::Color::YELLOW,
        "cyan" => skia::Color::CYAN,
        "magenta" => skia::Color::MAGENTA,
        "transparent" => skia::Color::TRANSPARENT,
        _ => return Err(invalid()),
    };
    Ok(named)
}

/// Parse a stroke width such as `8`, `2.5px` or `4dp` (dp maps 1:1 to pixels).
pub fn parse_width(key: &str, value: &str) -> Result<f32> {
    let v = value.trim();
    let number = v
        .strip_suffix("px")
        .or_else(|| v.strip_suffix("dp"))
        .unwrap_or(v)
        .trim();
    number
        .parse::<f32>()
        .ok()
        .filter(|w| w.is_finite())
        .ok_or_else(|| ClockError::InvalidWidth { key: key.to_string(), value: value.to_string() })
}
