// File: crates/clock-core/tests/style.rs
// Purpose: Style defaults, presets, and host attribute parsing.

use clock_core::style::{self, parse_color, parse_width};
use clock_core::{ClockError, StyleConfig};
use skia_safe::Color;

#[test]
fn defaults_are_black_eight() {
    let s = StyleConfig::default();
    for c in [s.face_color, s.hour_color, s.minute_color, s.second_color] {
        assert_eq!(c, Color::BLACK);
    }
    for w in [s.face_stroke_width, s.hour_width, s.minute_width, s.second_width] {
        assert_eq!(w, 8.0);
    }
}

#[test]
fn attributes_override_defaults() {
    let s = StyleConfig::from_attributes([
        ("faceColor", "#336699"),
        ("hourWidth", "12"),
        ("secondColor", "red"),
        ("secondWidth", "1.5dp"),
    ])
    .expect("valid attributes");

    assert_eq!(s.face_color, Color::from_argb(255, 0x33, 0x66, 0x99));
    assert_eq!(s.hour_width, 12.0);
    assert_eq!(s.second_color, Color::RED);
    assert_eq!(s.second_width, 1.5);
    // untouched
    assert_eq!(s.minute_color, Color::BLACK);
    assert_eq!(s.face_stroke_width, 8.0);
}

#[test]
fn legacy_attribute_names_are_aliases() {
    let s = StyleConfig::from_attributes([
        ("watchColor", "#fff"),
        ("strokeWidth", "4px"),
        ("handHourColor", "#80ff0000"),
        ("handMinuteWidth", "3"),
    ])
    .unwrap();
    assert_eq!(s.face_color, Color::WHITE);
    assert_eq!(s.face_stroke_width, 4.0);
    assert_eq!(s.hour_color, Color::from_argb(0x80, 0xff, 0, 0));
    assert_eq!(s.minute_width, 3.0);
}

#[test]
fn non_positive_widths_pass_through() {
    let s = StyleConfig::from_attributes([("hourWidth", "0"), ("minuteWidth", "-2")]).unwrap();
    assert_eq!(s.hour_width, 0.0);
    assert_eq!(s.minute_width, -2.0);
}

#[test]
fn bad_attributes_are_reported() {
    let err = StyleConfig::from_attributes([("tickColor", "black")]).unwrap_err();
    assert!(matches!(err, ClockError::UnknownAttribute(ref k) if k == "tickColor"));

    let err = StyleConfig::from_attributes([("hourColor", "#12345")]).unwrap_err();
    assert!(matches!(err, ClockError::InvalidColor { .. }), "{err}");

    let err = StyleConfig::from_attributes([("hourWidth", "wide")]).unwrap_err();
    assert!(matches!(err, ClockError::InvalidWidth { .. }), "{err}");

    assert!(parse_width("w", "NaN").is_err());
    assert!(parse_color("c", "#gg0000").is_err());
    assert!(parse_color("c", "chartreuse").is_err());
}

#[test]
fn preset_lookup_falls_back_to_classic() {
    assert_eq!(style::find("NIGHT").name, "night");
    assert_eq!(style::find("blueprint").name, "blueprint");
    assert_eq!(style::find("no-such-preset"), StyleConfig::classic());
    assert_eq!(style::presets().len(), 4);
}

#[test]
fn attributes_layer_on_a_preset() {
    let s = StyleConfig::night().with_attributes([("secondColor", "cyan")]).unwrap();
    assert_eq!(s.name, "night");
    assert_eq!(s.second_color, Color::CYAN);
    assert_eq!(s.hour_width, StyleConfig::night().hour_width);
}
