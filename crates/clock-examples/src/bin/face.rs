// File: crates/clock-examples/src/bin/face.rs
// Summary: Minimal example that renders the default clock face at 10:10:30 to PNG.

use clock_core::{ClockRenderer, RenderOptions, StyleConfig, TimeSample};

fn main() {
    let renderer = ClockRenderer::new(StyleConfig::default());
    let now = TimeSample::new(10, 10, 30).expect("valid time");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_face.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    renderer.render_to_png(&opts, now, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
