// File: crates/window-demo/src/main.rs
// Summary: Windowed demo running ClockWidget on a TimerQueue; frames are rendered with Skia and
// blitted via winit + softbuffer.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use clock_core::style::{self, parse_color};
use clock_core::{
    init_logging, Cadence, ClockRenderer, ClockWidget, GeometryPolicy, LoggingConfig, Raster,
    SystemClock, TaskHandle, TimerQueue,
};
use skia_safe as skia;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

#[derive(Debug, Parser)]
#[command(name = "clock-window-demo", about = "Live analog clock window")]
struct Args {
    /// Repaint interval in milliseconds.
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Use the delayed-plus-immediate repaint cadence (repaints as fast as the loop allows).
    #[arg(long)]
    legacy_cadence: bool,

    /// Derive the face layout once instead of following window resizes.
    #[arg(long)]
    cached_geometry: bool,

    /// Style preset: classic, night, high-contrast, blueprint.
    #[arg(long, default_value = "classic")]
    preset: String,

    #[arg(long, default_value = "white")]
    background: String,

    /// -v for debug, -vv for trace logging.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct App {
    window: Window,
    surface: softbuffer::Surface,
    widget: ClockWidget<SystemClock>,
    timers: TimerQueue,
    origin: Instant,
    due: Vec<TaskHandle>,
    front: Option<Raster>,
    background: skia::Color,
}

impl App {
    /// Collect every task due by now; true if a redraw is needed.
    fn poll_timers(&mut self) -> bool {
        let fired = self.timers.advance_to(self.origin.elapsed());
        self.due.extend(fired);
        !self.due.is_empty()
    }

    fn control_flow(&self) -> ControlFlow {
        match self.timers.next_deadline() {
            Some(d) => ControlFlow::WaitUntil(self.origin + d),
            None => ControlFlow::Wait,
        }
    }

    fn redraw(&mut self) -> Result<()> {
        let size = self.window.inner_size();
        let (w, h) = (size.width.max(1), size.height.max(1));

        // Each delivered task gets a fresh canvas; keep the last frame actually drawn.
        for handle in std::mem::take(&mut self.due) {
            let mut scratch = Raster::new(w as i32, h as i32)?;
            scratch.clear(self.background);
            let widget = &mut self.widget;
            let timers = &mut self.timers;
            if scratch.draw(|s| widget.on_timer(handle, Some(s), timers)).is_some() {
                self.front = Some(scratch);
            }
        }

        let Some(front) = self.front.as_mut() else { return Ok(()) };
        let (rgba, fw, fh, stride) = front.to_rgba8()?;

        self.surface
            .resize(
                NonZeroU32::new(w).context("zero window width")?,
                NonZeroU32::new(h).context("zero window height")?,
            )
            .map_err(|e| anyhow!("resize surface: {e:?}"))?;
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("surface buffer: {e:?}"))?;

        // A resize may land between frames; copy the overlapping region.
        buffer.fill(0x00ff_ffff);
        for y in 0..fh.min(h) as usize {
            for x in 0..fw.min(w) as usize {
                let px = &rgba[y * stride + x * 4..][..4];
                let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
                // softbuffer pixels are 0RGB
                buffer[y * w as usize + x] = (r << 16) | (g << 8) | b;
            }
        }
        buffer.present().map_err(|e| anyhow!("present: {e:?}"))?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::from_verbosity(args.verbose));

    let policy = if args.cached_geometry { GeometryPolicy::Cached } else { GeometryPolicy::PerFrame };
    let cadence = if args.legacy_cadence {
        Cadence::Legacy
    } else {
        Cadence::Fixed(Duration::from_millis(args.interval_ms.max(1)))
    };
    let renderer = ClockRenderer::new(style::find(&args.preset)).with_policy(policy);
    let widget = ClockWidget::with_system_clock(renderer).with_cadence(cadence);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Tickface")
        .with_inner_size(winit::dpi::LogicalSize::new(400.0, 400.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    let mut app = App {
        window,
        surface,
        widget,
        timers: TimerQueue::new(),
        origin: Instant::now(),
        due: Vec::new(),
        front: None,
        background: parse_color("background", &args.background)?,
    };
    app.widget.start(&mut app.timers);
    log::info!("clock window running ({cadence:?}, {policy:?})");

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    app.widget.detach(&mut app.timers);
                    *cf = ControlFlow::Exit;
                    return;
                }
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                    app.widget.request_repaint(&mut app.timers);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if app.poll_timers() {
                    app.window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = app.redraw() {
                    log::error!("redraw failed: {e:#}");
                }
            }
            _ => {}
        }
        *cf = app.control_flow();
    });
}
