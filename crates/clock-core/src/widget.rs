// File: crates/clock-core/src/widget.rs
// Summary: ClockWidget owns renderer, clock source and cadence; drives the self-rescheduling repaint loop.

use std::time::Duration;

use crate::renderer::{ClockRenderer, RenderedFrame};
use crate::schedule::{Scheduler, TaskHandle};
use crate::surface::DrawSurface;
use crate::time::{ClockSource, SystemClock};
use crate::types::{DEFAULT_REPAINT_INTERVAL, LEGACY_REPAINT_DELAY};

/// Rescheduling rule applied after every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cadence {
    /// A delayed request after 500 ms plus an immediate one, every frame. Requests
    /// coalesce like host invalidations, so this runs as fast as the host dispatches.
    Legacy,
    /// One request `interval` after each frame.
    Fixed(Duration),
}

impl Default for Cadence {
    fn default() -> Self {
        Cadence::Fixed(DEFAULT_REPAINT_INTERVAL)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Running,
    /// Terminal: the host tore the widget down.
    Detached,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Request {
    Immediate,
    Delayed,
}

pub struct ClockWidget<C: ClockSource = SystemClock> {
    renderer: ClockRenderer,
    clock: C,
    cadence: Cadence,
    state: Lifecycle,
    pending: Vec<(TaskHandle, Request)>,
    frames: u64,
}

impl ClockWidget<SystemClock> {
    pub fn with_system_clock(renderer: ClockRenderer) -> Self {
        Self::new(renderer, SystemClock)
    }
}

impl<C: ClockSource> ClockWidget<C> {
    pub fn new(renderer: ClockRenderer, clock: C) -> Self {
        Self {
            renderer,
            clock,
            cadence: Cadence::default(),
            state: Lifecycle::Idle,
            pending: Vec::new(),
            frames: 0,
        }
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn renderer(&self) -> &ClockRenderer { &self.renderer }
    pub fn clock(&self) -> &C { &self.clock }
    pub fn cadence(&self) -> Cadence { self.cadence }
    pub fn state(&self) -> Lifecycle { self.state }
    /// Frames actually drawn (skipped frames without a surface are not counted).
    pub fn frames(&self) -> u64 { self.frames }

    /// Handles this widget is still waiting on.
    pub fn pending(&self) -> Vec<TaskHandle> {
        self.pending.iter().map(|&(h, _)| h).collect()
    }

    /// Begin the loop with an immediate first frame. Returns `false` when already
    /// running or detached.
    pub fn start(&mut self, sched: &mut dyn Scheduler) -> bool {
        match self.state {
            Lifecycle::Running => false,
            Lifecycle::Detached => {
                log::debug!("start ignored: widget detached");
                false
            }
            Lifecycle::Idle => {
                self.state = Lifecycle::Running;
                self.request(sched, Request::Immediate);
                log::debug!("clock loop started ({:?})", self.cadence);
                true
            }
        }
    }

    /// Ask for a frame as soon as possible, e.g. after a resize. Coalesces with an
    /// outstanding immediate request.
    pub fn request_repaint(&mut self, sched: &mut dyn Scheduler) {
        if self.state == Lifecycle::Running && !self.has(Request::Immediate) {
            self.request(sched, Request::Immediate);
        }
    }

    /// Deliver a fired task. Draws a frame at the clock's current time and schedules
    /// the next one. Stale, foreign or absorbed handles return `None` and draw nothing.
    pub fn on_timer(
        &mut self,
        handle: TaskHandle,
        surface: Option<&mut dyn DrawSurface>,
        sched: &mut dyn Scheduler,
    ) -> Option<RenderedFrame> {
        if self.state != Lifecycle::Running {
            return None;
        }
        let idx = self.pending.iter().position(|&(h, _)| h == handle)?;
        let (_, kind) = self.pending.swap_remove(idx);

        // A delayed request landing while an immediate one is outstanding is absorbed,
        // the way a host folds an invalidate into an already-dirty view.
        if kind == Request::Delayed && self.has(Request::Immediate) {
            return None;
        }

        let now = self.clock.now();
        let frame = self.renderer.render_frame(surface, now);
        if frame.is_some() {
            self.frames += 1;
        }

        match self.cadence {
            Cadence::Legacy => {
                self.request(sched, Request::Delayed);
                if !self.has(Request::Immediate) {
                    self.request(sched, Request::Immediate);
                }
            }
            Cadence::Fixed(interval) => {
                if self.pending.is_empty() {
                    let h = sched.schedule_after(interval);
                    self.pending.push((h, Request::Delayed));
                }
            }
        }
        frame
    }

    /// Cancel every pending task. The widget can be started again. Returns how many
    /// tasks were still queued in the scheduler.
    pub fn stop(&mut self, sched: &mut dyn Scheduler) -> usize {
        let cancelled = self
            .pending
            .drain(..)
            .filter(|&(h, _)| sched.cancel(h))
            .count();
        if self.state == Lifecycle::Running {
            self.state = Lifecycle::Idle;
            log::debug!("clock loop stopped after {} frames; cancelled {cancelled}", self.frames);
        }
        cancelled
    }

    /// Stop for good; later `start` calls and fired handles are ignored.
    pub fn detach(&mut self, sched: &mut dyn Scheduler) {
        self.stop(sched);
        self.state = Lifecycle::Detached;
    }

    fn has(&self, kind: Request) -> bool {
        self.pending.iter().any(|&(_, k)| k == kind)
    }

    fn request(&mut self, sched: &mut dyn Scheduler, kind: Request) {
        let h = match kind {
            Request::Immediate => sched.schedule_now(),
            Request::Delayed => sched.schedule_after(LEGACY_REPAINT_DELAY),
        };
        self.pending.push((h, kind));
    }
}
