//! Frame-driven scheduling.
//!
//! The host calls [`Session::frame`] once per display refresh. Rendering
//! happens every frame; generations advance at most once per step interval
//! of render-clock time, and never while the view is paused.

use tracing::trace;

use super::Session;
use crate::domain::Engine;
use crate::rendering::{self, Surface};

/// Rate limiter for generations, measured on the host's frame clock (ms).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepClock {
    last_step_ms: f64,
    interval_ms: f64,
}

impl StepClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            last_step_ms: 0.0,
            interval_ms,
        }
    }

    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms - self.last_step_ms >= self.interval_ms
    }

    pub fn mark(&mut self, now_ms: f64) {
        self.last_step_ms = now_ms;
    }

    pub fn last_step_ms(&self) -> f64 {
        self.last_step_ms
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

/// What one frame did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub stepped: bool,
    pub rendered: bool,
}

impl<E: Engine> Session<E> {
    /// Run one frame at `now_ms` on the host's monotonic clock.
    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.attached {
            return report;
        }

        if !self.interaction.is_paused() && self.clock.is_due(now_ms) {
            self.latest = Some(self.engine.step());
            self.clock.mark(now_ms);
            report.stepped = true;
            trace!(now_ms, "generation advanced");
        }

        if let Some(snapshot) = &self.latest {
            rendering::render(surface, snapshot, self.interaction.is_paused(), &self.config);
            report.rendered = true;
        }

        report
    }
}
