#![forbid(unsafe_code)]

//! Host-owned frame gate.
//!
//! The simulator never schedules itself. The embedding environment owns the
//! display-refresh callback and calls [`FrameLoop::tick`] from it; the loop
//! only decides whether that callback should step and draw the field.

use crate::field::ParticleField;
use crate::rng::RandomSource;
use crate::surface::DrawSurface;

/// Whether ticks reach the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
}

/// Summary of one executed frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Zero-based index among frames run by this loop.
    pub frame: u64,
    /// Host timestamp the frame was drawn at.
    pub time_ms: f64,
    pub particles: usize,
    pub lines: usize,
    pub discs: usize,
}

/// Start/stop gate around `advance` + `render`.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    /// A stopped loop.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoopState::Stopped,
            frames: 0,
        }
    }

    /// Begin accepting ticks. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        crate::debug!(frames = self.frames, "frame loop started");
        true
    }

    /// Stop accepting ticks. Returns `false` if already stopped.
    ///
    /// Leaves the field untouched, so a later [`start`](Self::start) resumes
    /// the same population.
    pub fn stop(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.state = LoopState::Stopped;
        crate::debug!(frames = self.frames, "frame loop stopped");
        true
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub const fn state(&self) -> LoopState {
        self.state
    }

    /// Frames run so far.
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Step then draw `field`, if running and the field is still alive.
    pub fn tick<R, S>(
        &mut self,
        field: &mut ParticleField<R>,
        surface: &mut S,
        time_ms: f64,
    ) -> Option<FrameStats>
    where
        R: RandomSource,
        S: DrawSurface + ?Sized,
    {
        if self.state == LoopState::Stopped || field.is_destroyed() {
            return None;
        }
        field.advance();
        let drawn = field.render(surface, time_ms);
        let stats = FrameStats {
            frame: self.frames,
            time_ms,
            particles: field.particles().len(),
            lines: drawn.lines,
            discs: drawn.particles,
        };
        self.frames += 1;
        crate::trace!(
            frame = stats.frame,
            lines = stats.lines,
            discs = stats.discs,
            "frame"
        );
        Some(stats)
    }
}
