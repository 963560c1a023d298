// crates/engine_core/src/time.rs

use std::time::{Duration, Instant};

const DEFAULT_FRAMES_PER_SECOND: f64 = 60.0;

/// Frame clock for the engine loop.
///
/// Stopwatch semantics: `start` begins (or resumes) counting, `pause`
/// freezes the clock without losing accumulated time, `stop` resets
/// everything. `update` is called once per frame and recomputes the
/// per-frame delta from the running total.
pub struct GameTime {
    started_at: Option<Instant>,
    // Running time recorded before the current span began.
    accumulated: Duration,
    total: Duration,
    elapsed: Duration,
    total_frame_count: u64,
}

impl GameTime {
    pub fn new() -> Self {
        Self {
            started_at: None,
            accumulated: Duration::ZERO,
            total: Duration::ZERO,
            elapsed: Duration::ZERO,
            total_frame_count: 0,
        }
    }

    /// Starts the clock, or resumes it after `pause`.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Freezes the clock. `start` resumes from the accumulated time.
    pub fn pause(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += started.elapsed();
        }
    }

    /// Stops the clock and resets all frame bookkeeping.
    pub fn stop(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        self.total = Duration::ZERO;
        self.elapsed = Duration::ZERO;
        self.total_frame_count = 0;
    }

    fn running_time(&self) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }

    /// Advances the frame counter and recomputes the per-frame delta.
    pub fn update(&mut self) {
        let current = self.running_time();
        self.elapsed = current - self.total;
        self.total = current;
        self.total_frame_count += 1;
    }

    /// Interval covered by the previous frame.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total running time across all frames.
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn total_frame_count(&self) -> u64 {
        self.total_frame_count
    }

    /// Previous frame interval in seconds.
    pub fn delta_time_f64(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Single-precision [`Self::delta_time_f64`].
    pub fn delta_time(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Frames per second implied by the previous frame's delta.
    pub fn fps(&self) -> f64 {
        1.0 / self.delta_time_f64()
    }

    /// Scale factor relative to the 60 fps reference rate
    /// (`delta_time * 60`).
    pub fn time_ratio(&self) -> f32 {
        (self.delta_time_f64() * DEFAULT_FRAMES_PER_SECOND) as f32
    }
}

impl Default for GameTime {
    fn default() -> Self {
        Self::new()
    }
}
