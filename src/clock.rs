//! Frame timing for the render loop.
//!
//! [`FrameClock`] turns wall-clock frame intervals into the `time` and
//! `delta` the animator consumes. Long stalls (window drags, breakpoints) are
//! clamped to [`MAX_DELTA`] so particles never jump across the scene, and a
//! paused clock reports zero delta while elapsed time stands still.
//!
//! ```ignore
//! let mut clock = FrameClock::new();
//! // once per redraw:
//! let (time, delta) = clock.tick();
//! animator.tick(session.activation(), session.intensity(), time, delta);
//! ```

use std::time::{Duration, Instant};

/// Largest delta handed out for a single frame, in seconds.
pub const MAX_DELTA: f32 = 0.1;

/// Elapsed/delta/fps tracking for a frame-driven loop.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Option<Instant>,
    /// Animation time in seconds. Does not advance while paused.
    elapsed: f32,
    delta: f32,
    frame_count: u64,
    fps: f32,
    fps_frames: u32,
    fps_window: f32,
    fps_update_interval: Duration,
    paused: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            elapsed: 0.0,
            delta: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frames: 0,
            fps_window: 0.0,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
        }
    }

    /// Measure the interval since the previous call and advance by it.
    ///
    /// Returns `(elapsed, delta)`. The first call yields a zero delta.
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let raw = self
            .last_frame
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_frame = Some(now);
        self.advance(raw)
    }

    /// Advance by an explicit interval in seconds.
    pub fn advance(&mut self, raw_delta: f32) -> (f32, f32) {
        let raw = if raw_delta.is_finite() { raw_delta.max(0.0) } else { 0.0 };

        // FPS counts real frames, paused or not.
        self.frame_count += 1;
        self.fps_frames += 1;
        self.fps_window += raw;
        if self.fps_window >= self.fps_update_interval.as_secs_f32() {
            self.fps = self.fps_frames as f32 / self.fps_window;
            self.fps_frames = 0;
            self.fps_window = 0.0;
        }

        self.delta = if self.paused { 0.0 } else { raw.min(MAX_DELTA) };
        self.elapsed += self.delta;
        (self.elapsed, self.delta)
    }

    /// Animation time in seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Clamped time since the last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second, refreshed twice a second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("animation {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
