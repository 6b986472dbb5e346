//! Frame timing.
//!
//! One [`Time`] per engine provides elapsed time, delta time, frame count
//! and a periodically refreshed FPS figure. The physics step itself is
//! frame-based (one step per frame, no dt scaling), so timing exists for
//! the host's benefit - glow animation phases, FPS display - and for
//! deterministic test runs via a fixed delta.

use std::time::{Duration, Instant};

/// Time tracking for the frame loop.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    /// Fixed delta time for deterministic stepping (optional).
    fixed_delta: Option<f32>,
}

impl Time {
    /// Create a new time tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            fixed_delta: None,
        }
    }

    /// Update timing values. Call once per frame.
    pub fn update(&mut self) {
        let now = Instant::now();

        let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta);
        self.last_frame = now;

        match self.fixed_delta {
            Some(dt) => self.elapsed_secs += dt,
            None => self.elapsed_secs = now.duration_since(self.start).as_secs_f32(),
        }

        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }
    }

    /// Total elapsed time in seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Time since last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second, refreshed every half second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Use a fixed delta instead of wall-clock time. Elapsed time then
    /// advances by exactly `dt` per frame, which makes runs reproducible.
    pub fn set_fixed_delta(&mut self, dt: Option<f32>) {
        self.fixed_delta = dt;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count_advances() {
        let mut time = Time::new();
        assert_eq!(time.frame(), 0);
        time.update();
        time.update();
        assert_eq!(time.frame(), 2);
    }

    #[test]
    fn test_fixed_delta_is_deterministic() {
        let mut time = Time::new();
        time.set_fixed_delta(Some(1.0 / 60.0));
        for _ in 0..60 {
            time.update();
        }
        assert!((time.elapsed() - 1.0).abs() < 1e-4);
        assert!((time.delta() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_wall_clock_elapsed_is_monotonic() {
        let mut time = Time::new();
        time.update();
        let first = time.elapsed();
        time.update();
        assert!(time.elapsed() >= first);
    }
}
