//! # Frame Timing
//!
//! Measures the time between rendered frames. The roll animation needs both
//! the last frame's delta time and a smoothed frame rate (roll duration and
//! spin speed are sized in frames), and the UI shows the same numbers in an
//! overlay.
//!
//! ## Usage
//!
//! ```no_run
//! use dicebox::performance::FrameTimer;
//!
//! let mut timer = FrameTimer::new();
//!
//! // Once per redraw
//! let delta_time = timer.tick();
//! let fps = timer.frame_rate();
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Snapshot of frame statistics for display
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMetrics {
    /// Average frames per second over the sample window
    pub fps: f32,
    /// Average frame time in milliseconds
    pub frame_time_ms: f32,
    /// Minimum frame time in the current window
    pub min_frame_time_ms: f32,
    /// Maximum frame time in the current window
    pub max_frame_time_ms: f32,
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time_ms: 0.0,
            min_frame_time_ms: f32::MAX,
            max_frame_time_ms: 0.0,
        }
    }
}

/// Rolling frame timer
pub struct FrameTimer {
    /// Ring buffer of recent frame times for averaging
    frame_times: VecDeque<Duration>,
    /// Maximum number of frame times to keep for averaging
    max_samples: usize,
    /// When the previous frame was ticked
    last_frame: Option<Instant>,
    /// Metrics shown in the UI, refreshed at `update_interval`
    current_metrics: FrameMetrics,
    last_update: Instant,
    update_interval: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::with_samples(120) // ~2 seconds at 60fps
    }

    pub fn with_samples(max_samples: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples: max_samples.max(1),
            last_frame: None,
            current_metrics: FrameMetrics::default(),
            last_update: Instant::now(),
            update_interval: Duration::from_millis(100), // 10 refreshes per second
        }
    }

    /// Marks a new frame and returns the seconds elapsed since the last one.
    ///
    /// The first call returns 0.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = match self.last_frame.replace(now) {
            Some(previous) => now - previous,
            None => return 0.0,
        };

        self.record_frame(delta);
        if self.last_update.elapsed() >= self.update_interval {
            self.refresh_metrics();
            self.last_update = Instant::now();
        }
        delta.as_secs_f32()
    }

    /// Adds a frame time sample
    pub fn record_frame(&mut self, frame_time: Duration) {
        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
    }

    fn average_frame_time(&self) -> Option<Duration> {
        if self.frame_times.is_empty() {
            return None;
        }
        let total: Duration = self.frame_times.iter().sum();
        Some(total / self.frame_times.len() as u32)
    }

    /// Average frames per second over the sample window, 0 with no samples
    pub fn frame_rate(&self) -> f32 {
        match self.average_frame_time() {
            Some(avg) if avg > Duration::ZERO => 1.0 / avg.as_secs_f32(),
            _ => 0.0,
        }
    }

    /// Recomputes the displayed metrics from the current samples
    pub fn refresh_metrics(&mut self) {
        let Some(avg) = self.average_frame_time() else {
            return;
        };

        self.current_metrics.frame_time_ms = avg.as_secs_f32() * 1000.0;
        self.current_metrics.fps = self.frame_rate();

        if let (Some(min_time), Some(max_time)) =
            (self.frame_times.iter().min(), self.frame_times.iter().max())
        {
            self.current_metrics.min_frame_time_ms = min_time.as_secs_f32() * 1000.0;
            self.current_metrics.max_frame_time_ms = max_time.as_secs_f32() * 1000.0;
        }
    }

    pub fn metrics(&self) -> &FrameMetrics {
        &self.current_metrics
    }

    /// Reset all metrics and history
    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.current_metrics = FrameMetrics::default();
        self.last_frame = None;
        self.last_update = Instant::now();
    }

    /// Render a compact FPS overlay in the top-right corner
    pub fn render_overlay(&self, ui: &imgui::Ui) {
        let display_size = ui.io().display_size;
        let metrics = &self.current_metrics;

        ui.window("FPS")
            .size([120.0, 60.0], imgui::Condition::Always)
            .position([display_size[0] - 130.0, 10.0], imgui::Condition::Always)
            .no_decoration()
            .no_inputs()
            .bg_alpha(0.3)
            .build(|| {
                ui.text(format!("FPS: {:.0}", metrics.fps));
                ui.text(format!("{:.1}ms", metrics.frame_time_ms));
            });
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_samples_means_zero_rate() {
        let timer = FrameTimer::new();
        assert_eq!(timer.frame_rate(), 0.0);
    }

    #[test]
    fn test_first_tick_has_no_delta() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.tick(), 0.0);
        assert_eq!(timer.frame_rate(), 0.0);
    }

    #[test]
    fn test_frame_rate_averages_samples() {
        let mut timer = FrameTimer::new();
        timer.record_frame(Duration::from_millis(10));
        timer.record_frame(Duration::from_millis(30));
        assert!((timer.frame_rate() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_window_drops_oldest_samples() {
        let mut timer = FrameTimer::with_samples(2);
        timer.record_frame(Duration::from_secs(1));
        timer.record_frame(Duration::from_millis(20));
        timer.record_frame(Duration::from_millis(20));
        assert!((timer.frame_rate() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_refresh_metrics() {
        let mut timer = FrameTimer::new();
        timer.record_frame(Duration::from_millis(10));
        timer.record_frame(Duration::from_millis(20));
        timer.refresh_metrics();

        let metrics = timer.metrics();
        assert!((metrics.frame_time_ms - 15.0).abs() < 1e-3);
        assert!((metrics.min_frame_time_ms - 10.0).abs() < 1e-3);
        assert!((metrics.max_frame_time_ms - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut timer = FrameTimer::new();
        timer.record_frame(Duration::from_millis(16));
        timer.reset();
        assert_eq!(timer.frame_rate(), 0.0);
        assert_eq!(timer.metrics(), &FrameMetrics::default());
    }
}
