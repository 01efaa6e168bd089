//! # Frame Statistics
//!
//! Frame time tracking behind the demo's FPS readout. This only collects
//! numbers; drawing them is up to the GUI.
//!
//! ## Usage
//!
//! ```rust
//! use proc_shapes::performance::PerformanceMonitor;
//!
//! let mut monitor = PerformanceMonitor::new();
//!
//! // In your main loop
//! monitor.begin_frame();
//! // ... render frame ...
//! monitor.end_frame();
//!
//! let fps = monitor.metrics().fps;
//! # let _ = fps;
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Performance metrics over the current sample window
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    /// Current frames per second
    pub fps: f32,
    /// Average frame time in milliseconds
    pub frame_time_ms: f32,
    /// Minimum frame time in the current window
    pub min_frame_time_ms: f32,
    /// Maximum frame time in the current window
    pub max_frame_time_ms: f32,
    /// Number of draw calls in the last frame
    pub draw_calls: u32,
    /// Number of vertices rendered in the last frame
    pub vertex_count: u32,
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time_ms: 0.0,
            min_frame_time_ms: 0.0,
            max_frame_time_ms: 0.0,
            draw_calls: 0,
            vertex_count: 0,
        }
    }
}

/// Frame time monitor
pub struct PerformanceMonitor {
    /// Ring buffer of recent frame times for averaging
    frame_times: VecDeque<Duration>,
    max_samples: usize,
    /// Start time of the current frame
    frame_start: Option<Instant>,
    current_metrics: PerformanceMetrics,
}

impl PerformanceMonitor {
    /// Create a monitor averaging over the last 120 frames (~2 seconds at 60fps)
    pub fn new() -> Self {
        Self::with_window(120)
    }

    /// Create a monitor averaging over the last `max_samples` frames
    pub fn with_window(max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples,
            frame_start: None,
            current_metrics: PerformanceMetrics::default(),
        }
    }

    /// Mark the beginning of a frame
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Mark the end of a frame and update metrics.
    /// Does nothing without a matching [`begin_frame`](Self::begin_frame).
    pub fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.record_frame(start.elapsed());
        }
    }

    /// Add a frame time sample and refresh the metrics
    pub fn record_frame(&mut self, frame_time: Duration) {
        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
        self.update_metrics();
    }

    fn update_metrics(&mut self) {
        if self.frame_times.is_empty() {
            return;
        }

        let total_time: Duration = self.frame_times.iter().sum();
        let avg_frame_time_ms = total_time.as_secs_f32() * 1000.0 / self.frame_times.len() as f32;

        self.current_metrics.frame_time_ms = avg_frame_time_ms;
        self.current_metrics.fps = if avg_frame_time_ms > 0.0 {
            1000.0 / avg_frame_time_ms
        } else {
            0.0
        };

        if let (Some(min_time), Some(max_time)) =
            (self.frame_times.iter().min(), self.frame_times.iter().max())
        {
            self.current_metrics.min_frame_time_ms = min_time.as_secs_f32() * 1000.0;
            self.current_metrics.max_frame_time_ms = max_time.as_secs_f32() * 1000.0;
        }
    }

    /// Update render statistics
    pub fn update_render_stats(&mut self, draw_calls: u32, vertex_count: u32) {
        self.current_metrics.draw_calls = draw_calls;
        self.current_metrics.vertex_count = vertex_count;
    }

    /// Get current performance metrics
    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.current_metrics
    }

    /// Get frame time history in milliseconds, oldest first
    pub fn frame_time_history(&self) -> Vec<f32> {
        self.frame_times
            .iter()
            .map(|duration| duration.as_secs_f32() * 1000.0)
            .collect()
    }

    /// Reset all metrics and history
    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.current_metrics = PerformanceMetrics::default();
        self.frame_start = None;
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_monitor_reports_zero() {
        let monitor = PerformanceMonitor::new();
        assert_eq!(monitor.metrics().fps, 0.0);
        assert!(monitor.frame_time_history().is_empty());
    }

    #[test]
    fn test_average_fps() {
        let mut monitor = PerformanceMonitor::new();
        monitor.record_frame(Duration::from_millis(10));
        monitor.record_frame(Duration::from_millis(30));

        let metrics = monitor.metrics();
        assert!((metrics.frame_time_ms - 20.0).abs() < 1e-3);
        assert!((metrics.fps - 50.0).abs() < 1e-2);
        assert!((metrics.min_frame_time_ms - 10.0).abs() < 1e-3);
        assert!((metrics.max_frame_time_ms - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_window_drops_oldest() {
        let mut monitor = PerformanceMonitor::with_window(2);
        monitor.record_frame(Duration::from_millis(100));
        monitor.record_frame(Duration::from_millis(20));
        monitor.record_frame(Duration::from_millis(20));

        assert_eq!(monitor.frame_time_history().len(), 2);
        assert!((monitor.metrics().fps - 50.0).abs() < 1e-2);
    }

    #[test]
    fn test_end_without_begin_is_ignored() {
        let mut monitor = PerformanceMonitor::new();
        monitor.end_frame();
        assert!(monitor.frame_time_history().is_empty());

        monitor.begin_frame();
        monitor.end_frame();
        assert_eq!(monitor.frame_time_history().len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut monitor = PerformanceMonitor::new();
        monitor.record_frame(Duration::from_millis(16));
        monitor.update_render_stats(1, 24);
        assert_eq!(monitor.metrics().vertex_count, 24);

        monitor.reset();
        assert_eq!(monitor.metrics(), &PerformanceMetrics::default());
    }
}
