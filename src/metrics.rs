//! Engine-agnostic metrics collection for recomputation statistics.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use isofield::metrics::COLLECT_METRICS;
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // The driver records automatically; read back for a stats overlay:
//! let avg_us = driver.metrics().avg_recompute_us();
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

use crate::pipeline::RecomputeStats;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  /// Create a new rolling window with the given capacity.
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Iterate over values (oldest to newest).
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buffer.iter()
  }

  /// Get the most recent value.
  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl RollingWindow<u64> {
  /// Compute the sum of all values.
  pub fn sum(&self) -> u64 {
    self.buffer.iter().sum()
  }

  /// Compute the average of all values.
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }

  /// Get min and max values.
  pub fn min_max(&self) -> Option<(u64, u64)> {
    let min = *self.buffer.iter().min()?;
    let max = *self.buffer.iter().max()?;
    Some((min, max))
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(128)
  }
}

/// Rolling recomputation statistics, recorded by the driver.
#[derive(Debug, Clone)]
pub struct PipelineMetrics {
  /// Rolling window of end-to-end recomputation times in microseconds.
  pub recompute_timings: RollingWindow<u64>,
  /// Rolling window of density evaluation times in microseconds.
  pub density_timings: RollingWindow<u64>,
  /// Rolling window of extraction times in microseconds.
  pub extract_timings: RollingWindow<u64>,
  /// Rolling window of produced triangle counts.
  pub triangle_counts: RollingWindow<u64>,

  /// Last recomputation time in microseconds.
  pub last_total_us: u64,
  /// Last produced triangle count.
  pub last_triangles: usize,
  /// Total recomputations recorded this session.
  pub total_recomputes: u64,
}

impl Default for PipelineMetrics {
  fn default() -> Self {
    Self {
      recompute_timings: RollingWindow::new(128),
      density_timings: RollingWindow::new(128),
      extract_timings: RollingWindow::new(128),
      triangle_counts: RollingWindow::new(128),
      last_total_us: 0,
      last_triangles: 0,
      total_recomputes: 0,
    }
  }
}

impl PipelineMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Reset all windows and snapshots.
  pub fn reset(&mut self) {
    self.recompute_timings.clear();
    self.density_timings.clear();
    self.extract_timings.clear();
    self.triangle_counts.clear();
    self.last_total_us = 0;
    self.last_triangles = 0;
    // Don't reset total_recomputes - it's cumulative
  }

  /// Record one completed recomputation.
  pub fn record_recompute(&mut self, stats: &RecomputeStats) {
    if !is_enabled() {
      return;
    }

    self.recompute_timings.push(stats.total_us);
    self.density_timings.push(stats.density_us);
    self.extract_timings.push(stats.extract_us);
    self.triangle_counts.push(stats.triangles as u64);

    self.last_total_us = stats.total_us;
    self.last_triangles = stats.triangles;
    self.total_recomputes += 1;
  }

  /// Average end-to-end recomputation time in microseconds.
  pub fn avg_recompute_us(&self) -> f64 {
    self.recompute_timings.average()
  }

  /// Average extraction time in microseconds.
  pub fn avg_extract_us(&self) -> f64 {
    self.extract_timings.average()
  }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
