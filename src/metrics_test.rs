use super::*;

#[test]
fn test_rolling_window_evicts_oldest() {
  let mut window = RollingWindow::new(3);
  assert!(window.is_empty());

  window.push(10u64);
  window.push(20);
  window.push(30);
  assert_eq!(window.len(), 3);
  assert_eq!(window.sum(), 60);
  assert_eq!(window.average(), 20.0);

  // Push one more, oldest should be evicted
  window.push(40);
  assert_eq!(window.len(), 3);
  assert_eq!(window.sum(), 90);
  assert_eq!(window.average(), 30.0);

  let (min, max) = window.min_max().unwrap();
  assert_eq!(min, 20);
  assert_eq!(max, 40);
  assert_eq!(window.last(), Some(&40));
}

#[test]
fn test_empty_window_statistics() {
  let window: RollingWindow<u64> = RollingWindow::new(4);
  assert_eq!(window.average(), 0.0);
  assert!(window.min_max().is_none());
  assert!(window.last().is_none());
}

#[cfg(feature = "metrics")]
#[test]
fn test_record_recompute() {
  use std::sync::atomic::Ordering;

  COLLECT_METRICS.store(true, Ordering::Relaxed);
  let mut metrics = PipelineMetrics::new();

  let stats = RecomputeStats {
    total_us: 2_000,
    density_us: 900,
    extract_us: 700,
    triangles: 1_234,
    ..Default::default()
  };
  metrics.record_recompute(&stats);
  metrics.record_recompute(&RecomputeStats {
    total_us: 4_000,
    ..stats
  });

  assert_eq!(metrics.total_recomputes, 2);
  assert_eq!(metrics.last_total_us, 4_000);
  assert_eq!(metrics.last_triangles, 1_234);
  assert_eq!(metrics.avg_recompute_us(), 3_000.0);
  assert_eq!(metrics.avg_extract_us(), 700.0);
}

#[cfg(feature = "metrics")]
#[test]
fn test_reset_keeps_cumulative_count() {
  use std::sync::atomic::Ordering;

  COLLECT_METRICS.store(true, Ordering::Relaxed);
  let mut metrics = PipelineMetrics::new();
  metrics.record_recompute(&RecomputeStats {
    total_us: 100,
    ..Default::default()
  });

  metrics.reset();
  assert!(metrics.recompute_timings.is_empty());
  assert_eq!(metrics.last_total_us, 0);
  assert_eq!(metrics.total_recomputes, 1);
}

#[cfg(not(feature = "metrics"))]
#[test]
fn test_recording_is_a_no_op_when_disabled() {
  let mut metrics = PipelineMetrics::new();
  metrics.record_recompute(&RecomputeStats {
    total_us: 100,
    ..Default::default()
  });

  assert!(metrics.recompute_timings.is_empty());
  assert_eq!(metrics.total_recomputes, 0);
}
