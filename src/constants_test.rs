use super::*;

#[test]
fn test_default_mesh_size_respects_granularity() {
  assert_eq!(DEFAULT_MESH_SIZE % GROUP_SIZE, 0);
}

#[test]
fn test_capacity_knobs_are_consistent() {
  // The shrink divisor must be at least 1 at the threshold where it kicks in
  assert!(FULL_RESERVE_LIMIT / CAPACITY_DIVISOR_SCALE >= 1);
  assert_eq!(FULL_RESERVE_LIMIT % CAPACITY_DIVISOR_SCALE, 0);
}

#[test]
fn test_triangle_budget() {
  assert_eq!(MAX_TRIANGLES_PER_CELL, 5);
  assert_eq!(VERTICES_PER_TRIANGLE, 3);
}
