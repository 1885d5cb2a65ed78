//! Error taxonomy for the recomputation pipeline.
//!
//! Three failure classes reach callers:
//!
//! - configuration errors (`InvalidDimension`, `DimensionMismatch`):
//!   rejected up front, nothing is computed;
//! - resource exhaustion (`Allocation`): the current recomputation
//!   aborts, the previously computed surface stays valid;
//! - capacity overflow (`CapacityOverflow`): the extractor produced more
//!   triangles than the sizing heuristic reserved, detected before any
//!   write so the buffer is never truncated or corrupted.
//!
//! `MalformedTable` is construction-time only and fatal: a triangulation
//! table that fails its structural check cannot produce a correct surface.

use std::collections::TryReserveError;

use crate::types::LatticeDims;

/// Unified error type for all pipeline stages.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
  /// A lattice dimension violates the dispatch granularity invariant.
  #[error("lattice dimension {axis}={value} must be a positive multiple of {granularity}")]
  InvalidDimension {
    axis: &'static str,
    value: u32,
    granularity: u32,
  },

  /// A density volume was paired with a lattice of different dimensions.
  #[error("density volume dimensions {volume:?} do not match lattice dimensions {lattice:?}")]
  DimensionMismatch {
    lattice: LatticeDims,
    volume: LatticeDims,
  },

  /// The surface buffer reservation failed.
  #[error("failed to reserve surface storage for {vertices} vertices: {source}")]
  Allocation {
    vertices: usize,
    source: TryReserveError,
  },

  /// Extraction produced more triangles than the reserved capacity.
  #[error("surface buffer overflow: {needed} triangles exceed reserved capacity of {capacity}")]
  CapacityOverflow { needed: usize, capacity: usize },

  /// The triangulation table failed its structural sanity check.
  #[error("triangulation table row {row} is malformed: {reason}")]
  MalformedTable { row: usize, reason: &'static str },
}
