//! Surface buffer ownership, sizing, and reuse.
//!
//! The extraction stage's output cardinality is data-dependent, so the
//! buffer it writes into is reserved up front from a sizing heuristic and
//! every append is capacity-checked. The manager keeps the previous
//! allocation alive between recomputations: same dimensions reuse it in
//! place (cleared, not reallocated), a dimension change discards and
//! reallocates.

use crate::constants::{
  CAPACITY_DIVISOR_SCALE, FULL_RESERVE_LIMIT, MAX_TRIANGLES_PER_CELL, VERTICES_PER_TRIANGLE,
};
use crate::error::PipelineError;
use crate::types::{LatticeDims, Triangle, Vertex};

/// Reserved triangle capacity for a lattice of the given dimensions.
///
/// Below the 64-cell threshold on the smallest dimension the full worst
/// case (5 triangles per cell) is reserved. At or above it, the worst case
/// is divided by `min_dim / 32`: larger volumes have proportionally sparser
/// surface coverage, so the reservation shrinks with resolution.
///
/// Empirically tuned, not proven sufficient; a pathological field can still
/// need more. Extraction compares its triangle count against this capacity
/// and reports overflow instead of trusting the heuristic.
pub fn capacity_for(dims: LatticeDims) -> usize {
  let worst_case = dims.cell_count() * MAX_TRIANGLES_PER_CELL;
  let min_dim = dims.min_dim();

  if min_dim < FULL_RESERVE_LIMIT {
    worst_case
  } else {
    worst_case / (min_dim / CAPACITY_DIVISOR_SCALE) as usize
  }
}

/// Capacity-bounded triangle storage.
///
/// Written by the extraction stage, then handed to the renderer as a plain
/// vertex slice. The buffer remembers the dimensions it was sized for so
/// the manager can tell reuse from teardown.
#[derive(Debug)]
pub struct SurfaceBuffer {
  dims: LatticeDims,
  capacity: usize,
  vertices: Vec<Vertex>,
}

impl SurfaceBuffer {
  /// Allocate an empty buffer sized by [`capacity_for`].
  ///
  /// Reservation is fallible: an allocation failure surfaces as
  /// [`PipelineError::Allocation`] instead of aborting the process.
  pub fn with_capacity(dims: LatticeDims) -> Result<Self, PipelineError> {
    let capacity = capacity_for(dims);
    let vertex_capacity = capacity * VERTICES_PER_TRIANGLE;

    let mut vertices = Vec::new();
    vertices
      .try_reserve_exact(vertex_capacity)
      .map_err(|source| PipelineError::Allocation {
        vertices: vertex_capacity,
        source,
      })?;

    Ok(Self {
      dims,
      capacity,
      vertices,
    })
  }

  /// Dimensions this buffer was sized for.
  pub fn dims(&self) -> LatticeDims {
    self.dims
  }

  /// Reserved capacity in triangles.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn triangle_count(&self) -> usize {
    self.vertices.len() / VERTICES_PER_TRIANGLE
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// The vertex data the renderer binds directly.
  pub fn vertices(&self) -> &[Vertex] {
    &self.vertices
  }

  /// Reset the contents, keeping the allocation.
  pub fn clear(&mut self) {
    self.vertices.clear();
  }

  /// Append one triangle, rejecting writes past the reserved capacity.
  pub fn push_triangle(&mut self, triangle: &Triangle) -> Result<(), PipelineError> {
    if self.triangle_count() >= self.capacity {
      return Err(PipelineError::CapacityOverflow {
        needed: self.triangle_count() + 1,
        capacity: self.capacity,
      });
    }
    self.vertices.extend_from_slice(triangle);
    Ok(())
  }
}

/// Owns the surface allocation between recomputations.
///
/// `acquire` hands out a buffer for the requested dimensions, `release`
/// returns it for reuse. One spare is kept: releasing a second buffer
/// replaces the first.
#[derive(Debug, Default)]
pub struct SurfaceBufferManager {
  spare: Option<SurfaceBuffer>,
}

impl SurfaceBufferManager {
  pub fn new() -> Self {
    Self::default()
  }

  /// Rebuild a manager around a previously recycled buffer, if any.
  ///
  /// Lets an async driver carry the spare allocation across the
  /// worker-thread boundary without sharing the manager itself.
  pub fn with_spare(spare: Option<SurfaceBuffer>) -> Self {
    Self { spare }
  }

  /// Hand out a buffer sized for `dims`.
  ///
  /// Reuses the spare in place when its dimensions match (cleared, not
  /// reallocated); otherwise the spare is discarded and a fresh buffer is
  /// allocated.
  pub fn acquire(&mut self, dims: LatticeDims) -> Result<SurfaceBuffer, PipelineError> {
    if let Some(mut spare) = self.spare.take() {
      if spare.dims() == dims {
        spare.clear();
        return Ok(spare);
      }
      // Dimension change: drop before allocating so both reservations
      // never coexist.
      drop(spare);
    }

    SurfaceBuffer::with_capacity(dims)
  }

  /// Return a buffer for reuse by the next `acquire`.
  pub fn release(&mut self, buffer: SurfaceBuffer) {
    self.spare = Some(buffer);
  }

  /// Take the spare buffer out of the manager.
  pub fn take_spare(&mut self) -> Option<SurfaceBuffer> {
    self.spare.take()
  }

  /// Consume the manager, yielding the spare buffer.
  pub fn into_spare(self) -> Option<SurfaceBuffer> {
    self.spare
  }
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;
