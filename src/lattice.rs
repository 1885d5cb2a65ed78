//! Sample lattice generation.
//!
//! The lattice is the pipeline's shared index space: one sample point per
//! (x, y, z) coordinate, laid out flat with X fastest. The density stage
//! evaluates one value per point and the extraction stage walks the cells
//! between adjacent points, so both address their buffers through the same
//! [`LatticeDims`] indexing.

use glam::Vec3A;
use rayon::prelude::*;

use crate::error::PipelineError;
use crate::types::LatticeDims;

/// The generated sample lattice: one world-space position per point plus a
/// flat index buffer over the same space.
///
/// Recreated whenever dimensions change; immutable for the duration of a
/// recomputation.
#[derive(Clone, Debug)]
pub struct Lattice {
  dims: LatticeDims,
  origin: [f32; 3],
  cell_scale: f32,
  positions: Vec<[f32; 3]>,
  indices: Vec<u32>,
}

/// Generate the sample lattice for the given dimensions.
///
/// Point (x, y, z) sits at `origin + (x, y, z) * cell_scale`. The index
/// buffer is the identity mapping over the flat point space; downstream
/// stages address positions through it the same way the density volume is
/// addressed.
///
/// Deterministic: identical inputs yield a bit-identical position buffer
/// (the parallel map is index-ordered).
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "lattice::generate")
)]
pub fn generate(
  dims: LatticeDims,
  origin: [f32; 3],
  cell_scale: f32,
) -> Result<Lattice, PipelineError> {
  dims.validate()?;

  let base = Vec3A::from_array(origin);
  let positions: Vec<[f32; 3]> = (0..dims.point_count())
    .into_par_iter()
    .map(|index| {
      let (x, y, z) = dims.coords(index);
      (base + Vec3A::new(x as f32, y as f32, z as f32) * cell_scale).to_array()
    })
    .collect();

  let indices: Vec<u32> = (0..dims.point_count() as u32).collect();

  Ok(Lattice {
    dims,
    origin,
    cell_scale,
    positions,
    indices,
  })
}

impl Lattice {
  pub fn dims(&self) -> LatticeDims {
    self.dims
  }

  pub fn origin(&self) -> [f32; 3] {
    self.origin
  }

  pub fn cell_scale(&self) -> f32 {
    self.cell_scale
  }

  /// All point positions, X fastest.
  pub fn positions(&self) -> &[[f32; 3]] {
    &self.positions
  }

  /// Flat index buffer over the point space.
  pub fn indices(&self) -> &[u32] {
    &self.indices
  }

  /// World-space position of a lattice point.
  #[inline(always)]
  pub fn position(&self, x: u32, y: u32, z: u32) -> Vec3A {
    Vec3A::from_array(self.positions[self.dims.index(x, y, z)])
  }
}

#[cfg(test)]
#[path = "lattice_test.rs"]
mod lattice_test;
