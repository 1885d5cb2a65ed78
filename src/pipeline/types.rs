//! Pipeline I/O types.

use crate::constants::DEFAULT_ISOVALUE;
use crate::noise::NoiseParams;
use crate::types::LatticeDims;

/// Immutable snapshot of everything one recomputation consumes.
///
/// The parameter/UI layer owns the mutable copies; each recomputation gets
/// its own frozen snapshot, so a change mid-flight can only affect the next
/// submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceParams {
  /// Lattice dimensions; each axis a positive multiple of 8.
  pub dims: LatticeDims,
  /// Surface threshold. Corners strictly above it count as inside.
  pub isovalue: f32,
  /// World-space position of lattice point (0, 0, 0).
  pub origin: [f32; 3],
  /// World-space spacing between adjacent lattice points.
  pub cell_scale: f32,
  /// Density field parameters.
  pub noise: NoiseParams,
}

impl Default for SurfaceParams {
  fn default() -> Self {
    Self {
      dims: LatticeDims::default(),
      isovalue: DEFAULT_ISOVALUE,
      origin: [0.0; 3],
      cell_scale: 1.0,
      noise: NoiseParams::default(),
    }
  }
}

impl SurfaceParams {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_dims(mut self, dims: LatticeDims) -> Self {
    self.dims = dims;
    self
  }

  pub fn with_isovalue(mut self, isovalue: f32) -> Self {
    self.isovalue = isovalue;
    self
  }

  pub fn with_noise(mut self, noise: NoiseParams) -> Self {
    self.noise = noise;
    self
  }
}

/// Per-stage timings and output counts from one recomputation.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecomputeStats {
  /// Lattice generation time in microseconds.
  pub lattice_us: u64,
  /// Density evaluation time in microseconds.
  pub density_us: u64,
  /// Surface buffer acquisition time in microseconds.
  pub buffer_us: u64,
  /// Extraction time in microseconds.
  pub extract_us: u64,
  /// End-to-end recomputation time in microseconds.
  pub total_us: u64,
  /// Triangles in the produced surface.
  pub triangles: usize,
  /// Cells that emitted at least one triangle.
  pub active_cells: usize,
}
