//! Shared synthetic density fields for tests.

use crate::lattice::{self, Lattice};
use crate::tri_table::TriTable;
use crate::types::LatticeDims;
use crate::volume::DensityVolume;

/// Lattice at the origin with unit cell spacing.
pub fn unit_lattice(dims: LatticeDims) -> Lattice {
  lattice::generate(dims, [0.0; 3], 1.0).unwrap()
}

pub fn table() -> TriTable {
  TriTable::load().unwrap()
}

/// Smooth sphere: `density = radius - |p - center|`, positive inside.
/// With isovalue 0 the surface is the sphere itself.
pub fn sphere_volume(dims: LatticeDims, center: [f32; 3], radius: f32) -> DensityVolume {
  DensityVolume::from_fn(dims, |x, y, z| {
    let dx = x as f32 - center[0];
    let dy = y as f32 - center[1];
    let dz = z as f32 - center[2];
    radius - (dx * dx + dy * dy + dz * dz).sqrt()
  })
}

/// Horizontal half-space: solid below `height`, air above.
pub fn plane_volume(dims: LatticeDims, height: f32) -> DensityVolume {
  DensityVolume::from_fn(dims, |_, y, _| height - y as f32)
}

/// Axis-aligned blocks of alternating sign with the given side length.
pub fn checkerboard_volume(dims: LatticeDims, period: u32) -> DensityVolume {
  DensityVolume::from_fn(dims, |x, y, z| {
    let parity = (x / period + y / period + z / period) % 2;
    if parity == 0 {
      1.0
    } else {
      -1.0
    }
  })
}

/// Adversarial per-point parity field: every cell straddles the isovalue,
/// maximizing emitted triangles. Used to trip the capacity heuristic.
pub fn alternating_volume(dims: LatticeDims) -> DensityVolume {
  DensityVolume::from_fn(dims, |x, y, z| if (x + y + z) % 2 == 0 { 1.0 } else { -1.0 })
}
