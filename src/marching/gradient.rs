//! Edge-crossing interpolation and gradient normals.

use glam::Vec3A;

use crate::lattice::Lattice;
use crate::tri_table::{CORNER_OFFSETS, EDGE_CORNERS};
use crate::types::Vertex;
use crate::volume::DensityVolume;

/// Density differences below this are treated as a flat edge; the crossing
/// then sits at the midpoint instead of dividing by a near-zero span.
const FLAT_EDGE_EPSILON: f32 = 1e-6;

/// Interpolate the surface crossing on one cell edge.
///
/// The crossing sits at `t = (isovalue - d0) / (d1 - d0)` between the edge's
/// two corners, clamped to [0, 1]. The normal is the density gradient
/// (central differences from the volume) lerped between the corners with the
/// same `t`, negated so it faces away from increasing density, and
/// normalized.
///
/// Corners are ordered by lattice index before interpolating, so every cell
/// sharing a lattice edge computes a bit-identical vertex. Adjacent cells
/// therefore stitch without cracks.
#[inline]
pub(super) fn edge_vertex(
  lattice: &Lattice,
  volume: &DensityVolume,
  isovalue: f32,
  cell: [u32; 3],
  edge: usize,
) -> Vertex {
  let dims = lattice.dims();
  let [c0, c1] = EDGE_CORNERS[edge];

  let corner = |c: u8| {
    let offset = CORNER_OFFSETS[c as usize];
    (cell[0] + offset[0], cell[1] + offset[1], cell[2] + offset[2])
  };
  let a = corner(c0);
  let b = corner(c1);
  let (a, b) = if dims.index(a.0, a.1, a.2) <= dims.index(b.0, b.1, b.2) {
    (a, b)
  } else {
    (b, a)
  };

  let d0 = volume.get(a.0, a.1, a.2);
  let d1 = volume.get(b.0, b.1, b.2);
  let t = if (d1 - d0).abs() < FLAT_EDGE_EPSILON {
    0.5
  } else {
    ((isovalue - d0) / (d1 - d0)).clamp(0.0, 1.0)
  };

  let p0 = lattice.position(a.0, a.1, a.2);
  let p1 = lattice.position(b.0, b.1, b.2);
  let position = p0 + (p1 - p0) * t;

  let g0 = volume.gradient(a.0, a.1, a.2);
  let g1 = volume.gradient(b.0, b.1, b.2);
  let normal = outward_normal(g0.lerp(g1, t));

  Vertex {
    position: position.to_array(),
    normal,
  }
}

/// Unit normal pointing away from increasing density.
#[inline]
pub(super) fn outward_normal(density_gradient: Vec3A) -> [f32; 3] {
  let normal = -density_gradient;
  let len_sq = normal.length_squared();

  if len_sq < 1e-12 {
    return [0.0, 1.0, 0.0]; // Fallback to up
  }

  let normalized = normal * len_sq.sqrt().recip();
  normalized.to_array()
}

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;
