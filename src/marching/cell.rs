//! Per-cell triangulation.

use smallvec::SmallVec;

use super::gradient;
use crate::constants::MAX_TRIANGLES_PER_CELL;
use crate::lattice::Lattice;
use crate::tri_table::{TriTable, CORNER_OFFSETS};
use crate::types::{Triangle, Vertex};
use crate::volume::DensityVolume;

/// Triangulate one cell.
///
/// The cell's base corner is (x, y, z); all 8 corners must be in bounds.
/// Returns the cell's triangles, empty for homogeneous configurations.
#[inline]
pub(super) fn process_cell(
  lattice: &Lattice,
  volume: &DensityVolume,
  table: TriTable,
  isovalue: f32,
  x: u32,
  y: u32,
  z: u32,
) -> SmallVec<[Triangle; MAX_TRIANGLES_PER_CELL]> {
  let mut triangles = SmallVec::new();

  // Configuration code: bit i set when corner i is strictly above the
  // isovalue.
  let mut config = 0u8;
  for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
    if volume.get(x + offset[0], y + offset[1], z + offset[2]) > isovalue {
      config |= 1 << i;
    }
  }

  // All-in and all-out cells carry no surface
  if config == 0 || config == 255 {
    return triangles;
  }

  // Interpolate a vertex on every crossing edge, then assemble the row's
  // triangles from them.
  let edge_mask = table.edge_mask(config);
  let mut edge_vertices = [Vertex::default(); 12];
  for (edge, vertex) in edge_vertices.iter_mut().enumerate() {
    if edge_mask & (1 << edge) != 0 {
      *vertex = gradient::edge_vertex(lattice, volume, isovalue, [x, y, z], edge);
    }
  }

  for [e0, e1, e2] in table.row_for(config) {
    triangles.push([
      edge_vertices[e0 as usize],
      edge_vertices[e1 as usize],
      edge_vertices[e2 as usize],
    ]);
  }

  triangles
}
