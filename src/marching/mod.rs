//! Marching cubes isosurface extraction.
//!
//! Converts a density volume into an unordered triangle list at a chosen
//! isovalue. Each cell (a cube of 8 adjacent lattice corners) is classified
//! against the isovalue, the matching triangle pattern is looked up in the
//! [`TriTable`], and crossing edges are interpolated into vertices with
//! density-gradient normals.
//!
//! # Variable output
//!
//! A cell emits 0 to 5 triangles depending on its configuration, unknown
//! until evaluated. The extraction parallelizes over z-slabs, each slab
//! accumulating its own triangle region; the regions are compacted into the
//! caller's [`SurfaceBuffer`] only after the total count has been checked
//! against the buffer's reserved capacity. Overflow therefore surfaces as
//! [`PipelineError::CapacityOverflow`] with the buffer untouched, never as a
//! truncated or corrupted write.
//!
//! Triangle order across slabs is an implementation detail; consumers must
//! treat the output as an unordered triangle set.

mod cell;
mod gradient;

use rayon::prelude::*;

use crate::error::PipelineError;
use crate::lattice::Lattice;
use crate::surface::SurfaceBuffer;
use crate::tri_table::TriTable;
use crate::types::Triangle;
use crate::volume::DensityVolume;

/// Statistics from one extraction pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtractStats {
  /// Triangles appended to the surface buffer.
  pub triangles: usize,
  /// Cells that emitted at least one triangle.
  pub active_cells: usize,
}

/// Extract the isosurface of `volume` into `buffer`.
///
/// Iterates the (X-1)(Y-1)(Z-1) cells whose 8 corners are all in bounds,
/// parallel over z-slabs. Corner classification uses strict `>` so corners
/// exactly at the isovalue count as outside and zero-area triangles cannot
/// arise at exact equality.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "marching::extract")
)]
pub fn extract(
  lattice: &Lattice,
  volume: &DensityVolume,
  table: TriTable,
  isovalue: f32,
  buffer: &mut SurfaceBuffer,
) -> Result<ExtractStats, PipelineError> {
  let dims = lattice.dims();
  if volume.dims() != dims {
    return Err(PipelineError::DimensionMismatch {
      lattice: dims,
      volume: volume.dims(),
    });
  }

  // Per-slab triangle regions, joined before compaction. Each slab owns its
  // region exclusively, so the parallel phase has no shared writes.
  let slabs: Vec<SlabOutput> = (0..dims.z - 1)
    .into_par_iter()
    .map(|z| {
      let mut slab = SlabOutput::default();
      for y in 0..dims.y - 1 {
        for x in 0..dims.x - 1 {
          let triangles = cell::process_cell(lattice, volume, table, isovalue, x, y, z);
          if !triangles.is_empty() {
            slab.active_cells += 1;
            slab.triangles.extend(triangles);
          }
        }
      }
      slab
    })
    .collect();

  // Total count against capacity BEFORE any write: on overflow the buffer
  // is left exactly as acquired.
  let emitted: usize = slabs.iter().map(|slab| slab.triangles.len()).sum();
  let needed = buffer.triangle_count() + emitted;
  if needed > buffer.capacity() {
    return Err(PipelineError::CapacityOverflow {
      needed,
      capacity: buffer.capacity(),
    });
  }

  let mut active_cells = 0;
  for slab in slabs {
    active_cells += slab.active_cells;
    for triangle in slab.triangles {
      buffer.push_triangle(&triangle)?;
    }
  }

  Ok(ExtractStats {
    triangles: emitted,
    active_cells,
  })
}

/// One z-slab's output region.
#[derive(Default)]
struct SlabOutput {
  triangles: Vec<Triangle>,
  active_cells: usize,
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
