//! Synchronous recomputation entry point.

use web_time::Instant;

use super::types::{RecomputeStats, SurfaceParams};
use crate::error::PipelineError;
use crate::surface::{SurfaceBuffer, SurfaceBufferManager};
use crate::tri_table::TriTable;
use crate::{lattice, marching, noise};

/// A completed recomputation: the surface and its stage timings.
#[derive(Debug)]
pub struct SurfaceOutput {
  /// The extracted surface. Return it to the manager via `release` before
  /// the next recomputation to reuse its allocation.
  pub surface: SurfaceBuffer,
  pub stats: RecomputeStats,
}

/// Run the full lattice → density → extraction pipeline for one parameter
/// snapshot.
///
/// The surface buffer comes from `manager`: same dimensions as the released
/// previous surface reuse its allocation, a dimension change tears down and
/// reallocates. On any error the acquired buffer is returned to the manager,
/// so a failed recomputation leaves the caller's previously rendered surface
/// and the recycled allocation both intact.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "pipeline::recompute")
)]
pub fn recompute(
  params: &SurfaceParams,
  manager: &mut SurfaceBufferManager,
) -> Result<SurfaceOutput, PipelineError> {
  let total_start = Instant::now();

  let table = TriTable::load()?;

  let lattice_start = Instant::now();
  let lattice = lattice::generate(params.dims, params.origin, params.cell_scale)?;
  let lattice_us = lattice_start.elapsed().as_micros() as u64;

  let density_start = Instant::now();
  let volume = noise::evaluate(&lattice, &params.noise);
  let density_us = density_start.elapsed().as_micros() as u64;

  let buffer_start = Instant::now();
  let mut surface = manager.acquire(params.dims)?;
  let buffer_us = buffer_start.elapsed().as_micros() as u64;

  let extract_start = Instant::now();
  let extract_stats = match marching::extract(&lattice, &volume, table, params.isovalue, &mut surface)
  {
    Ok(stats) => stats,
    Err(err) => {
      // Keep the allocation for the next attempt
      manager.release(surface);
      return Err(err);
    }
  };
  let extract_us = extract_start.elapsed().as_micros() as u64;

  let stats = RecomputeStats {
    lattice_us,
    density_us,
    buffer_us,
    extract_us,
    total_us: total_start.elapsed().as_micros() as u64,
    triangles: extract_stats.triangles,
    active_cells: extract_stats.active_cells,
  };

  Ok(SurfaceOutput { surface, stats })
}

#[cfg(test)]
#[path = "process_test.rs"]
mod process_test;
