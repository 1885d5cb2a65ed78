//! isofield - procedural density field to triangle mesh pipeline
//!
//! This crate converts a procedurally generated 3D scalar density field into
//! a renderable triangle mesh via a multi-stage data-parallel pipeline:
//! sample-lattice generation, fractal noise density evaluation, and marching
//! cubes isosurface extraction with gradient normals, backed by a
//! capacity-managed surface buffer that is reused across recomputations.
//!
//! # Features
//!
//! - **Fractal density fields**: fBm over classic Perlin or simplex gradient
//!   noise, with ridged turbulence and a terrain height bias
//! - **Marching cubes extraction**: canonical 256-entry triangulation table,
//!   per-vertex normals from the density gradient
//! - **Buffer lifecycle discipline**: heuristic capacity sizing with explicit
//!   overflow detection, clear-don't-reallocate reuse across frames
//! - **Supersession**: an async driver where a new recomputation request
//!   replaces an in-flight one instead of queueing behind it
//!
//! # Example
//!
//! ```ignore
//! use isofield::{recompute, SurfaceBufferManager, SurfaceParams};
//!
//! let params = SurfaceParams::default();
//! let mut manager = SurfaceBufferManager::new();
//!
//! let output = recompute(&params, &mut manager)?;
//! println!(
//!   "extracted {} triangles in {} us",
//!   output.surface.triangle_count(),
//!   output.stats.total_us
//! );
//!
//! // Renderer binds output.surface.vertices() directly.
//! manager.release(output.surface);
//! ```

pub mod constants;
pub mod error;
pub mod types;
pub mod volume;

// Re-export commonly used items
pub use constants::{DEFAULT_ISOVALUE, DEFAULT_MESH_SIZE, GROUP_SIZE, MAX_TRIANGLES_PER_CELL};
pub use error::PipelineError;
pub use types::{LatticeDims, Triangle, Vertex};
pub use volume::DensityVolume;

// Triangulation table
pub mod tri_table;
pub use tri_table::TriTable;

// Stage 1: sample lattice generation
pub mod lattice;
pub use lattice::Lattice;

// Stage 2: fractal noise density evaluation
pub mod noise;
pub use noise::NoiseParams;

// Stage 3: marching cubes extraction
pub mod marching;
pub use marching::{extract, ExtractStats};

// Stage 4: surface buffer ownership and sizing
pub mod surface;
pub use surface::{capacity_for, SurfaceBuffer, SurfaceBufferManager};

// Recomputation orchestration (sync entry point + async driver)
pub mod pipeline;
pub use pipeline::{recompute, RecomputeStats, SurfaceDriver, SurfaceOutput, SurfaceParams};

// Engine-agnostic metrics collection
pub mod metrics;

// Shared synthetic density fields for tests
#[cfg(test)]
pub(crate) mod test_utils;
