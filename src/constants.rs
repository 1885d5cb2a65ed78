//! Shared layout and sizing constants for the meshing pipeline.
//!
//! The lattice is an implicit 3D index space addressed as
//! `index = x + y * dim_x + z * dim_x * dim_y` (X fastest). Dimensions are
//! runtime values, so indexing helpers live on [`crate::types::LatticeDims`]
//! rather than here; this module holds the fixed quantities every stage
//! agrees on.

/// Dispatch granularity: every lattice dimension must be a multiple of this.
///
/// The extraction and density stages process the volume in groups of 8 per
/// axis, so dimensions that are not multiples of 8 leave a partial group
/// and are rejected as configuration errors.
pub const GROUP_SIZE: u32 = 8;

/// Maximum triangles a single cell configuration can emit.
pub const MAX_TRIANGLES_PER_CELL: usize = 5;

/// Vertices per emitted triangle.
pub const VERTICES_PER_TRIANGLE: usize = 3;

/// Smallest dimension below which the surface buffer reserves the full
/// worst case (5 triangles per cell).
pub const FULL_RESERVE_LIMIT: u32 = 64;

/// Scale used by the capacity shrink heuristic: at or above
/// [`FULL_RESERVE_LIMIT`], the worst case is divided by
/// `min_dim / CAPACITY_DIVISOR_SCALE`.
///
/// Larger volumes have proportionally sparser surface coverage, so the
/// reservation shrinks with resolution. Empirically tuned, not proven
/// sufficient; extraction detects overflow instead of trusting this.
pub const CAPACITY_DIVISOR_SCALE: u32 = 32;

/// Default cubic mesh size used when no dimensions are configured.
pub const DEFAULT_MESH_SIZE: u32 = 64;

/// Default isovalue. Gradient noise is centred on zero, so the zero
/// level set sits in the middle of the field's range.
pub const DEFAULT_ISOVALUE: f32 = 0.0;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
