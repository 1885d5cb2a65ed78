//! Recomputation orchestration.
//!
//! ```text
//! ┌─────────┐     ┌─────────┐     ┌────────────┐     ┌────────────────┐
//! │ Lattice ├────►│ Density ├────►│ Extraction ├────►│ Surface buffer │──► renderer
//! └─────────┘     └─────────┘     └────────────┘     └────────────────┘
//!  positions       one f32 per     0-5 triangles       capacity-checked
//!  + indices       point           per cell            compaction
//! ```
//!
//! Stages are strictly sequential relative to each other; each is internally
//! parallel via rayon, and the joins between them are the stage barriers. A
//! recomputation consumes one immutable [`SurfaceParams`] snapshot: the
//! parameter layer mutates its own copy and submits, rather than stages
//! reading shared mutable state mid-flight.
//!
//! Two entry points:
//!
//! - [`recompute`]: synchronous, returns the surface and per-stage timings.
//! - [`SurfaceDriver`]: non-blocking front-end on rayon's pool where a new
//!   submission supersedes an in-flight one and a failed recomputation
//!   retains the previously computed surface.

pub mod types;

pub mod driver;
pub mod process;

// Re-exports
pub use driver::SurfaceDriver;
pub use process::{recompute, SurfaceOutput};
pub use types::{RecomputeStats, SurfaceParams};
