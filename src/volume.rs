//! Dense scalar density volume addressed by the lattice index space.

use glam::Vec3A;

use crate::types::LatticeDims;

/// One density value per lattice point.
///
/// Produced once per recomputation by the density stage, read-only during
/// extraction, and replaced (never mutated) when parameters or dimensions
/// change.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityVolume {
  dims: LatticeDims,
  values: Vec<f32>,
}

impl DensityVolume {
  /// Wrap an evaluated value buffer. The buffer length must match the
  /// lattice point count.
  pub fn from_values(dims: LatticeDims, values: Vec<f32>) -> Self {
    assert_eq!(values.len(), dims.point_count());
    Self { dims, values }
  }

  /// Build a volume by sampling a function of lattice coordinates.
  pub fn from_fn(dims: LatticeDims, f: impl Fn(u32, u32, u32) -> f32) -> Self {
    let mut values = Vec::with_capacity(dims.point_count());
    for z in 0..dims.z {
      for y in 0..dims.y {
        for x in 0..dims.x {
          values.push(f(x, y, z));
        }
      }
    }
    Self { dims, values }
  }

  pub fn dims(&self) -> LatticeDims {
    self.dims
  }

  pub fn values(&self) -> &[f32] {
    &self.values
  }

  /// Density at a lattice point.
  #[inline(always)]
  pub fn get(&self, x: u32, y: u32, z: u32) -> f32 {
    self.values[self.dims.index(x, y, z)]
  }

  /// Density gradient at a lattice point: central differences along each
  /// axis, falling back to one-sided differences on the volume borders.
  pub fn gradient(&self, x: u32, y: u32, z: u32) -> Vec3A {
    let d = self.dims;

    let (x0, x1) = (x.saturating_sub(1), (x + 1).min(d.x - 1));
    let (y0, y1) = (y.saturating_sub(1), (y + 1).min(d.y - 1));
    let (z0, z1) = (z.saturating_sub(1), (z + 1).min(d.z - 1));

    let gx = (self.get(x1, y, z) - self.get(x0, y, z)) / (x1 - x0).max(1) as f32;
    let gy = (self.get(x, y1, z) - self.get(x, y0, z)) / (y1 - y0).max(1) as f32;
    let gz = (self.get(x, y, z1) - self.get(x, y, z0)) / (z1 - z0).max(1) as f32;

    Vec3A::new(gx, gy, gz)
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
