use super::*;

use std::collections::HashMap;

use crate::surface::{capacity_for, SurfaceBuffer};
use crate::test_utils::{alternating_volume, sphere_volume, table, unit_lattice};
use crate::types::{LatticeDims, Vertex};

fn buffer_for(dims: LatticeDims) -> SurfaceBuffer {
  SurfaceBuffer::with_capacity(dims).unwrap()
}

#[test]
fn test_constant_field_above_isovalue_emits_nothing() {
  let dims = LatticeDims::new(16, 16, 16);
  let lattice = unit_lattice(dims);
  let volume = DensityVolume::from_fn(dims, |_, _, _| 10.0);
  let mut buffer = buffer_for(dims);

  let stats = extract(&lattice, &volume, table(), 0.0, &mut buffer).unwrap();
  assert_eq!(stats.triangles, 0);
  assert_eq!(stats.active_cells, 0);
  assert!(buffer.is_empty());
}

#[test]
fn test_constant_field_below_isovalue_emits_nothing() {
  let dims = LatticeDims::new(16, 16, 16);
  let lattice = unit_lattice(dims);
  let volume = DensityVolume::from_fn(dims, |_, _, _| -10.0);
  let mut buffer = buffer_for(dims);

  let stats = extract(&lattice, &volume, table(), 0.0, &mut buffer).unwrap();
  assert_eq!(stats.triangles, 0);
  assert!(buffer.is_empty());
}

#[test]
fn test_field_at_exact_isovalue_emits_nothing() {
  // Strict ">" classification: corners exactly at the isovalue count as
  // outside, so a field equal to it everywhere is homogeneous
  let dims = LatticeDims::new(8, 8, 8);
  let lattice = unit_lattice(dims);
  let volume = DensityVolume::from_fn(dims, |_, _, _| 0.0);
  let mut buffer = buffer_for(dims);

  let stats = extract(&lattice, &volume, table(), 0.0, &mut buffer).unwrap();
  assert_eq!(stats.triangles, 0);
}

#[test]
fn test_dimension_mismatch_is_rejected() {
  let lattice = unit_lattice(LatticeDims::new(16, 16, 16));
  let volume = DensityVolume::from_fn(LatticeDims::new(8, 8, 8), |_, _, _| 0.0);
  let mut buffer = buffer_for(LatticeDims::new(16, 16, 16));

  assert!(matches!(
    extract(&lattice, &volume, table(), 0.0, &mut buffer),
    Err(PipelineError::DimensionMismatch { .. })
  ));
}

#[test]
fn test_single_straddling_corner_cell() {
  // Density -1 everywhere except the bottom face of the volume-corner
  // cell, whose 8 samples read {1,1,1,1,-1,-1,-1,-1}
  let dims = LatticeDims::new(8, 8, 8);
  let lattice = unit_lattice(dims);
  let volume =
    DensityVolume::from_fn(dims, |x, y, z| if z == 0 && x <= 1 && y <= 1 { 1.0 } else { -1.0 });
  let mut buffer = buffer_for(dims);

  let stats = extract(&lattice, &volume, table(), 0.0, &mut buffer).unwrap();

  // The straddling cell is configuration 15 (2 triangles); its three
  // neighbors sharing the raised samples are configurations 9, 3 and 1
  // (2 + 2 + 1 triangles)
  assert_eq!(stats.triangles, 7);
  assert_eq!(stats.active_cells, 4);

  // Configuration 15 crosses the four vertical edges; with ±1 corner
  // densities the crossings sit exactly on the z = 0.5 midplane
  for expected in [
    [0.0, 0.0, 0.5],
    [1.0, 0.0, 0.5],
    [1.0, 1.0, 0.5],
    [0.0, 1.0, 0.5],
  ] {
    assert!(
      buffer.vertices().iter().any(|v| v.position == expected),
      "missing midplane vertex at {:?}",
      expected
    );
  }
}

#[test]
fn test_extraction_is_deterministic() {
  let dims = LatticeDims::new(24, 24, 24);
  let lattice = unit_lattice(dims);
  let volume = sphere_volume(dims, [11.3, 11.7, 12.1], 7.9);

  let mut first = buffer_for(dims);
  extract(&lattice, &volume, table(), 0.0, &mut first).unwrap();

  let mut second = buffer_for(dims);
  extract(&lattice, &volume, table(), 0.0, &mut second).unwrap();

  let bits = |buffer: &SurfaceBuffer| -> Vec<u32> {
    buffer
      .vertices()
      .iter()
      .flat_map(|v| v.position.iter().chain(v.normal.iter()).map(|c| c.to_bits()))
      .collect()
  };
  assert_eq!(bits(&first), bits(&second));
}

#[test]
fn test_sphere_surface_is_watertight() {
  let dims = LatticeDims::new(32, 32, 32);
  let lattice = unit_lattice(dims);
  let volume = sphere_volume(dims, [15.7, 15.9, 16.1], 10.3);
  let mut buffer = buffer_for(dims);

  let stats = extract(&lattice, &volume, table(), 0.0, &mut buffer).unwrap();
  assert!(stats.triangles > 0);

  // Cells sharing a lattice edge compute bit-identical crossing vertices,
  // so vertices can be keyed by their exact bit patterns. A closed surface
  // away from the volume borders shares every undirected triangle edge
  // between exactly two triangles.
  let key = |v: &Vertex| v.position.map(f32::to_bits);
  let mut edge_uses: HashMap<([u32; 3], [u32; 3]), u32> = HashMap::new();

  for triangle in buffer.vertices().chunks_exact(3) {
    for (a, b) in [(0, 1), (1, 2), (2, 0)] {
      let (ka, kb) = (key(&triangle[a]), key(&triangle[b]));
      let edge = if ka <= kb { (ka, kb) } else { (kb, ka) };
      *edge_uses.entry(edge).or_insert(0) += 1;
    }
  }

  for (edge, uses) in &edge_uses {
    assert_eq!(*uses, 2, "boundary edge {:?} used {} times", edge, uses);
  }
}

#[test]
fn test_sphere_normals_face_outward() {
  let dims = LatticeDims::new(32, 32, 32);
  let center = [15.7f32, 15.9, 16.1];
  let lattice = unit_lattice(dims);
  let volume = sphere_volume(dims, center, 10.3);
  let mut buffer = buffer_for(dims);

  extract(&lattice, &volume, table(), 0.0, &mut buffer).unwrap();

  // Density increases toward the center, so every normal points away
  // from it
  for vertex in buffer.vertices() {
    let radial = [
      vertex.position[0] - center[0],
      vertex.position[1] - center[1],
      vertex.position[2] - center[2],
    ];
    let dot =
      vertex.normal[0] * radial[0] + vertex.normal[1] * radial[1] + vertex.normal[2] * radial[2];
    assert!(dot > 0.0, "inward normal at {:?}", vertex.position);
  }
}

#[test]
fn test_capacity_overflow_is_detected_not_truncated() {
  // Alternating per-point parity makes every cell emit 4 triangles, well
  // past the shrunken reservation at 64 cells and above
  let dims = LatticeDims::new(64, 64, 64);
  let lattice = unit_lattice(dims);
  let volume = alternating_volume(dims);
  let mut buffer = buffer_for(dims);

  let err = extract(&lattice, &volume, table(), 0.0, &mut buffer).unwrap_err();
  match err {
    PipelineError::CapacityOverflow { needed, capacity } => {
      assert_eq!(needed, 4 * dims.cell_count());
      assert_eq!(capacity, capacity_for(dims));
    }
    other => panic!("expected CapacityOverflow, got {:?}", other),
  }

  // Detection happens before compaction; the buffer is untouched
  assert!(buffer.is_empty());
}

#[test]
fn test_stats_match_buffer_contents() {
  let dims = LatticeDims::new(16, 16, 16);
  let lattice = unit_lattice(dims);
  let volume = sphere_volume(dims, [7.5, 7.5, 7.5], 5.0);
  let mut buffer = buffer_for(dims);

  let stats = extract(&lattice, &volume, table(), 0.0, &mut buffer).unwrap();
  assert_eq!(stats.triangles, buffer.triangle_count());
  assert!(stats.active_cells > 0);
  assert!(stats.active_cells <= dims.cell_count());
}
