use super::*;

#[test]
fn test_validate_accepts_multiples_of_eight() {
  assert!(LatticeDims::new(8, 8, 8).validate().is_ok());
  assert!(LatticeDims::new(64, 128, 8).validate().is_ok());
  assert!(LatticeDims::cubic(256).validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_and_partial_groups() {
  for dims in [
    LatticeDims::new(0, 8, 8),
    LatticeDims::new(8, 0, 8),
    LatticeDims::new(8, 8, 0),
    LatticeDims::new(12, 8, 8),
    LatticeDims::new(8, 7, 8),
    LatticeDims::new(8, 8, 63),
  ] {
    match dims.validate() {
      Err(PipelineError::InvalidDimension { granularity, .. }) => {
        assert_eq!(granularity, GROUP_SIZE);
      }
      other => panic!("expected InvalidDimension, got {:?}", other),
    }
  }
}

#[test]
fn test_invalid_dimension_names_the_axis() {
  let err = LatticeDims::new(8, 9, 8).validate().unwrap_err();
  match err {
    PipelineError::InvalidDimension { axis, value, .. } => {
      assert_eq!(axis, "y");
      assert_eq!(value, 9);
    }
    other => panic!("expected InvalidDimension, got {:?}", other),
  }
}

#[test]
fn test_counts() {
  let dims = LatticeDims::new(8, 16, 24);
  assert_eq!(dims.point_count(), 8 * 16 * 24);
  assert_eq!(dims.cell_count(), 7 * 15 * 23);
  assert_eq!(dims.min_dim(), 8);
}

#[test]
fn test_linear_index_is_x_fastest() {
  let dims = LatticeDims::new(8, 16, 24);
  assert_eq!(dims.index(0, 0, 0), 0);
  assert_eq!(dims.index(1, 0, 0), 1);
  assert_eq!(dims.index(0, 1, 0), 8);
  assert_eq!(dims.index(0, 0, 1), 8 * 16);
  assert_eq!(dims.index(3, 5, 7), 3 + 5 * 8 + 7 * 8 * 16);
}

#[test]
fn test_coords_round_trip() {
  let dims = LatticeDims::new(8, 16, 24);
  for index in [0, 1, 7, 8, 127, 128, 1000, dims.point_count() - 1] {
    let (x, y, z) = dims.coords(index);
    assert_eq!(dims.index(x, y, z), index);
  }
}

#[test]
fn test_default_dims() {
  assert_eq!(LatticeDims::default(), LatticeDims::cubic(DEFAULT_MESH_SIZE));
}

#[test]
fn test_vertex_layout_binds_as_two_vec3s() {
  assert_eq!(std::mem::size_of::<Vertex>(), 24);
  assert_eq!(std::mem::align_of::<Vertex>(), 4);
}
