//! Benchmarks for the density, extraction, and full recompute stages.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use isofield::{
  extract, lattice, noise, recompute, DensityVolume, LatticeDims, NoiseParams, SurfaceBuffer,
  SurfaceBufferManager, SurfaceParams, TriTable,
};

/// Sphere density field, positive inside.
fn sphere_volume(dims: LatticeDims, center: [f32; 3], radius: f32) -> DensityVolume {
  DensityVolume::from_fn(dims, |x, y, z| {
    let dx = x as f32 - center[0];
    let dy = y as f32 - center[1];
    let dz = z as f32 - center[2];
    radius - (dx * dx + dy * dy + dz * dz).sqrt()
  })
}

/// Benchmark fractal density evaluation over a 64³ lattice.
fn bench_density(c: &mut Criterion) {
  let dims = LatticeDims::cubic(64);
  let lattice = lattice::generate(dims, [0.0; 3], 1.0).unwrap();

  let mut group = c.benchmark_group("density");
  for (label, params) in [
    ("classic", NoiseParams::default()),
    ("simplex", NoiseParams::default().with_simplex(true)),
    ("ridged", NoiseParams::default().with_ridged(true)),
  ] {
    group.bench_with_input(BenchmarkId::new("evaluate 64³", label), &params, |b, params| {
      b.iter(|| black_box(noise::evaluate(black_box(&lattice), params)))
    });
  }
  group.finish();
}

/// Benchmark extraction of a sphere surface at 64³, reusing one buffer.
fn bench_extract(c: &mut Criterion) {
  let dims = LatticeDims::cubic(64);
  let lattice = lattice::generate(dims, [0.0; 3], 1.0).unwrap();
  let volume = sphere_volume(dims, [31.5, 31.5, 31.5], 24.0);
  let table = TriTable::load().unwrap();
  let mut buffer = SurfaceBuffer::with_capacity(dims).unwrap();

  c.bench_function("marching::extract (64³ sphere)", |b| {
    b.iter(|| {
      buffer.clear();
      let stats = extract(
        black_box(&lattice),
        black_box(&volume),
        table,
        0.0,
        &mut buffer,
      )
      .unwrap();
      black_box(stats)
    })
  });
}

/// Benchmark the full recomputation with buffer reuse between frames.
fn bench_recompute(c: &mut Criterion) {
  let params = SurfaceParams::default().with_dims(LatticeDims::cubic(64));
  let mut manager = SurfaceBufferManager::new();

  c.bench_function("pipeline::recompute (64³ terrain)", |b| {
    b.iter(|| {
      let output = recompute(black_box(&params), &mut manager).unwrap();
      let triangles = output.stats.triangles;
      manager.release(output.surface);
      black_box(triangles)
    })
  });
}

criterion_group!(benches, bench_density, bench_extract, bench_recompute);
criterion_main!(benches);
