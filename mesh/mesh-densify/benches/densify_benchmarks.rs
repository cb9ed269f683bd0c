//! Benchmarks for mesh-densify operations.
//!
//! Run with: cargo bench -p mesh-densify
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-densify -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-densify -- --baseline main

#![allow(missing_docs, clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_densify::{DensifyParams, densify_mesh};
use mesh_types::{IndexedMesh, Point3, Vector3};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Create an icosahedron with radial normals (20 triangles).
fn create_icosahedron() -> IndexedMesh {
    let phi = f32::midpoint(1.0, 5.0_f32.sqrt());
    let a = 1.0;
    let b = 1.0 / phi;

    let ico_verts = [
        [0.0, b, -a],
        [b, a, 0.0],
        [-b, a, 0.0],
        [0.0, b, a],
        [0.0, -b, a],
        [-a, 0.0, b],
        [0.0, -b, -a],
        [a, 0.0, -b],
        [a, 0.0, b],
        [-a, 0.0, -b],
        [b, -a, 0.0],
        [-b, -a, 0.0],
    ];

    let mut mesh = IndexedMesh::with_capacity(12, 20);
    for v in &ico_verts {
        let p = Point3::new(v[0], v[1], v[2]);
        mesh.push_vertex(p, p.coords.normalize());
    }

    mesh.faces.extend_from_slice(&[
        [0, 1, 2],
        [3, 2, 1],
        [3, 4, 5],
        [3, 8, 4],
        [0, 6, 7],
        [0, 9, 6],
        [4, 10, 11],
        [6, 11, 10],
        [2, 5, 9],
        [11, 9, 5],
        [1, 7, 8],
        [10, 8, 7],
        [3, 5, 2],
        [3, 1, 8],
        [0, 2, 9],
        [0, 7, 1],
        [6, 9, 11],
        [6, 10, 7],
        [4, 11, 5],
        [4, 8, 10],
    ]);

    mesh
}

/// Tile `copies` translated icosahedra into one mesh.
fn create_ico_field(copies: usize) -> IndexedMesh {
    let ico = create_icosahedron();
    let mut mesh = IndexedMesh::new();
    for i in 0..copies {
        let mut tile = ico.clone();
        tile.translate(Vector3::new(3.0 * i as f32, 0.0, 0.0));
        mesh.merge(&tile);
    }
    mesh
}

// =============================================================================
// Densification Benchmarks
// =============================================================================

fn bench_densify(c: &mut Criterion) {
    let mut group = c.benchmark_group("Densify");

    let mesh = create_ico_field(50); // 1000 triangles

    for levels in [1u32, 2, 4, 6] {
        let expected = mesh.faces.len() * 3usize.pow(levels);
        group.throughput(Throughput::Elements(expected as u64));

        group.bench_with_input(BenchmarkId::new("sequential", levels), &levels, |b, &levels| {
            let params = DensifyParams::new().with_levels(levels);
            b.iter(|| densify_mesh(black_box(&mesh), black_box(&params)));
        });

        group.bench_with_input(BenchmarkId::new("parallel", levels), &levels, |b, &levels| {
            let params = DensifyParams::new().with_levels(levels).with_parallel(true);
            b.iter(|| densify_mesh(black_box(&mesh), black_box(&params)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_densify);
criterion_main!(benches);
