//! API Regression Tests for the Mesh Crate Ecosystem
//!
//! These tests pin the public API of the re-exported crates. They are
//! organized in 3 tiers of increasing complexity:
//!
//! - Tier 1: Foundation (mesh-types)
//! - Tier 2: Densification (mesh-densify)
//! - Tier 3: Fur generation and model lifecycle (mesh-fur)
//!
//! If any of these tests fail after API changes, it indicates a breaking change
//! that needs a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use mesh::{densify, fur, prelude::*, types};

fn single_triangle() -> IndexedMesh {
    let mut mesh = IndexedMesh::new();
    mesh.push_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::z());
    mesh.push_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::z());
    mesh.push_vertex(Point3::new(0.0, 1.0, 0.0), Vector3::z());
    mesh.faces.push([0, 1, 2]);
    mesh
}

fn approx_eq(a: Point3<f32>, b: Point3<f32>) -> bool {
    (a - b).norm() < 1e-5
}

// =============================================================================
// TIER 1: Foundation - Basic Types and Primitives
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn indexed_mesh_construction() {
        let mesh = types::IndexedMesh::new();
        assert!(mesh.is_empty());

        let mesh = types::IndexedMesh::from_parts(
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
            vec![Vector3::z(); 3],
            vec![[0, 1, 2]],
        );
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.is_consistent());
    }

    #[test]
    fn raw_buffer_construction() {
        let mesh = types::IndexedMesh::from_raw(
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            &[0, 1, 2],
        )
        .unwrap();
        assert_eq!(mesh, single_triangle());
    }

    #[test]
    fn raw_buffer_shape_mismatch_is_reported() {
        let result = types::IndexedMesh::from_raw(
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            &[0.0, 0.0, 1.0],
            &[0, 1, 2],
        );
        assert_eq!(
            result,
            Err(types::MeshError::InputShapeMismatch {
                vertices: 3,
                normals: 1
            })
        );
    }

    #[test]
    fn computed_normals_for_loaders_without_normals() {
        let mut mesh = single_triangle();
        mesh.normals.clear();
        mesh.compute_vertex_normals();

        assert_eq!(mesh.normals.len(), 3);
        for n in &mesh.normals {
            assert!((n - Vector3::z()).norm() < 1e-6);
        }
    }

    #[test]
    fn tetrahedron_primitive() {
        let tet = types::unit_tetrahedron();
        assert_eq!(tet.vertex_count(), 4);
        assert_eq!(tet.face_count(), 4);
        let tri = tet.triangle(0).unwrap();
        assert!(tri.normal().is_some());
    }
}

// =============================================================================
// TIER 2: Densification
// =============================================================================

mod tier2_densification {
    use super::*;
    use mesh::densify::DensifyError;

    #[test]
    fn single_triangle_one_level() {
        let mesh = single_triangle();
        let out = densify::densify(&mesh.vertices, &mesh.normals, &mesh.faces, 1).unwrap();

        assert_eq!(out.vertices.len(), 4);
        assert_eq!(out.faces, vec![[0, 1, 3], [0, 2, 3], [1, 2, 3]]);
        assert!(approx_eq(out.vertices[3], Point3::new(1.0 / 3.0, 1.0 / 3.0, 0.0)));
    }

    #[test]
    fn params_builder_pattern() {
        let params = DensifyParams::default();
        assert_eq!(params.levels, 1);
        assert_eq!(params.max_faces, densify::DEFAULT_MAX_FACES);

        let params = DensifyParams::new()
            .with_levels(3)
            .with_max_faces(500)
            .with_parallel(true);
        assert_eq!(params.faces_per_face(), Some(27));
        assert!(params.parallel);
    }

    #[test]
    fn statistics_and_display() {
        let result = densify_mesh(&types::unit_tetrahedron(), &DensifyParams::new()).unwrap();
        assert_eq!(result.original_faces, 4);
        assert_eq!(result.final_faces, 12);
        assert!(result.was_densified());

        let display = format!("{result}");
        assert!(display.contains("faces"));
    }

    #[test]
    fn invalid_index_is_reported() {
        let mesh = single_triangle();
        let faces = [[5u32, 0, 1]];
        let result = densify::densify(&mesh.vertices, &mesh.normals, &faces, 1);
        assert!(matches!(result, Err(DensifyError::InvalidIndex { index: 5, .. })));
    }

    #[test]
    fn size_guard() {
        let params = DensifyParams::new().with_levels(10).with_max_faces(1_000);
        let result = densify_mesh(&types::unit_tetrahedron(), &params);
        assert!(matches!(result, Err(DensifyError::MeshTooLarge { .. })));
    }
}

// =============================================================================
// TIER 3: Fur Generation and Model Lifecycle
// =============================================================================

mod tier3_fur {
    use super::*;
    use mesh::fur::{ControlOutcome, FurError, LineVertex, ModelId};

    #[test]
    fn single_triangle_scenario() {
        let mesh = single_triangle();
        let params = FurParams::new().with_length(0.3);

        let tilted = extrude_mesh(&mesh, &params).unwrap();
        let swept = extrude_mesh(&mesh, &params.clone().with_bend(BendProfile::Swept)).unwrap();

        assert_eq!(tilted.vertices.len(), 12);
        for ((t, s), v) in tilted.strands().zip(swept.strands()).zip(&mesh.vertices) {
            let mid = v + Vector3::new(0.0, 0.0, 0.1);
            assert!(approx_eq(t.midpoint, mid));
            assert!(approx_eq(t.tip, mid + Vector3::new(0.2, 0.0, 0.0)));
            assert!(approx_eq(s.tip, mid + Vector3::new(0.2, 0.0, 0.2)));
        }
    }

    #[test]
    fn extrude_function_contract() {
        let mesh = single_triangle();
        let params = FurParams::new().with_density(1);
        let geometry = fur::extrude(&mesh.vertices, &mesh.normals, &mesh.faces, &params).unwrap();
        assert_eq!(geometry.strand_count(), 4);
        assert_eq!(geometry.primitive(), fur::Primitive::Lines);

        let short_normals = &mesh.normals[..2];
        let result = fur::extrude(&mesh.vertices, short_normals, &mesh.faces, &params);
        assert_eq!(
            result,
            Err(FurError::InputShapeMismatch {
                vertices: 3,
                normals: 2
            })
        );
    }

    #[test]
    fn gpu_records() {
        let geometry = FurBuilder::new(&single_triangle()).build().unwrap();
        let gpu = geometry.to_gpu_vertices();
        assert_eq!(gpu.len(), 12);
        assert_eq!(LineVertex::as_bytes(&gpu).len(), 12 * std::mem::size_of::<LineVertex>());
    }

    #[test]
    fn model_replace_in_place() {
        let mut model = FurModel::new(ModelId::new(1), single_triangle(), FurParams::new()).unwrap();
        assert!(model.set_params(FurParams::new().with_density(2)).unwrap());
        assert_eq!(model.id(), ModelId::new(1));
        assert_eq!(model.generation(), 1);
        assert_eq!(model.geometry().strand_count(), 7);
    }

    #[test]
    fn controls_and_scene() {
        let controls = FurControls::reproducible(11).with_max_density(1);
        let mut rng = controls.rng();
        assert_eq!(
            controls.apply(&FurParams::new(), FurCommand::DecreaseDensity, &mut rng),
            ControlOutcome::Unchanged
        );

        let mut scene = FurScene::with_controls(NullRenderer, controls);
        let id = scene.add_model(single_triangle(), FurParams::new()).unwrap();
        assert_eq!(scene.apply(FurCommand::IncreaseDensity).unwrap(), 1);
        assert_eq!(scene.apply(FurCommand::IncreaseDensity).unwrap(), 0);
        assert_eq!(scene.model(id).unwrap().params().density, 1);
    }
}
