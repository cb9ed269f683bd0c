//! Property-based tests for fur extrusion.
//!
//! Run with: cargo test -p mesh-fur -- proptest

#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]

use mesh_fur::{BendProfile, FurCommand, FurControls, FurParams, extrude, extrude_mesh};
use mesh_types::{IndexedMesh, Point3, Vector3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_point() -> impl Strategy<Value = Point3<f32>> {
    prop::array::uniform3(-10.0..10.0f32).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

fn arb_unit_normal() -> impl Strategy<Value = Vector3<f32>> {
    prop::array::uniform3(-1.0..1.0f32).prop_map(|[x, y, z]| {
        let v = Vector3::new(x, y, z);
        v.try_normalize(1e-3).unwrap_or_else(Vector3::z)
    })
}

fn arb_mesh(max_vertices: usize, max_faces: usize) -> impl Strategy<Value = IndexedMesh> {
    (3..=max_vertices).prop_flat_map(move |num_vertices| {
        let vertices = prop::collection::vec(arb_point(), num_vertices);
        let normals = prop::collection::vec(arb_unit_normal(), num_vertices);
        let face = prop::array::uniform3(0..num_vertices as u32);
        let faces = prop::collection::vec(face, 0..=max_faces);

        (vertices, normals, faces)
            .prop_map(|(vertices, normals, faces)| IndexedMesh::from_parts(vertices, normals, faces))
    })
}

fn arb_bend() -> impl Strategy<Value = BendProfile> {
    prop_oneof![Just(BendProfile::Tilted), Just(BendProfile::Swept)]
}

fn arb_params() -> impl Strategy<Value = FurParams> {
    (-1.0..1.0f32, -6.3..6.3f32, 0u32..3, arb_bend()).prop_map(|(length, angle, density, bend)| {
        FurParams::new()
            .with_length(length)
            .with_angle(angle)
            .with_density(density)
            .with_bend(bend)
    })
}

// =============================================================================
// Property Tests: Buffer Shape
// =============================================================================

proptest! {
    /// Without densification there are exactly four points per vertex.
    #[test]
    fn four_points_per_vertex(mesh in arb_mesh(30, 20), length in -1.0..1.0f32, angle in -3.2..3.2f32) {
        let params = FurParams::new().with_length(length).with_angle(angle);
        let fur = extrude_mesh(&mesh, &params).unwrap();

        prop_assert_eq!(fur.vertices.len(), 4 * mesh.vertices.len());
        prop_assert_eq!(fur.normals.len(), fur.vertices.len());
    }

    /// With densification there is one strand per densified vertex.
    #[test]
    fn strand_count_follows_density(mesh in arb_mesh(15, 10), params in arb_params()) {
        let fur = extrude_mesh(&mesh, &params).unwrap();
        let per_face = 3usize.pow(params.density);
        let expected = mesh.vertices.len() + mesh.faces.len() * (per_face - 1) / 2;

        prop_assert_eq!(fur.strand_count(), expected);
    }
}

// =============================================================================
// Property Tests: Strand Geometry
// =============================================================================

proptest! {
    /// Roots are the source vertices and midpoints sit a third of the way
    /// along the normal.
    #[test]
    fn roots_and_midpoints(mesh in arb_mesh(20, 0), params in arb_params()) {
        let fur = extrude(&mesh.vertices, &mesh.normals, &mesh.faces, &params).unwrap();

        for (strand, (v, n)) in fur.strands().zip(mesh.vertices.iter().zip(&mesh.normals)) {
            prop_assert_eq!(strand.root, *v);
            prop_assert_eq!(strand.normal, *n);
            let expected_mid = v + n * (params.length / 3.0);
            prop_assert!((strand.midpoint - expected_mid).norm() < 1e-5);
        }
    }

    /// Segments are connected: every strand's second segment starts at the
    /// end of its first.
    #[test]
    fn segments_are_connected(mesh in arb_mesh(20, 10), params in arb_params()) {
        let fur = extrude_mesh(&mesh, &params).unwrap();
        for chunk in fur.vertices.chunks_exact(4) {
            prop_assert_eq!(chunk[1], chunk[2]);
        }
    }

    /// The tilted outer segment is always two thirds of the length.
    #[test]
    fn tilted_tip_length(mesh in arb_mesh(10, 5), length in 0.0..2.0f32, angle in -6.3..6.3f32) {
        let params = FurParams::new().with_length(length).with_angle(angle);
        let fur = extrude_mesh(&mesh, &params).unwrap();

        for strand in fur.strands() {
            let tip_len = (strand.tip - strand.midpoint).norm();
            prop_assert!((tip_len - length * 2.0 / 3.0).abs() < 1e-4);
        }
    }

    /// Extrusion is deterministic.
    #[test]
    fn extrusion_is_pure(mesh in arb_mesh(15, 10), params in arb_params()) {
        let a = extrude_mesh(&mesh, &params).unwrap();
        let b = extrude_mesh(&mesh, &params).unwrap();
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// Property Tests: Controls
// =============================================================================

proptest! {
    /// Density commands never leave `0..=max_density`.
    #[test]
    fn density_stays_in_bounds(
        max_density in 0u32..6,
        commands in prop::collection::vec(prop::bool::ANY, 0..40),
    ) {
        let controls = FurControls::reproducible(1).with_max_density(max_density);
        let mut rng = controls.rng();
        let mut params = FurParams::new();

        for up in commands {
            let command = if up { FurCommand::IncreaseDensity } else { FurCommand::DecreaseDensity };
            if let mesh_fur::ControlOutcome::Changed(next) = controls.apply(&params, command, &mut rng) {
                params = next;
            }
            prop_assert!(params.density <= max_density);
        }
    }
}
