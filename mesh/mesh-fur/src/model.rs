//! Furred models with replace-in-place regeneration.

use std::fmt;

use mesh_types::IndexedMesh;
use tracing::{debug, info};

use crate::error::FurResult;
use crate::extrude::extrude_mesh;
use crate::geometry::FurGeometry;
use crate::params::FurParams;

/// Stable identity of a model within a scene.
///
/// Regenerating fur never changes a model's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(u64);

impl ModelId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model#{}", self.0)
    }
}

/// A base mesh together with its current fur.
///
/// The fur is always the output of extruding `base` with `params`.
/// Changing the parameters rebuilds the fur in place: the id stays the
/// same and only the generation counter advances.
#[derive(Debug, Clone)]
pub struct FurModel {
    id: ModelId,
    base: IndexedMesh,
    params: FurParams,
    geometry: FurGeometry,
    generation: u64,
}

impl FurModel {
    /// Create a model and generate its initial fur.
    ///
    /// # Errors
    ///
    /// Returns an error if the base mesh cannot be extruded with `params`.
    pub fn new(id: ModelId, base: IndexedMesh, params: FurParams) -> FurResult<Self> {
        let geometry = extrude_mesh(&base, &params)?;
        info!(
            "Created {id}: {} base vertices, {} strands",
            base.vertices.len(),
            geometry.strand_count()
        );

        Ok(Self {
            id,
            base,
            params,
            geometry,
            generation: 0,
        })
    }

    /// Model identity.
    #[must_use]
    pub const fn id(&self) -> ModelId {
        self.id
    }

    /// The mesh the fur grows from.
    #[must_use]
    pub const fn base(&self) -> &IndexedMesh {
        &self.base
    }

    /// Parameters of the current fur.
    #[must_use]
    pub const fn params(&self) -> &FurParams {
        &self.params
    }

    /// Current fur.
    #[must_use]
    pub const fn geometry(&self) -> &FurGeometry {
        &self.geometry
    }

    /// Number of times the fur has been rebuilt since creation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the parameters and rebuild the fur.
    ///
    /// Returns `false` without rebuilding if `params` equals the current
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the new fur cannot be built. The model then
    /// keeps its previous parameters and geometry.
    pub fn set_params(&mut self, params: FurParams) -> FurResult<bool> {
        if params == self.params {
            debug!("{}: parameters unchanged, skipping rebuild", self.id);
            return Ok(false);
        }

        let geometry = extrude_mesh(&self.base, &params)?;
        self.params = params;
        self.replace_geometry(geometry);
        Ok(true)
    }

    /// Rebuild the fur with the current parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the fur cannot be built. The previous geometry
    /// is kept.
    pub fn rebuild(&mut self) -> FurResult<()> {
        let geometry = extrude_mesh(&self.base, &self.params)?;
        self.replace_geometry(geometry);
        Ok(())
    }

    fn replace_geometry(&mut self, geometry: FurGeometry) {
        self.geometry = geometry;
        self.generation += 1;
        info!(
            "Rebuilt {} (generation {}): {} strands, length={}, angle={}, density={}",
            self.id,
            self.generation,
            self.geometry.strand_count(),
            self.params.length,
            self.params.angle,
            self.params.density
        );
    }
}
