//! A set of furred models driven by the control surface.

use hashbrown::HashMap;
use mesh_types::IndexedMesh;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::control::{ControlOutcome, FurCommand, FurControls};
use crate::error::FurResult;
use crate::model::{FurModel, ModelId};
use crate::params::FurParams;
use crate::render::Renderable;

/// Furred models plus the renderer they are drawn with.
///
/// Models keep their insertion order for drawing. Every change to a
/// model's fur is uploaded to the renderer under the model's stable id.
///
/// # Example
///
/// ```
/// use mesh_fur::{FurCommand, FurParams, FurScene, NullRenderer};
/// use mesh_types::unit_tetrahedron;
///
/// let mut scene = FurScene::new(NullRenderer);
/// let id = scene.add_model(unit_tetrahedron(), FurParams::new())?;
///
/// let rebuilt = scene.apply(FurCommand::IncreaseDensity)?;
/// assert_eq!(rebuilt, 1);
/// assert_eq!(scene.model(id).map(|m| m.geometry().strand_count()), Some(8));
/// # Ok::<(), mesh_fur::FurError>(())
/// ```
#[derive(Debug)]
pub struct FurScene<R: Renderable> {
    renderer: R,
    controls: FurControls,
    rng: StdRng,
    models: HashMap<ModelId, FurModel>,
    order: Vec<ModelId>,
    next_id: u64,
}

impl<R: Renderable> FurScene<R> {
    /// Create an empty scene with default controls.
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self::with_controls(renderer, FurControls::default())
    }

    /// Create an empty scene with the given controls.
    #[must_use]
    pub fn with_controls(renderer: R, controls: FurControls) -> Self {
        let rng = controls.rng();
        Self {
            renderer,
            controls,
            rng,
            models: HashMap::new(),
            order: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a model, generate its fur and upload it.
    ///
    /// # Errors
    ///
    /// Returns an error if the fur cannot be generated. Nothing is added
    /// or uploaded in that case.
    pub fn add_model(&mut self, base: IndexedMesh, params: FurParams) -> FurResult<ModelId> {
        let id = ModelId::new(self.next_id);
        let model = FurModel::new(id, base, params)?;
        self.next_id += 1;

        self.renderer.upload(id, model.geometry());
        self.models.insert(id, model);
        self.order.push(id);
        Ok(id)
    }

    /// Remove a model and release its buffers.
    pub fn remove_model(&mut self, id: ModelId) -> Option<FurModel> {
        let model = self.models.remove(&id)?;
        self.order.retain(|other| *other != id);
        self.renderer.release(id);
        info!("Removed {id}");
        Some(model)
    }

    /// Look up a model.
    #[must_use]
    pub fn model(&self, id: ModelId) -> Option<&FurModel> {
        self.models.get(&id)
    }

    /// Iterate over models in insertion order.
    pub fn models(&self) -> impl Iterator<Item = &FurModel> + '_ {
        self.order.iter().filter_map(|id| self.models.get(id))
    }

    /// Number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the scene has no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The controls commands are interpreted with.
    #[must_use]
    pub const fn controls(&self) -> &FurControls {
        &self.controls
    }

    /// The renderer.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, mutably.
    pub const fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consume the scene and return its renderer.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Apply a command to every model, in insertion order.
    ///
    /// Each model is updated independently, so [`FurCommand::RandomizeAngle`]
    /// draws a fresh angle per model. Returns the number of models whose
    /// fur was rebuilt.
    ///
    /// # Errors
    ///
    /// Stops at the first model whose fur cannot be rebuilt. That model
    /// keeps its previous fur; models before it have already been updated.
    pub fn apply(&mut self, command: FurCommand) -> FurResult<usize> {
        let mut rebuilt = 0;

        for id in &self.order {
            let Some(model) = self.models.get_mut(id) else {
                continue;
            };

            let ControlOutcome::Changed(params) =
                self.controls.apply(model.params(), command, &mut self.rng)
            else {
                continue;
            };

            if model.set_params(params)? {
                self.renderer.upload(*id, model.geometry());
                rebuilt += 1;
            }
        }

        debug!("Applied {command:?}: {rebuilt} models rebuilt");
        Ok(rebuilt)
    }

    /// Replace one model's parameters and upload the rebuilt fur.
    ///
    /// Returns `false` if the model does not exist or the parameters are
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the fur cannot be rebuilt. The model keeps its
    /// previous fur.
    pub fn set_params(&mut self, id: ModelId, params: FurParams) -> FurResult<bool> {
        let Some(model) = self.models.get_mut(&id) else {
            warn!("Ignoring parameters for unknown {id}");
            return Ok(false);
        };

        let changed = model.set_params(params)?;
        if changed {
            self.renderer.upload(id, model.geometry());
        }
        Ok(changed)
    }
}
