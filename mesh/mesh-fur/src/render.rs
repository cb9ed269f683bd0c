//! Rendering seam.
//!
//! The fur core never touches graphics state. A rendering backend
//! implements [`Renderable`] and receives fresh buffers whenever a model's
//! fur is created or rebuilt.

use crate::geometry::FurGeometry;
use crate::model::ModelId;

/// A backend that draws fur geometry.
///
/// Buffers are drawn with [`FurGeometry::primitive`]. An upload for an id
/// that is already resident replaces the previous buffers.
pub trait Renderable {
    /// Upload (or replace) the buffers drawn for `id`.
    fn upload(&mut self, id: ModelId, geometry: &FurGeometry);

    /// Drop the buffers held for `id`.
    fn release(&mut self, id: ModelId);
}

/// Renderer that draws nothing, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderable for NullRenderer {
    fn upload(&mut self, _id: ModelId, _geometry: &FurGeometry) {}

    fn release(&mut self, _id: ModelId) {}
}

impl<R: Renderable + ?Sized> Renderable for &mut R {
    fn upload(&mut self, id: ModelId, geometry: &FurGeometry) {
        (**self).upload(id, geometry);
    }

    fn release(&mut self, id: ModelId) {
        (**self).release(id);
    }
}
