mod simple_scene;

pub use self::simple_scene::*;
use crate::{gpu, Result};

/// Rendering backend the engine relies on for everything geometry-related.
pub trait Backend: Send + Sync {
    /// Fills the geometry buffer for given camera; `out` contains one entry
    /// per pixel, in row-major order.
    fn render_gbuffer(
        &self,
        camera: &gpu::Camera,
        out: &mut [gpu::GBufferData],
    ) -> Result<()>;

    /// Returns whether anything blocks given ray before it travels
    /// `max_distance`.
    fn is_occluded(&self, ray: &gpu::Ray, max_distance: f32) -> Result<bool>;

    /// Returns a short, human-readable description used in logs.
    fn describe(&self) -> String;
}
