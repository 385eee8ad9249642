//! Real-time direct lighting through reservoir-based spatio-temporal
//! importance resampling (ReSTIR DI).
//!
//! Engine keeps the scene-wide state (light catalog, settings and the
//! backend used to trace rays), while each camera carries its own per-pixel
//! buffers; see [`Engine::create_camera()`] and [`CameraController::render()`].

#![allow(clippy::len_without_is_empty)]

mod backend;
mod buffers;
mod camera;
mod camera_controller;
mod error;
mod light;
mod lights;
mod scene;
mod settings;
mod utils;

use derivative::Derivative;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
pub use restir_gpu as gpu;

pub use self::backend::*;
pub use self::buffers::*;
pub use self::camera::*;
pub use self::camera_controller::*;
pub use self::error::*;
pub use self::light::*;
pub use self::lights::*;
pub use self::scene::*;
pub use self::settings::*;
pub use self::utils::*;

#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Engine<B>
where
    B: Backend,
{
    #[derivative(Debug = "ignore")]
    backend: B,
    lights: Lights,
    settings: SceneSettings,
}

impl<B> Engine<B>
where
    B: Backend,
{
    pub fn new(backend: B, scene: SceneDescription) -> Result<Self> {
        info!("Initializing engine; backend={}", backend.describe());

        scene.settings.validate()?;

        let lights = Lights::build(scene.lights)?;

        info!("Engine initialized; {}", scene.settings.describe());

        Ok(Self {
            backend,
            lights,
            settings: scene.settings,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Creates a camera whose noise gets seeded from the operating system.
    pub fn create_camera(&self, camera: Camera) -> Result<CameraController> {
        CameraController::new(self, camera, StdRng::from_entropy())
    }

    /// Creates a camera that renders deterministically, given the same seed
    /// and the same sequence of calls.
    pub fn create_camera_with_seed(
        &self,
        camera: Camera,
        seed: u64,
    ) -> Result<CameraController> {
        CameraController::new(self, camera, StdRng::seed_from_u64(seed))
    }
}
