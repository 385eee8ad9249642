mod presets;

use std::fmt;
use std::fs;
use std::path::Path;

use fxhash::FxHashMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub use self::presets::*;
use crate::{BoundingBox, Error, Light, Result, SceneSettings};

/// Everything the engine needs to know about a scene besides its geometry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub settings: SceneSettings,
    pub lights: Vec<Light>,
}

impl SceneDescription {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        debug!("Loading scene from `{}`", path.display());

        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

type SceneFactory =
    Box<dyn Fn(&BoundingBox) -> SceneDescription + Send + Sync>;

/// Named scene descriptions; each description is produced from the bounds
/// of the scene's geometry.
#[derive(Default)]
pub struct SceneRegistry {
    scenes: FxHashMap<String, SceneFactory>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with all of the built-in scenes.
    pub fn builtin() -> Self {
        let mut this = Self::new();

        this.register("arcade", arcade);
        this.register("dragon_buddha", dragon_buddha);
        this.register("sponza", |_: &BoundingBox| sponza());
        this
    }

    pub fn register<F>(&mut self, name: impl ToString, factory: F)
    where
        F: Fn(&BoundingBox) -> SceneDescription + Send + Sync + 'static,
    {
        self.scenes.insert(name.to_string(), Box::new(factory));
    }

    pub fn get(
        &self,
        name: &str,
        bounds: &BoundingBox,
    ) -> Result<SceneDescription> {
        let factory = self
            .scenes
            .get(name)
            .ok_or_else(|| Error::UnknownScene(name.to_string()))?;

        let scene = factory(bounds);

        info!(
            "Scene `{name}` loaded: {} light(s); {}",
            scene.lights.len(),
            scene.settings.describe()
        );

        Ok(scene)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(|name| name.as_str())
    }
}

impl fmt::Debug for SceneRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.scenes.keys()).finish()
    }
}
