use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::gpu;

/// Point light, as described by a scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,

    /// Color, already multiplied by the light's intensity
    pub color: Vec3,

    #[serde(default = "Light::default_radius")]
    pub radius: f32,
}

impl Light {
    pub fn point(position: Vec3, color: Vec3, radius: f32) -> Self {
        Self {
            position,
            color,
            radius,
        }
    }

    fn default_radius() -> f32 {
        0.1
    }

    pub(crate) fn serialize(&self) -> gpu::Light {
        gpu::Light::point(self.position, self.radius, self.color)
    }
}
