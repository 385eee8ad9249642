use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4, Vec4Swizzles};

use crate::SurfaceThresholds;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub struct DiSamplingPassParams {
    pub seed: u32,
    pub ris_samples: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub struct DiTemporalResamplingPassParams {
    pub seed: u32,
    pub max_history: u32,

    /// Whether camera has moved since the previous frame (1) or not (0)
    pub motion: u32,

    pub ws_radius_threshold: f32,
    pub linear_depth_threshold: f32,
    pub normal_threshold: f32,
}

impl DiTemporalResamplingPassParams {
    pub fn motion(&self) -> bool {
        self.motion != 0
    }

    /// Returns thresholds used to validate previous frame's samples; depth is
    /// validated only for a static camera.
    pub fn thresholds(&self) -> SurfaceThresholds {
        SurfaceThresholds {
            ws_radius: self.ws_radius_threshold,
            linear_depth: if self.motion() {
                None
            } else {
                Some(self.linear_depth_threshold)
            },
            normal: self.normal_threshold,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub struct DiSpatialResamplingPassParams {
    pub seed: u32,
    pub samples: u32,
    pub radius: f32,
    pub ws_radius_threshold: f32,
    pub normal_threshold: f32,
}

impl DiSpatialResamplingPassParams {
    pub fn thresholds(&self) -> SurfaceThresholds {
        SurfaceThresholds {
            ws_radius: self.ws_radius_threshold,
            linear_depth: None,
            normal: self.normal_threshold,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub struct DiShadingPassParams {
    /// x - ambient r
    /// y - ambient g
    /// z - ambient b
    /// w - light exponent
    pub d0: Vec4,
}

impl DiShadingPassParams {
    pub fn new(ambient: Vec3, light_exponent: f32) -> Self {
        Self {
            d0: ambient.extend(light_exponent),
        }
    }

    pub fn ambient(&self) -> Vec3 {
        self.d0.xyz()
    }

    pub fn light_exponent(&self) -> f32 {
        self.d0.w
    }
}
