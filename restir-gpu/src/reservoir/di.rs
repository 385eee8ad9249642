use core::ops::{Deref, DerefMut};

use bytemuck::{Pod, Zeroable};
use glam::{uvec4, UVec4, Vec3, Vec4, Vec4Swizzles};

use crate::{
    Hit, LightId, LightsView, Ray, Reservoir, Vec3Ext, HIT_DISTANCE_SENTINEL,
};

/// Reservoir used for direct lighting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiReservoir {
    pub reservoir: Reservoir<DiSample>,

    /// Distance to the sample's light, known once the sample has been
    /// confirmed visible
    pub hit_distance: f32,
}

impl DiReservoir {
    pub fn read(buffer: &[DiReservoirData], id: usize) -> Self {
        buffer[id].into()
    }

    pub fn write(self, buffer: &mut [DiReservoirData], id: usize) {
        buffer[id] = self.into();
    }
}

impl Default for DiReservoir {
    fn default() -> Self {
        Self {
            reservoir: Default::default(),
            hit_distance: HIT_DISTANCE_SENTINEL,
        }
    }
}

impl Deref for DiReservoir {
    type Target = Reservoir<DiSample>;

    fn deref(&self) -> &Self::Target {
        &self.reservoir
    }
}

impl DerefMut for DiReservoir {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.reservoir
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DiSample {
    pub light_id: LightId,

    /// Surface point the sample has been evaluated for
    pub geometry_point: Vec3,

    /// Point on the light the sample points at
    pub light_point: Vec3,

    /// Radiance arriving from the light at `geometry_point`
    pub radiance: Vec3,
}

impl DiSample {
    pub fn new(lights: LightsView, light_id: LightId, hit: Hit) -> Self {
        let light = lights.get(light_id);

        Self {
            light_id,
            geometry_point: hit.point,
            light_point: light.center(),
            radiance: light.radiance(hit.point),
        }
    }

    /// Evaluates the target function of this sample at given hit point.
    pub fn target(self, lights: LightsView, hit: Hit) -> f32 {
        lights.get(self.light_id).contribution(hit).sum().luma()
    }

    /// Re-evaluates this sample for another hit point; used when a sample
    /// gets reused by a different pixel (or frame).
    pub fn rebase(self, lights: LightsView, hit: Hit) -> Self {
        Self::new(lights, self.light_id, hit)
    }

    /// Returns a shadow ray going from `origin` towards the light, together
    /// with the distance it has to travel.
    pub fn ray(self, origin: Vec3) -> (Ray, f32) {
        let dir = self.light_point - origin;

        (Ray::new(origin, dir.normalize_or_zero()), dir.length())
    }
}

/// GPU-friendly representation of [`DiReservoir`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct DiReservoirData {
    /// x - geometry point x
    /// y - geometry point y
    /// z - geometry point z
    /// w - w_sum
    pub d0: Vec4,

    /// x - light point x
    /// y - light point y
    /// z - light point z
    /// w - w
    pub d1: Vec4,

    /// x - radiance r
    /// y - radiance g
    /// z - radiance b
    /// w - hit distance
    pub d2: Vec4,

    /// x - light id
    /// y - m
    pub d3: UVec4,
}

impl Default for DiReservoirData {
    fn default() -> Self {
        DiReservoir::default().into()
    }
}

impl From<DiReservoir> for DiReservoirData {
    fn from(res: DiReservoir) -> Self {
        Self {
            d0: res.sample.geometry_point.extend(res.w_sum),
            d1: res.sample.light_point.extend(res.w),
            d2: res.sample.radiance.extend(res.hit_distance),
            d3: uvec4(res.sample.light_id.get(), res.m, 0, 0),
        }
    }
}

impl From<DiReservoirData> for DiReservoir {
    fn from(data: DiReservoirData) -> Self {
        Self {
            reservoir: Reservoir {
                sample: DiSample {
                    light_id: LightId::new(data.d3.x),
                    geometry_point: data.d0.xyz(),
                    light_point: data.d1.xyz(),
                    radiance: data.d2.xyz(),
                },
                w_sum: data.d0.w,
                m: data.d3.y,
                w: data.d1.w,
            },
            hit_distance: data.d2.w,
        }
    }
}
