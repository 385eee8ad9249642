use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4, Vec4Swizzles};

use crate::{Brdf, F32Ext, Hit};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Light {
    /// x - position x
    /// y - position y
    /// z - position z
    /// w - radius
    pub d0: Vec4,

    /// x - color r (pre-scaled by intensity)
    /// y - color g (pre-scaled by intensity)
    /// z - color b (pre-scaled by intensity)
    /// w - falloff
    pub d1: Vec4,
}

impl Light {
    /// Sharpness of the falloff curve; large enough for the falloff to
    /// saturate for every light that has a non-zero radius.
    const FALLOFF_SHARPNESS: f32 = 1.0 / 0.0001;

    pub fn point(position: Vec3, radius: f32, color: Vec3) -> Self {
        Self {
            d0: position.extend(radius),
            d1: color.extend(Self::falloff_for(radius)),
        }
    }

    /// Derives falloff from the light's radius.
    pub fn falloff_for(radius: f32) -> f32 {
        let falloff = radius.sqr() * Self::FALLOFF_SHARPNESS.exp();

        if falloff.is_nan() {
            1.0
        } else {
            falloff.min(1.0)
        }
    }

    pub fn center(&self) -> Vec3 {
        self.d0.xyz()
    }

    pub fn radius(&self) -> f32 {
        self.d0.w
    }

    pub fn color(&self) -> Vec3 {
        self.d1.xyz()
    }

    pub fn falloff(&self) -> f32 {
        self.d1.w
    }

    /// Returns radiance arriving from this light at given point, ignoring
    /// visibility.
    pub fn radiance(&self, point: Vec3) -> Vec3 {
        let distance_squared = (self.center() - point)
            .length_squared()
            .max(self.radius().sqr())
            .max(0.0001);

        self.color() * self.falloff() / distance_squared
    }

    /// Returns unshadowed contribution of this light on given hit point.
    pub fn contribution(&self, hit: Hit) -> LightContribution {
        if hit.is_none() {
            return Default::default();
        }

        let l = (self.center() - hit.point).normalize_or_zero();
        let brdf = Brdf::new(&hit.gbuffer).eval(l, hit.view_dir());

        if brdf == Vec3::ZERO {
            return Default::default();
        }

        LightContribution {
            radiance: self.radiance(hit.point),
            brdf,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LightId(u32);

impl LightId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightContribution {
    /// Radiance arriving at the hit point
    pub radiance: Vec3,

    /// BRDF times the cosine term
    pub brdf: Vec3,
}

impl LightContribution {
    pub fn sum(&self) -> Vec3 {
        self.radiance * self.brdf
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;
    use crate::GBufferEntry;

    fn hit(normal: Vec3) -> Hit {
        Hit::new(
            vec3(0.0, 5.0, 5.0),
            GBufferEntry {
                position: Vec3::ZERO,
                depth: 5.0,
                normal,
                albedo: Vec3::ONE,
                specular: 0.0,
                shininess: 1.0,
            },
        )
    }

    #[test]
    fn falloff_saturates() {
        assert_eq!(1.0, Light::falloff_for(0.1));
        assert_eq!(1.0, Light::falloff_for(0.0001));
        assert_eq!(1.0, Light::falloff_for(0.0));
    }

    #[test]
    fn radiance_follows_inverse_square_law() {
        let light = Light::point(vec3(0.0, 2.0, 0.0), 0.1, Vec3::splat(8.0));

        assert_relative_eq!(light.radiance(Vec3::ZERO).x, 2.0);
        assert_relative_eq!(light.radiance(vec3(0.0, -2.0, 0.0)).x, 0.5);
    }

    #[test]
    fn contribution() {
        let light = Light::point(vec3(0.0, 2.0, 0.0), 0.1, Vec3::splat(8.0));
        let actual = light.contribution(hit(Vec3::Y)).sum();

        assert_relative_eq!(actual.x, 2.0 / core::f32::consts::PI);
    }

    #[test]
    fn contribution_of_back_facing_light_is_zero() {
        let light = Light::point(vec3(0.0, 2.0, 0.0), 0.1, Vec3::splat(8.0));

        assert_eq!(Vec3::ZERO, light.contribution(hit(-Vec3::Y)).sum());
    }
}
