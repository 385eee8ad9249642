use core::f32::consts::PI;

use glam::Vec3;

use crate::GBufferEntry;

/// Lambertian diffuse lobe.
#[derive(Clone, Copy)]
pub struct DiffuseBrdf {
    albedo: Vec3,
}

impl DiffuseBrdf {
    pub fn new(gbuffer: &GBufferEntry) -> Self {
        Self {
            albedo: gbuffer.albedo,
        }
    }

    pub fn eval(self) -> Vec3 {
        self.albedo / PI
    }
}

/// Energy-normalized Blinn-Phong lobe.
#[derive(Clone, Copy)]
pub struct SpecularBrdf {
    intensity: f32,
    shininess: f32,
}

impl SpecularBrdf {
    pub fn new(gbuffer: &GBufferEntry) -> Self {
        Self {
            intensity: gbuffer.specular,
            shininess: gbuffer.shininess,
        }
    }

    pub fn eval(self, n_o_h: f32) -> f32 {
        if self.intensity <= 0.0 {
            return 0.0;
        }

        let norm = (self.shininess + 8.0) / (8.0 * PI);

        self.intensity * norm * n_o_h.max(0.0).powf(self.shininess)
    }
}

/// BRDF used both as the resampling target and for the final shading.
#[derive(Clone, Copy)]
pub struct Brdf<'a> {
    gbuffer: &'a GBufferEntry,
}

impl<'a> Brdf<'a> {
    pub fn new(gbuffer: &'a GBufferEntry) -> Self {
        Self { gbuffer }
    }

    /// Evaluates the BRDF for light coming from `l` and leaving towards `v`,
    /// already multiplied by the cosine term; zero below the horizon.
    pub fn eval(&self, l: Vec3, v: Vec3) -> Vec3 {
        let n = self.gbuffer.normal;
        let n_o_l = n.dot(l);

        if n_o_l <= 0.0 {
            return Vec3::ZERO;
        }

        let diffuse = DiffuseBrdf::new(self.gbuffer).eval();

        let specular = {
            let h = (l + v).normalize_or_zero();

            SpecularBrdf::new(self.gbuffer).eval(n.dot(h))
        };

        (diffuse + Vec3::splat(specular)) * n_o_l
    }
}
