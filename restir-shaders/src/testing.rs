use std::f32::consts::FRAC_PI_2;

use restir_gpu::prelude::*;

use crate::prim_raster::{self, PrimaryHit};

/// Returns a square camera hovering over the origin and looking straight down
/// at the ground plane.
pub fn camera(size: u32) -> Camera {
    camera_at(vec3(0.0, 4.0, 0.0), size)
}

pub fn camera_at(eye: Vec3, size: u32) -> Camera {
    let view = Mat4::look_at_rh(eye, vec3(eye.x, 0.0, eye.z), Vec3::Z);
    let projection = Mat4::perspective_rh(FRAC_PI_2, 1.0, 0.1, 100.0);
    let projection_view = projection * view;

    Camera {
        projection_view,
        ndc_to_world: projection_view.inverse(),
        view,
        origin: eye.extend(0.0),
        screen: vec4(size as f32, size as f32, 0.0, 0.0),
    }
}

/// Renders the `y = 0` plane as seen by given camera.
pub fn ground_gbuffer(camera: &Camera) -> Vec<GBufferData> {
    let mut gbuffer = vec![GBufferData::default(); pixels(camera).count()];

    for pos in pixels(camera) {
        prim_raster::main(
            pos,
            camera,
            |ray| {
                if ray.direction().y >= 0.0 {
                    return None;
                }

                Some(PrimaryHit {
                    distance: -ray.origin().y / ray.direction().y,
                    normal: Vec3::Y,
                    albedo: Vec3::ONE,
                    specular: 0.0,
                    shininess: 1.0,
                })
            },
            &mut gbuffer[camera.screen_to_idx(pos)],
        );
    }

    gbuffer
}

pub fn pixels(camera: &Camera) -> impl Iterator<Item = UVec2> {
    let size = camera.screen_size();

    (0..size.y).flat_map(move |y| (0..size.x).map(move |x| uvec2(x, y)))
}

/// Minimal light catalog, importance-sampled by luma.
pub struct Lights {
    items: Vec<Light>,
    probabilities: Vec<f32>,
    cdf: Vec<f32>,
}

impl Lights {
    pub fn new(items: Vec<Light>) -> Self {
        let weights: Vec<_> =
            items.iter().map(|light| light.color().luma()).collect();

        let total: f32 = weights.iter().sum();

        let probabilities: Vec<_> =
            weights.iter().map(|weight| weight / total).collect();

        let mut cdf: Vec<_> = probabilities
            .iter()
            .scan(0.0, |acc, probability| {
                *acc += probability;
                Some(*acc)
            })
            .collect();

        if let Some(last) = probabilities.iter().rposition(|&p| p > 0.0) {
            cdf[last..].fill(1.0);
        }

        Self {
            items,
            probabilities,
            cdf,
        }
    }

    pub fn view(&self) -> LightsView<'_> {
        LightsView::new(&self.items, &self.probabilities, &self.cdf)
    }
}
