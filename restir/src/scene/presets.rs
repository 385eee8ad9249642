//! Built-in scenes.

use glam::{vec3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{BoundingBox, Light, SceneDescription, SceneSettings};

/// Two random lights scattered inside the scene plus a dim green one.
pub fn arcade(bounds: &BoundingBox) -> SceneDescription {
    const LIGHTS: usize = 2;

    let epsilon = bounds.radius() / 10.0;
    let min = bounds.min() + bounds.extent() * epsilon;
    let max = bounds.max() - bounds.extent() * epsilon;
    let extent = max - min;
    let mut rng = StdRng::seed_from_u64(333);

    let mut lights: Vec<_> = (0..LIGHTS)
        .map(|_| {
            let color = random_color(&mut rng) * 50.0 / (LIGHTS as f32);
            let position = min + extent * random_color(&mut rng);

            Light::point(position, color, 0.0001)
        })
        .collect();

    lights.push(Light::point(
        vec3(-0.335609, 1.04073, 0.507941),
        vec3(0.0, 0.5, 0.0),
        0.0001,
    ));

    SceneDescription {
        settings: SceneSettings {
            ris_samples: 16,
            reservoirs_per_pixel: 3,
            shading_light_exponent: 8.0,
            ambient_color: Vec3::splat(0.01),
            ..Default::default()
        },
        lights,
    }
}

/// Three colored lights, one of them hovering above the scene's center.
pub fn dragon_buddha(bounds: &BoundingBox) -> SceneDescription {
    let lights = vec![
        Light::point(
            bounds.center() + Vec3::Y,
            vec3(1.0, 0.2, 0.32) * 16.0,
            0.1,
        ),
        Light::point(
            vec3(-1.69987, 1.27152, 2.65488),
            vec3(0.46, 0.7, 0.32) * 16.0,
            0.1,
        ),
        Light::point(
            vec3(1.63738, 1.7456, 2.72011),
            vec3(0.1, 0.5, 0.9) * 16.0,
            0.1,
        ),
    ];

    SceneDescription {
        settings: SceneSettings {
            ris_samples: 32,
            reservoirs_per_pixel: 4,
            temporal_normal_threshold: 0.32,
            temporal_linear_depth_threshold: 0.5,
            ..Default::default()
        },
        lights,
    }
}

/// Rows of small lights running along the atrium's corridors.
pub fn sponza() -> SceneDescription {
    const SEGMENTS: [(Vec3, Vec3); 5] = [
        (
            Vec3::new(1.31626, 1.86929, 4.47785),
            Vec3::new(-13.3487, 2.38799, 5.24492),
        ),
        (
            Vec3::new(13.5686, 2.20822, -4.80682),
            Vec3::new(-13.3297, 2.26712, -4.96876),
        ),
        (
            Vec3::new(13.9416, 2.45657, 0.288835),
            Vec3::new(-13.4072, 2.36068, 0.431062),
        ),
        (
            Vec3::new(14.4111, 7.54439, 5.19206),
            Vec3::new(-12.7583, 7.24114, 5.15393),
        ),
        (
            Vec3::new(14.2571, 7.36345, -5.47451),
            Vec3::new(-11.4741, 7.57215, -5.27168),
        ),
    ];

    let mut rng = StdRng::seed_from_u64(222);
    let mut lights = Vec::new();

    for (start, end) in SEGMENTS {
        spawn_lights_along_segment(
            &mut lights,
            &mut rng,
            start,
            end,
            6000.0,
            5,
        );
    }

    SceneDescription {
        settings: SceneSettings {
            ris_samples: 32,
            reservoirs_per_pixel: 6,
            shading_light_exponent: 1.6,
            temporal_linear_depth_threshold: 9999999.9,
            temporal_normal_threshold: 0.8,
            ambient_color: Vec3::splat(0.04),
            ..Default::default()
        },
        lights,
    }
}

/// Places `count` equally-spaced lights with random colors on the segment
/// going from `start` (inclusive) towards `end` (exclusive); `intensity` gets
/// split evenly between them.
pub fn spawn_lights_along_segment(
    lights: &mut Vec<Light>,
    rng: &mut impl Rng,
    start: Vec3,
    end: Vec3,
    intensity: f32,
    count: usize,
) {
    let delta = (end - start) / (count as f32);

    for i in 0..count {
        let color = random_color(rng) * intensity / (count as f32);

        lights.push(Light::point(start + delta * (i as f32), color, 0.001));
    }
}

fn random_color(rng: &mut impl Rng) -> Vec3 {
    vec3(rng.gen(), rng.gen(), rng.gen())
}
