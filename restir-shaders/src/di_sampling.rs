use restir_gpu::prelude::*;

/// Generates initial candidates for all reservoirs of given pixel through RIS.
pub fn main(
    global_id: UVec2,
    params: &DiSamplingPassParams,
    camera: &Camera,
    lights: LightsView,
    gbuffer: &[GBufferData],
    out_reservoirs: &mut [DiReservoirData],
) {
    let screen_pos = global_id;
    let screen_idx = camera.screen_to_idx(screen_pos);
    let mut wnoise = WhiteNoise::new(params.seed, screen_pos);

    // -------------------------------------------------------------------------

    let hit = Hit::new(
        camera.origin(),
        GBufferEntry::unpack(gbuffer[screen_idx]),
    );

    for slot in 0..out_reservoirs.len() {
        let res = if hit.is_some() && lights.len() > 0 {
            sample(params, lights, hit, &mut wnoise)
        } else {
            DiReservoir::default()
        };

        res.write(out_reservoirs, slot);
    }
}

fn sample(
    params: &DiSamplingPassParams,
    lights: LightsView,
    hit: Hit,
    wnoise: &mut WhiteNoise,
) -> DiReservoir {
    let mut res = DiReservoir::default();
    let mut res_target = 0.0;

    for _ in 0..params.ris_samples {
        let (light_id, light_pdf) = lights.sample(wnoise.sample());
        let sample = DiSample::new(lights, light_id, hit);
        let target = sample.target(lights, hit);

        let weight = if light_pdf > 0.0 {
            target / light_pdf
        } else {
            0.0
        };

        if res.update(wnoise, sample, weight) {
            res_target = target;
        }
    }

    res.normalize(res_target);
    res
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::testing;

    fn run(
        lights: &testing::Lights,
        camera: &Camera,
        gbuffer: &[GBufferData],
        ris_samples: u32,
        reservoirs_per_pixel: usize,
    ) -> Vec<DiReservoirData> {
        let params = DiSamplingPassParams {
            seed: 1234,
            ris_samples,
        };

        let mut out = vec![
            DiReservoirData::default();
            gbuffer.len() * reservoirs_per_pixel
        ];

        for pos in testing::pixels(camera) {
            let idx = camera.screen_to_idx(pos);

            main(
                pos,
                &params,
                camera,
                lights.view(),
                gbuffer,
                &mut out[idx * reservoirs_per_pixel..][..reservoirs_per_pixel],
            );
        }

        out
    }

    #[test]
    fn single_light() {
        let camera = testing::camera(8);
        let gbuffer = testing::ground_gbuffer(&camera);

        let lights = testing::Lights::new(vec![Light::point(
            vec3(0.0, 2.0, 0.0),
            0.1,
            Vec3::splat(4.0),
        )]);

        let out = run(&lights, &camera, &gbuffer, 1, 2);

        for data in out {
            let res = DiReservoir::from(data);

            assert_eq!(1, res.m);
            assert_eq!(LightId::new(0), res.sample.light_id);
            assert_eq!(vec3(0.0, 2.0, 0.0), res.sample.light_point);
            assert_relative_eq!(res.w, 1.0, epsilon = 1e-5);
            assert_eq!(HIT_DISTANCE_SENTINEL, res.hit_distance);
        }
    }

    #[test]
    fn weightless_light_is_never_picked() {
        let lights = testing::Lights::new(vec![
            Light::point(vec3(0.0, 2.0, 0.0), 0.1, Vec3::splat(0.1822)),
            Light::point(vec3(0.0, 2.0, 0.0), 0.1, Vec3::splat(1.3)),
            Light::point(vec3(0.0, 2.0, 0.0), 0.1, Vec3::splat(0.7)),
            Light::point(vec3(0.0, 2.0, 0.0), 0.1, Vec3::ZERO),
        ]);

        let (id, pdf) = lights.view().sample(0.999_999_94);

        assert_eq!(LightId::new(2), id);
        assert!(pdf > 0.0);

        let camera = testing::camera(4);
        let gbuffer = testing::ground_gbuffer(&camera);

        for data in run(&lights, &camera, &gbuffer, 16, 2) {
            assert_ne!(LightId::new(3), DiReservoir::from(data).sample.light_id);
        }
    }

    #[test]
    fn back_facing_light_yields_empty_reservoirs() {
        let camera = testing::camera(4);
        let gbuffer = testing::ground_gbuffer(&camera);

        let lights = testing::Lights::new(vec![Light::point(
            vec3(0.0, -2.0, 0.0),
            0.1,
            Vec3::splat(4.0),
        )]);

        for data in run(&lights, &camera, &gbuffer, 8, 1) {
            let res = DiReservoir::from(data);

            assert!(res.is_empty());
            assert_eq!(0.0, res.w_sum);
            assert_eq!(0.0, res.w);
        }
    }

    #[test]
    fn background_yields_empty_reservoirs() {
        let camera = testing::camera(4);
        let gbuffer = vec![GBufferData::default(); 16];

        let lights = testing::Lights::new(vec![Light::point(
            vec3(0.0, 2.0, 0.0),
            0.1,
            Vec3::ONE,
        )]);

        for data in run(&lights, &camera, &gbuffer, 4, 1) {
            assert!(DiReservoir::from(data).is_empty());
        }
    }

    #[test]
    fn brighter_light_is_picked_more_often() {
        let camera = testing::camera(16);
        let gbuffer = testing::ground_gbuffer(&camera);

        let lights = testing::Lights::new(vec![
            Light::point(vec3(-1.0, 1.0, 0.0), 0.1, Vec3::splat(9.0)),
            Light::point(vec3(1.0, 1.0, 0.0), 0.1, Vec3::splat(1.0)),
        ]);

        let picked = run(&lights, &camera, &gbuffer, 4, 1)
            .into_iter()
            .filter(|data| {
                DiReservoir::from(*data).sample.light_id == LightId::new(0)
            })
            .count();

        assert!(picked > 16 * 16 / 2, "{picked}");
    }
}
