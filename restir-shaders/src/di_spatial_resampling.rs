use restir_gpu::prelude::*;

/// Merges reservoirs of given pixel with reservoirs of its similar-enough
/// neighbours.
///
/// Reads `reservoirs` (the whole current frame) and writes this pixel's slots
/// into `out_reservoirs`, which is supposed to be a staging buffer that gets
/// committed back after all pixels are done.
#[allow(clippy::too_many_arguments)]
pub fn main(
    global_id: UVec2,
    params: &DiSpatialResamplingPassParams,
    camera: &Camera,
    lights: LightsView,
    gbuffer: &[GBufferData],
    reservoirs: &[DiReservoirData],
    out_reservoirs: &mut [DiReservoirData],
) {
    let lhs_pos = global_id;
    let lhs_idx = camera.screen_to_idx(lhs_pos);
    let slots = out_reservoirs.len();
    let mut wnoise = WhiteNoise::new(params.seed, lhs_pos);

    for slot in 0..slots {
        out_reservoirs[slot] = reservoirs[lhs_idx * slots + slot];
    }

    // -------------------------------------------------------------------------

    let lhs_hit = Hit::new(
        camera.origin(),
        GBufferEntry::unpack(gbuffer[lhs_idx]),
    );

    if lhs_hit.is_none() {
        return;
    }

    let lhs_surface = lhs_hit.as_surface();
    let mut neighbours = [0usize; MAX_SPATIAL_SAMPLES];
    let mut neighbours_len = 0;
    let screen_size = camera.screen_size().as_vec2();

    for _ in 0..(params.samples as usize).min(MAX_SPATIAL_SAMPLES) {
        let offset = (wnoise.sample_disk() * params.radius)
            .round()
            .clamp(-screen_size, screen_size)
            .as_ivec2();

        if offset == IVec2::ZERO {
            continue;
        }

        let rhs_pos = camera.contain(lhs_pos.as_ivec2() + offset);

        if rhs_pos == lhs_pos {
            continue;
        }

        let rhs_idx = camera.screen_to_idx(rhs_pos);
        let rhs_gbuffer = GBufferEntry::unpack(gbuffer[rhs_idx]);

        if rhs_gbuffer.is_some()
            && lhs_surface
                .is_similar_to(&rhs_gbuffer.surface(), params.thresholds())
        {
            neighbours[neighbours_len] = rhs_idx;
            neighbours_len += 1;
        }
    }

    if neighbours_len == 0 {
        return;
    }

    // ---

    for slot in 0..slots {
        let lhs = DiReservoir::read(reservoirs, lhs_idx * slots + slot);
        let mut main = DiReservoir::default();
        let mut main_target = 0.0;

        let lhs_target = if lhs.is_empty() {
            0.0
        } else {
            lhs.sample.target(lights, lhs_hit)
        };

        if main.merge(&mut wnoise, &lhs, lhs_target) {
            main_target = lhs_target;
            main.hit_distance = lhs.hit_distance;
        }

        for &rhs_idx in &neighbours[..neighbours_len] {
            let rhs = DiReservoir::read(reservoirs, rhs_idx * slots + slot);

            if rhs.is_empty() {
                continue;
            }

            let rhs_target = rhs.sample.target(lights, lhs_hit);

            if main.merge(&mut wnoise, &rhs, rhs_target) {
                main_target = rhs_target;
                main.hit_distance = rhs.hit_distance;
            }
        }

        main.normalize(main_target);

        if main.is_empty() {
            main.hit_distance = HIT_DISTANCE_SENTINEL;
        } else {
            main.sample = main.sample.rebase(lights, lhs_hit);
        }

        main.write(out_reservoirs, slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    const SIZE: u32 = 8;

    fn params() -> DiSpatialResamplingPassParams {
        DiSpatialResamplingPassParams {
            seed: 7,
            samples: 4,
            radius: 3.0,
            ws_radius_threshold: 999999999.0,
            normal_threshold: 0.12,
        }
    }

    fn setup() -> (Camera, testing::Lights, Vec<GBufferData>, Vec<DiReservoirData>)
    {
        let camera = testing::camera(SIZE);
        let gbuffer = testing::ground_gbuffer(&camera);

        let lights = testing::Lights::new(vec![
            Light::point(vec3(-2.0, 2.0, 0.0), 0.1, Vec3::splat(4.0)),
            Light::point(vec3(0.0, 2.0, 2.0), 0.1, Vec3::splat(4.0)),
            Light::point(vec3(2.0, 2.0, 0.0), 0.1, Vec3::splat(4.0)),
        ]);

        let mut reservoirs = vec![DiReservoirData::default(); gbuffer.len()];

        for pos in testing::pixels(&camera) {
            let idx = camera.screen_to_idx(pos);

            crate::di_sampling::main(
                pos,
                &DiSamplingPassParams {
                    seed: 3,
                    ris_samples: 4,
                },
                &camera,
                lights.view(),
                &gbuffer,
                &mut reservoirs[idx..][..1],
            );
        }

        (camera, lights, gbuffer, reservoirs)
    }

    fn run(
        pixels: impl Iterator<Item = UVec2>,
        params: DiSpatialResamplingPassParams,
        camera: &Camera,
        lights: &testing::Lights,
        gbuffer: &[GBufferData],
        reservoirs: &[DiReservoirData],
    ) -> Vec<DiReservoirData> {
        let mut staging = vec![DiReservoirData::default(); reservoirs.len()];

        for pos in pixels {
            let idx = camera.screen_to_idx(pos);

            main(
                pos,
                &params,
                camera,
                lights.view(),
                gbuffer,
                reservoirs,
                &mut staging[idx..][..1],
            );
        }

        staging
    }

    #[test]
    fn is_independent_of_processing_order() {
        let (camera, lights, gbuffer, reservoirs) = setup();

        let forward = run(
            testing::pixels(&camera),
            params(),
            &camera,
            &lights,
            &gbuffer,
            &reservoirs,
        );

        let backward = run(
            testing::pixels(&camera).collect::<Vec<_>>().into_iter().rev(),
            params(),
            &camera,
            &lights,
            &gbuffer,
            &reservoirs,
        );

        assert_eq!(forward, backward);
    }

    #[test]
    fn accumulates_neighbours() {
        let (camera, lights, gbuffer, reservoirs) = setup();

        let staging = run(
            testing::pixels(&camera),
            params(),
            &camera,
            &lights,
            &gbuffer,
            &reservoirs,
        );

        let merged = staging
            .iter()
            .filter(|data| DiReservoir::from(**data).m > 4)
            .count();

        assert!(merged > staging.len() / 2, "{merged}");
    }

    #[test]
    fn tolerates_huge_radius() {
        let (camera, lights, gbuffer, reservoirs) = setup();

        for radius in [1.0e10, f32::INFINITY] {
            let staging = run(
                testing::pixels(&camera),
                DiSpatialResamplingPassParams { radius, ..params() },
                &camera,
                &lights,
                &gbuffer,
                &reservoirs,
            );

            for (lhs, rhs) in staging.iter().zip(&reservoirs) {
                assert!(DiReservoir::from(*lhs).m >= DiReservoir::from(*rhs).m);
            }
        }
    }

    #[test]
    fn rejects_dissimilar_neighbours() {
        let (camera, lights, gbuffer, reservoirs) = setup();

        let staging = run(
            testing::pixels(&camera),
            DiSpatialResamplingPassParams {
                ws_radius_threshold: 0.0,
                ..params()
            },
            &camera,
            &lights,
            &gbuffer,
            &reservoirs,
        );

        assert_eq!(reservoirs, staging);
    }
}
