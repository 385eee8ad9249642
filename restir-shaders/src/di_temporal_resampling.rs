use restir_gpu::prelude::*;

/// Merges reservoirs of given pixel with the reservoirs the same pixel had in
/// the previous frame, provided that the pixel still sees the same surface.
///
/// Reads previous frame's reservoirs and writes only the current ones; when
/// the history gets rejected, current reservoirs are left untouched.
#[allow(clippy::too_many_arguments)]
pub fn main(
    global_id: UVec2,
    params: &DiTemporalResamplingPassParams,
    curr_camera: &Camera,
    prev_camera: &Camera,
    lights: LightsView,
    curr_gbuffer: &[GBufferData],
    prev_gbuffer: &[GBufferData],
    prev_reservoirs: &[DiReservoirData],
    curr_reservoirs: &mut [DiReservoirData],
) {
    let screen_pos = global_id;
    let screen_idx = curr_camera.screen_to_idx(screen_pos);
    let mut wnoise = WhiteNoise::new(params.seed, screen_pos);

    // -------------------------------------------------------------------------

    let hit = Hit::new(
        curr_camera.origin(),
        GBufferEntry::unpack(curr_gbuffer[screen_idx]),
    );

    if hit.is_none() {
        return;
    }

    let Some(prev_screen_pos) = prev_camera.world_to_screen(hit.point) else {
        return;
    };

    if !prev_camera.contains(prev_screen_pos.floor().as_ivec2()) {
        return;
    }

    let prev_gbuffer = GBufferEntry::unpack(prev_gbuffer[screen_idx]);

    if !prev_gbuffer.is_some()
        || !hit
            .as_surface()
            .is_similar_to(&prev_gbuffer.surface(), params.thresholds())
    {
        return;
    }

    // ---

    let slots = curr_reservoirs.len();

    for slot in 0..slots {
        let lhs = DiReservoir::read(curr_reservoirs, slot);

        let mut rhs =
            DiReservoir::read(prev_reservoirs, screen_idx * slots + slot);

        if rhs.is_empty() {
            continue;
        }

        rhs.clamp_m(params.max_history.saturating_mul(lhs.m.max(1)));

        let mut main = DiReservoir::default();
        let mut main_target = 0.0;

        let lhs_target = if lhs.is_empty() {
            0.0
        } else {
            lhs.sample.target(lights, hit)
        };

        if main.merge(&mut wnoise, &lhs, lhs_target) {
            main_target = lhs_target;
            main.hit_distance = lhs.hit_distance;
        }

        let rhs_target = rhs.sample.target(lights, hit);

        if main.merge(&mut wnoise, &rhs, rhs_target) {
            main_target = rhs_target;
            main.hit_distance = rhs.hit_distance;
        }

        main.normalize(main_target);

        if main.is_empty() {
            main.hit_distance = HIT_DISTANCE_SENTINEL;
        } else {
            main.sample = main.sample.rebase(lights, hit);
        }

        main.write(curr_reservoirs, slot);
    }
}
