use restir_gpu::prelude::*;

/// Computes radiance leaving given pixel, using its final reservoirs.
///
/// `reservoirs` contains this pixel's slots only.
pub fn main(
    global_id: UVec2,
    params: &DiShadingPassParams,
    camera: &Camera,
    lights: LightsView,
    gbuffer: &[GBufferData],
    reservoirs: &[DiReservoirData],
    out: &mut Vec4,
) {
    let screen_pos = global_id;
    let screen_idx = camera.screen_to_idx(screen_pos);

    // -------------------------------------------------------------------------

    let hit = Hit::new(
        camera.origin(),
        GBufferEntry::unpack(gbuffer[screen_idx]),
    );

    if hit.is_none() || reservoirs.is_empty() {
        *out = Vec4::W;
        return;
    }

    let mut radiance = Vec3::ZERO;

    for slot in 0..reservoirs.len() {
        let res = DiReservoir::read(reservoirs, slot);

        if res.w <= 0.0 {
            continue;
        }

        radiance += lights.get(res.sample.light_id).contribution(hit).sum()
            * res.w;
    }

    let radiance = radiance / (reservoirs.len() as f32)
        * params.light_exponent()
        + params.ambient() * hit.gbuffer.albedo;

    *out = radiance.extend(1.0);
}
