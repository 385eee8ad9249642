use restir_gpu::prelude::*;

/// Checks visibility of samples chosen for given pixel, zeroing contribution
/// weights of the occluded ones.
///
/// `is_occluded` is the ray-visibility query: given a ray and its maximum
/// distance, it says whether anything blocks it.
pub fn main<E>(
    global_id: UVec2,
    camera: &Camera,
    gbuffer: &[GBufferData],
    reservoirs: &mut [DiReservoirData],
    is_occluded: impl Fn(Ray, f32) -> Result<bool, E>,
) -> Result<(), E> {
    let screen_pos = global_id;
    let screen_idx = camera.screen_to_idx(screen_pos);

    // -------------------------------------------------------------------------

    let hit = Hit::new(
        camera.origin(),
        GBufferEntry::unpack(gbuffer[screen_idx]),
    );

    if hit.is_none() {
        return Ok(());
    }

    for slot in 0..reservoirs.len() {
        let mut res = DiReservoir::read(reservoirs, slot);

        if res.w <= 0.0 {
            continue;
        }

        let (ray, distance) = res.sample.ray(hit.shadow_origin());

        if is_occluded(ray, distance)? {
            res.w = 0.0;
        } else {
            res.hit_distance = distance;
        }

        res.write(reservoirs, slot);
    }

    Ok(())
}
