use restir_gpu::prelude::*;

/// Closest surface found by a primary ray.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrimaryHit {
    pub distance: f32,
    pub normal: Vec3,
    pub albedo: Vec3,
    pub specular: f32,
    pub shininess: f32,
}

/// Casts a primary ray through given pixel and writes what it hit into the
/// geometry buffer; pixels that see nothing are marked as background.
pub fn main(
    global_id: UVec2,
    camera: &Camera,
    trace: impl FnOnce(Ray) -> Option<PrimaryHit>,
    out_gbuffer: &mut GBufferData,
) {
    let ray = camera.ray(global_id);

    let Some(hit) = trace(ray) else {
        *out_gbuffer = Default::default();
        return;
    };

    let position = ray.at(hit.distance);
    let depth = camera.linear_depth(position);

    // Surfaces are shaded from whichever side the camera sees
    let normal = if hit.normal.dot(ray.direction()) > 0.0 {
        -hit.normal
    } else {
        hit.normal
    };

    *out_gbuffer = GBufferEntry {
        position,
        depth: depth.max(f32::EPSILON),
        normal,
        albedo: hit.albedo,
        specular: hit.specular,
        shininess: hit.shininess,
    }
    .pack();
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::testing;

    #[test]
    fn ground() {
        let camera = testing::camera(8);
        let gbuffer = testing::ground_gbuffer(&camera);

        for data in gbuffer {
            let entry = GBufferEntry::unpack(data);

            assert!(entry.is_some());
            assert_relative_eq!(entry.position.y, 0.0, epsilon = 1e-4);
            assert_eq!(Vec3::Y, entry.normal);
            assert!(entry.depth > 3.9);
        }
    }

    #[test]
    fn background() {
        let camera = testing::camera(8);
        let mut out = [Vec4::ONE; 3];

        main(uvec2(1, 2), &camera, |_| None, &mut out);

        assert!(!GBufferEntry::unpack(out).is_some());
    }

    #[test]
    fn back_face() {
        let camera = testing::camera(8);
        let mut out = Default::default();

        main(
            uvec2(4, 4),
            &camera,
            |_| {
                Some(PrimaryHit {
                    distance: 4.0,
                    normal: -Vec3::Y,
                    albedo: Vec3::ONE,
                    ..Default::default()
                })
            },
            &mut out,
        );

        assert_eq!(Vec3::Y, GBufferEntry::unpack(out).normal);
    }
}
