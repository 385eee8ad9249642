use bytemuck::{Pod, Zeroable};
use glam::{
    vec2, IVec2, Mat4, UVec2, Vec2, Vec3, Vec4, Vec4Swizzles,
};

use crate::Ray;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Camera {
    pub projection_view: Mat4,
    pub ndc_to_world: Mat4,
    pub view: Mat4,
    pub origin: Vec4,
    pub screen: Vec4,
}

impl Camera {
    /// Tolerance (per matrix element) under which two cameras are considered
    /// to be the same.
    pub const EQ_EPSILON: f32 = 0.0025;

    /// Given a point in world-coordinates, returns it in clip-coordinates.
    pub fn world_to_clip(&self, pos: Vec3) -> Vec4 {
        self.projection_view * pos.extend(1.0)
    }

    /// Given a point in world-coordinates, returns it in screen-coordinates.
    ///
    /// Returns `None` for points behind the camera.
    pub fn world_to_screen(&self, pos: Vec3) -> Option<Vec2> {
        let clip = self.world_to_clip(pos);

        if clip.w <= 0.0 {
            None
        } else {
            Some(self.clip_to_screen(clip))
        }
    }

    /// Given a point in clip-coordinates, returns it in screen-coordinates.
    pub fn clip_to_screen(&self, pos: Vec4) -> Vec2 {
        let ndc = pos.xy() / pos.w;
        let ndc = vec2(ndc.x, -ndc.y);

        (0.5 * ndc + 0.5) * self.screen.xy()
    }

    /// Given a point in screen-coordinates, returns a unique index for it; used
    /// to index screen-space structures.
    pub fn screen_to_idx(&self, pos: UVec2) -> usize {
        (pos.y * (self.screen.x as u32) + pos.x) as usize
    }

    pub fn screen_size(&self) -> UVec2 {
        self.screen.xy().as_uvec2()
    }

    /// Brings given point back onto the screen by mirroring it against the
    /// screen's edges.
    pub fn contain(&self, mut pos: IVec2) -> UVec2 {
        let screen_size = self.screen.xy().as_ivec2();
        let max = (screen_size - 1).max(IVec2::ZERO);

        // Anything this far lands on the edge anyway
        pos = pos.clamp(-3 * screen_size, 3 * screen_size);

        if pos.x < 0 {
            pos.x = -pos.x;
        }

        if pos.y < 0 {
            pos.y = -pos.y;
        }

        if pos.x > max.x {
            pos.x = 2 * max.x - pos.x;
        }

        if pos.y > max.y {
            pos.y = 2 * max.y - pos.y;
        }

        pos.clamp(IVec2::ZERO, max).as_uvec2()
    }

    /// Returns whether given point lays inside the screen.
    pub fn contains(&self, pos: IVec2) -> bool {
        let screen_size = self.screen.xy().as_ivec2();

        pos.x >= 0
            && pos.y >= 0
            && pos.x < screen_size.x
            && pos.y < screen_size.y
    }

    /// Casts a ray from camera's origin through the center of given pixel.
    pub fn ray(&self, screen_pos: UVec2) -> Ray {
        let screen_size = self.screen.xy();
        let ndc = (screen_pos.as_vec2() + 0.5) * 2.0 / screen_size - Vec2::ONE;
        let ndc = vec2(ndc.x, -ndc.y);

        let target = self.ndc_to_world.project_point3(ndc.extend(0.5));
        let origin = self.origin();

        Ray::new(origin, (target - origin).normalize())
    }

    pub fn origin(&self) -> Vec3 {
        self.origin.xyz()
    }

    /// Returns distance from the camera's plane to given point, measured
    /// along the view direction.
    pub fn linear_depth(&self, pos: Vec3) -> f32 {
        -(self.view * pos.extend(1.0)).z
    }

    pub fn is_eq(&self, rhs: &Self) -> bool {
        self.projection_view
            .abs_diff_eq(rhs.projection_view, Self::EQ_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{ivec2, uvec2, vec3, vec4};

    use super::*;

    fn camera() -> Camera {
        let view = Mat4::look_at_rh(vec3(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);

        let projection = Mat4::perspective_rh(
            std::f32::consts::FRAC_PI_2,
            1.0,
            0.1,
            100.0,
        );

        let projection_view = projection * view;

        Camera {
            projection_view,
            ndc_to_world: projection_view.inverse(),
            view,
            origin: vec4(0.0, 0.0, 5.0, 0.0),
            screen: vec4(64.0, 64.0, 0.0, 0.0),
        }
    }

    #[test]
    fn world_to_screen() {
        let target = camera();
        let actual = target.world_to_screen(Vec3::ZERO).unwrap();

        assert_relative_eq!(actual.x, 32.0, epsilon = 1e-3);
        assert_relative_eq!(actual.y, 32.0, epsilon = 1e-3);

        // Up in world-space is towards smaller y in screen-space
        let actual = target.world_to_screen(vec3(0.0, 1.0, 0.0)).unwrap();

        assert!(actual.y < 32.0);

        assert!(target.world_to_screen(vec3(0.0, 0.0, 10.0)).is_none());
    }

    #[test]
    fn ray_goes_through_pixel() {
        let target = camera();
        let ray = target.ray(uvec2(10, 50));
        let point = ray.at(5.0);
        let screen = target.world_to_screen(point).unwrap();

        assert_relative_eq!(screen.x, 10.5, epsilon = 1e-2);
        assert_relative_eq!(screen.y, 50.5, epsilon = 1e-2);
    }

    #[test]
    fn linear_depth() {
        let target = camera();

        assert_relative_eq!(target.linear_depth(Vec3::ZERO), 5.0);
        assert_relative_eq!(target.linear_depth(vec3(3.0, 2.0, 1.0)), 4.0);
    }

    #[test]
    fn contain() {
        let target = camera();

        assert_eq!(uvec2(3, 4), target.contain(ivec2(3, 4)));
        assert_eq!(uvec2(3, 4), target.contain(ivec2(-3, -4)));
        assert_eq!(uvec2(61, 60), target.contain(ivec2(65, 66)));
        assert_eq!(uvec2(0, 0), target.contain(ivec2(-500, 500)));
        assert_eq!(uvec2(0, 0), target.contain(ivec2(i32::MIN, i32::MAX)));
        assert_eq!(uvec2(0, 0), target.contain(ivec2(i32::MAX, i32::MIN)));
    }

    #[test]
    fn is_eq() {
        let a = camera();
        let mut b = camera();

        assert!(a.is_eq(&b));

        b.projection_view.w_axis.x += 0.01;

        assert!(!a.is_eq(&b));
    }
}
