use glam::{Mat4, UVec2, Vec3};

use crate::{gpu, Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub viewport: Viewport,
    pub position: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Creates a perspective camera placed at `position` and looking at
    /// `target`; `fov_y` is given in radians.
    pub fn looking_at(
        size: UVec2,
        position: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y: f32,
    ) -> Self {
        let aspect = (size.x as f32) / (size.y.max(1) as f32);

        Self {
            viewport: Viewport { size },
            position,
            view: Mat4::look_at_rh(position, target, up),
            projection: Mat4::perspective_rh(fov_y, aspect, 0.1, 1000.0),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.viewport.size.x == 0 || self.viewport.size.y == 0 {
            return Err(Error::InvalidViewport(format!(
                "viewport must not be empty (got {}x{})",
                self.viewport.size.x, self.viewport.size.y,
            )));
        }

        let projection_view = self.projection * self.view;

        if !projection_view.is_finite()
            || projection_view.determinant().abs() <= f32::EPSILON
        {
            return Err(Error::InvalidViewport(
                "camera's view-projection matrix is not invertible".into(),
            ));
        }

        Ok(())
    }

    /// Returns whether switching from `self` to `other` requires reallocating
    /// camera's buffers.
    pub(crate) fn is_invalidated_by(&self, other: &Self) -> bool {
        self.viewport.size != other.viewport.size
    }

    pub(crate) fn serialize(&self) -> gpu::Camera {
        let projection_view = self.projection * self.view;

        gpu::Camera {
            projection_view,
            ndc_to_world: projection_view.inverse(),
            view: self.view,
            origin: self.position.extend(0.0),
            screen: self.viewport.size.as_vec2().extend(0.0).extend(0.0),
        }
    }

    pub(crate) fn describe(&self) -> String {
        format!(
            "{}x{} at {:?}",
            self.viewport.size.x, self.viewport.size.y, self.position
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub size: UVec2,
}

impl Viewport {
    pub fn len(&self) -> usize {
        (self.size.x as usize) * (self.size.y as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
