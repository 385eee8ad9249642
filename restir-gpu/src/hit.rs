use glam::Vec3;

use crate::{GBufferEntry, Surface};

/// Surface seen through a pixel, together with the point it's observed from.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hit {
    pub origin: Vec3,
    pub point: Vec3,
    pub gbuffer: GBufferEntry,
}

impl Hit {
    /// How far to move a hit point away from its surface to avoid
    /// self-intersection when casting shadow rays
    pub const NUDGE_OFFSET: f32 = 0.001;

    pub fn new(origin: Vec3, gbuffer: GBufferEntry) -> Self {
        Self {
            origin,
            point: gbuffer.position,
            gbuffer,
        }
    }

    pub fn is_some(&self) -> bool {
        self.gbuffer.is_some()
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Direction from the hit point towards the observer.
    pub fn view_dir(&self) -> Vec3 {
        (self.origin - self.point).normalize_or_zero()
    }

    /// Origin for shadow rays leaving this surface.
    pub fn shadow_origin(&self) -> Vec3 {
        self.point + self.gbuffer.normal * Self::NUDGE_OFFSET
    }

    pub fn as_surface(&self) -> Surface {
        Surface {
            point: self.point,
            normal: self.gbuffer.normal,
            depth: self.gbuffer.depth,
        }
    }
}
