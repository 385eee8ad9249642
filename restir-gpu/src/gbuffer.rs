use glam::{Vec3, Vec4, Vec4Swizzles};

use crate::Surface;

/// Packed form of [`GBufferEntry`], as stored in the geometry buffer.
pub type GBufferData = [Vec4; 3];

/// Surface attributes of a single pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GBufferEntry {
    /// Point in world-space
    pub position: Vec3,

    /// Linear (view-space) depth; zero means the pixel sees no surface
    pub depth: f32,

    pub normal: Vec3,
    pub albedo: Vec3,

    /// Intensity of the specular lobe
    pub specular: f32,

    /// Exponent of the specular lobe
    pub shininess: f32,
}

impl GBufferEntry {
    pub fn unpack([d0, d1, d2]: GBufferData) -> Self {
        Self {
            position: d0.xyz(),
            depth: d0.w,
            normal: d1.xyz(),
            shininess: d1.w,
            albedo: d2.xyz(),
            specular: d2.w,
        }
    }

    pub fn pack(self) -> GBufferData {
        [
            self.position.extend(self.depth),
            self.normal.extend(self.shininess),
            self.albedo.extend(self.specular),
        ]
    }

    pub fn is_some(&self) -> bool {
        self.depth != Default::default()
    }

    pub fn surface(&self) -> Surface {
        Surface {
            point: self.position,
            normal: self.normal,
            depth: self.depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn serialization() {
        let target = GBufferEntry {
            position: vec3(1.0, -2.0, 3.0),
            depth: 123.456,
            normal: vec3(0.26, 0.53, 0.80),
            albedo: vec3(0.1, 0.2, 0.3),
            specular: 0.33,
            shininess: 64.0,
        };

        assert_eq!(target, GBufferEntry::unpack(target.pack()));
    }

    #[test]
    fn background() {
        assert!(!GBufferEntry::unpack(Default::default()).is_some());
    }
}
