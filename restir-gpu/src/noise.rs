use core::f32::consts::PI;

use glam::{vec2, UVec2, Vec2};

/// Per-pixel white-noise generator (PCG hash).
///
/// Each pixel gets its own stream, derived from the frame's seed and the
/// pixel's position; the same `(seed, id)` pair always yields the same
/// sequence, no matter in which order pixels get processed.
#[derive(Copy, Clone, Debug)]
pub struct WhiteNoise {
    state: u32,
}

impl WhiteNoise {
    pub fn new(seed: u32, id: UVec2) -> Self {
        let state = Self::hash(seed ^ Self::hash(id.x ^ Self::hash(id.y)));

        Self { state }
    }

    /// Generates a uniform sample in range `<0.0, 1.0)`.
    pub fn sample(&mut self) -> f32 {
        ((self.sample_int() >> 8) as f32) / ((1u32 << 24) as f32)
    }

    /// Generates a uniform sample in range `<0, u32::MAX>`.
    pub fn sample_int(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(747796405)
            .wrapping_add(2891336453);

        Self::finish(self.state)
    }

    /// Generates a uniform sample on a circle.
    pub fn sample_circle(&mut self) -> Vec2 {
        let angle = self.sample() * PI * 2.0;

        vec2(angle.cos(), angle.sin())
    }

    /// Generates a uniform sample inside of a disk.
    pub fn sample_disk(&mut self) -> Vec2 {
        let radius = self.sample().sqrt();

        self.sample_circle() * radius
    }

    fn hash(value: u32) -> u32 {
        Self::finish(value.wrapping_mul(747796405).wrapping_add(2891336453))
    }

    fn finish(state: u32) -> u32 {
        let word = ((state >> ((state >> 28) + 4)) ^ state)
            .wrapping_mul(277803737);

        (word >> 22) ^ word
    }
}
