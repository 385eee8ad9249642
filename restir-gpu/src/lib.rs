//! Common structs, algorithms etc. used by ReSTIR's kernels and renderer.

#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]

mod brdf;
mod camera;
mod gbuffer;
mod hit;
mod light;
mod lights;
mod noise;
mod passes;
mod ray;
mod reservoir;
mod surface;
mod utils;

pub use self::brdf::*;
pub use self::camera::*;
pub use self::gbuffer::*;
pub use self::hit::*;
pub use self::light::*;
pub use self::lights::*;
pub use self::noise::*;
pub use self::passes::*;
pub use self::ray::*;
pub use self::reservoir::*;
pub use self::surface::*;
pub use self::utils::*;

pub mod prelude {
    pub use core::f32::consts::PI;

    pub use glam::*;

    pub use crate::*;
}

/// Upper bound for the number of neighbours visited by a single pixel during
/// spatial resampling.
pub const MAX_SPATIAL_SAMPLES: usize = 16;

/// Upper bound for the radius (in pixels) neighbours are picked from during
/// spatial resampling; matches the largest supported viewport dimension.
pub const MAX_SPATIAL_RADIUS: f32 = 16384.0;

/// Hit distance stored in reservoirs whose sample has never been confirmed
/// visible.
pub const HIT_DISTANCE_SENTINEL: f32 = 1.0e8;
