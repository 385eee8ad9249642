//! Per-pixel kernels of the direct-lighting pipeline.
//!
//! Each kernel processes a single pixel: it receives read-only views over
//! whatever it needs and a mutable reference to that pixel's own part of the
//! output, so that the host can run a kernel over the whole screen in
//! parallel without any synchronization.

pub mod di_resolving;
pub mod di_sampling;
pub mod di_shading;
pub mod di_spatial_resampling;
pub mod di_temporal_resampling;
pub mod prim_raster;

#[cfg(test)]
mod testing;
