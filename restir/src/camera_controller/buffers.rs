use log::debug;

use crate::{gpu, Camera, DoubleBuffered, StorageBuffer, Texture};

#[derive(Debug)]
pub struct CameraBuffers {
    pub curr_camera: gpu::Camera,
    pub prev_camera: gpu::Camera,
    pub gbuffer: DoubleBuffered<StorageBuffer<gpu::GBufferData>>,
    pub reservoirs: DoubleBuffered<StorageBuffer<gpu::DiReservoirData>>,
    pub staging_reservoirs: StorageBuffer<gpu::DiReservoirData>,
    pub output: Texture,
}

impl CameraBuffers {
    pub fn new(camera: &Camera, reservoirs_per_pixel: usize) -> Self {
        debug!("Initializing camera buffers");

        let pixels = camera.viewport.len();
        let reservoirs = pixels * reservoirs_per_pixel;
        let curr_camera = camera.serialize();

        Self {
            curr_camera,
            prev_camera: curr_camera,

            gbuffer: DoubleBuffered::new(
                StorageBuffer::new("restir_gbuffer_a", pixels),
                StorageBuffer::new("restir_gbuffer_b", pixels),
            ),

            reservoirs: DoubleBuffered::new(
                StorageBuffer::new("restir_reservoirs_a", reservoirs),
                StorageBuffer::new("restir_reservoirs_b", reservoirs),
            ),

            staging_reservoirs: StorageBuffer::new(
                "restir_staging_reservoirs",
                reservoirs,
            ),

            output: Texture::new("restir_output", camera.viewport.size),
        }
    }

    /// Number of reservoirs each pixel has.
    pub fn reservoirs_per_pixel(&self) -> usize {
        self.reservoirs.curr().len() / self.gbuffer.curr().len().max(1)
    }

    /// Makes the current frame's data the past frame's data.
    pub fn swap(&mut self) {
        self.gbuffer.swap();
        self.reservoirs.swap();
        self.prev_camera = self.curr_camera;
    }
}
