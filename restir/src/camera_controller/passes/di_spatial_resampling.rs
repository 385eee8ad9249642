use restir_shaders::di_spatial_resampling;

use crate::{
    gpu, Backend, Camera, CameraBuffers, CameraComputePass, Engine, Result,
};

/// Merges each pixel's reservoirs with the reservoirs of its neighbours.
///
/// Neighbours are read from the current reservoirs, so the results go into
/// a staging buffer first and get committed once every pixel is done.
#[derive(Debug)]
pub struct DiSpatialResamplingPass {
    pass: CameraComputePass,
}

impl DiSpatialResamplingPass {
    pub fn new<B>(_: &Engine<B>, _: &Camera) -> Self
    where
        B: Backend,
    {
        Self {
            pass: CameraComputePass::new("di_spatial_resampling"),
        }
    }

    pub fn run<B>(
        &self,
        engine: &Engine<B>,
        buffers: &mut CameraBuffers,
        seed: u32,
    ) -> Result<()>
    where
        B: Backend,
    {
        let settings = engine.settings();

        let params = gpu::DiSpatialResamplingPassParams {
            seed,
            samples: settings.spatial_samples,
            radius: settings.spatial_radius,
            ws_radius_threshold: settings.spatial_ws_radius_threshold,
            normal_threshold: settings.spatial_normal_threshold,
        };

        let camera = buffers.curr_camera;
        let lights = engine.lights().view();
        let gbuffer = buffers.gbuffer.curr();
        let reservoirs = buffers.reservoirs.curr();

        self.pass.run(
            camera.screen_size(),
            &mut buffers.staging_reservoirs,
            |global_id, out| {
                di_spatial_resampling::main(
                    global_id, &params, &camera, lights, gbuffer, reservoirs,
                    out,
                );
            },
        )?;

        self.pass.measure(|| {
            buffers
                .reservoirs
                .curr_mut()
                .write(&buffers.staging_reservoirs)
        })
    }
}
