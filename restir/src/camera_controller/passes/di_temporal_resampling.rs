use restir_shaders::di_temporal_resampling;

use crate::{
    gpu, Backend, Camera, CameraBuffers, CameraComputePass, Engine, Result,
};

#[derive(Debug)]
pub struct DiTemporalResamplingPass {
    pass: CameraComputePass,
}

impl DiTemporalResamplingPass {
    pub fn new<B>(_: &Engine<B>, _: &Camera) -> Self
    where
        B: Backend,
    {
        Self {
            pass: CameraComputePass::new("di_temporal_resampling"),
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
        let curr_camera = buffers.curr_camera;
        let prev_camera = buffers.prev_camera;

        let params = gpu::DiTemporalResamplingPassParams {
            seed,
            max_history: settings.temporal_max_history,
            motion: u32::from(!curr_camera.is_eq(&prev_camera)),
            ws_radius_threshold: settings.temporal_ws_radius_threshold,
            linear_depth_threshold: settings.temporal_linear_depth_threshold,
            normal_threshold: settings.temporal_normal_threshold,
        };

        let lights = engine.lights().view();
        let curr_gbuffer = buffers.gbuffer.curr();
        let prev_gbuffer = buffers.gbuffer.past();
        let (curr_reservoirs, prev_reservoirs) = buffers.reservoirs.split_mut();

        self.pass.run(
            curr_camera.screen_size(),
            curr_reservoirs,
            |global_id, out| {
                di_temporal_resampling::main(
                    global_id,
                    &params,
                    &curr_camera,
                    &prev_camera,
                    lights,
                    curr_gbuffer,
                    prev_gbuffer,
                    prev_reservoirs,
                    out,
                );
            },
        )
    }
}
