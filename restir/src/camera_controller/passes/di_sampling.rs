use restir_shaders::di_sampling;

use crate::{
    gpu, Backend, Camera, CameraBuffers, CameraComputePass, Engine, Result,
};

#[derive(Debug)]
pub struct DiSamplingPass {
    pass: CameraComputePass,
}

impl DiSamplingPass {
    pub fn new<B>(_: &Engine<B>, _: &Camera) -> Self
    where
        B: Backend,
    {
        Self {
            pass: CameraComputePass::new("di_sampling"),
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
        let params = gpu::DiSamplingPassParams {
            seed,
            ris_samples: engine.settings().ris_samples,
        };

        let camera = buffers.curr_camera;
        let lights = engine.lights().view();
        let gbuffer = buffers.gbuffer.curr();

        self.pass.run(
            camera.screen_size(),
            buffers.reservoirs.curr_mut(),
            |global_id, out| {
                di_sampling::main(
                    global_id, &params, &camera, lights, gbuffer, out,
                );
            },
        )
    }
}
