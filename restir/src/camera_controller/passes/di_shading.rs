use restir_shaders::di_shading;

use crate::{
    gpu, Backend, Camera, CameraBuffers, CameraComputePass, Engine, Result,
};

#[derive(Debug)]
pub struct DiShadingPass {
    pass: CameraComputePass,
}

impl DiShadingPass {
    pub fn new<B>(_: &Engine<B>, _: &Camera) -> Self
    where
        B: Backend,
    {
        Self {
            pass: CameraComputePass::new("di_shading"),
        }
    }

    pub fn run<B>(
        &self,
        engine: &Engine<B>,
        buffers: &mut CameraBuffers,
    ) -> Result<()>
    where
        B: Backend,
    {
        let settings = engine.settings();

        let params = gpu::DiShadingPassParams::new(
            settings.ambient_color,
            settings.shading_light_exponent,
        );

        let camera = buffers.curr_camera;
        let lights = engine.lights().view();
        let slots = buffers.reservoirs_per_pixel();
        let gbuffer = buffers.gbuffer.curr();
        let reservoirs = buffers.reservoirs.curr();

        self.pass.run(
            camera.screen_size(),
            buffers.output.pixels_mut(),
            |global_id, out| {
                let idx = camera.screen_to_idx(global_id) * slots;

                di_shading::main(
                    global_id,
                    &params,
                    &camera,
                    lights,
                    gbuffer,
                    &reservoirs[idx..idx + slots],
                    &mut out[0],
                );
            },
        )
    }
}
