use restir_shaders::di_resolving;

use crate::{Backend, Camera, CameraBuffers, CameraComputePass, Engine, Result};

/// Traces shadow rays towards the sampled lights; occluded reservoirs lose
/// their weight.
#[derive(Debug)]
pub struct DiResolvingPass {
    pass: CameraComputePass,
}

impl DiResolvingPass {
    pub fn new<B>(_: &Engine<B>, _: &Camera) -> Self
    where
        B: Backend,
    {
        Self {
            pass: CameraComputePass::new("di_resolving"),
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
        let camera = buffers.curr_camera;
        let backend = engine.backend();
        let gbuffer = buffers.gbuffer.curr();

        self.pass.try_run(
            camera.screen_size(),
            buffers.reservoirs.curr_mut(),
            |global_id, out| {
                di_resolving::main(
                    global_id,
                    &camera,
                    gbuffer,
                    out,
                    |ray, distance| backend.is_occluded(&ray, distance),
                )
            },
        )
    }
}
