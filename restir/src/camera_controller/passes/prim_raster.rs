use crate::{Backend, Camera, CameraBuffers, CameraComputePass, Engine, Result};

/// Fills the current geometry buffer with what the camera sees.
#[derive(Debug)]
pub struct PrimRasterPass {
    pass: CameraComputePass,
}

impl PrimRasterPass {
    pub fn new<B>(_: &Engine<B>, _: &Camera) -> Self
    where
        B: Backend,
    {
        Self {
            pass: CameraComputePass::new("prim_raster"),
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
        self.pass.measure(|| {
            engine
                .backend()
                .render_gbuffer(&buffers.curr_camera, buffers.gbuffer.curr_mut())
        })
    }
}
