mod buffers;
mod pass;
mod passes;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::Rng;

pub use self::buffers::*;
pub use self::pass::*;
pub use self::passes::*;
use crate::{
    gpu, Backend, Camera, DoubleBuffered, Engine, Result, StorageBuffer, Texture,
};

/// Camera together with everything needed to render frames from its point of
/// view.
#[derive(Debug)]
pub struct CameraController {
    camera: Camera,
    buffers: CameraBuffers,
    passes: CameraPasses,
    rng: StdRng,
    frame: u32,

    /// Whether buffers have to be swapped before the next frame starts
    pending_swap: bool,

    /// Whether the past-frame buffers contain a frame that can be reused
    history: bool,
}

impl CameraController {
    pub(crate) fn new<B>(
        engine: &Engine<B>,
        camera: Camera,
        rng: StdRng,
    ) -> Result<Self>
    where
        B: Backend,
    {
        camera.validate()?;

        info!("Creating camera: {}", camera.describe());

        let buffers = CameraBuffers::new(
            &camera,
            engine.settings().reservoirs_per_pixel as usize,
        );

        let passes = CameraPasses::new(engine, &camera);

        debug!("Camera created");

        Ok(Self {
            camera,
            buffers,
            passes,
            rng,
            frame: 0,
            pending_swap: false,
            history: false,
        })
    }

    /// Replaces camera's parameters; changing the viewport's size discards
    /// all per-pixel state, including the history.
    pub fn update<B>(&mut self, engine: &Engine<B>, camera: Camera) -> Result<()>
    where
        B: Backend,
    {
        camera.validate()?;

        let needs_rebuilding = self.camera.is_invalidated_by(&camera);

        self.camera = camera;

        if needs_rebuilding {
            self.rebuild_buffers(engine);
        }

        Ok(())
    }

    fn rebuild_buffers<B>(&mut self, engine: &Engine<B>)
    where
        B: Backend,
    {
        debug!("Rebuilding buffers for camera: {}", self.camera.describe());

        self.buffers = CameraBuffers::new(
            &self.camera,
            engine.settings().reservoirs_per_pixel as usize,
        );

        self.pending_swap = false;
        self.history = false;
    }

    /// Renders a single frame into [`Self::output()`].
    ///
    /// When rendering fails, the camera stays at the previous frame: its
    /// history is kept and the next call starts from the same state.
    pub fn render<B>(&mut self, engine: &Engine<B>) -> Result<()>
    where
        B: Backend,
    {
        trace!("Rendering frame {}", self.frame);

        let history = self.history;

        if self.pending_swap {
            self.buffers.swap();
            self.pending_swap = false;
        }

        self.buffers.curr_camera = self.camera.serialize();

        if !history {
            self.buffers.prev_camera = self.buffers.curr_camera;
        }

        let settings = engine.settings();
        let passes = &self.passes;
        let buffers = &mut self.buffers;

        passes.prim_raster.run(engine, buffers)?;

        passes.di_sampling.run(engine, buffers, self.rng.gen())?;

        passes.di_resolving.run(engine, buffers)?;

        if settings.temporal_reuse && history {
            passes
                .di_temporal_resampling
                .run(engine, buffers, self.rng.gen())?;
        }

        if settings.spatial_reuse {
            passes
                .di_spatial_resampling
                .run(engine, buffers, self.rng.gen())?;
        }

        passes.di_shading.run(engine, buffers)?;

        self.pending_swap = true;
        self.history = true;
        self.frame += 1;

        Ok(())
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the number of frames rendered so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Returns the most recently rendered image.
    pub fn output(&self) -> &Texture {
        &self.buffers.output
    }

    /// Returns the most recently rendered geometry buffer.
    pub fn gbuffer(&self) -> &StorageBuffer<gpu::GBufferData> {
        self.recent(|buffers| &buffers.gbuffer)
    }

    /// Returns the most recently rendered reservoirs, `reservoirs_per_pixel`
    /// per each pixel.
    pub fn reservoirs(&self) -> &StorageBuffer<gpu::DiReservoirData> {
        self.recent(|buffers| &buffers.reservoirs)
    }

    /// Returns the geometry buffer of the frame preceding the most recent one.
    pub fn prev_gbuffer(&self) -> &StorageBuffer<gpu::GBufferData> {
        self.older(|buffers| &buffers.gbuffer)
    }

    /// Returns reservoirs of the frame preceding the most recent one.
    pub fn prev_reservoirs(&self) -> &StorageBuffer<gpu::DiReservoirData> {
        self.older(|buffers| &buffers.reservoirs)
    }

    fn recent<T>(
        &self,
        f: impl FnOnce(&CameraBuffers) -> &DoubleBuffered<T>,
    ) -> &T {
        let buffers = f(&self.buffers);

        if self.pending_swap {
            buffers.curr()
        } else {
            buffers.past()
        }
    }

    fn older<T>(
        &self,
        f: impl FnOnce(&CameraBuffers) -> &DoubleBuffered<T>,
    ) -> &T {
        let buffers = f(&self.buffers);

        if self.pending_swap {
            buffers.past()
        } else {
            buffers.curr()
        }
    }
}

impl Drop for CameraController {
    fn drop(&mut self) {
        info!("Deleting camera: {}", self.camera.describe());
    }
}
