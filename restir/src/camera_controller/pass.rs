use glam::{uvec2, UVec2};
use log::{debug, trace};
use rayon::prelude::*;

use crate::{utils, Error, Result};

/// Kernel dispatched over every pixel of the screen.
///
/// Output buffer gets split into one chunk per pixel and each chunk is handed
/// to a separate kernel invocation; invocations run in parallel and the pass
/// returns only after all of them are done.
#[derive(Debug)]
pub struct CameraComputePass {
    label: String,
}

impl CameraComputePass {
    pub fn new(label: impl ToString) -> Self {
        let label = label.to_string();

        debug!("Initializing pass: {label}");

        Self { label }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn run<T, F>(&self, size: UVec2, out: &mut [T], kernel: F) -> Result<()>
    where
        T: Send,
        F: Fn(UVec2, &mut [T]) + Sync,
    {
        self.try_run(size, out, |global_id, out| {
            kernel(global_id, out);
            Ok(())
        })
    }

    pub fn try_run<T, F>(
        &self,
        size: UVec2,
        out: &mut [T],
        kernel: F,
    ) -> Result<()>
    where
        T: Send,
        F: Fn(UVec2, &mut [T]) -> Result<()> + Sync,
    {
        let pixels = (size.x as usize) * (size.y as usize);

        if pixels == 0 || out.is_empty() || out.len() % pixels != 0 {
            return Err(Error::BufferSizeMismatch {
                name: self.label.clone(),
                expected: pixels,
                actual: out.len(),
            });
        }

        let chunk_size = out.len() / pixels;
        let width = size.x as usize;

        self.measure(|| {
            out.par_chunks_mut(chunk_size).enumerate().try_for_each(
                |(idx, out)| {
                    let global_id =
                        uvec2((idx % width) as u32, (idx / width) as u32);

                    kernel(global_id, out)
                },
            )
        })
    }

    /// Runs `f` as a part of this pass, without any dispatching.
    pub fn measure<R>(&self, f: impl FnOnce() -> R) -> R {
        trace!("Running pass: {}", self.label);

        utils::measure(&self.label, f)
    }
}
