use std::path::Path;

use glam::{UVec2, Vec4};
use image::{Rgba, RgbaImage};
use log::debug;

use crate::{Result, StorageBuffer};

/// RGBA32F image, stored row by row.
#[derive(Debug)]
pub struct Texture {
    size: UVec2,
    data: StorageBuffer<Vec4>,
}

impl Texture {
    pub fn new(label: impl AsRef<str>, size: UVec2) -> Self {
        let label = label.as_ref();

        debug!("Allocating texture `{label}`; size={:?}", size);

        Self {
            size,
            data: StorageBuffer::new(
                label,
                (size.x as usize) * (size.y as usize),
            ),
        }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn get(&self, pos: UVec2) -> Option<Vec4> {
        if pos.x >= self.size.x || pos.y >= self.size.y {
            return None;
        }

        self.data
            .get((pos.y as usize) * (self.size.x as usize) + (pos.x as usize))
            .copied()
    }

    pub fn pixels(&self) -> &[Vec4] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Vec4] {
        &mut self.data
    }

    /// Converts this texture into an 8-bit image, clamping each channel to
    /// `<0.0, 1.0>`.
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.size.x, self.size.y);

        for (pixel, color) in image.pixels_mut().zip(self.data.iter()) {
            let color = (color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();

            *pixel = Rgba([
                color.x as u8,
                color.y as u8,
                color.z as u8,
                color.w as u8,
            ]);
        }

        image
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        debug!(
            "Saving texture `{}` to `{}`",
            self.data.label(),
            path.display()
        );

        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;

        Ok(())
    }
}
