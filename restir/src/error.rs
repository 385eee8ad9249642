use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("scene has no lights")]
    NoLights,

    #[error("lights have zero total weight (total = {total})")]
    ZeroLightWeight { total: f32 },

    #[error("number of reservoirs per pixel must be greater than zero")]
    ZeroReservoirsPerPixel,

    #[error("number of RIS samples must be greater than zero")]
    ZeroRisSamples,

    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    #[error(
        "buffer `{name}` has mismatched size (expected {expected}, got {actual})"
    )]
    BufferSizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("unknown scene: {0}")]
    UnknownScene(String),

    #[error("backend failed: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("couldn't parse scene: {0}")]
    Json(#[from] serde_json::Error),

    #[error("couldn't encode image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
