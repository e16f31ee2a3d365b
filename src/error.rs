//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O, image codec, resize and config errors, and provides
//! semantic variants for argument validation and degenerate dimensions.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid emblem name: {name:?}")]
    InvalidName { name: String },

    #[error("{arg} must be greater than 0, got: {size}")]
    ZeroSize { arg: &'static str, size: u32 },

    #[error("Emblem {name} ({width}x{height}) would resize to zero width")]
    ZeroWidth { name: String, width: u32, height: u32 },
}
