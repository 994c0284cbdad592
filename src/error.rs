use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by canvas operations
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Eyedropper sample outside the buffer
    #[error("Point ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: f32,
        y: f32,
        width: u32,
        height: u32,
    },

    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Errors that can occur while writing the canvas to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to save image to {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
