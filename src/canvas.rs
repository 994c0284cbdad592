use egui::{Color32, Painter, Pos2};
use log::debug;

use crate::error::CanvasError;
use crate::stroke::Segment;
use crate::surface::{DisplaySurface, DrawingSink, PixelBuffer};

/// Largest width or height accepted by [`Canvas::resize`]
pub const MAX_DIMENSION: u32 = 8192;

/// The dual-surface canvas: a display surface and a pixel buffer that always
/// share the same size and receive the same segments.
#[derive(Debug, Clone)]
pub struct Canvas {
    display: DisplaySurface,
    buffer: PixelBuffer,
    background: Color32,
}

fn validate_dimensions(width: u32, height: u32) -> Result<(), CanvasError> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(CanvasError::InvalidDimensions { width, height });
    }
    Ok(())
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color32) -> Result<Self, CanvasError> {
        validate_dimensions(width, height)?;
        Ok(Self {
            display: DisplaySurface::new(width, height, background),
            buffer: PixelBuffer::new(width, height, background),
            background,
        })
    }

    fn sinks_mut(&mut self) -> [&mut dyn DrawingSink; 2] {
        [&mut self.display, &mut self.buffer]
    }

    /// Draw one segment onto both surfaces.
    pub fn draw_segment(&mut self, segment: &Segment) {
        for sink in self.sinks_mut() {
            sink.draw_segment(segment);
        }
    }

    fn reset_sinks(&mut self, width: u32, height: u32) {
        let background = self.background;
        for sink in self.sinks_mut() {
            sink.reset(width, height, background);
        }
    }

    /// Erase everything, keeping the current size.
    pub fn clear(&mut self) {
        let [width, height] = self.size();
        self.reset_sinks(width, height);
        debug!("Canvas cleared at {}x{}", width, height);
    }

    /// Reallocate both surfaces at a new size. Prior content is discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        validate_dimensions(width, height)?;
        self.reset_sinks(width, height);
        debug!("Canvas resized to {}x{}", width, height);
        Ok(())
    }

    /// Read the buffer color under `pos`.
    pub fn sample(&self, pos: Pos2) -> Result<Color32, CanvasError> {
        let [width, height] = self.size();
        let out_of_bounds = CanvasError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width,
            height,
        };
        if !pos.x.is_finite() || !pos.y.is_finite() || pos.x < 0.0 || pos.y < 0.0 {
            return Err(out_of_bounds);
        }
        self.buffer
            .pixel(pos.x.floor() as u32, pos.y.floor() as u32)
            .ok_or(out_of_bounds)
    }

    /// Paint the display surface with its top-left corner at `origin`.
    pub fn paint(&mut self, painter: &Painter, origin: Pos2) {
        self.display.paint(painter, origin);
    }

    /// `[width, height]` of the pixel buffer, which the display always matches
    pub fn size(&self) -> [u32; 2] {
        self.buffer.size()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn display(&self) -> &DisplaySurface {
        &self.display
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }
}
