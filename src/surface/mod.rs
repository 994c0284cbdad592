//! Drawing sinks.
//!
//! Every line the user draws is issued once as a [`Segment`] and fanned out
//! to each sink by [`crate::canvas::Canvas`]. The display surface is what the
//! user sees; the pixel buffer is what gets sampled and saved.

pub mod buffer;
pub mod display;
pub mod raster;

use egui::Color32;

use crate::stroke::Segment;

pub use buffer::PixelBuffer;
pub use display::DisplaySurface;

/// Anything that can receive line draws and be wiped to a blank canvas.
pub trait DrawingSink {
    /// Draw one segment with round caps.
    fn draw_segment(&mut self, segment: &Segment);

    /// Drop all content and start over at the given size, filled with `background`.
    fn reset(&mut self, width: u32, height: u32, background: Color32);

    /// Current `[width, height]` in pixels.
    fn size(&self) -> [u32; 2];
}
