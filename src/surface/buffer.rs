use egui::Color32;
use image::{Rgb, RgbImage};

use super::DrawingSink;
use super::raster::fill_capsule;
use crate::stroke::Segment;

/// Off-screen RGB bitmap used for eyedropper sampling and export.
#[derive(Clone)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

pub(crate) fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

pub(crate) fn from_rgb(pixel: Rgb<u8>) -> Color32 {
    let Rgb([r, g, b]) = pixel;
    Color32::from_rgb(r, g, b)
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, to_rgb(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at a pixel, or `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image.get_pixel_checked(x, y).copied().map(from_rgb)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}

impl DrawingSink for PixelBuffer {
    fn draw_segment(&mut self, segment: &Segment) {
        let (width, height) = self.image.dimensions();
        let rgb = to_rgb(segment.color());
        let image = &mut self.image;
        fill_capsule(segment, width, height, |x, y| image.put_pixel(x, y, rgb));
    }

    fn reset(&mut self, width: u32, height: u32, background: Color32) {
        self.image = RgbImage::from_pixel(width, height, to_rgb(background));
    }

    fn size(&self) -> [u32; 2] {
        [self.image.width(), self.image.height()]
    }
}
