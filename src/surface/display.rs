use egui::{Color32, ColorImage, Painter, Pos2, Rect, TextureHandle, TextureOptions, pos2, vec2};

use super::DrawingSink;
use super::raster::{PixelRect, fill_capsule};
use crate::stroke::Segment;

/// The on-screen canvas.
///
/// Segments are rasterized into a `ColorImage` as they arrive and the image
/// is mirrored into a GPU texture. Only the region touched since the last
/// frame is re-uploaded, so painting cost does not grow with stroke count.
#[derive(Clone)]
pub struct DisplaySurface {
    image: ColorImage,
    texture: Option<TextureHandle>,
    /// Region changed since the last upload
    dirty: Option<PixelRect>,
    /// The texture no longer matches the image size
    needs_full_upload: bool,
}

// Custom Debug implementation since TextureHandle doesn't implement Debug
impl std::fmt::Debug for DisplaySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplaySurface")
            .field("size", &self.image.size)
            .field("dirty", &self.dirty)
            .field("needs_full_upload", &self.needs_full_upload)
            .finish()
    }
}

/// Copy the pixels inside `rect` out of `image`
fn region(image: &ColorImage, rect: PixelRect) -> ColorImage {
    let [width, _] = image.size;
    let [region_w, region_h] = rect.size().map(|v| v as usize);
    let [left, top] = rect.min.map(|v| v as usize);
    let mut pixels = Vec::with_capacity(region_w * region_h);
    for y in top..top + region_h {
        let row = y * width + left;
        pixels.extend_from_slice(&image.pixels[row..row + region_w]);
    }
    ColorImage {
        size: [region_w, region_h],
        pixels,
    }
}

impl DisplaySurface {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            image: ColorImage::new([width as usize, height as usize], background),
            texture: None,
            dirty: None,
            needs_full_upload: true,
        }
    }

    /// Color currently shown at a pixel, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        let [width, height] = self.image.size;
        let (x, y) = (x as usize, y as usize);
        (x < width && y < height).then(|| self.image.pixels[y * width + x])
    }

    /// Screen rect the surface occupies when its top-left corner is `origin`
    pub fn rect_at(&self, origin: Pos2) -> Rect {
        let [width, height] = self.image.size;
        Rect::from_min_size(origin, vec2(width as f32, height as f32))
    }

    /// Push pending changes to the GPU texture.
    fn upload(&mut self, ctx: &egui::Context) {
        match &mut self.texture {
            None => {
                self.texture = Some(ctx.load_texture(
                    "display_surface",
                    self.image.clone(),
                    TextureOptions::NEAREST,
                ));
            }
            Some(texture) if self.needs_full_upload => {
                texture.set(self.image.clone(), TextureOptions::NEAREST);
            }
            Some(texture) => {
                if let Some(rect) = self.dirty {
                    let [x, y] = rect.min.map(|v| v as usize);
                    let changed = region(&self.image, rect);
                    texture.set_partial([x, y], changed, TextureOptions::NEAREST);
                }
            }
        }
        self.needs_full_upload = false;
        self.dirty = None;
    }

    /// Upload pending changes and paint the surface with its top-left at `origin`.
    pub fn paint(&mut self, painter: &Painter, origin: Pos2) {
        self.upload(painter.ctx());
        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), self.rect_at(origin), uv, Color32::WHITE);
        }
    }
}

impl DrawingSink for DisplaySurface {
    fn draw_segment(&mut self, segment: &Segment) {
        let [width, height] = self.size();
        let color = segment.color();
        let pixels = &mut self.image.pixels;
        let row = width as usize;
        let touched = fill_capsule(segment, width, height, |x, y| {
            pixels[y as usize * row + x as usize] = color;
        });
        if let Some(touched) = touched {
            self.dirty = Some(self.dirty.map_or(touched, |dirty| dirty.union(touched)));
        }
    }

    fn reset(&mut self, width: u32, height: u32, background: Color32) {
        self.image = ColorImage::new([width as usize, height as usize], background);
        self.dirty = None;
        self.needs_full_upload = true;
    }

    fn size(&self) -> [u32; 2] {
        let [width, height] = self.image.size;
        [width as u32, height as u32]
    }
}
