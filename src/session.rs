//! The canvas session: sole owner of the canvas, tool state and stroke state.
//!
//! Every user-facing operation is a method on [`CanvasSession`]. Prompts
//! (color picker, resize, save destination) are handled by the UI layer,
//! which passes their outcome in as an `Option`: `None` always means the user
//! dismissed the prompt, and leaves the session unchanged.

use std::path::PathBuf;

use egui::{Color32, Painter, Pos2};
use log::{debug, info, warn};

use crate::canvas::Canvas;
use crate::error::{CanvasError, ExportError};
use crate::export;
use crate::stroke::{Segment, StrokeState};
use crate::tools::{BrushWidth, ToolState};

/// Startup settings for a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color32,
    pub pen_color: Color32,
    pub brush_width: BrushWidth,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            background: Color32::WHITE,
            pen_color: Color32::BLACK,
            brush_width: BrushWidth::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CanvasSession {
    canvas: Canvas,
    tools: ToolState,
    stroke: StrokeState,
}

impl CanvasSession {
    pub fn new(config: SessionConfig) -> Result<Self, CanvasError> {
        let canvas = Canvas::new(config.width, config.height, config.background)?;
        info!("New canvas {}x{}", config.width, config.height);
        let tools = ToolState::new(config.pen_color, config.brush_width, canvas.background());
        Ok(Self {
            canvas,
            tools,
            stroke: StrokeState::Idle,
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.stroke
    }

    /// Paint the canvas with its top-left corner at `origin`.
    pub fn paint(&mut self, painter: &Painter, origin: Pos2) {
        self.canvas.paint(painter, origin);
    }

    /// Extend the current stroke to `pos`. The first drag after a release
    /// only records the position; later drags draw a segment from the
    /// previous position, which is returned.
    pub fn on_pointer_drag(&mut self, pos: Pos2) -> Option<Segment> {
        let start = self.stroke.advance(pos)?;
        let segment = Segment::new(
            start,
            pos,
            self.tools.color(),
            self.tools.brush_width().get(),
        );
        self.canvas.draw_segment(&segment);
        Some(segment)
    }

    /// End the current stroke.
    pub fn on_pointer_release(&mut self) {
        if self.stroke.is_stroking() {
            debug!("Stroke finished");
        }
        self.stroke.reset();
    }

    /// Apply the outcome of the color prompt; returns whether the color changed.
    pub fn choose_color(&mut self, selection: Option<Color32>) -> bool {
        self.tools.choose_color(selection)
    }

    pub fn use_eraser(&mut self) {
        self.tools.use_eraser();
    }

    /// Eyedropper: adopt the buffer color under `pos`.
    pub fn pick_color(&mut self, pos: Pos2) -> Result<Color32, CanvasError> {
        let color = self.canvas.sample(pos)?;
        self.tools.pick_color(color);
        Ok(color)
    }

    pub fn recall_previous_color(&mut self) -> bool {
        self.tools.recall_previous_color()
    }

    pub fn set_brush_width(&mut self, width: u32) -> BrushWidth {
        self.tools.set_brush_width(width)
    }

    /// Wipe the canvas. Stroke state is left alone; the next release ends it.
    pub fn clear(&mut self) {
        self.canvas.clear();
        info!("Canvas cleared");
    }

    /// Apply the outcome of the resize prompt. Missing or invalid dimensions
    /// leave the canvas untouched; returns whether the resize happened.
    pub fn resize(&mut self, width: Option<u32>, height: Option<u32>) -> bool {
        let (Some(width), Some(height)) = (width, height) else {
            debug!("Resize cancelled");
            return false;
        };
        match self.canvas.resize(width, height) {
            Ok(()) => {
                info!("Canvas resized to {}x{}", width, height);
                true
            }
            Err(err) => {
                warn!("Resize ignored: {}", err);
                false
            }
        }
    }

    /// Write the pixel buffer to the destination picked by the save prompt.
    ///
    /// Returns the written path (with `.png` appended when missing), or
    /// `Ok(None)` when the prompt was cancelled and nothing was written.
    pub fn save(&self, destination: Option<PathBuf>) -> Result<Option<PathBuf>, ExportError> {
        let Some(destination) = destination else {
            debug!("Save cancelled");
            return Ok(None);
        };
        let path = export::normalize_png_path(destination);
        export::save_png(self.canvas.buffer().image(), &path)?;
        Ok(Some(path))
    }
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::new(SessionConfig::default()).expect("Default canvas size should be valid")
    }
}
