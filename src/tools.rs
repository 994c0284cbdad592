use egui::Color32;
use log::info;

/// Brush width in pixels, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrushWidth(u32);

impl BrushWidth {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 10;
    /// Quick picks offered next to the slider
    pub const PRESETS: [u32; 4] = [1, 2, 5, 10];

    /// Clamps `width` into range
    pub fn new(width: u32) -> Self {
        Self(width.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_preset(self) -> bool {
        Self::PRESETS.contains(&self.0)
    }
}

impl Default for BrushWidth {
    fn default() -> Self {
        Self(Self::PRESETS[0])
    }
}

/// Which toolbar button is highlighted.
///
/// The eraser is not a separate drawing mode: it only switches the pen color
/// to the background, so erasing paints background-colored strokes. A pen
/// may carry the background color as well, so the tool is stored rather
/// than derived from the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTool {
    Pen,
    Eraser,
}

/// Current pen color, previous color and brush width
#[derive(Debug, Clone)]
pub struct ToolState {
    color: Color32,
    active: ActiveTool,
    /// Previous color and the tool that was using it
    previous: Option<(Color32, ActiveTool)>,
    brush_width: BrushWidth,
    background: Color32,
}

impl ToolState {
    pub fn new(color: Color32, brush_width: BrushWidth, background: Color32) -> Self {
        Self {
            color,
            active: ActiveTool::Pen,
            previous: None,
            brush_width,
            background,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn previous_color(&self) -> Option<Color32> {
        self.previous.map(|(color, _)| color)
    }

    pub fn brush_width(&self) -> BrushWidth {
        self.brush_width
    }

    pub fn active_tool(&self) -> ActiveTool {
        self.active
    }

    fn replace_color(&mut self, color: Color32, tool: ActiveTool) {
        self.previous = Some((self.color, self.active));
        self.color = color;
        self.active = tool;
    }

    /// Apply the result of the color prompt. `None` means it was cancelled.
    pub fn choose_color(&mut self, selection: Option<Color32>) -> bool {
        match selection {
            Some(color) => {
                info!("Pen color set to {:?}", color);
                self.replace_color(color, ActiveTool::Pen);
                true
            }
            None => false,
        }
    }

    pub fn use_eraser(&mut self) {
        info!("Eraser selected");
        self.replace_color(self.background, ActiveTool::Eraser);
    }

    /// Adopt a color sampled from the canvas
    pub fn pick_color(&mut self, color: Color32) {
        info!("Eyedropper picked {:?}", color);
        self.replace_color(color, ActiveTool::Pen);
    }

    /// Swap the current and previous colors, if there is a previous one.
    pub fn recall_previous_color(&mut self) -> bool {
        match self.previous {
            Some((previous, tool)) => {
                self.replace_color(previous, tool);
                true
            }
            None => false,
        }
    }

    pub fn set_brush_width(&mut self, width: u32) -> BrushWidth {
        self.brush_width = BrushWidth::new(width);
        self.brush_width
    }
}
