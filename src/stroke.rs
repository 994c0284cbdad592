use egui::{Color32, Pos2};

/// A single straight line draw: the unit every drawing sink receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    from: Pos2,
    to: Pos2,
    color: Color32,
    width: u32,
}

impl Segment {
    pub fn new(from: Pos2, to: Pos2, color: Color32, width: u32) -> Self {
        Self {
            from,
            to,
            color,
            width,
        }
    }

    pub fn start(&self) -> Pos2 {
        self.from
    }

    pub fn end(&self) -> Pos2 {
        self.to
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Half the width, never thinner than one pixel across
    pub fn radius(&self) -> f32 {
        (self.width as f32 / 2.0).max(0.5)
    }
}

/// Pointer state of the canvas.
///
/// ```text
///            first drag              release
///   Idle ─────────────────► Stroking ────────► Idle
///                           │    ▲
///                           └────┘ drag (draws a segment)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum StrokeState {
    #[default]
    Idle,
    Stroking { last: Pos2 },
}

impl StrokeState {
    /// Records `pos` as the latest pointer position and returns the start of
    /// the segment that should be drawn to it, if any.
    pub fn advance(&mut self, pos: Pos2) -> Option<Pos2> {
        let previous = self.last_point();
        *self = Self::Stroking { last: pos };
        previous
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn last_point(&self) -> Option<Pos2> {
        match self {
            Self::Stroking { last } => Some(*last),
            Self::Idle => None,
        }
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self, Self::Stroking { .. })
    }
}
