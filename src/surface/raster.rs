use egui::{Pos2, pos2};

use crate::stroke::Segment;

/// Inclusive pixel bounds touched by a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub min: [u32; 2],
    pub max: [u32; 2],
}

impl PixelRect {
    pub fn union(self, other: Self) -> Self {
        Self {
            min: [self.min[0].min(other.min[0]), self.min[1].min(other.min[1])],
            max: [self.max[0].max(other.max[0]), self.max[1].max(other.max[1])],
        }
    }

    pub fn size(&self) -> [u32; 2] {
        [self.max[0] - self.min[0] + 1, self.max[1] - self.min[1] + 1]
    }
}

fn distance_sq_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    };
    p.distance_sq(a + ab * t)
}

/// Call `plot` for every pixel of a `width`×`height` grid covered by the
/// capsule around `segment`: round caps, clipped to the grid.
///
/// Returns the clipped bounding box that was scanned, or `None` when the
/// segment lies entirely off the grid.
pub fn fill_capsule(
    segment: &Segment,
    width: u32,
    height: u32,
    mut plot: impl FnMut(u32, u32),
) -> Option<PixelRect> {
    if width == 0 || height == 0 {
        return None;
    }

    let (a, b) = (segment.start(), segment.end());
    let radius = segment.radius();
    let min_x = (a.x.min(b.x) - radius).floor().max(0.0) as i64;
    let min_y = (a.y.min(b.y) - radius).floor().max(0.0) as i64;
    let max_x = ((a.x.max(b.x) + radius).ceil() as i64).min(width as i64 - 1);
    let max_y = ((a.y.max(b.y) + radius).ceil() as i64).min(height as i64 - 1);
    if min_x > max_x || min_y > max_y {
        return None;
    }

    let limit = radius * radius + f32::EPSILON;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if distance_sq_to_segment(pos2(x as f32, y as f32), a, b) <= limit {
                plot(x as u32, y as u32);
            }
        }
    }
    Some(PixelRect {
        min: [min_x as u32, min_y as u32],
        max: [max_x as u32, max_y as u32],
    })
}
