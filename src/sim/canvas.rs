//! Drawing surface seen by the simulation
//!
//! The simulation only needs to clear a frame and draw filled circles. The
//! GPU batch in `renderer` implements this for the window; `RecordingCanvas`
//! implements it for headless runs and tests.

use glam::IVec2;

use crate::palette::NamedColor;

/// Immediate-mode drawing target for one frame
pub trait Canvas {
    /// Fill the whole frame with one color
    fn clear(&mut self, color: NamedColor);

    /// Draw a filled circle centered at `center` in board pixels
    fn draw_filled_circle(&mut self, center: IVec2, radius: i32, color: NamedColor);
}

/// One recorded circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub center: IVec2,
    pub radius: i32,
    pub color: NamedColor,
}

/// Canvas that keeps the calls of the current frame in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    /// Last clear color
    pub background: Option<NamedColor>,
    /// Circles drawn since the last clear
    pub calls: Vec<DrawCall>,
    /// Number of clears so far
    pub frames: u64,
    /// Circles drawn over the canvas lifetime
    pub total_draws: u64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: NamedColor) {
        self.background = Some(color);
        self.calls.clear();
        self.frames += 1;
    }

    fn draw_filled_circle(&mut self, center: IVec2, radius: i32, color: NamedColor) {
        self.calls.push(DrawCall {
            center,
            radius,
            color,
        });
        self.total_draws += 1;
    }
}
