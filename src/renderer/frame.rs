//! CPU-side frame batch
//!
//! The simulation draws into a `FrameBatch` through the `Canvas` trait; the
//! batch turns each circle into NDC triangles ready for upload.

use glam::{IVec2, Vec2};

use super::shapes;
use super::vertex::Vertex;
use crate::palette::NamedColor;
use crate::sim::{Board, Canvas};

/// Maps board pixels (origin top-left, y down) to normalized device
/// coordinates, letterboxing so the board keeps its aspect ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub board: Board,
    /// Surface size in physical pixels
    pub size: (u32, u32),
}

impl Viewport {
    pub fn new(board: Board, width: u32, height: u32) -> Self {
        Self {
            board,
            size: (width.max(1), height.max(1)),
        }
    }

    /// Surface pixels per board pixel
    pub fn scale(&self) -> f32 {
        let (w, h) = self.size;
        (w as f32 / self.board.width as f32).min(h as f32 / self.board.height as f32)
    }

    pub fn board_to_ndc(&self, p: Vec2) -> Vec2 {
        let (w, h) = self.size;
        let s = self.scale();
        let half_board = Vec2::new(self.board.width as f32, self.board.height as f32) * 0.5;
        let centered = (p - half_board) * s;
        Vec2::new(centered.x * 2.0 / w as f32, -centered.y * 2.0 / h as f32)
    }
}

/// Vertices and clear color for one frame
#[derive(Debug, Clone)]
pub struct FrameBatch {
    pub viewport: Viewport,
    /// Whether the target surface expects linear colors (sRGB format)
    pub srgb: bool,
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
}

impl FrameBatch {
    pub fn new(viewport: Viewport, srgb: bool) -> Self {
        Self {
            viewport,
            srgb,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            vertices: Vec::new(),
        }
    }

    fn color(&self, color: NamedColor) -> [f32; 4] {
        if self.srgb {
            color.to_linear()
        } else {
            color.rgba().map(|c| c as f32 / 255.0)
        }
    }
}

impl Canvas for FrameBatch {
    fn clear(&mut self, color: NamedColor) {
        self.clear_color = self.color(color);
        self.vertices.clear();
    }

    fn draw_filled_circle(&mut self, center: IVec2, radius: i32, color: NamedColor) {
        let color = self.color(color);
        let segments = shapes::circle_segments(radius as f32 * self.viewport.scale());
        let start = self.vertices.len();
        shapes::append_circle(
            &mut self.vertices,
            center.as_vec2(),
            radius as f32,
            color,
            segments,
        );
        let viewport = self.viewport;
        for v in &mut self.vertices[start..] {
            let ndc = viewport.board_to_ndc(Vec2::from(v.position));
            v.position = ndc.to_array();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_board_fills_square_surface() {
        let vp = Viewport::new(Board::new(400, 400), 800, 800);
        assert_eq!(vp.board_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.board_to_ndc(Vec2::new(400.0, 400.0)), Vec2::new(1.0, -1.0));
        assert_eq!(vp.board_to_ndc(Vec2::new(200.0, 200.0)), Vec2::ZERO);
    }

    #[test]
    fn test_wide_surface_letterboxes_horizontally() {
        let vp = Viewport::new(Board::new(400, 400), 800, 400);
        let left = vp.board_to_ndc(Vec2::ZERO);
        assert!((left.x + 0.5).abs() < 1e-6);
        assert!((left.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_batch_clear_resets_vertices() {
        let vp = Viewport::new(Board::new(100, 100), 100, 100);
        let mut batch = FrameBatch::new(vp, false);
        batch.draw_filled_circle(IVec2::new(50, 50), 5, NamedColor::Red);
        assert!(!batch.vertices.is_empty());
        assert_eq!(batch.vertices.len() % 3, 0);

        batch.clear(NamedColor::White);
        assert!(batch.vertices.is_empty());
        assert_eq!(batch.clear_color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_circle_center_maps_to_ndc() {
        let vp = Viewport::new(Board::new(100, 100), 200, 200);
        let mut batch = FrameBatch::new(vp, true);
        batch.draw_filled_circle(IVec2::new(50, 50), 10, NamedColor::Blue);
        assert_eq!(batch.vertices[0].position, [0.0, 0.0]);
        assert_eq!(batch.vertices[0].color, NamedColor::Blue.to_linear());
    }
}
