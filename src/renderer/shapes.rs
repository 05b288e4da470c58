//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Fewest and most triangles used for one circle
const MIN_SEGMENTS: u32 = 12;
const MAX_SEGMENTS: u32 = 64;

/// Segment count that keeps edges smooth without wasting triangles on
/// small balls
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 2.0).ceil() as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    append_circle(&mut vertices, center, radius, color, segments);
    vertices
}

/// Append a filled circle as a fan of triangles
pub fn append_circle(
    vertices: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    vertices.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}
