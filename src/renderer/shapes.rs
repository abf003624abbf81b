//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use super::{DrawCommand, Frame};

/// Segments used for bullet-sized circles
pub const CIRCLE_SEGMENTS: u32 = 12;

/// Triangle fan anchored at the first vertex.
///
/// Exact for convex outlines and for outlines that are star-shaped around
/// their first vertex (the ship is: every vertex is visible from its nose).
pub fn polygon_fan(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let anchor = points[0];
    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(anchor.x, anchor.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

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

    vertices
}

/// Triangle list for every filled shape in a frame.
///
/// Clears, backdrop tiles and text are left to the backend.
pub fn tessellate(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in &frame.commands {
        match command {
            DrawCommand::Polygon { points, color } => {
                vertices.extend(polygon_fan(points, *color));
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS));
            }
            DrawCommand::Clear(_) | DrawCommand::Backdrop { .. } | DrawCommand::Text { .. } => {}
        }
    }
    vertices
}
