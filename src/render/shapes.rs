//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::DrawCmd;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used when tessellating circles
pub const CIRCLE_SEGMENTS: u32 = 48;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, r) = (rect.left(), rect.right());
    let (b, t) = (rect.bottom(), rect.top());

    vec![
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
    ]
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

/// Tessellate the filled primitives of a draw list into one triangle soup.
///
/// Clear, text, and screen-image commands are skipped; those stay with the
/// host (surface clear, font atlas, textures).
pub fn tessellate(cmds: &[DrawCmd]) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for cmd in cmds {
        match cmd {
            DrawCmd::Rect { rect: r, color } => vertices.extend(rect(r, *color)),
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCmd::Clear { .. } | DrawCmd::Text { .. } | DrawCmd::Screen { .. } => {}
        }
    }

    vertices
}
