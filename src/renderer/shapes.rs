//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in canvas coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

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

/// Generate vertices for a filled axis-aligned rectangle (top-left origin)
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (x2, y2) = (x + w, y + h);
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x2, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y, color),
        Vertex::new(x2, y2, color),
    ]
}

/// Generate vertices for a rectangle border of the given thickness (drawn inside)
pub fn rect_outline(x: f32, y: f32, w: f32, h: f32, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(w / 2.0).min(h / 2.0);
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(x, y, w, t, color));
    vertices.extend(rect(x, y + h - t, w, t, color));
    vertices.extend(rect(x, y + t, t, h - 2.0 * t, color));
    vertices.extend(rect(x + w - t, y + t, t, h - 2.0 * t, color));
    vertices
}

/// Generate vertices for a line segment with the given width
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertex_count_and_extent() {
        let verts = circle(Vec2::new(100.0, 100.0), 30.0, WHITE, 24);
        assert_eq!(verts.len(), 72);
        for v in &verts {
            let d = Vec2::from(v.position).distance(Vec2::new(100.0, 100.0));
            assert!(d <= 30.0 + 1e-3);
        }
    }

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(10.0, 20.0, 30.0, 40.0, WHITE);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [40.0, 60.0]));
    }

    #[test]
    fn test_rect_outline_is_four_bars() {
        assert_eq!(rect_outline(0.0, 0.0, 200.0, 20.0, 2.0, WHITE).len(), 24);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(5.0, 5.0);
        assert!(line(p, p, 2.0, WHITE).is_empty());
        assert_eq!(line(p, Vec2::new(50.0, 5.0), 2.0, WHITE).len(), 6);
    }
}
