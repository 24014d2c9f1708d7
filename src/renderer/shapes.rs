//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::polar_to_cartesian;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let edge1 = center + polar_to_cartesian(radius, theta1);
        let edge2 = center + polar_to_cartesian(radius, theta2);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(edge1.x, edge1.y, color));
        vertices.push(Vertex::new(edge2.x, edge2.y, color));
    }

    vertices
}

/// Generate vertices for a stroked arc (a thick band around `radius`)
/// starting at `theta_start` and sweeping `span` radians counter-clockwise
pub fn arc_band(
    center: Vec2,
    radius: f32,
    thickness: f32,
    theta_start: f32,
    span: f32,
    color: [f32; 4],
    segments_per_radian: f32,
) -> Vec<Vertex> {
    let num_segments = ((span * segments_per_radian) as u32).max(4);
    let inner_r = (radius - thickness / 2.0).max(0.0);
    let outer_r = radius + thickness / 2.0;

    let mut vertices = Vec::with_capacity((num_segments * 6) as usize);

    for i in 0..num_segments {
        let t1 = i as f32 / num_segments as f32;
        let t2 = (i + 1) as f32 / num_segments as f32;

        let theta1 = theta_start + t1 * span;
        let theta2 = theta_start + t2 * span;

        let inner1 = center + polar_to_cartesian(inner_r, theta1);
        let outer1 = center + polar_to_cartesian(outer_r, theta1);
        let inner2 = center + polar_to_cartesian(inner_r, theta2);
        let outer2 = center + polar_to_cartesian(outer_r, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for an axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_circle_vertex_count() {
        let vertices = circle(Vec2::ZERO, 8.0, [1.0; 4], 16);
        assert_eq!(vertices.len(), 48);
        // Every edge vertex sits on the radius
        for v in vertices.iter().skip(1).step_by(3) {
            let p = Vec2::from(v.position);
            assert!((p.length() - 8.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_arc_band_stays_in_sweep() {
        let center = Vec2::new(200.0, 200.0);
        let vertices = arc_band(center, 80.0, 4.0, PI / 2.0, 3.0 * PI / 2.0, [1.0; 4], 12.0);
        assert!(!vertices.is_empty());
        for v in &vertices {
            let p = Vec2::from(v.position) - center;
            let r = p.length();
            assert!(r > 77.9 && r < 82.1, "radius {}", r);
            // Gap is [0, π/2): nothing drawn strictly inside it
            let angle = crate::normalize_angle(p.y.atan2(p.x));
            assert!(!(angle > 0.01 && angle < PI / 2.0 - 0.01), "angle {}", angle);
        }
    }

    #[test]
    fn test_rect_two_triangles() {
        assert_eq!(rect(Vec2::ZERO, Vec2::new(400.0, 400.0), [0.0; 4]).len(), 6);
    }
}
