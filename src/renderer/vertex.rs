//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Size of one vertex in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Pack vertices into raw bytes for upload by a host renderer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Convert HSL (hue in degrees, saturation/lightness in 0-1) to RGBA
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m, 1.0]
}

/// Colors for game elements
pub mod colors {
    pub const BALL: [f32; 4] = [0.231, 0.510, 0.965, 1.0]; // #3b82f6
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.6];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const WIN_TEXT: [f32; 4] = [0.133, 0.773, 0.369, 1.0]; // #22c55e
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-3)
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(close(hsl(0.0, 1.0, 0.5), [1.0, 0.0, 0.0, 1.0]));
        assert!(close(hsl(120.0, 1.0, 0.5), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(hsl(240.0, 1.0, 0.5), [0.0, 0.0, 1.0, 1.0]));
        assert!(close(hsl(360.0, 1.0, 0.5), [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hsl_grey_without_saturation() {
        assert!(close(hsl(200.0, 0.0, 0.35), [0.35, 0.35, 0.35, 1.0]));
    }

    #[test]
    fn test_vertex_bytes() {
        let vertices = [Vertex::new(1.0, 2.0, colors::BALL); 3];
        assert_eq!(as_bytes(&vertices).len(), 3 * Vertex::STRIDE);
        assert_eq!(Vertex::STRIDE, 24);
    }
}
