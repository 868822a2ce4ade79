//! Shape generation for 2D primitives

use super::canvas::Color;
use super::vertex::Vertex;
use crate::sim::Aabb;

/// Two triangles covering `rect`, in screen coordinates
pub fn rect(rect: &Aabb, color: Color) -> [Vertex; 6] {
    let c = color.to_array();
    let (x0, x1, y0, y1) = (rect.x_min, rect.x_max, rect.y_min, rect.y_max);
    [
        Vertex::new(x0, y0, c),
        Vertex::new(x1, y0, c),
        Vertex::new(x0, y1, c),
        Vertex::new(x0, y1, c),
        Vertex::new(x1, y0, c),
        Vertex::new(x1, y1, c),
    ]
}

/// Rectangles collected for one frame
#[derive(Debug, Clone)]
pub struct QuadBatch {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
}

impl Default for QuadBatch {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            vertices: Vec::with_capacity(6 * 8),
        }
    }
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: drop queued quads and set the background
    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    pub fn push_rect(&mut self, aabb: &Aabb, color: Color) {
        self.vertices.extend_from_slice(&rect(aabb, color));
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_rect_covers_corners() {
        let aabb = Aabb::centered(Vec2::new(50.0, 50.0), Vec2::new(20.0, 40.0));
        let verts = rect(&aabb, Color::RED);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 40.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 60.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 30.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 70.0);
        assert!(verts.iter().all(|v| v.color == Color::RED.to_array()));
    }

    #[test]
    fn test_batch_clear_drops_quads() {
        let mut batch = QuadBatch::new();
        let aabb = Aabb::centered(Vec2::ZERO, Vec2::ONE);
        batch.push_rect(&aabb, Color::WHITE);
        batch.push_rect(&aabb, Color::BLUE);
        assert_eq!(batch.quad_count(), 2);

        batch.clear(Color::WHITE);
        assert_eq!(batch.quad_count(), 0);
        assert_eq!(batch.clear_color, Color::WHITE);
    }
}
