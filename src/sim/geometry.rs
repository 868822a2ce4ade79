//! Axis-aligned boxes for overlap tests

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Aabb {
    /// Box of the given full `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            x_min: center.x - half.x,
            x_max: center.x + half.x,
            y_min: center.y - half.y,
            y_max: center.y + half.y,
        }
    }

    /// Inclusive overlap: boxes that only touch along an edge still overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let x = self.x_max >= other.x_min && self.x_min <= other.x_max;
        let y = self.y_max >= other.y_min && self.y_min <= other.y_max;
        x && y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        let b = Aabb::centered(Vec2::new(100.0, 50.0), Vec2::new(40.0, 80.0));
        assert_eq!(b.x_min, 80.0);
        assert_eq!(b.x_max, 120.0);
        assert_eq!(b.y_min, 10.0);
        assert_eq!(b.y_max, 90.0);
    }

    #[test]
    fn test_overlap_and_miss() {
        let a = Aabb::centered(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::centered(Vec2::new(8.0, 3.0), Vec2::splat(10.0));
        let far = Aabb::centered(Vec2::new(30.0, 0.0), Vec2::splat(10.0));
        let below = Aabb::centered(Vec2::new(0.0, 30.0), Vec2::splat(10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&far));
        // Overlapping on x alone is not enough
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_shared_edge_counts_as_overlap() {
        let a = Aabb {
            x_min: 0.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 10.0,
        };
        let right = Aabb {
            x_min: 10.0,
            x_max: 20.0,
            y_min: 0.0,
            y_max: 10.0,
        };
        let corner = Aabb {
            x_min: 10.0,
            x_max: 20.0,
            y_min: 10.0,
            y_max: 20.0,
        };
        assert!(a.overlaps(&right));
        assert!(right.overlaps(&a));
        assert!(a.overlaps(&corner));

        let gap = Aabb {
            x_min: 10.001,
            ..right
        };
        assert!(!a.overlaps(&gap));
    }
}
