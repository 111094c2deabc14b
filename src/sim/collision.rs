//! Collision tests between characters and entities
//!
//! Everything on the roadway is an axis-aligned box except the rare bonus,
//! which is treated as a circle against a character's inscribed radius.

use glam::Vec2;

/// Axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap: boxes that only touch along an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max().x
            && self.max().x > other.min.x
            && self.min.y < other.max().y
            && self.max().y > other.min.y
    }
}

/// Circle vs character box, using half the box's smaller side as its radius
pub fn circle_box_overlap(center: Vec2, radius: f32, bounds: &Aabb) -> bool {
    let reach = radius + bounds.size.min_element() / 2.0;
    center.distance(bounds.center()) < reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(50.0, 60.0));
        let b = Aabb::new(Vec2::new(40.0, 50.0), Vec2::new(30.0, 30.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(50.0, 60.0));
        let right = Aabb::new(Vec2::new(50.0, 0.0), Vec2::new(30.0, 30.0));
        let below = Aabb::new(Vec2::new(0.0, 60.0), Vec2::new(30.0, 30.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_aabb_identical_boxes_overlap() {
        let a = Aabb::new(Vec2::new(100.0, 260.0), Vec2::new(50.0, 60.0));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_circle_box_overlap() {
        // Bunny box centred at (125, 290), inscribed radius 25
        let bunny = Aabb::new(Vec2::new(100.0, 260.0), Vec2::new(50.0, 60.0));

        assert!(circle_box_overlap(Vec2::new(125.0, 290.0), 20.0, &bunny));
        assert!(circle_box_overlap(Vec2::new(169.0, 290.0), 20.0, &bunny));
        assert!(!circle_box_overlap(Vec2::new(170.0, 290.0), 20.0, &bunny));
        assert!(!circle_box_overlap(Vec2::new(400.0, 100.0), 20.0, &bunny));
    }
}
