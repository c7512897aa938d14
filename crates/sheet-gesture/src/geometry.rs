//! Minimal 2-D geometry used by pointer tracking.

/// A point in parent coordinates, logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in parent coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Whether `point` falls inside these bounds (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let bounds = Bounds::new(0.0, 10.0, 100.0, 50.0);
        assert!(bounds.contains(Point::new(0.0, 10.0)));
        assert!(bounds.contains(Point::new(100.0, 50.0)));
        assert!(bounds.contains(Point::new(40.0, 30.0)));
        assert!(!bounds.contains(Point::new(40.0, 9.9)));
        assert!(!bounds.contains(Point::new(100.1, 30.0)));
    }
}
