use serde::{Deserialize, Serialize};

/// a single vertex of a boundary in map pixel coordinates
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    /// returns a new point shifted by some x and y value
    pub fn shifted_by(&self, x_shift: f32, y_shift: f32) -> Point {
        Point::new(self.x + x_shift, self.y + y_shift)
    }
}

/// closed collision polygon, vertices kept in the order they were drawn
pub type Boundary = Vec<Point>;
