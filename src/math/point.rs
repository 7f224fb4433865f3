use std::ops::{Add, Div, Mul};

/// 2D coordinate, used for film and pixel positions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }
    pub const ORIGIN: Point2D = Point2D::new(0.0, 0.0);
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, other: Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;
    fn mul(self, other: f64) -> Point2D {
        Point2D::new(self.x * other, self.y * other)
    }
}

// per axis, used to map pixel coordinates into [0, 1]
impl Div<Point2D> for Point2D {
    type Output = Point2D;
    fn div(self, other: Point2D) -> Point2D {
        Point2D::new(self.x / other.x, self.y / other.y)
    }
}

impl From<(usize, usize)> for Point2D {
    fn from((x, y): (usize, usize)) -> Point2D {
        Point2D::new(x as f64, y as f64)
    }
}
