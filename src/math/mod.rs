mod color;
mod point;
mod sample;
mod tangent_frame;
mod vec;

pub use color::*;
pub use point::Point2D;
pub use sample::*;
pub use tangent_frame::TangentFrame;
pub use vec::*;

pub const PI: f64 = std::f64::consts::PI;
pub const INF: f64 = 1e20;
// minimum accepted root of the sphere quadratic, rejects self intersection at the ray origin
pub const EPSILON: f64 = 1e-4;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Clamp `x` into `[min, max]`. NaN passes through unchanged.
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// A half-line `origin + t * direction`.
///
/// The direction is not required to be unit length; intersection code accounts for its magnitude.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}
