use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Three component vector.
///
/// Doubles as a spatial vector and as a linear RGB color (see [`Colorf`](super::Colorf)).
/// Operations like `normalize` or `cross` are meaningless on colors.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const fn splat(s: f64) -> Vec3 {
        Vec3::new(s, s, s)
    }
    pub const ZERO: Vec3 = Vec3::splat(0.0);
    pub const ONE: Vec3 = Vec3::splat(1.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub fn sqlen(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn len(&self) -> f64 {
        self.sqlen().sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f64) -> Vec3 {
        Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

// component-wise, used for color attenuation
impl Mul for Vec3 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f64) -> Vec3 {
        self * (1.0 / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        self * -1.0
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self + other * -1.0
    }
}

impl From<f64> for Vec3 {
    fn from(s: f64) -> Vec3 {
        Vec3::splat(s)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(other: [f64; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> [f64; 3] {
        [v.x, v.y, v.z]
    }
}

/// Unit vector in the direction of `v`. `v` must not be zero length.
pub fn normalize(v: Vec3) -> Vec3 {
    v / v.len()
}

/// Guarded [`normalize`], `None` when the length is zero or not finite.
pub fn try_normalize(v: Vec3) -> Option<Vec3> {
    let len = v.len();
    if len > 0.0 && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Cosine of the angle between `a` and `b`. Neither may be zero length.
pub fn cosv(a: Vec3, b: Vec3) -> f64 {
    dot(normalize(a), normalize(b))
}

/// Right handed cross product.
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Reflect the incident vector `v` about the normal `n`.
///
/// Computed as `v - n * 2 * cosv(v, n) * |v|`. This scales by the magnitude of `v` and uses the
/// cosine instead of the raw dot product, so it only matches the usual mirror formula
/// `v - 2 (v . n) n` when `n` is unit length.
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * 2.0 * cosv(v, n) * v.len()
}
