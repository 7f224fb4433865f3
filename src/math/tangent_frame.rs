use super::{dot, Vec3};

// also known as an orthonormal basis.
pub struct TangentFrame {
    pub tangent: Vec3,
    pub bitangent: Vec3,
    pub normal: Vec3,
}

impl TangentFrame {
    /// Build a frame around a unit length `normal`.
    pub fn from_normal(normal: Vec3) -> Self {
        let Vec3 { x, y, z } = normal;
        let sign = 1.0f64.copysign(z);
        let a = -1.0 / (sign + z);
        let b = x * y * a;
        TangentFrame {
            tangent: Vec3::new(1.0 + sign * x * x * a, sign * b, -sign * x),
            bitangent: Vec3::new(b, sign + y * y * a, -y),
            normal,
        }
    }

    pub fn to_world(&self, v: &Vec3) -> Vec3 {
        self.tangent * v.x + self.bitangent * v.y + self.normal * v.z
    }
}
