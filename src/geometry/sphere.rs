use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereGeometry {
    pub center: Vec3,
    /// Must be positive for the sphere to be hit.
    pub radius: f32,
}

impl SphereGeometry {
    pub const fn new(center: Vec3, radius: f32) -> SphereGeometry {
        SphereGeometry { center, radius }
    }

    /// Intersect `ray` with the sphere, returning the accepted hit point.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        // solve |(o + t*dir) - center| = radius
        // (dir.dir)t^2 + 2(op.dir)t + op.op - radius^2 = 0
        let op = ray.origin - self.center;
        let radius = f64::from(self.radius);
        let a = ray.direction.sqlen();
        let b = 2.0 * dot(op, ray.direction);
        let c = op.sqlen() - radius * radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();

        let t1 = (-b + discriminant_sqrt) / (2.0 * a);
        let t2 = (-b - discriminant_sqrt) / (2.0 * a);

        // t1 is only taken when it is above epsilon and strictly less than t2,
        // otherwise t2 is taken if it is above epsilon.
        let t = if t1 > EPSILON && t1 < t2 {
            t1
        } else if t2 > EPSILON {
            t2
        } else {
            return None;
        };
        Some(ray.point_at_parameter(t))
    }
}
