use crate::materials::Material;
use crate::math::*;

/// Surface data at a ray intersection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitResult {
    /// Ray parameter of the hit, `|point - origin| / |direction|`.
    pub param: f64,
    pub point: Vec3,
    /// Unit length, pointing from the sphere center through `point`. Never flipped towards the ray.
    pub normal: Vec3,
    pub material: Material,
}

pub trait Hittable {
    fn intersect(&self, ray: &Ray) -> Option<HitResult>;
}
