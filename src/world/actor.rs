use crate::geometry::SphereGeometry;
use crate::hittable::{HitResult, Hittable};
use crate::materials::Material;
use crate::math::*;

/// An object placed in the scene, a sphere with a material.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Actor {
    pub material: Material,
    pub geometry: SphereGeometry,
}

impl Actor {
    pub const fn new(material: Material, geometry: SphereGeometry) -> Self {
        Actor { material, geometry }
    }

    pub const fn sphere(center: Vec3, radius: f32, material: Material) -> Self {
        Actor::new(material, SphereGeometry::new(center, radius))
    }
}

impl Hittable for Actor {
    fn intersect(&self, ray: &Ray) -> Option<HitResult> {
        let point = self.geometry.intersect(ray)?;
        Some(HitResult {
            param: (point - ray.origin).len() / ray.direction.len(),
            point,
            normal: normalize(point - self.geometry.center),
            material: self.material,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::COLOR_WHITE;

    fn unit_actor(center: Vec3) -> Actor {
        Actor::sphere(center, 1.0, Material::diffuse(COLOR_WHITE))
    }

    #[test]
    fn test_normal_is_outward_and_unit() {
        let actor = Actor::sphere(
            Vec3::new(1.0, -2.0, 3.0),
            2.5,
            Material::specular(COLOR_WHITE),
        );
        let origins = [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(-7.0, -9.0, 4.0),
            Vec3::new(1.0, 20.0, 3.5),
            Vec3::new(0.0, 0.0, -30.0),
        ];
        for origin in origins {
            let ray = Ray::new(origin, actor.geometry.center - origin);
            let hit = actor.intersect(&ray).unwrap();
            assert!((hit.normal.len() - 1.0).abs() < 1e-12, "{:?}", hit.normal);
            assert!(dot(hit.normal, hit.point - actor.geometry.center) > 0.0);
            // facing the incoming ray from outside
            assert!(dot(hit.normal, ray.direction) < 0.0);
        }
    }

    #[test]
    fn test_param_is_ray_parameter() {
        let actor = unit_actor(Vec3::new(0.0, 0.0, -10.0));
        let unit = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let scaled = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        let hit_unit = actor.intersect(&unit).unwrap();
        let hit_scaled = actor.intersect(&scaled).unwrap();
        assert!((hit_unit.param - 9.0).abs() < 1e-9, "{}", hit_unit.param);
        assert!((hit_scaled.param - 4.5).abs() < 1e-9, "{}", hit_scaled.param);
        assert!((hit_unit.point - hit_scaled.point).len() < 1e-9);
    }

    #[test]
    fn test_material_is_copied() {
        let material = Material::light(Colorf::new(3.0, 2.0, 1.0));
        let actor = Actor::sphere(Vec3::ZERO, 1.0, material);
        let hit = actor
            .intersect(&Ray::new(Vec3::new(0.0, 0.0, 4.0), -Vec3::Z))
            .unwrap();
        assert_eq!(hit.material, material);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_miss_produces_nothing() {
        let actor = unit_actor(Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::X);
        assert!(actor.intersect(&ray).is_none());
    }
}
