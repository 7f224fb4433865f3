mod actor;
mod presets;

pub use actor::Actor;
pub use presets::{CORNELL, RTWEEKEND};

use crate::hittable::{HitResult, Hittable};
use crate::math::*;

use ordered_float::OrderedFloat;
use tracing::{debug, warn};

/// Ordered collection of actors. Read only once built, shared by reference with the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub actors: Vec<Actor>,
}

impl Scene {
    pub fn new(actors: Vec<Actor>) -> Self {
        let lights = actors
            .iter()
            .filter(|actor| actor.material.is_emissive())
            .count();
        debug!(
            "constructed scene with {} actors, {} of which emit light",
            actors.len(),
            lights
        );
        if lights == 0 && !actors.is_empty() {
            warn!("the scene has no emissive actors, only the background will light it");
        }
        Scene { actors }
    }

    /// Look up one of the built in scenes by name.
    pub fn preset(name: &str) -> Option<&'static Scene> {
        match name.to_lowercase().as_str() {
            "rtweekend" => Some(&*RTWEEKEND),
            "cornell" => Some(&*CORNELL),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Actor> {
        self.actors.iter()
    }
}

impl Hittable for Scene {
    /// Nearest hit over all actors by `param`. Ties go to the actor inserted first.
    fn intersect(&self, ray: &Ray) -> Option<HitResult> {
        self.actors
            .iter()
            .filter_map(|actor| actor.intersect(ray))
            .min_by_key(|hit| OrderedFloat(hit.param))
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Actor;
    type IntoIter = std::slice::Iter<'a, Actor>;
    fn into_iter(self) -> Self::IntoIter {
        self.actors.iter()
    }
}

impl FromIterator<Actor> for Scene {
    fn from_iter<I: IntoIterator<Item = Actor>>(iter: I) -> Self {
        Scene::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::materials::Material;

    fn material(r: f64) -> Material {
        Material::diffuse(Colorf::new(r, 0.0, 0.0))
    }

    #[test]
    fn test_picks_nearest() {
        let near = Actor::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, material(0.1));
        let far = Actor::sphere(Vec3::new(0.0, 0.0, -20.0), 1.0, material(0.2));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        for scene in [Scene::new(vec![near, far]), Scene::new(vec![far, near])] {
            let hit = scene.intersect(&ray).unwrap();
            assert_eq!(hit.material, near.material);
            assert!((hit.param - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_skips_missing_actors() {
        let off_axis = Actor::sphere(Vec3::new(10.0, 0.0, -5.0), 1.0, material(0.1));
        let on_axis = Actor::sphere(Vec3::new(0.0, 0.0, -50.0), 2.0, material(0.2));
        let scene = Scene::new(vec![off_axis, on_axis]);
        let hit = scene.intersect(&Ray::new(Vec3::ZERO, -Vec3::Z)).unwrap();
        assert_eq!(hit.material, on_axis.material);
    }

    #[test]
    fn test_empty_and_all_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(Scene::default().intersect(&ray).is_none());

        let scene = Scene::new(vec![Actor::sphere(-Vec3::X * 5.0, 1.0, material(0.5))]);
        assert!(scene.intersect(&ray).is_none());
    }

    #[test]
    fn test_tie_goes_to_first() {
        let a = Actor::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, material(0.1));
        let b = Actor::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, material(0.2));
        let scene: Scene = vec![a, b].into_iter().collect();
        let hit = scene.intersect(&Ray::new(Vec3::ZERO, -Vec3::Z)).unwrap();
        assert_eq!(hit.material, a.material);
    }

    #[test]
    fn test_iteration_is_stable() {
        let actors: Vec<Actor> = (0..5)
            .map(|i| Actor::sphere(Vec3::new(i as f64, 0.0, 0.0), 0.25, material(i as f64)))
            .collect();
        let scene = Scene::new(actors.clone());
        assert_eq!(scene.len(), 5);
        for (expected, actor) in actors.iter().zip(&scene) {
            assert_eq!(expected, actor);
        }
    }

    #[test]
    fn test_presets() {
        assert!(std::ptr::eq(Scene::preset("rtweekend").unwrap(), &*RTWEEKEND));
        assert!(std::ptr::eq(Scene::preset("Cornell").unwrap(), &*CORNELL));
        assert!(Scene::preset("sponza").is_none());
    }
}
