use crate::hittable::Hittable;
use crate::integrator::SamplerIntegrator;
use crate::math::*;
use crate::profile::Profile;
use crate::world::Scene;

/// Recursive path tracer. Each hit adds its emission plus its color times the light
/// gathered along one sampled continuation, until the depth budget runs out.
pub struct PathTracingIntegrator<'a> {
    pub scene: &'a Scene,
    pub max_depth: u16,
    pub background: Colorf,
}

impl<'a> PathTracingIntegrator<'a> {
    pub fn new(scene: &'a Scene, max_depth: u16, background: Colorf) -> Self {
        PathTracingIntegrator {
            scene,
            max_depth,
            background,
        }
    }

    /// Light arriving along `ray`.
    ///
    /// A miss returns the background color. A hit with `depth == 0` returns the emission of the surface only.
    /// Otherwise a new ray leaves the hit point, mirrored for specular surfaces or cosine weighted for diffuse ones.
    pub fn radiance(
        &self,
        ray: Ray,
        depth: u16,
        sampler: &mut dyn Sampler,
        profile: &mut Profile,
    ) -> Colorf {
        let hit = match self.scene.intersect(&ray) {
            Some(hit) => hit,
            None => {
                profile.env_hits += 1;
                return self.background;
            }
        };
        debug_assert!(hit.point.is_finite(), "ray {:?}, {:?}", ray, hit);

        let material = hit.material;
        if depth == 0 {
            return material.emission;
        }

        match material.generate(ray.direction, hit.normal, sampler.draw_2d()) {
            Some(direction) => {
                profile.bounce_rays += 1;
                let next = Ray::new(hit.point, direction);
                material.emission
                    + material.color * self.radiance(next, depth - 1, sampler, profile)
            }
            // degenerate scatter direction, the path ends here
            None => material.emission,
        }
    }
}

impl SamplerIntegrator for PathTracingIntegrator<'_> {
    fn color(&self, sampler: &mut dyn Sampler, camera_ray: Ray, profile: &mut Profile) -> Colorf {
        self.radiance(camera_ray, self.max_depth, sampler, profile)
    }
}
