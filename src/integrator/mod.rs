mod pt;

pub use pt::PathTracingIntegrator;

use crate::math::*;
use crate::profile::Profile;

/// Computes the color carried back along a single camera ray.
pub trait SamplerIntegrator: Sync + Send {
    fn color(&self, sampler: &mut dyn Sampler, camera_ray: Ray, profile: &mut Profile) -> Colorf;
}
