use super::{Vec3, PI};

use rand::{thread_rng, Rng};

#[derive(Debug)]
pub struct Sample2D {
    pub x: f64,
    pub y: f64,
}

impl Sample2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Sample2D { x, y }
    }
    pub fn new_random_sample() -> Self {
        let mut rng = thread_rng();
        Sample2D {
            x: rng.gen(),
            y: rng.gen(),
        }
    }
}

/// Source of uniform samples in `[0, 1)`.
///
/// Implementations are owned per thread; nothing here is shared.
pub trait Sampler {
    fn draw_1d(&mut self) -> f64;
    fn draw_2d(&mut self) -> Sample2D;
}

pub struct RandomSampler {}

impl RandomSampler {
    pub const fn new() -> RandomSampler {
        RandomSampler {}
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    fn draw_1d(&mut self) -> f64 {
        thread_rng().gen()
    }
    fn draw_2d(&mut self) -> Sample2D {
        Sample2D::new_random_sample()
    }
}

/// Cosine weighted direction on the +z hemisphere.
pub fn random_cosine_direction(r: Sample2D) -> Vec3 {
    let Sample2D { x: u, y: v } = r;
    let z = (1.0 - v).sqrt();
    let phi = 2.0 * PI * u;
    let (mut y, mut x) = phi.sin_cos();
    x *= v.sqrt();
    y *= v.sqrt();
    Vec3::new(x, y, z)
}
