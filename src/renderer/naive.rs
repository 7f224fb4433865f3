use super::{Film, Renderer};

use crate::camera::ProjectiveCamera;
use crate::integrator::{PathTracingIntegrator, SamplerIntegrator};
use crate::math::*;
use crate::parsing::config::RenderSettings;
use crate::profile::Profile;
use crate::world::Scene;

use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, warn};

/// Renders every pixel independently, spreading pixels over the rayon thread pool.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    pub fn render_sampled<I: SamplerIntegrator>(
        integrator: &I,
        settings: &RenderSettings,
        camera: &ProjectiveCamera,
    ) -> (Film<Colori>, Profile) {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        info!("starting render with film resolution {}x{}", width, height);
        let samples = if settings.min_samples == 0 {
            warn!("min_samples is 0, taking 1 sample per pixel instead");
            1
        } else {
            settings.min_samples
        };
        let mut film: Film<Colori> = Film::new(width, height, 0);
        info!("samples per pixel: {}", samples);
        info!("total samples: {}", film.total_pixels() * samples as usize);
        let film_size = Point2D::from((width, height));

        let stats: Profile = film
            .buffer
            .par_iter_mut()
            .enumerate()
            .map(|(pixel_index, pixel_ref)| {
                let mut profile = Profile::default();
                let y: usize = pixel_index / width;
                let x: usize = pixel_index - width * y;

                let mut sampler = RandomSampler::new();
                let mut temp_color = COLOR_BLACK;
                for _ in 0..samples {
                    let sample = sampler.draw_2d();
                    let uv = (Point2D::from((x, y)) + Point2D::new(sample.x, sample.y)) / film_size;
                    // film rows go top to bottom, the camera plane goes bottom to top
                    let ray = camera.get_ray(Point2D::new(uv.x, 1.0 - uv.y));
                    profile.camera_rays += 1;
                    temp_color += integrator.color(&mut sampler, ray, &mut profile);
                }
                *pixel_ref = pack(temp_color / samples as f64);
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b));

        (film, stats)
    }
}

impl Renderer for NaiveRenderer {
    fn render(
        &self,
        scene: &Scene,
        camera: &ProjectiveCamera,
        settings: &RenderSettings,
    ) -> Film<Colori> {
        let integrator =
            PathTracingIntegrator::new(scene, settings.max_depth, settings.background_color());
        info!(
            "constructing integrator, max depth: {}, background: {:?}",
            integrator.max_depth, integrator.background
        );

        let now = Instant::now();
        let (film, stats) = NaiveRenderer::render_sampled(&integrator, settings, camera);
        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        stats.pretty_print(elapsed, settings.threads.unwrap_or(1) as usize);
        film
    }
}
