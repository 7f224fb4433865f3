mod film;
mod naive;

pub use film::Film;
pub use naive::NaiveRenderer;

use crate::camera::ProjectiveCamera;
use crate::math::*;
use crate::parsing::config::RenderSettings;
use crate::world::Scene;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{Rgba, RgbaImage};
use tracing::info;

pub trait Renderer {
    fn render(
        &self,
        scene: &Scene,
        camera: &ProjectiveCamera,
        settings: &RenderSettings,
    ) -> Film<Colori>;
}

pub fn save_png(film: &Film<Colori>, path: &Path) -> anyhow::Result<()> {
    let img = RgbaImage::from_fn(film.width as u32, film.height as u32, |x, y| {
        Rgba(unpack(film.at(x as usize, y as usize)))
    });
    img.save(path)
        .with_context(|| format!("failed to write {}", path.to_string_lossy()))?;
    Ok(())
}

/// Writes the film to `output/<filename>.png`, creating the directory if needed.
pub fn output_film(render_settings: &RenderSettings, film: &Film<Colori>) -> anyhow::Result<PathBuf> {
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir).context("failed to create the output directory")?;
    let png_filename = output_dir.join(format!("{}.png", render_settings.output_name()));
    info!("saving image to {}", png_filename.to_string_lossy());
    save_png(film, &png_filename)?;
    Ok(png_filename)
}
