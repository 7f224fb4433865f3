use crate::camera::ProjectiveCamera;
use crate::math::*;

use anyhow::Context;
use serde::Deserialize;

pub const OUTPUT_IMAGE_COLUMNS: usize = 1280;
pub const OUTPUT_IMAGE_ROWS: usize = 720;
pub const MAX_RECURSION_DEPTH: u16 = 3;
pub const BACKGROUND_COLOR: Colorf = COLOR_SKYBLUE;

pub type Vec3Data = [f64; 3];

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: OUTPUT_IMAGE_COLUMNS,
            height: OUTPUT_IMAGE_ROWS,
        }
    }
}

impl Resolution {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub look_from: Vec3Data,
    pub look_at: Vec3Data,
    pub v_up: Option<Vec3Data>, // defaults to 0,1,0
    pub vfov: f64,              // in degrees
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            look_from: [13.0, 2.0, 3.0],
            look_at: [0.0, 0.0, 0.0],
            v_up: None,
            vfov: 20.0,
        }
    }
}

impl CameraSettings {
    pub fn build(&self, aspect_ratio: f64) -> anyhow::Result<ProjectiveCamera> {
        ProjectiveCamera::new(
            Vec3::from(self.look_from),
            Vec3::from(self.look_at),
            Vec3::from(self.v_up.unwrap_or([0.0, 1.0, 0.0])),
            self.vfov,
            aspect_ratio,
        )
        .context("invalid [camera] settings")
    }
}

fn default_max_depth() -> u16 {
    MAX_RECURSION_DEPTH
}

fn default_min_samples() -> u16 {
    16
}

fn default_background() -> Vec3Data {
    BACKGROUND_COLOR.into()
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: Option<String>,
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default = "default_max_depth")]
    pub max_depth: u16,
    #[serde(default = "default_min_samples")]
    pub min_samples: u16,
    pub threads: Option<u16>,
    #[serde(default = "default_background")]
    pub background: Vec3Data,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            filename: None,
            resolution: Resolution::default(),
            max_depth: default_max_depth(),
            min_samples: default_min_samples(),
            threads: None,
            background: default_background(),
        }
    }
}

impl RenderSettings {
    pub fn background_color(&self) -> Colorf {
        Colorf::from(self.background)
    }

    pub fn output_name(&self) -> &str {
        self.filename.as_deref().unwrap_or("beauty")
    }
}

fn default_scene() -> String {
    String::from("rtweekend")
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TOMLConfig {
    #[serde(default = "default_scene")]
    pub default_scene: String,
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub render_settings: RenderSettings,
}

impl Default for TOMLConfig {
    fn default() -> Self {
        TOMLConfig {
            default_scene: default_scene(),
            camera: CameraSettings::default(),
            render_settings: RenderSettings::default(),
        }
    }
}
