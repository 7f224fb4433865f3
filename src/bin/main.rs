extern crate sphere_tracer as root;

use root::parsing::config::*;
use root::parsing::get_settings;
use root::renderer::{output_film, NaiveRenderer, Renderer};
use root::world::Scene;

use anyhow::{anyhow, bail, Context};
use structopt::StructOpt;
use tracing::{error, info, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// Scene preset to render instead of the one named in the config file
    #[structopt(long)]
    pub scene: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    /// Load everything but skip rendering
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config: TOMLConfig = get_settings(&opts.config_file)
        .with_context(|| format!("couldn't load config from {}", opts.config_file))?;

    // override scene based on provided command line argument
    if let Some(scene) = opts.scene {
        config.default_scene = scene;
    }
    let scene = Scene::preset(&config.default_scene)
        .ok_or_else(|| anyhow!("unknown scene preset {:?}", config.default_scene))?;
    info!(
        "using scene preset {} with {} actors",
        config.default_scene,
        scene.len()
    );

    let settings = &config.render_settings;
    if settings.resolution.width == 0 || settings.resolution.height == 0 {
        bail!(
            "invalid resolution {}x{}",
            settings.resolution.width,
            settings.resolution.height
        );
    }

    let camera = config.camera.build(settings.resolution.aspect_ratio())?;

    let threads = settings.threads.unwrap_or(1).max(1);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()
        .context("failed to build the rayon thread pool")?;
    info!("rendering with {} threads", threads);

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }

    let renderer = NaiveRenderer::new();
    let film = renderer.render(scene, &camera, settings);
    let path = output_film(settings, &film)?;
    info!("wrote {}", path.to_string_lossy());
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    let log_level = parse_log_level(&opts.log_level, Level::INFO);
    tracing_subscriber::fmt().with_max_level(log_level).init();

    if let Err(err) = run(opts) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}
