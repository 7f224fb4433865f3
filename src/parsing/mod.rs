pub mod config;

use config::TOMLConfig;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::info;

pub fn load_arbitrary<T, P>(filepath: P) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let filepath = filepath.as_ref();
    info!("loading file at {}", filepath.to_string_lossy());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.to_string_lossy()))?;
    info!("done: {} bytes", read_count);

    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.to_string_lossy()))?;
    Ok(data)
}

// saturates instead of wrapping on machines with more than u16::MAX logical cpus
fn cpu_threads(cpus: usize) -> u16 {
    u16::try_from(cpus).unwrap_or(u16::MAX)
}

/// Reads the render config, filling in the thread count from the number of logical cpus when unset.
pub fn get_settings<P: AsRef<Path>>(filepath: P) -> anyhow::Result<TOMLConfig> {
    let mut settings: TOMLConfig = load_arbitrary(filepath)?;
    if settings.render_settings.threads.is_none() {
        settings.render_settings.threads = Some(cpu_threads(num_cpus::get()));
    }
    Ok(settings)
}
