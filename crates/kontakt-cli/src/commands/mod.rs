//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod correct;
pub mod extract;
pub mod merge;
pub mod parse;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use kontakt_core::KontaktConfig;
use tracing::debug;

/// `<config_dir>/kontakt/config.json`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kontakt")
        .join("config.json")
}

/// Load the config from `--config`, else the default location, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<KontaktConfig> {
    if let Some(path) = config_path {
        return Ok(KontaktConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(KontaktConfig::from_file(&path)?)
    } else {
        Ok(KontaktConfig::default())
    }
}

/// Read a text file, or stdin for `-`.
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = Path::new(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(fs::read_to_string(path)?)
}
