use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::icon::Background;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "pwa-icons.toml";

/// A single icon to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconJob {
    /// Where the PNG is written.
    pub output: PathBuf,
    /// Canvas side length in pixels.
    pub size: u32,
    /// Share of the canvas width taken by the logo, in percent.
    #[serde(default = "default_logo_percentage")]
    pub logo_percentage: f64,
}

fn default_logo_percentage() -> f64 {
    80.0
}

impl IconJob {
    pub fn new(output: impl Into<PathBuf>, size: u32, logo_percentage: f64) -> Self {
        Self {
            output: output.into(),
            size,
            logo_percentage,
        }
    }
}

/// Icon generation settings stored as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Logo image every icon is built from.
    #[serde(default = "default_source")]
    pub source: PathBuf,
    /// Canvas fill color.
    #[serde(default)]
    pub background: Background,
    #[serde(default = "default_icons")]
    pub icons: Vec<IconJob>,
}

fn default_source() -> PathBuf {
    PathBuf::from("assets/logo.jpg")
}

fn default_icons() -> Vec<IconJob> {
    vec![
        IconJob::new("assets/icon-192.png", 192, 80.0),
        IconJob::new("assets/icon-512.png", 512, 80.0),
        // Maskable: smaller logo so it stays inside the safe zone
        IconJob::new("assets/icon-maskable-512.png", 512, 70.0),
    ]
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            background: Background::default(),
            icons: default_icons(),
        }
    }
}

impl IconConfig {
    /// Load config from `path`, or from `./pwa-icons.toml` if it exists,
    /// falling back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_in(path, Path::new("."))
    }

    /// Like [`IconConfig::load`], looking for the default file in `dir`.
    fn load_in(path: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let local = dir.join(DEFAULT_CONFIG_FILE);
                if !local.exists() {
                    tracing::debug!("No {} found, using defaults", local.display());
                    return Ok(Self::default());
                }
                local
            }
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::info!("Config saved to {}", path.display());
        Ok(())
    }
}
