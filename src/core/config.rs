use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_INPUT: &str = "devises.txt";

fn default_display_precision() -> u32 {
    4
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Decimal places shown for converted amounts.
    #[serde(default = "default_display_precision")]
    pub display_precision: u32,
    /// Print the rate list, search maps and path alongside the result.
    #[serde(default)]
    pub diagnostics: bool,
    /// Input file used when none is given on the command line.
    #[serde(default)]
    pub default_input: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            display_precision: default_display_precision(),
            diagnostics: false,
            default_input: None,
        }
    }
}

impl AppConfig {
    /// Loads the config at the default location, falling back to built-in
    /// defaults when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "fxpath")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Input path to use when the command line gives none.
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(self.default_input.as_deref().unwrap_or(DEFAULT_INPUT))
    }
}
