use crate::cli::output::OutputFormat;
use crate::Convention;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub convention: Convention,
    pub format: OutputFormat,
    pub color: bool,
}

/// Settings as written in a config file; absent keys leave lower layers untouched
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigFile {
    pub convention: Option<Convention>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convention: Convention::Camel,
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        convention: Option<Convention>,
        format: Option<OutputFormat>,
        no_color: bool,
    ) -> Result<Self> {
        let global_path = Self::global_config_path();
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);

        let mut layers = Vec::new();
        if let Some(global_path) = &global_path {
            layers.push(global_path.as_path());
        }
        layers.push(local_path.as_path());

        let mut config = Self::layered(&layers)?;

        // Apply CLI overrides
        if let Some(convention) = convention {
            config.convention = convention;
        }
        if let Some(format) = format {
            config.format = format;
        }
        if no_color {
            config.color = false;
        }

        Ok(config)
    }

    /// Defaults overlaid with each existing file in order, later files winning
    pub fn layered(paths: &[&Path]) -> Result<Self> {
        let mut config = Self::default();
        for path in paths {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config file");
                config = config.merge(ConfigFile::from_file(path)?);
            }
        }
        Ok(config)
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(convention) = file.convention {
            self.convention = convention;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
