// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::filter::City;

/// Path of a YAML config file to read instead of `./bikeshare.yaml`.
pub const CONFIG_ENV: &str = "BIKESHARE_CONFIG";
/// Overrides `data_dir` after the config file is read.
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";
pub const DEFAULT_CONFIG_FILE: &str = "bikeshare.yaml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the per-city CSV files.
    pub data_dir: PathBuf,
    pub files: CityFiles,
    pub display: DisplayOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            files: CityFiles::default(),
            display: DisplayOptions::default(),
        }
    }
}

/// File name (relative to `data_dir`) of each city's trips.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CityFiles {
    pub chicago: String,
    pub new_york_city: String,
    pub washington: String,
}

impl Default for CityFiles {
    fn default() -> Self {
        Self {
            chicago: "chicago.csv".into(),
            new_york_city: "new_york_city.csv".into(),
            washington: "washington.csv".into(),
        }
    }
}

impl CityFiles {
    pub fn file_for(&self, city: City) -> &str {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }
}

/// How raw rows are rendered by the pager.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Columns past this many are not shown.
    pub max_columns: usize,
    /// Printed in place of missing values.
    pub null_text: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_columns: 200,
            null_text: String::new(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("parsing config yaml")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Resolve from the environment: `$BIKESHARE_CONFIG`, then `./bikeshare.yaml`,
    /// then defaults; `$BIKESHARE_DATA_DIR` wins over any `data_dir` in the file.
    pub fn load() -> Result<Self> {
        let explicit = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let data_dir = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        Self::resolve(explicit, Path::new(DEFAULT_CONFIG_FILE), data_dir)
    }

    fn resolve(
        explicit: Option<PathBuf>,
        fallback: &Path,
        data_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let mut cfg = match explicit {
            Some(path) => {
                info!(path = %path.display(), "reading config");
                Self::from_file(&path)?
            }
            None if fallback.is_file() => {
                info!(path = %fallback.display(), "reading config");
                Self::from_file(fallback)?
            }
            None => {
                debug!("no config file, using defaults");
                Self::default()
            }
        };
        if let Some(dir) = data_dir {
            cfg.data_dir = dir;
        }
        Ok(cfg)
    }
}
