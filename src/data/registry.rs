use std::path::{Path, PathBuf};

use super::error::LoadError;
use crate::config::{CityFiles, Config};
use crate::filter::City;

/// Maps each city to the CSV file holding its trips.
#[derive(Debug, Clone)]
pub struct CityRegistry {
    data_dir: PathBuf,
    files: CityFiles,
}

impl CityRegistry {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            data_dir: cfg.data_dir.clone(),
            files: cfg.files.clone(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(self.files.file_for(city))
    }

    /// Case-insensitive name lookup.
    pub fn resolve(&self, name: &str) -> Result<(City, PathBuf), LoadError> {
        let city = City::from_name(name).ok_or_else(|| LoadError::UnknownCity(name.to_string()))?;
        Ok((city, self.path_for(city)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn name_casing_selects_same_file() -> Result<()> {
        let reg = CityRegistry::from_config(&Config::default());
        let (_, lower) = reg.resolve("new york city")?;
        for name in ["New York City", "New york city", "NEW YORK CITY"] {
            let (city, path) = reg.resolve(name)?;
            assert_eq!(city, City::NewYorkCity);
            assert_eq!(path, lower);
        }
        assert_eq!(lower, PathBuf::from("data").join("new_york_city.csv"));
        Ok(())
    }

    #[test]
    fn unknown_city_is_reported_not_substituted() {
        let reg = CityRegistry::from_config(&Config::default());
        match reg.resolve("boston") {
            Err(LoadError::UnknownCity(name)) => assert_eq!(name, "boston"),
            other => panic!("expected UnknownCity, got {other:?}"),
        }
    }
}
