use crate::error::{MendelError, Result};
use config::{Config, Environment, File};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_FILE: &str = "mendel.toml";

/// Session settings, read from an optional TOML file and `MENDEL_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the allele draws; fresh entropy when unset.
    pub seed: Option<u64>,
    /// Number of pollinations run by the "many" action.
    pub large_batch: i64,
    /// Where `chart` writes its SVG when no path is given.
    pub chart_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            large_batch: 100,
            chart_path: None,
        }
    }
}

impl Settings {
    /// Loads `path`, or [`DEFAULT_SETTINGS_FILE`] when `None`. A missing file is not an
    /// error; environment variables override file values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };
        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("MENDEL").try_parsing(true))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.large_batch <= 0 {
            return Err(MendelError::InvalidArgument(format!(
                "large_batch must be positive, got {}",
                self.large_batch
            )));
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
