//! One film project on disk.
//!
//! A project directory holds the wizard's film record, an optional
//! `epk.toml`, and the image folders described in [`crate::assets`]:
//!
//! ```text
//! my-film/
//! ├── film_config.json        # Film record (see crate::types)
//! ├── epk.toml                # Engine settings (optional)
//! ├── assets/images/...       # Poster, stills, cast, crew
//! └── output/html/            # Generated press kits
//! ```
//!
//! [`Project::load`] is the only fallible step. Once loaded, validation and
//! generation cannot fail.

use crate::assets::{AssetBundle, AssetError};
use crate::config::{self, ConfigError, EpkConfig};
use crate::generate;
use crate::types::{ProjectConfig, filled};
use crate::validate::{self, ValidationResult};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where generated press kits go, relative to the project directory.
pub const OUTPUT_DIR: &str = "output/html";

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid film config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Assets(#[from] AssetError),
}

/// A loaded project: film record, engine settings, and images.
#[derive(Debug)]
pub struct Project {
    pub dir: PathBuf,
    pub film: ProjectConfig,
    pub settings: EpkConfig,
    pub assets: AssetBundle,
}

impl Project {
    /// Load the project in `dir`. `film_config` is resolved against `dir`
    /// unless absolute.
    pub fn load(dir: &Path, film_config: &Path) -> Result<Self, ProjectError> {
        let path = dir.join(film_config);
        let json = std::fs::read_to_string(&path).map_err(|source| ProjectError::Read {
            path: path.clone(),
            source,
        })?;
        let film = ProjectConfig::from_json(&json)
            .map_err(|source| ProjectError::Parse { path, source })?;
        let settings = config::load_config(dir)?;
        let assets = AssetBundle::load(dir)?;
        tracing::debug!(
            dir = %dir.display(),
            stills = assets.stills.len(),
            team_photos = assets.team_photos.len(),
            "loaded project"
        );
        Ok(Self {
            dir: dir.to_path_buf(),
            film,
            settings,
            assets,
        })
    }

    pub fn title(&self) -> Option<&str> {
        filled(&self.film.metadata.title)
    }

    /// Validate against this project's thresholds.
    pub fn validate(&self) -> ValidationResult {
        validate::validate_with(&self.film, &self.assets, &self.settings.validation)
    }

    /// Assemble the press kit. Callers check [`validate`](Self::validate)
    /// first.
    pub fn generate(&self) -> String {
        generate::generate_with(&self.film, &self.assets, &self.settings)
    }

    /// Default artifact directory.
    pub fn output_dir(&self) -> PathBuf {
        self.dir.join(OUTPUT_DIR)
    }
}
