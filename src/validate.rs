//! Pre-generation checks on a film record and its images.
//!
//! Findings come in two severities:
//!
//! - **Errors** block generation: a required metadata field, the contact
//!   email, or the poster is missing.
//! - **Warnings** are advisory: too few stills, a short synopsis, or images
//!   below print resolution.
//!
//! Every check runs on every call, so a single pass reports the complete list
//! of problems. Nothing here mutates its inputs.

use crate::assets::AssetBundle;
use crate::config::ValidationRules;
use crate::types::{ProjectConfig, filled};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A blocking problem. The `Display` text is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {}", .0.label())]
    MissingField(RequiredField),
    #[error("Contact email required")]
    MissingContactEmail,
    #[error("Poster image required (JPG or PNG)")]
    MissingPoster,
}

/// An advisory finding. Never blocks generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    #[error("Only {found} stills found. Recommended: {recommended}-12")]
    FewStills { found: usize, recommended: usize },
    #[error("Synopsis is short ({chars} chars). Recommended: 200-400 words")]
    ShortSynopsis { chars: usize },
    #[error("Poster resolution low ({width}x{height}px). Recommended: 2000x3000px")]
    LowPosterResolution { width: u32, height: u32 },
    #[error("Still '{name}' resolution low. Recommended: 1920x1080px")]
    LowStillResolution { name: String },
}

/// Metadata fields a press kit cannot do without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Logline,
    Synopsis,
    Genre,
    Runtime,
}

impl RequiredField {
    pub const ALL: [RequiredField; 5] = [
        RequiredField::Title,
        RequiredField::Logline,
        RequiredField::Synopsis,
        RequiredField::Genre,
        RequiredField::Runtime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Title => "Film title",
            RequiredField::Logline => "Logline",
            RequiredField::Synopsis => "Synopsis",
            RequiredField::Genre => "Genre",
            RequiredField::Runtime => "Runtime",
        }
    }

    fn value(self, config: &ProjectConfig) -> &Option<String> {
        let meta = &config.metadata;
        match self {
            RequiredField::Title => &meta.title,
            RequiredField::Logline => &meta.logline,
            RequiredField::Synopsis => &meta.synopsis,
            RequiredField::Genre => &meta.genre,
            RequiredField::Runtime => &meta.runtime,
        }
    }
}

/// Outcome of [`validate`].
///
/// Serializes as `{"is_valid": bool, "errors": [msg], "warnings": [msg]}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// True iff there are no blocking errors. Warnings never matter here.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("errors", &self.error_messages())?;
        state.serialize_field("warnings", &self.warning_messages())?;
        state.end()
    }
}

/// Validate with the stock thresholds.
pub fn validate(config: &ProjectConfig, assets: &AssetBundle) -> ValidationResult {
    validate_with(config, assets, &ValidationRules::default())
}

/// Validate with project-specific thresholds.
pub fn validate_with(
    config: &ProjectConfig,
    assets: &AssetBundle,
    rules: &ValidationRules,
) -> ValidationResult {
    let mut result = ValidationResult::default();

    for field in RequiredField::ALL {
        if filled(field.value(config)).is_none() {
            result.errors.push(ValidationError::MissingField(field));
        }
    }

    match &assets.poster {
        None => result.errors.push(ValidationError::MissingPoster),
        Some(poster) => {
            let [min_w, min_h] = rules.poster_min_size;
            if let Some((width, height)) = poster.dimensions() {
                if width < min_w || height < min_h {
                    result
                        .warnings
                        .push(ValidationWarning::LowPosterResolution { width, height });
                }
            }
        }
    }

    if assets.stills.len() < rules.min_stills {
        result.warnings.push(ValidationWarning::FewStills {
            found: assets.stills.len(),
            recommended: rules.min_stills,
        });
    }
    // One warning is enough to tell the user to re-export
    if let Some(still) = assets.stills.iter().take(rules.still_sample).find(|s| {
        s.dimensions()
            .is_some_and(|(width, _)| width < rules.still_min_width)
    }) {
        result.warnings.push(ValidationWarning::LowStillResolution {
            name: still.name().to_string(),
        });
    }

    if filled(&config.contact.email).is_none() {
        result.errors.push(ValidationError::MissingContactEmail);
    }

    if let Some(synopsis) = filled(&config.metadata.synopsis) {
        let chars = synopsis.chars().count();
        if chars < rules.min_synopsis_chars {
            result
                .warnings
                .push(ValidationWarning::ShortSynopsis { chars });
        }
    }

    tracing::debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated film record"
    );
    result
}
