//! Starter `film_config.json`.
//!
//! Every field is filled with an example value so a new project shows the
//! complete shape of the record. The template passes the blocking checks in
//! [`crate::validate`] on its own; it still needs a poster before it can be
//! generated.

use crate::types::{
    Award, Contact, Distribution, Festival, Metadata, PressItem, ProjectConfig, Review,
    TeamMember, Technical,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the film record inside a project directory.
pub const FILM_CONFIG_FILE: &str = "film_config.json";

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// The example film record.
pub fn film_config_template() -> ProjectConfig {
    ProjectConfig {
        metadata: Metadata {
            title: text("Your Film Title"),
            tagline: text("A compelling tagline"),
            logline: text("One or two sentences that capture the essence of your film"),
            synopsis: text(
                "Full synopsis, two or three paragraphs. Tell the story, introduce the \
                 characters, and say what makes this film unique.\n\n\
                 Separate paragraphs with a blank line. Each one becomes its own block \
                 in the press kit.",
            ),
            genre: text("Drama"),
            runtime: text("90 minutes"),
            rating: text("NR"),
            release_date: text("2025"),
            language: text("English"),
            country: text("USA"),
            director: text("Director Name"),
        },
        team: vec![TeamMember {
            name: text("Director Name"),
            role: text("Writer/Director"),
            bio: text("Brief bio highlighting relevant experience"),
            photo: text("director.jpg"),
        }],
        awards: vec![Award {
            festival_name: text("Sundance Film Festival"),
            award: text("Jury Award - Best Feature"),
            year: text("2025"),
        }],
        festivals: vec![Festival {
            festival_name: text("Tribeca Film Festival"),
            year: text("2025"),
            selection_type: text("World Premiere"),
        }],
        reviews: vec![Review {
            quote: text("A masterpiece of modern cinema"),
            source: text("The Hollywood Reporter"),
            rating: Some(5),
        }],
        press_coverage: vec![PressItem {
            publication: text("Publication Name"),
            date: text("January 2025"),
            title: text("Article Title"),
            excerpt: text("Brief excerpt..."),
            url: text("https://example.com/article"),
        }],
        distribution: Some(Distribution {
            theatrical_release: text("March 15, 2025"),
            digital_release: text("May 1, 2025"),
            platforms: vec![
                "Apple TV".to_string(),
                "Prime Video".to_string(),
                "YouTube".to_string(),
            ],
            territories: vec!["USA".to_string(), "Canada".to_string()],
        }),
        technical: Technical {
            aspect_ratio: text("16:9"),
            sound: text("5.1 Surround"),
            color: text("Color"),
        },
        contact: Contact {
            distribution_company: text("Filmhub"),
            name: text("Your Name"),
            email: text("contact@example.com"),
            phone: text("(555) 123-4567"),
            website: text("https://example.com"),
        },
    }
}

/// The template as pretty-printed JSON.
pub fn film_config_template_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&film_config_template())
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the template into `project_dir`, returning its path.
///
/// An existing record is left untouched and `Ok(None)` is returned.
pub fn write_template(project_dir: &Path) -> Result<Option<PathBuf>, TemplateError> {
    let path = project_dir.join(FILM_CONFIG_FILE);
    if path.exists() {
        tracing::warn!(path = %path.display(), "film config already exists, not overwriting");
        return Ok(None);
    }
    std::fs::create_dir_all(project_dir)?;
    std::fs::write(&path, film_config_template_json()?)?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetBundle;
    use crate::validate::{ValidationError, validate};
    use tempfile::TempDir;

    #[test]
    fn template_json_round_trips() {
        let json = film_config_template_json().unwrap();
        let parsed = ProjectConfig::from_json(&json).unwrap();
        assert_eq!(parsed, film_config_template());
    }

    #[test]
    fn template_only_lacks_a_poster() {
        let result = validate(&film_config_template(), &AssetBundle::default());
        assert_eq!(result.errors, vec![ValidationError::MissingPoster]);
    }

    #[test]
    fn write_template_does_not_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = write_template(tmp.path()).unwrap().unwrap();
        assert!(path.ends_with(FILM_CONFIG_FILE));

        std::fs::write(&path, "{}").unwrap();
        assert!(write_template(tmp.path()).unwrap().is_none());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn write_template_reports_io_errors() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let err = write_template(&blocker.join("film")).unwrap_err();
        assert!(matches!(err, TemplateError::Io(_)));
    }
}
