//! The film record the wizard hands to the engine.
//!
//! These types mirror `film_config.json`. Keys are snake_case as written by
//! the wizard; the camelCase spellings used by the browser form are accepted
//! as aliases. Every section except `metadata` and `contact` may be omitted.
//!
//! Text fields are `Option<String>` because the wizard sends `null`, `""`,
//! or leaves keys out depending on which step the user skipped. Use
//! [`filled`] to read one: it treats all three the same way.

use serde::{Deserialize, Deserializer, Serialize};

/// The authoritative input record for one press kit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub metadata: Metadata,
    /// Cast and crew in display order.
    pub team: Vec<TeamMember>,
    pub awards: Vec<Award>,
    pub festivals: Vec<Festival>,
    pub reviews: Vec<Review>,
    #[serde(alias = "pressCoverage")]
    pub press_coverage: Vec<PressItem>,
    pub distribution: Option<Distribution>,
    pub technical: Technical,
    pub contact: Contact,
}

impl ProjectConfig {
    /// Parse the wizard's JSON record.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub logline: Option<String>,
    pub synopsis: Option<String>,
    pub genre: Option<String>,
    /// Free text ("92 minutes"); a bare number from the form is accepted.
    #[serde(deserialize_with = "lenient_text")]
    pub runtime: Option<String>,
    pub rating: Option<String>,
    #[serde(alias = "releaseDate", deserialize_with = "lenient_text")]
    pub release_date: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub director: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    /// File name of the member's photo among the bundle's team photos.
    /// When absent the photo is matched by name (see [`crate::naming`]).
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    #[serde(alias = "festivalName")]
    pub festival_name: Option<String>,
    pub award: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Festival {
    #[serde(alias = "festivalName")]
    pub festival_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub year: Option<String>,
    #[serde(alias = "selectionType")]
    pub selection_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub quote: Option<String>,
    pub source: Option<String>,
    /// Star rating, nominally 1-5. Out-of-range values are kept here as
    /// given and clamped when rendered.
    #[serde(deserialize_with = "lenient_rating")]
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressItem {
    pub publication: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub date: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distribution {
    #[serde(alias = "theatricalRelease", deserialize_with = "lenient_text")]
    pub theatrical_release: Option<String>,
    #[serde(alias = "digitalRelease", deserialize_with = "lenient_text")]
    pub digital_release: Option<String>,
    pub platforms: Vec<String>,
    pub territories: Vec<String>,
}

impl Distribution {
    /// True when no field would put anything on the page.
    pub fn is_empty(&self) -> bool {
        filled(&self.theatrical_release).is_none()
            && filled(&self.digital_release).is_none()
            && self.platforms().next().is_none()
            && self.territories().next().is_none()
    }

    /// Non-blank platform names, trimmed.
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        filled_items(&self.platforms)
    }

    /// Non-blank territory names, trimmed.
    pub fn territories(&self) -> impl Iterator<Item = &str> {
        filled_items(&self.territories)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Technical {
    #[serde(alias = "aspectRatio")]
    pub aspect_ratio: Option<String>,
    pub sound: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(alias = "distributionCompany")]
    pub distribution_company: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// Read a text field, treating absent, empty, and whitespace-only alike.
///
/// Returns the trimmed value.
pub fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// The entries of a text list that [`filled`] would keep.
pub fn filled_items(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Accepts a string, an integer, or a float for a text field.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    }))
}

/// Accepts `5`, `4.5` (rounded), or `"5"`. Anything unparseable is no rating.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Int(n)) => Some(n),
        Some(Raw::Float(f)) if f.is_finite() => Some(f.round() as i64),
        Some(Raw::Float(_)) => None,
        Some(Raw::Text(s)) => s.trim().parse().ok(),
    })
}
