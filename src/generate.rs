//! Press kit document assembly.
//!
//! The final stage of the pipeline. Takes a film record that has passed
//! [`validate`] plus its [`AssetBundle`] and produces the artifact: one
//! standalone HTML document.
//!
//! ## Assembly
//!
//! 1. Resolve the [`Theme`](crate::theme::Theme) from the film's genre
//! 2. Acquire a [`DisplayScope`] for every image
//! 3. Render the ten sections in [`Section::ORDER`]
//! 4. Wrap them in the document shell with the embedded stylesheet
//! 5. Release the display scope
//!
//! Assembly performs no validation of its own; callers gate on
//! [`validate`] first. It is also total and deterministic: the same inputs
//! always produce byte-identical output.
//!
//! ## Self-Contained Output
//!
//! Styling is embedded in a single `<style>` block: the theme's custom
//! properties followed by `static/epk.css`, compiled in at build time. The
//! static sheet names no colors of its own, and the neutrals are derived
//! from the palette, so the theme's three colors are the only color literals
//! in the document. Images are embedded as `data:`
//! URIs, so the artifact prints and displays with no network access.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::assets::AssetBundle;
use crate::config::EpkConfig;
use crate::display::DisplayScope;
use crate::naming;
use crate::sections::{self, Section};
use crate::theme::{Theme, theme_css};
use crate::types::{ProjectConfig, filled};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use crate::validate::{ValidationResult, validate};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/epk.css");

/// Assemble the press kit with stock engine settings.
pub fn generate(config: &ProjectConfig, assets: &AssetBundle) -> String {
    generate_with(config, assets, &EpkConfig::default())
}

/// Assemble the press kit with project engine settings.
#[tracing::instrument(skip_all, fields(title = filled(&config.metadata.title).unwrap_or_default()))]
pub fn generate_with(config: &ProjectConfig, assets: &AssetBundle, settings: &EpkConfig) -> String {
    let table = settings.theme_table();
    let theme = table.resolve(filled(&config.metadata.genre));
    let css = format!("{}\n\n{}", theme_css(theme), CSS_STATIC);

    let scope = DisplayScope::acquire(assets);
    let meta = &config.metadata;

    let content = html! {
        @for section in Section::ORDER {
            (render_section(section, config, assets, &scope, settings, theme))
        }
    };

    let title = filled(&meta.title).unwrap_or_default();
    let document =
        base_document(title, filled(&meta.logline), &css, content).into_string();

    scope.release();
    tracing::debug!(bytes = document.len(), "assembled press kit");
    document
}

fn render_section(
    section: Section,
    config: &ProjectConfig,
    assets: &AssetBundle,
    scope: &DisplayScope,
    settings: &EpkConfig,
    theme: &Theme,
) -> Markup {
    let meta = &config.metadata;
    let fragment = match section {
        Section::Cover => sections::render_cover(
            meta,
            &config.awards,
            scope.poster(),
            theme,
            settings.cover.max_laurels,
        ),
        Section::Synopsis => sections::render_synopsis(meta),
        Section::Reviews => sections::render_reviews(&config.reviews),
        Section::Festivals => sections::render_festivals(&config.awards, &config.festivals),
        Section::Press => sections::render_press(&config.press_coverage),
        Section::Team => sections::render_team(&config.team, |member| {
            assets
                .team_photo_index(member)
                .and_then(|idx| scope.team_photo(idx))
        }),
        Section::Distribution => sections::render_distribution(config.distribution.as_ref()),
        Section::Technical => sections::render_technical(meta, &config.technical),
        Section::Gallery => sections::render_gallery(scope.stills()),
        Section::Contact => {
            sections::render_contact(&config.contact, &settings.contact.default_distributor)
        }
    };
    tracing::debug!(
        section = section.id(),
        empty = fragment.0.is_empty(),
        "rendered section"
    );
    fragment
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, description: Option<&str>, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                title { (title) " - Electronic Press Kit" }
                style { (PreEscaped(css)) }
            }
            body.epk {
                (content)
            }
        }
    }
}

// ============================================================================
// Artifact output
// ============================================================================

/// Download filename for a film's press kit.
pub fn output_filename(title: Option<&str>) -> String {
    naming::artifact_filename(title)
}

/// Write `html` into `dir` under [`output_filename`], returning the path.
pub fn write_artifact(dir: &Path, title: Option<&str>, html: &str) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(output_filename(title));
    fs::write(&path, html)?;
    tracing::info!(path = %path.display(), "wrote press kit");
    Ok(path)
}

/// Hex SHA-256 of an artifact.
pub fn artifact_digest(html: &str) -> String {
    let digest = Sha256::digest(html.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

// ============================================================================
// Tests
// ============================================================================
