//! # Film EPK
//!
//! Assembles a film's Electronic Press Kit: one self-contained, print-ready
//! HTML document built from the record a filmmaker fills in through the
//! wizard (`film_config.json`) and the images they upload.
//!
//! # Architecture: Validate, Then Assemble
//!
//! The engine exposes two entry points:
//!
//! ```text
//! validate(config, assets)  →  ValidationResult   (errors block, warnings advise)
//! generate(config, assets)  →  String             (the finished document)
//! ```
//!
//! Callers run [`validate`] first and only call [`generate`] when the result
//! has no errors. Generation itself never fails: malformed values such as an
//! out-of-range review rating or an unknown genre are absorbed (clamped, or
//! given the default palette) instead of aborting the press kit.
//!
//! Inside [`generate`], assembly is a straight line:
//!
//! ```text
//! genre ─→ Theme ─→ :root color properties + embedded stylesheet
//! assets ─→ DisplayScope (data: URIs, released when assembly ends)
//! record ─→ 10 section renderers, fixed order ─→ document shell
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The film record deserialized from `film_config.json` |
//! | [`assets`] | Image handles and the bundle loaded from the project folders |
//! | [`display`] | Scoped display references that embed images as `data:` URIs |
//! | [`theme`] | Genre → three-color palette lookup and its CSS properties |
//! | [`validate`] | Blocking and advisory checks, run all at once |
//! | [`sections`] | The ten pure section renderers, built with Maud |
//! | [`generate`] | Document assembly, artifact naming, writing, and digests |
//! | [`config`] | `epk.toml` engine settings merged over stock defaults |
//! | [`project`] | One project directory loaded from disk |
//! | [`batch`] | Parallel generation across many project directories |
//! | [`template`] | The starter `film_config.json` |
//! | [`naming`] | Title slugs and team photo file name matching |
//! | [`output`] | CLI output formatting for check, generate, and batch |
//!
//! # Design Decisions
//!
//! ## One File, No Network
//!
//! The artifact is emailed to festivals, opened offline, and printed. It
//! carries its stylesheet inline and every image as a `data:` URI, so it
//! renders the same from a USB stick as from a web server.
//!
//! ## Colors Come Only From the Theme
//!
//! The static stylesheet refers to colors exclusively through `--epk-*`
//! custom properties: the palette's primary, secondary, and accent, plus
//! surface, ink, and shadow neutrals derived from them. Changing the genre
//! therefore re-colors the entire document. Tests reject hex literals other
//! than the palette's, named colors, and underived color functions in the
//! style block.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions, not stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped. Press kits
//!   contain arbitrary user text (quotes, bios, titles).
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Empty Sections Vanish
//!
//! Optional sections render nothing at all when they have no data, so a
//! short film without reviews or festival history does not print empty
//! headings.

pub mod assets;
pub mod batch;
pub mod config;
pub mod display;
pub mod generate;
pub mod naming;
pub mod output;
pub mod project;
pub mod sections;
pub mod template;
pub mod theme;
pub mod types;
pub mod validate;

pub use generate::generate;
pub use validate::validate;

#[cfg(test)]
pub(crate) mod test_helpers;
