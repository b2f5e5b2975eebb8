//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output leads with what the press kit will contain, not with files. The
//! film is shown by title, images by position and name, and paths appear as
//! secondary context on indented lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Film
//!     Night Tide (Horror, 92 minutes)
//!     Source: film_config.json
//! Images
//!     Poster: poster.jpg (2000x3000)
//!     Stills (2)
//!         001 001-beach.jpg (1920x1080)
//!         002 002-storm.jpg (1920x1080)
//!     Team photos (0)
//!
//! Warnings
//!     ! Only 2 stills found. Recommended: 8-12
//! Ready to generate (1 warning)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Night Tide → output/html/night-tide_epk.html
//!     Size: 4.2 MB
//!     SHA-256: 3f1a...
//! ```
//!
//! ## Batch
//!
//! ```text
//! 001 lighthouse ✓ → lighthouse/output/html/night-tide_epk.html
//! 002 untitled ✗
//!         Poster image required (JPG or PNG)
//! Total: 2 | Success: 1 | Failed: 1
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::assets::ImageHandle;
use crate::batch::BatchResult;
use crate::project::Project;
use crate::types::filled;
use crate::validate::ValidationResult;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Image name with its pixel size when known.
///
/// ```text
/// poster.jpg (2000x3000)
/// broken.jpg
/// ```
fn image_label(image: &ImageHandle) -> String {
    match image.dimensions() {
        Some((w, h)) => format!("{} ({}x{})", image.name(), w, h),
        None => image.name().to_string(),
    }
}

fn image_list(heading: &str, images: &[ImageHandle], lines: &mut Vec<String>) {
    lines.push(format!("{}{} ({})", indent(1), heading, images.len()));
    for (idx, image) in images.iter().enumerate() {
        lines.push(format!(
            "{}{} {}",
            indent(2),
            format_index(idx + 1),
            image_label(image)
        ));
    }
}

/// Human-readable byte count.
fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Path relative to `base` when possible, for shorter lines.
fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ============================================================================
// Check
// ============================================================================

/// Inventory of a loaded project: the film and every image found.
pub fn format_project(project: &Project, film_config: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let meta = &project.film.metadata;

    lines.push("Film".to_string());
    let title = filled(&meta.title).unwrap_or("(untitled)");
    let details: Vec<&str> = [filled(&meta.genre), filled(&meta.runtime)]
        .into_iter()
        .flatten()
        .collect();
    if details.is_empty() {
        lines.push(format!("{}{}", indent(1), title));
    } else {
        lines.push(format!("{}{} ({})", indent(1), title, details.join(", ")));
    }
    lines.push(format!(
        "{}Source: {}",
        indent(1),
        display_path(film_config, &project.dir)
    ));

    lines.push("Images".to_string());
    match &project.assets.poster {
        Some(poster) => lines.push(format!("{}Poster: {}", indent(1), image_label(poster))),
        None => lines.push(format!("{}Poster: (none)", indent(1))),
    }
    image_list("Stills", &project.assets.stills, &mut lines);
    image_list("Team photos", &project.assets.team_photos, &mut lines);

    lines
}

/// Validation findings followed by a one-line verdict.
pub fn format_validation(result: &ValidationResult) -> Vec<String> {
    let mut lines = Vec::new();

    if !result.errors.is_empty() {
        lines.push("Errors".to_string());
        for message in result.error_messages() {
            lines.push(format!("{}\u{2717} {}", indent(1), message));
        }
    }
    if !result.warnings.is_empty() {
        lines.push("Warnings".to_string());
        for message in result.warning_messages() {
            lines.push(format!("{}! {}", indent(1), message));
        }
    }

    let verdict = match (result.is_valid(), result.warnings.len()) {
        (true, 0) => "Ready to generate".to_string(),
        (true, n) => format!("Ready to generate ({})", plural(n, "warning")),
        (false, _) => format!("Not ready: {}", plural(result.errors.len(), "error")),
    };
    lines.push(verdict);
    lines
}

pub fn print_project(project: &Project, film_config: &Path) {
    for line in format_project(project, film_config) {
        println!("{}", line);
    }
}

pub fn print_validation(result: &ValidationResult) {
    for line in format_validation(result) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Summary of one written press kit.
pub fn format_generate_summary(title: &str, path: &Path, bytes: usize, digest: &str) -> Vec<String> {
    vec![
        format!("{} \u{2192} {}", title, path.display()),
        format!("{}Size: {}", indent(1), format_size(bytes)),
        format!("{}SHA-256: {}", indent(1), digest),
    ]
}

pub fn print_generate_summary(title: &str, path: &Path, bytes: usize, digest: &str) {
    for line in format_generate_summary(title, path, bytes, digest) {
        println!("{}", line);
    }
}

// ============================================================================
// Batch
// ============================================================================

/// One line per film (errors indented beneath failures) plus totals.
pub fn format_batch_summary(results: &[BatchResult], root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    for (idx, result) in results.iter().enumerate() {
        let header = format!("{} {}", format_index(idx + 1), result.film);
        match (&result.html_path, result.success) {
            (Some(path), true) => {
                lines.push(format!("{} \u{2713} \u{2192} {}", header, display_path(path, root)));
            }
            _ => {
                lines.push(format!("{} \u{2717}", header));
                for error in &result.errors {
                    lines.push(format!("{}{}", indent(2), error));
                }
            }
        }
    }

    let succeeded = results.iter().filter(|r| r.success).count();
    lines.push(format!(
        "Total: {} | Success: {} | Failed: {}",
        results.len(),
        succeeded,
        results.len() - succeeded
    ));
    lines
}

pub fn print_batch_summary(results: &[BatchResult], root: &Path) {
    for line in format_batch_summary(results, root) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetBundle;
    use crate::config::EpkConfig;
    use crate::test_helpers::{bundle_with_stills, png_bytes, valid_config};
    use crate::validate::{ValidationError, ValidationWarning};
    use std::path::PathBuf;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }

    #[test]
    fn image_label_with_and_without_dimensions() {
        let png = ImageHandle::from_bytes("a.png", png_bytes(4, 3));
        assert_eq!(image_label(&png), "a.png (4x3)");
        let junk = ImageHandle::from_bytes("b.jpg", vec![0u8; 4]);
        assert_eq!(image_label(&junk), "b.jpg");
    }

    // =========================================================================
    // Check
    // =========================================================================

    fn project(assets: AssetBundle) -> Project {
        Project {
            dir: PathBuf::from("/films/night-tide"),
            film: valid_config(),
            settings: EpkConfig::default(),
            assets,
        }
    }

    #[test]
    fn project_inventory() {
        let project = project(bundle_with_stills(2));
        let lines = format_project(&project, Path::new("/films/night-tide/film_config.json"));
        assert_eq!(
            lines,
            vec![
                "Film",
                "    Test Film (Horror, 92 minutes)",
                "    Source: film_config.json",
                "Images",
                "    Poster: poster.png (20x30)",
                "    Stills (2)",
                "        001 001.png (16x9)",
                "        002 002.png (16x9)",
                "    Team photos (0)",
            ]
        );
    }

    #[test]
    fn project_inventory_without_poster() {
        let lines = format_project(&project(AssetBundle::default()), Path::new("film_config.json"));
        assert!(lines.contains(&"    Poster: (none)".to_string()));
    }

    #[test]
    fn validation_ready() {
        let lines = format_validation(&ValidationResult::default());
        assert_eq!(lines, vec!["Ready to generate"]);
    }

    #[test]
    fn validation_with_warnings_only() {
        let result = ValidationResult {
            errors: vec![],
            warnings: vec![ValidationWarning::FewStills {
                found: 2,
                recommended: 8,
            }],
        };
        let lines = format_validation(&result);
        assert_eq!(lines[0], "Warnings");
        assert!(lines[1].starts_with("    ! "));
        assert_eq!(lines.last().unwrap(), "Ready to generate (1 warning)");
    }

    #[test]
    fn validation_with_errors() {
        let result = ValidationResult {
            errors: vec![
                ValidationError::MissingPoster,
                ValidationError::MissingContactEmail,
            ],
            warnings: vec![],
        };
        let lines = format_validation(&result);
        assert_eq!(
            lines,
            vec![
                "Errors",
                "    \u{2717} Poster image required (JPG or PNG)",
                "    \u{2717} Contact email required",
                "Not ready: 2 errors",
            ]
        );
    }

    // =========================================================================
    // Generate
    // =========================================================================

    #[test]
    fn generate_summary_lines() {
        let lines = format_generate_summary(
            "Night Tide",
            Path::new("output/html/night-tide_epk.html"),
            2048,
            "abc123",
        );
        assert_eq!(
            lines,
            vec![
                "Night Tide \u{2192} output/html/night-tide_epk.html",
                "    Size: 2.0 KB",
                "    SHA-256: abc123",
            ]
        );
    }

    // =========================================================================
    // Batch
    // =========================================================================

    #[test]
    fn batch_summary_mixed() {
        let root = Path::new("/films");
        let results = vec![
            BatchResult {
                film: "good".to_string(),
                success: true,
                html_path: Some(PathBuf::from("/films/good/output/html/good_epk.html")),
                digest: Some("d".to_string()),
                errors: vec![],
                warnings: vec!["Only 2 stills found. Recommended: 8-12".to_string()],
            },
            BatchResult {
                film: "bad".to_string(),
                success: false,
                html_path: None,
                digest: None,
                errors: vec!["Contact email required".to_string()],
                warnings: vec![],
            },
        ];
        assert_eq!(
            format_batch_summary(&results, root),
            vec![
                "001 good \u{2713} \u{2192} good/output/html/good_epk.html",
                "002 bad \u{2717}",
                "        Contact email required",
                "Total: 2 | Success: 1 | Failed: 1",
            ]
        );
    }

    #[test]
    fn batch_summary_empty() {
        assert_eq!(
            format_batch_summary(&[], Path::new(".")),
            vec!["Total: 0 | Success: 0 | Failed: 0"]
        );
    }
}
