//! Name normalization shared by the assembler, the asset loader, and the CLI.
//!
//! ## Artifact Filenames
//!
//! Downloads are named after the film title, normalized so the name is safe
//! on every filesystem and in a `Content-Disposition` header:
//! - `"Test Film"` → `test-film_epk.html`
//! - `"Amélie: Part II"` → `amlie-part-ii_epk.html`
//! - `"!!!"` → `film_epk.html`
//!
//! ## Team Photo Keys
//!
//! Uploaded team photos are matched to members by file name prefix. A member
//! named `"Jane Doe"` claims `jane_doe.jpg`, `Jane_Doe-headshot.png`, and so
//! on. Matching is case-insensitive.

/// Suffix appended to every artifact filename.
const ARTIFACT_SUFFIX: &str = "_epk.html";

/// Normalize a title into a filename stem.
///
/// Lowercases, turns runs of whitespace or dashes into a single `-`, strips
/// every other non-alphanumeric character. Falls back to `"film"` when nothing
/// survives.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "film".to_string()
    } else {
        slug
    }
}

/// Filename for a downloaded artifact, derived from the film title.
pub fn artifact_filename(title: Option<&str>) -> String {
    format!("{}{}", slugify(title.unwrap_or_default()), ARTIFACT_SUFFIX)
}

/// The file name prefix a team member's photo is expected to carry.
///
/// `"Jane Doe"` → `"jane_doe"`. Returns `None` for blank names so an
/// unnamed member never claims every photo.
pub fn photo_key(member_name: &str) -> Option<String> {
    let key = member_name.trim().to_lowercase().replace(' ', "_");
    (!key.is_empty()).then_some(key)
}

/// Does `file_name` look like the photo of the member with `key`?
pub fn photo_matches(file_name: &str, key: &str) -> bool {
    file_name.to_lowercase().starts_with(key)
}
