//! Shared test utilities for the film-epk test suite.
//!
//! Provides a complete film record, asset bundles built from tiny in-memory
//! PNGs, and small assertions over rendered markup.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = valid_config();
//! let assets = bundle_with_stills(10);
//! let html = crate::generate::generate(&config, &assets);
//! assert_eq!(count(&html, r#"class="still-img""#), 10);
//! ```

use std::io::Cursor;
use std::path::Path;

use crate::assets::{AssetBundle, ImageHandle};
use crate::types::{Contact, Metadata, ProjectConfig, Review};

// =========================================================================
// Images
// =========================================================================

/// Encode a solid-gray PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([128, 128, 128]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

/// Write a PNG to `path`, creating parent directories.
pub fn write_png(path: &Path, width: u32, height: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, png_bytes(width, height)).unwrap();
}

/// A bundle with a poster and `n` small stills named `001.png`, `002.png`, ...
pub fn bundle_with_stills(n: usize) -> AssetBundle {
    AssetBundle {
        poster: Some(ImageHandle::from_bytes("poster.png", png_bytes(20, 30))),
        stills: (1..=n)
            .map(|i| ImageHandle::from_bytes(format!("{i:03}.png"), png_bytes(16, 9)))
            .collect(),
        team_photos: vec![],
    }
}

// =========================================================================
// Film records
// =========================================================================

/// A synopsis comfortably over the short-synopsis threshold, in two paragraphs.
pub fn long_synopsis() -> String {
    "When a lighthouse keeper on a remote island begins receiving radio calls \
     from a ship that sank forty years ago, she must decide whether the voices \
     are a warning or a lure.\n\n\
     As the storm season closes the island off from the mainland, the calls grow \
     more specific, naming people she has never told anyone about."
        .to_string()
}

/// A record that passes every blocking check.
pub fn valid_config() -> ProjectConfig {
    ProjectConfig {
        metadata: Metadata {
            title: Some("Test Film".to_string()),
            logline: Some("A keeper hears a ship that sank long ago.".to_string()),
            synopsis: Some(long_synopsis()),
            genre: Some("Horror".to_string()),
            runtime: Some("92 minutes".to_string()),
            ..Default::default()
        },
        contact: Contact {
            email: Some("press@example.com".to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// A review with the given quote and rating.
pub fn review(quote: &str, rating: Option<i64>) -> Review {
    Review {
        quote: Some(quote.to_string()),
        source: Some("The Trades".to_string()),
        rating,
    }
}

// =========================================================================
// Markup assertions
// =========================================================================

/// Non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
