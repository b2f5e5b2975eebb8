//! Genre → color palette lookup.
//!
//! Every color in a press kit comes from a three-color [`Theme`] chosen by the
//! film's genre. The lookup is a closed, immutable table keyed by lowercased
//! genre name; anything not in it (including a missing genre) gets the
//! default palette. Resolution is total: it never fails.
//!
//! | Genre | Primary | Secondary | Accent |
//! |-------|---------|-----------|--------|
//! | horror | `#8B0000` | `#2C2C2C` | `#FF4444` |
//! | sci-fi | `#1E3A8A` | `#0F172A` | `#60A5FA` |
//! | fantasy | `#7C3AED` | `#1E1B4B` | `#A78BFA` |
//! | comedy | `#F59E0B` | `#78350F` | `#FBBF24` |
//! | drama | `#374151` | `#1F2937` | `#9CA3AF` |
//! | action | `#DC2626` | `#18181B` | `#EF4444` |
//! | documentary | `#059669` | `#064E3B` | `#10B981` |
//! | romance | `#DB2777` | `#831843` | `#F472B6` |
//! | thriller | `#4B5563` | `#111827` | `#6B7280` |
//! | *(default)* | `#2563EB` | `#1E293B` | `#3B82F6` |
//!
//! Projects can extend or override the table with `[themes.<genre>]` in
//! `epk.toml` (see [`crate::config`]); a `[themes.default]` entry replaces
//! the default palette.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A three-color palette driving all embedded styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    /// Headings, labels, the contact band.
    pub primary: String,
    /// Dark backdrop: cover gradient start, reviews band.
    pub secondary: String,
    /// Highlights: rating stars, card borders, link underlines.
    pub accent: String,
}

impl Theme {
    fn from_static((primary, secondary, accent): (&str, &str, &str)) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        }
    }

    /// The three colors in `[primary, secondary, accent]` order.
    pub fn colors(&self) -> [&str; 3] {
        [
            self.primary.as_str(),
            self.secondary.as_str(),
            self.accent.as_str(),
        ]
    }

    /// Inline background for the cover block.
    pub fn cover_gradient(&self) -> String {
        format!(
            "background: linear-gradient(135deg, {} 0%, {} 100%);",
            self.secondary, self.primary
        )
    }
}

const DEFAULT_KEY: &str = "default";

const GENRE_PALETTES: &[(&str, (&str, &str, &str))] = &[
    ("horror", ("#8B0000", "#2C2C2C", "#FF4444")),
    ("sci-fi", ("#1E3A8A", "#0F172A", "#60A5FA")),
    ("fantasy", ("#7C3AED", "#1E1B4B", "#A78BFA")),
    ("comedy", ("#F59E0B", "#78350F", "#FBBF24")),
    ("drama", ("#374151", "#1F2937", "#9CA3AF")),
    ("action", ("#DC2626", "#18181B", "#EF4444")),
    ("documentary", ("#059669", "#064E3B", "#10B981")),
    ("romance", ("#DB2777", "#831843", "#F472B6")),
    ("thriller", ("#4B5563", "#111827", "#6B7280")),
];

const DEFAULT_PALETTE: (&str, &str, &str) = ("#2563EB", "#1E293B", "#3B82F6");

static BUILTIN: LazyLock<ThemeTable> = LazyLock::new(ThemeTable::builtin);

/// Normalize a genre label into a table key.
fn genre_key(genre: &str) -> String {
    genre.trim().to_lowercase()
}

/// Genre-keyed palettes plus the fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTable {
    genres: BTreeMap<String, Theme>,
    default: Theme,
}

impl ThemeTable {
    /// The stock table.
    pub fn builtin() -> Self {
        Self {
            genres: GENRE_PALETTES
                .iter()
                .map(|(genre, palette)| (genre.to_string(), Theme::from_static(*palette)))
                .collect(),
            default: Theme::from_static(DEFAULT_PALETTE),
        }
    }

    /// The stock table with `overrides` layered on top.
    ///
    /// Keys are matched case-insensitively; `"default"` replaces the
    /// fallback palette.
    pub fn with_overrides(overrides: &BTreeMap<String, Theme>) -> Self {
        let mut table = Self::builtin();
        for (genre, theme) in overrides {
            let key = genre_key(genre);
            if key == DEFAULT_KEY {
                table.default = theme.clone();
            } else {
                table.genres.insert(key, theme.clone());
            }
        }
        table
    }

    /// Palette for `genre`: exact, case-insensitive match, or the default.
    pub fn resolve(&self, genre: Option<&str>) -> &Theme {
        genre
            .and_then(|g| self.genres.get(&genre_key(g)))
            .unwrap_or(&self.default)
    }

    pub fn default_theme(&self) -> &Theme {
        &self.default
    }

    /// Genres with a dedicated palette, in key order.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genres.keys().map(String::as_str)
    }
}

/// Resolve a genre against the stock table.
pub fn resolve_theme(genre: Option<&str>) -> Theme {
    BUILTIN.resolve(genre).clone()
}

/// CSS custom properties consumed by the embedded stylesheet.
///
/// Besides the three palette colors, the neutrals are derived from the
/// palette with relative color syntax: `--epk-surface` (page background and
/// text on dark bands) is a near-white tint of the primary, `--epk-ink`
/// (body text) a deep shade of the secondary, and `--epk-shadow` a
/// translucent darkening of the secondary.
pub fn theme_css(theme: &Theme) -> String {
    format!(
        r#":root {{
    --epk-primary: {primary};
    --epk-secondary: {secondary};
    --epk-accent: {accent};
    --epk-surface: hsl(from var(--epk-primary) h 30% 98%);
    --epk-ink: hsl(from var(--epk-secondary) h s 12%);
    --epk-shadow: hsl(from var(--epk-secondary) h s 5% / 50%);
}}"#,
        primary = theme.primary,
        secondary = theme.secondary,
        accent = theme.accent,
    )
}

/// Is `value` a CSS hex color (`#rgb` or `#rrggbb`)?
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
