//! The ten press kit sections.
//!
//! Each renderer is a pure function from its slice of the film record to a
//! [`Markup`] fragment. Renderers share no state and never call each other;
//! the assembler in [`crate::generate`] runs them in [`Section::ORDER`].
//!
//! ## Empty Sections
//!
//! Optional sections return an empty fragment when they have nothing to
//! show, so the document never carries a heading over a blank block. Cover,
//! synopsis, and contact always render.
//!
//! ## Styling
//!
//! Fragments carry class names only. Colors live in the embedded stylesheet,
//! which reads them from the resolved [`Theme`]; the one exception is the
//! cover gradient, set inline from the same theme.

use crate::display::DisplayRef;
use crate::theme::Theme;
use crate::types::{
    Award, Contact, Distribution, Festival, Metadata, PressItem, Review, TeamMember, Technical,
    filled,
};
use maud::{Markup, html};

/// Sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Cover,
    Synopsis,
    Reviews,
    Festivals,
    Press,
    Team,
    Distribution,
    Technical,
    Gallery,
    Contact,
}

impl Section {
    pub const ORDER: [Section; 10] = [
        Section::Cover,
        Section::Synopsis,
        Section::Reviews,
        Section::Festivals,
        Section::Press,
        Section::Team,
        Section::Distribution,
        Section::Technical,
        Section::Gallery,
        Section::Contact,
    ];

    /// Stable identifier, used as the section element's `id`.
    pub fn id(self) -> &'static str {
        match self {
            Section::Cover => "cover",
            Section::Synopsis => "synopsis",
            Section::Reviews => "reviews",
            Section::Festivals => "festivals",
            Section::Press => "press",
            Section::Team => "team",
            Section::Distribution => "distribution",
            Section::Technical => "technical",
            Section::Gallery => "gallery",
            Section::Contact => "contact",
        }
    }
}

/// Symbol repeated once per rating point.
pub const RATING_SYMBOL: char = '★';
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

// ============================================================================
// Shared pieces
// ============================================================================

/// Join the present parts with `sep`; `None` when every part is missing.
fn join_present<'a>(parts: impl IntoIterator<Item = Option<&'a str>>, sep: &str) -> Option<String> {
    let present: Vec<&str> = parts.into_iter().flatten().collect();
    (!present.is_empty()).then(|| present.join(sep))
}

/// Split text into paragraphs on blank lines.
///
/// Lines inside a paragraph are kept as written (trailing whitespace aside);
/// runs of blank or whitespace-only lines separate paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_string());
    }
    paragraphs
}

/// Clamp a review rating into `1..=5` and render it as repeated stars.
pub fn rating_stars(rating: i64) -> String {
    let clamped = rating.clamp(MIN_RATING, MAX_RATING);
    if clamped != rating {
        tracing::warn!(rating, clamped, "review rating out of range, clamped");
    }
    RATING_SYMBOL.to_string().repeat(clamped as usize)
}

/// A link target safe to put in `href`, or `None` to show the text unlinked.
///
/// `http(s)` URLs pass through; a bare host like `example.com/film` gets
/// `https://`; any other scheme (`javascript:`, `ftp:`, ...) is refused.
pub fn external_href(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Some(url.to_string());
    }
    if url.starts_with("//") {
        return Some(format!("https:{url}"));
    }
    if let Some((scheme, _)) = url.split_once(':') {
        let looks_like_scheme = !scheme.contains('.')
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-');
        if looks_like_scheme {
            return None;
        }
    }
    Some(format!("https://{url}"))
}

fn laurel(award: &Award) -> Markup {
    let presented_at = join_present([filled(&award.festival_name), filled(&award.year)], " ");
    html! {
        div.laurel {
            @if let Some(name) = filled(&award.award) {
                span.laurel-title { (name) }
            }
            @if let Some(presented_at) = presented_at {
                (presented_at)
            }
        }
    }
}

// ============================================================================
// Section renderers
// ============================================================================

/// Title page: poster, title, tagline, meta line, and up to `max_laurels`
/// award laurels.
pub fn render_cover(
    meta: &Metadata,
    awards: &[Award],
    poster: Option<&DisplayRef>,
    theme: &Theme,
    max_laurels: usize,
) -> Markup {
    let title = filled(&meta.title).unwrap_or_default();
    let meta_line = join_present(
        [
            filled(&meta.genre),
            filled(&meta.runtime),
            Some(filled(&meta.rating).unwrap_or("NR")),
        ],
        " | ",
    );
    let laurels = &awards[..awards.len().min(max_laurels)];

    html! {
        section.cover id=(Section::Cover.id()) style=(theme.cover_gradient()) {
            div.cover-content {
                @if let Some(poster) = poster {
                    div.poster-container {
                        img src=(poster.uri()) alt={ (title) " poster" };
                    }
                }
                h1.film-title { (title) }
                @if let Some(tagline) = filled(&meta.tagline) {
                    p.tagline { (tagline) }
                }
                @if let Some(meta_line) = meta_line {
                    p.film-meta { (meta_line) }
                }
                @if !laurels.is_empty() {
                    div.laurels {
                        @for award in laurels {
                            (laurel(award))
                        }
                    }
                }
            }
        }
    }
}

/// Logline plus the synopsis split into paragraphs.
pub fn render_synopsis(meta: &Metadata) -> Markup {
    let paragraphs = filled(&meta.synopsis)
        .map(split_paragraphs)
        .unwrap_or_default();

    html! {
        section.section id=(Section::Synopsis.id()) {
            h2 { "Synopsis" }
            @if let Some(logline) = filled(&meta.logline) {
                p.logline { (logline) }
            }
            @if !paragraphs.is_empty() {
                div.synopsis-text {
                    @for paragraph in &paragraphs {
                        p { (paragraph) }
                    }
                }
            }
        }
    }
}

pub fn render_reviews(reviews: &[Review]) -> Markup {
    if reviews.is_empty() {
        return html! {};
    }

    html! {
        section.section.reviews id=(Section::Reviews.id()) {
            h2 { "Press & Reviews" }
            div.review-grid {
                @for review in reviews {
                    div.review-card {
                        @if let Some(rating) = review.rating {
                            @let stars = rating_stars(rating);
                            div.review-rating aria-label={ (stars.chars().count()) " out of 5" } {
                                (stars)
                            }
                        }
                        @if let Some(quote) = filled(&review.quote) {
                            p.review-quote { "“" (quote) "”" }
                        }
                        @if let Some(source) = filled(&review.source) {
                            p.review-source { "— " (source) }
                        }
                    }
                }
            }
        }
    }
}

/// All awards (uncapped, unlike the cover) and festival screenings.
pub fn render_festivals(awards: &[Award], festivals: &[Festival]) -> Markup {
    if awards.is_empty() && festivals.is_empty() {
        return html! {};
    }

    html! {
        section.section id=(Section::Festivals.id()) {
            h2 { "Festivals & Awards" }
            @if !awards.is_empty() {
                h3.subheading { "Awards" }
                div.laurels.laurels-full {
                    @for award in awards {
                        (laurel(award))
                    }
                }
            }
            @if !festivals.is_empty() {
                h3.subheading { "Festival Screenings" }
                ul.festival-list {
                    @for festival in festivals {
                        li {
                            @if let Some(name) = filled(&festival.festival_name) {
                                strong { (name) }
                            }
                            @if let Some(year) = filled(&festival.year) {
                                " " (year)
                            }
                            @if let Some(selection) = filled(&festival.selection_type) {
                                " - " (selection)
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_press(items: &[PressItem]) -> Markup {
    if items.is_empty() {
        return html! {};
    }

    html! {
        section.section id=(Section::Press.id()) {
            h2 { "Press Coverage" }
            div.press-list {
                @for item in items {
                    article.press-card {
                        @if let Some(dateline) = join_present([filled(&item.publication), filled(&item.date)], " • ") {
                            div.press-dateline { (dateline) }
                        }
                        @if let Some(title) = filled(&item.title) {
                            h4.press-title { (title) }
                        }
                        @if let Some(excerpt) = filled(&item.excerpt) {
                            p.press-excerpt { (excerpt) }
                        }
                        @if let Some(href) = filled(&item.url).and_then(external_href) {
                            a.press-link href=(href) target="_blank" rel="noopener" { "Read Article →" }
                        }
                    }
                }
            }
        }
    }
}

/// Cast and crew in record order. `photo_for` supplies each member's photo.
pub fn render_team<'s, F>(team: &[TeamMember], photo_for: F) -> Markup
where
    F: Fn(&TeamMember) -> Option<&'s DisplayRef>,
{
    if team.is_empty() {
        return html! {};
    }

    html! {
        section.section id=(Section::Team.id()) {
            h2 { "Cast & Crew" }
            div.team-grid {
                @for member in team {
                    @let name = filled(&member.name);
                    div.team-member {
                        @if let Some(photo) = photo_for(member) {
                            img.team-photo src=(photo.uri()) alt=(name.unwrap_or("Team member"));
                        }
                        @if let Some(name) = name {
                            h3.member-name { (name) }
                        }
                        @if let Some(role) = filled(&member.role) {
                            p.member-role { (role) }
                        }
                        @if let Some(bio) = filled(&member.bio) {
                            p.member-bio { (bio) }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_distribution(distribution: Option<&Distribution>) -> Markup {
    let Some(dist) = distribution.filter(|d| !d.is_empty()) else {
        return html! {};
    };
    let theatrical = filled(&dist.theatrical_release);
    let digital = filled(&dist.digital_release);
    let platforms: Vec<&str> = dist.platforms().collect();
    let territories: Vec<&str> = dist.territories().collect();

    html! {
        section.section id=(Section::Distribution.id()) {
            h2 { "Distribution & Availability" }
            div.distribution-body {
                @if theatrical.is_some() || digital.is_some() {
                    div.release-dates {
                        @if let Some(date) = theatrical {
                            div.release-label { "THEATRICAL RELEASE" }
                            div.release-date { (date) }
                        }
                        @if let Some(date) = digital {
                            div.release-label { "DIGITAL RELEASE" }
                            div.release-date { (date) }
                        }
                    }
                }
                @if !platforms.is_empty() {
                    div.platforms {
                        h3.subheading { "Available On" }
                        div.platform-list {
                            @for platform in &platforms {
                                div.platform { (platform) }
                            }
                        }
                    }
                }
                @if !territories.is_empty() {
                    p.territories {
                        strong { "Territories:" }
                        " " (territories.join(", "))
                    }
                }
            }
        }
    }
}

/// Label/value rows for every present metadata and technical field.
pub fn render_technical(meta: &Metadata, technical: &Technical) -> Markup {
    let rows: Vec<(&str, &str)> = [
        ("Director", &meta.director),
        ("Runtime", &meta.runtime),
        ("Genre", &meta.genre),
        ("Rating", &meta.rating),
        ("Language", &meta.language),
        ("Country", &meta.country),
        ("Release Date", &meta.release_date),
        ("Aspect Ratio", &technical.aspect_ratio),
        ("Sound", &technical.sound),
        ("Color", &technical.color),
    ]
    .into_iter()
    .filter_map(|(label, value)| filled(value).map(|v| (label, v)))
    .collect();

    if rows.is_empty() {
        return html! {};
    }

    html! {
        section.section id=(Section::Technical.id()) {
            h2 { "Technical Information" }
            div.tech-specs {
                @for (label, value) in &rows {
                    div.spec-row {
                        span.spec-label { (label) }
                        span.spec-value { (value) }
                    }
                }
            }
        }
    }
}

pub fn render_gallery(stills: &[DisplayRef]) -> Markup {
    if stills.is_empty() {
        return html! {};
    }

    html! {
        section.section id=(Section::Gallery.id()) {
            h2 { "Production Stills" }
            div.stills-gallery {
                @for (idx, still) in stills.iter().enumerate() {
                    img.still-img src=(still.uri()) alt={ "Production still " (idx + 1) };
                }
            }
        }
    }
}

/// Contact band. The company falls back to `default_distributor`.
pub fn render_contact(contact: &Contact, default_distributor: &str) -> Markup {
    let company = filled(&contact.distribution_company).unwrap_or(default_distributor);

    html! {
        section.section.contact id=(Section::Contact.id()) {
            h2 { "Contact" }
            div.contact-info {
                p { strong { "Distribution:" } " " (company) }
                @if let Some(name) = filled(&contact.name) {
                    p { strong { "Contact:" } " " (name) }
                }
                @if let Some(email) = filled(&contact.email) {
                    p {
                        strong { "Email:" } " "
                        a.contact-link href={ "mailto:" (email) } { (email) }
                    }
                }
                @if let Some(phone) = filled(&contact.phone) {
                    p { strong { "Phone:" } " " (phone) }
                }
                @if let Some(website) = filled(&contact.website) {
                    p {
                        strong { "Website:" } " "
                        @match external_href(website) {
                            Some(href) => {
                                a.contact-link href=(href) target="_blank" rel="noopener" { (website) }
                            }
                            None => { (website) }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetBundle, ImageHandle};
    use crate::display::DisplayScope;
    use crate::test_helpers::{bundle_with_stills, count, png_bytes, review};
    use crate::theme::resolve_theme;

    fn award(name: &str) -> Award {
        Award {
            festival_name: Some("Sundance".to_string()),
            award: Some(name.to_string()),
            year: Some("2025".to_string()),
        }
    }

    fn meta() -> Metadata {
        Metadata {
            title: Some("Night Tide".to_string()),
            tagline: Some("The sea remembers.".to_string()),
            logline: Some("A keeper hears a ghost ship.".to_string()),
            synopsis: Some("First.\n\nSecond.".to_string()),
            genre: Some("Horror".to_string()),
            runtime: Some("92 minutes".to_string()),
            ..Default::default()
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn split_paragraphs_on_blank_lines() {
        let text = "One line.\nStill one.\n\n\nTwo.\r\n   \r\nThree.  ";
        assert_eq!(
            split_paragraphs(text),
            vec!["One line.\nStill one.", "Two.", "Three."]
        );
    }

    #[test]
    fn split_paragraphs_single_and_empty() {
        assert_eq!(split_paragraphs("Just one."), vec!["Just one."]);
        assert!(split_paragraphs("\n\n  \n").is_empty());
    }

    #[test]
    fn rating_stars_in_range() {
        assert_eq!(rating_stars(5), "★★★★★");
        assert_eq!(rating_stars(3), "★★★");
        assert_eq!(rating_stars(1), "★");
    }

    #[test]
    fn rating_stars_clamped() {
        assert_eq!(rating_stars(7), "★★★★★");
        assert_eq!(rating_stars(0), "★");
        assert_eq!(rating_stars(-3), "★");
        assert_eq!(rating_stars(i64::MAX), "★★★★★");
    }

    #[test]
    fn external_href_policy() {
        assert_eq!(
            external_href("https://example.com/a").as_deref(),
            Some("https://example.com/a")
        );
        assert_eq!(
            external_href("HTTP://example.com").as_deref(),
            Some("HTTP://example.com")
        );
        assert_eq!(
            external_href("example.com/film").as_deref(),
            Some("https://example.com/film")
        );
        assert_eq!(
            external_href("www.example.com:8080").as_deref(),
            Some("https://www.example.com:8080")
        );
        assert_eq!(
            external_href("//cdn.example.com").as_deref(),
            Some("https://cdn.example.com")
        );
        assert_eq!(external_href("javascript:alert(1)"), None);
        assert_eq!(external_href("ftp://files.example.com"), None);
        assert_eq!(external_href("   "), None);
    }

    // =========================================================================
    // Cover
    // =========================================================================

    #[test]
    fn cover_always_renders_title_and_meta() {
        let html = render_cover(&meta(), &[], None, &resolve_theme(None), 4).into_string();
        assert!(html.contains("Night Tide"));
        assert!(html.contains("The sea remembers."));
        assert!(html.contains("Horror | 92 minutes | NR"));
        assert!(!html.contains("poster-container"));
        assert!(!html.contains("laurels"));
    }

    #[test]
    fn cover_uses_theme_gradient() {
        let theme = resolve_theme(Some("horror"));
        let html = render_cover(&meta(), &[], None, &theme, 4).into_string();
        assert!(html.contains("#2C2C2C 0%, #8B0000 100%"));
    }

    #[test]
    fn cover_caps_laurels() {
        let awards: Vec<Award> = (1..=6).map(|i| award(&format!("Prize {i}"))).collect();
        let html = render_cover(&meta(), &awards, None, &resolve_theme(None), 4).into_string();
        assert_eq!(count(&html, r#"class="laurel""#), 4);
        assert!(html.contains("Prize 4"));
        assert!(!html.contains("Prize 5"));
    }

    #[test]
    fn cover_includes_poster_when_present() {
        let bundle = bundle_with_stills(0);
        let scope = DisplayScope::acquire(&bundle);
        let html =
            render_cover(&meta(), &[], scope.poster(), &resolve_theme(None), 4).into_string();
        assert!(html.contains("poster-container"));
        assert!(html.contains("data:image/png;base64,"));
    }

    #[test]
    fn cover_shows_given_rating() {
        let mut meta = meta();
        meta.rating = Some("R".to_string());
        let html = render_cover(&meta, &[], None, &resolve_theme(None), 4).into_string();
        assert!(html.contains("Horror | 92 minutes | R"));
    }

    // =========================================================================
    // Synopsis
    // =========================================================================

    #[test]
    fn synopsis_paragraphs() {
        let html = render_synopsis(&meta()).into_string();
        assert!(html.contains("<p>First.</p><p>Second.</p>"));
        assert!(html.contains(r#"<p class="logline">A keeper hears a ghost ship.</p>"#));
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    #[test]
    fn reviews_empty_is_empty_fragment() {
        assert_eq!(render_reviews(&[]).into_string(), "");
    }

    #[test]
    fn reviews_render_stars_in_order() {
        let reviews = vec![review("Chilling.", Some(5)), review("Solid.", Some(3))];
        let html = render_reviews(&reviews).into_string();
        let first = html.find("★★★★★").unwrap();
        let second = html.find(">★★★<").unwrap();
        assert!(first < second);
        assert!(html.find("Chilling.").unwrap() < html.find("Solid.").unwrap());
        assert_eq!(count(&html, "★"), 8);
    }

    #[test]
    fn review_out_of_range_rating_clamped_to_five() {
        let html = render_reviews(&[review("Wow.", Some(7))]).into_string();
        assert_eq!(count(&html, "★"), 5);
        assert!(html.contains(r#"aria-label="5 out of 5""#));
    }

    #[test]
    fn review_without_rating_has_no_rating_line() {
        let html = render_reviews(&[review("Quiet.", None)]).into_string();
        assert!(!html.contains("review-rating"));
        assert!(html.contains("“Quiet.”"));
        assert!(html.contains("— The Trades"));
    }

    // =========================================================================
    // Festivals
    // =========================================================================

    #[test]
    fn festivals_empty_is_empty_fragment() {
        assert_eq!(render_festivals(&[], &[]).into_string(), "");
    }

    #[test]
    fn festivals_show_all_awards_uncapped() {
        let awards: Vec<Award> = (1..=6).map(|i| award(&format!("Prize {i}"))).collect();
        let html = render_festivals(&awards, &[]).into_string();
        assert_eq!(count(&html, r#"class="laurel""#), 6);
        assert!(!html.contains("Festival Screenings"));
    }

    #[test]
    fn festival_screening_line() {
        let festivals = vec![Festival {
            festival_name: Some("Tribeca".to_string()),
            year: Some("2025".to_string()),
            selection_type: Some("World Premiere".to_string()),
        }];
        let html = render_festivals(&[], &festivals).into_string();
        assert!(html.contains("<strong>Tribeca</strong> 2025 - World Premiere"));
        assert!(!html.contains(">Awards<"));
    }

    // =========================================================================
    // Press
    // =========================================================================

    #[test]
    fn press_empty_is_empty_fragment() {
        assert_eq!(render_press(&[]).into_string(), "");
    }

    #[test]
    fn press_card_fields() {
        let items = vec![
            PressItem {
                publication: Some("Variety".to_string()),
                date: Some("January 2025".to_string()),
                title: Some("A New Voice".to_string()),
                excerpt: Some("Remarkable.".to_string()),
                url: Some("https://variety.example/a".to_string()),
            },
            PressItem {
                publication: Some("Blog".to_string()),
                title: Some("Unlinked".to_string()),
                url: Some("javascript:alert(1)".to_string()),
                ..Default::default()
            },
        ];
        let html = render_press(&items).into_string();
        assert!(html.contains("Variety • January 2025"));
        assert!(html.contains(r#"href="https://variety.example/a""#));
        assert_eq!(count(&html, "press-link"), 1);
        assert!(!html.contains("javascript:"));
        assert_eq!(count(&html, "press-card"), 2);
    }

    // =========================================================================
    // Team
    // =========================================================================

    #[test]
    fn team_empty_is_empty_fragment() {
        assert_eq!(render_team(&[], |_| None).into_string(), "");
    }

    #[test]
    fn team_members_in_order_with_photos() {
        let bundle = AssetBundle {
            team_photos: vec![ImageHandle::from_bytes("jane_doe.png", png_bytes(4, 4))],
            ..Default::default()
        };
        let scope = DisplayScope::acquire(&bundle);
        let team = vec![
            TeamMember {
                name: Some("Jane Doe".to_string()),
                role: Some("Director".to_string()),
                bio: Some("Short films.".to_string()),
                photo: None,
            },
            TeamMember {
                name: Some("Alex Lee".to_string()),
                role: Some("Lead".to_string()),
                ..Default::default()
            },
        ];
        let html = render_team(&team, |m| {
            bundle
                .team_photo_index(m)
                .and_then(|i| scope.team_photo(i))
        })
        .into_string();

        assert!(html.find("Jane Doe").unwrap() < html.find("Alex Lee").unwrap());
        assert_eq!(count(&html, "team-photo"), 1);
        assert_eq!(count(&html, "member-bio"), 1);
        assert!(html.contains(r#"alt="Jane Doe""#));
    }

    #[test]
    fn team_member_without_name_has_no_heading() {
        let team = vec![TeamMember {
            name: Some("   ".to_string()),
            role: Some("Composer".to_string()),
            ..Default::default()
        }];
        let html = render_team(&team, |_| None).into_string();
        assert_eq!(count(&html, "member-name"), 0);
        assert!(html.contains("Composer"));
    }

    // =========================================================================
    // Distribution
    // =========================================================================

    #[test]
    fn distribution_absent_or_blank_is_empty_fragment() {
        assert_eq!(render_distribution(None).into_string(), "");
        let blank = Distribution::default();
        assert_eq!(render_distribution(Some(&blank)).into_string(), "");
    }

    #[test]
    fn distribution_with_only_blank_list_entries_is_empty_fragment() {
        let dist = Distribution {
            platforms: vec!["  ".to_string()],
            territories: vec![String::new(), " \n".to_string()],
            ..Default::default()
        };
        assert_eq!(render_distribution(Some(&dist)).into_string(), "");
    }

    #[test]
    fn distribution_skips_blank_list_entries() {
        let dist = Distribution {
            platforms: vec!["Shudder".to_string(), "   ".to_string()],
            territories: vec![" ".to_string(), "USA".to_string()],
            ..Default::default()
        };
        let html = render_distribution(Some(&dist)).into_string();
        assert_eq!(count(&html, r#"class="platform""#), 1);
        assert!(html.contains("Territories:</strong> USA</p>"));
    }

    #[test]
    fn distribution_dates_and_platforms() {
        let dist = Distribution {
            theatrical_release: Some("March 15, 2025".to_string()),
            platforms: vec!["Apple TV".to_string(), "Apple TV".to_string()],
            ..Default::default()
        };
        let html = render_distribution(Some(&dist)).into_string();
        assert!(html.contains("THEATRICAL RELEASE"));
        assert!(!html.contains("DIGITAL RELEASE"));
        // No dedup
        assert_eq!(count(&html, r#"class="platform""#), 2);
        assert!(!html.contains("territories"));
    }

    #[test]
    fn distribution_territories_only() {
        let dist = Distribution {
            territories: vec!["USA".to_string(), "Canada".to_string()],
            ..Default::default()
        };
        let html = render_distribution(Some(&dist)).into_string();
        assert!(html.contains("USA, Canada"));
        assert!(!html.contains("release-dates"));
    }

    // =========================================================================
    // Technical
    // =========================================================================

    #[test]
    fn technical_omits_absent_fields() {
        let technical = Technical {
            aspect_ratio: Some("2.39:1".to_string()),
            ..Default::default()
        };
        let html = render_technical(&meta(), &technical).into_string();
        assert_eq!(count(&html, "spec-row"), 3);
        assert!(html.contains("Aspect Ratio"));
        assert!(!html.contains("Sound"));
        assert!(!html.contains("Language"));
    }

    #[test]
    fn technical_nothing_present_is_empty_fragment() {
        let html = render_technical(&Metadata::default(), &Technical::default()).into_string();
        assert_eq!(html, "");
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    #[test]
    fn gallery_one_image_per_still() {
        let bundle = bundle_with_stills(10);
        let scope = DisplayScope::acquire(&bundle);
        let html = render_gallery(scope.stills()).into_string();
        assert_eq!(count(&html, r#"class="still-img""#), 10);
        assert!(html.contains(r#"alt="Production still 10""#));
    }

    #[test]
    fn gallery_empty_is_empty_fragment() {
        assert_eq!(render_gallery(&[]).into_string(), "");
    }

    // =========================================================================
    // Contact
    // =========================================================================

    #[test]
    fn contact_defaults_company_and_shows_email() {
        let contact = Contact {
            email: Some("press@example.com".to_string()),
            ..Default::default()
        };
        let html = render_contact(&contact, "Filmhub").into_string();
        assert!(html.contains("Filmhub"));
        assert!(html.contains(r#"href="mailto:press@example.com""#));
        assert!(!html.contains("Phone:"));
        assert!(!html.contains("Website:"));
        assert!(!html.contains("Contact:"));
    }

    #[test]
    fn contact_optional_lines() {
        let contact = Contact {
            distribution_company: Some("Acme Pictures".to_string()),
            name: Some("Sam Reyes".to_string()),
            email: Some("sam@acme.example".to_string()),
            phone: Some("(555) 123-4567".to_string()),
            website: Some("acme.example".to_string()),
        };
        let html = render_contact(&contact, "Filmhub").into_string();
        assert!(html.contains("Acme Pictures"));
        assert!(!html.contains("Filmhub"));
        assert!(html.contains("Sam Reyes"));
        assert!(html.contains("(555) 123-4567"));
        assert!(html.contains(r#"href="https://acme.example""#));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut meta = meta();
        meta.title = Some("<script>alert('x')</script>".to_string());
        let html = render_cover(&meta, &[], None, &resolve_theme(None), 4).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn section_order_is_fixed() {
        let ids: Vec<&str> = Section::ORDER.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "cover",
                "synopsis",
                "reviews",
                "festivals",
                "press",
                "team",
                "distribution",
                "technical",
                "gallery",
                "contact"
            ]
        );
    }
}
