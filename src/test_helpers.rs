//! Shared test utilities for the reel-folio test suite.
//!
//! Provides config builders for the page pipeline and small extractors for
//! asserting on composed cards.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let page = compose(&sample_config());
//! let projects = page.section(SectionKey::Projects).unwrap();
//! assert_eq!(card_titles(&projects.cards), vec!["Project 1", "Project 2"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::card::Card;
use crate::config::{ContactConfig, ContactLink, HeroConfig, RootConfig, SectionConfig};
use crate::types::VideoReference;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Config builders
// =========================================================================

pub fn video(kind: &str, reference: &str, title: &str) -> VideoReference {
    VideoReference {
        kind: kind.to_string(),
        id_or_url: reference.to_string(),
        title: title.to_string(),
        description: String::new(),
    }
}

/// A valid 11-character YouTube ID ending in `n`.
pub fn youtube_id(n: usize) -> String {
    format!("abcdefghi{n:02}")
}

/// Enabled section of `n` YouTube videos titled `Video 1..=n`.
pub fn numbered_section(title: &str, n: usize) -> SectionConfig {
    SectionConfig {
        enabled: true,
        title: title.to_string(),
        featured_count: None,
        videos: (1..=n)
            .map(|i| video("youtube", &youtube_id(i), &format!("Video {i}")))
            .collect(),
    }
}

/// A complete config: hero, 5 projects (2 featured), 2 social videos, contact.
pub fn sample_config() -> RootConfig {
    let projects = SectionConfig {
        enabled: true,
        title: "Projetos".to_string(),
        featured_count: Some(2),
        videos: (1..=5)
            .map(|i| {
                video(
                    "youtube",
                    &format!("https://www.youtube.com/watch?v={}", youtube_id(i)),
                    &format!("Project {i}"),
                )
            })
            .collect(),
    };
    let social_media = SectionConfig {
        enabled: true,
        title: "Shorts".to_string(),
        featured_count: None,
        videos: vec![
            video("vimeo", "https://vimeo.com/76979871", "Teaser"),
            video("dailymotion", "x8abc12", "Backstage"),
        ],
    };

    RootConfig {
        site_title: Some("Ana Souza | Video".to_string()),
        favicon: Some("assets/favicon.svg".to_string()),
        hero: Some(HeroConfig {
            enabled: true,
            title: "Ana Souza".to_string(),
            subtitle: "Editor & colorist".to_string(),
        }),
        projects: Some(projects),
        social_media: Some(social_media),
        contact: Some(ContactConfig {
            enabled: true,
            title: "Contato".to_string(),
            links: vec![
                ContactLink {
                    url: "https://instagram.com/ana".to_string(),
                    icon: "fab fa-instagram".to_string(),
                    name: "Instagram".to_string(),
                },
                ContactLink {
                    url: "mailto:ana@example.com".to_string(),
                    icon: "fas fa-envelope".to_string(),
                    name: "E-mail".to_string(),
                },
            ],
        }),
    }
}

// =========================================================================
// Extractors
// =========================================================================

/// Card titles in grid order.
pub fn card_titles(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|c| c.title.as_str()).collect()
}
