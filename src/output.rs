//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output is organised around what the visitor will see, not around files.
//! Each section leads with its title and counts; each video leads with its
//! positional index and title, with the resolved embed URL (or the reason it
//! could not be resolved) as an indented context line.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Page
//!     Title: Ana Souza | Video
//!     Favicon: assets/favicon.svg
//! Hero
//!     Ana Souza
//! Projetos (5 videos, 2 featured)
//!     001 Showreel 2024
//!         YouTube → https://www.youtube.com/embed/dQw4w9WgXcQ
//!     003 The New Vimeo Player (gallery)
//!         Vimeo → https://player.vimeo.com/video/76979871
//! Contato
//!     001 Instagram → https://instagram.com/anasouza
//! ```
//!
//! ## Build
//!
//! ```text
//! Ana Souza | Video → dist/index.html
//!     Projetos: 2 of 5 featured, gallery
//!     Mídias Sociais: 3 of 4 featured, gallery, 1 unavailable
//! Assets
//!     assets/favicon.svg
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::compose::{Block, Page};
use crate::config::RootConfig;
use crate::embed::{self, Provider};
use crate::generate::GenerateReport;
use crate::types::VideoReference;

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

/// Section header: title with video and featured counts.
///
/// ```text
/// Projetos (5 videos, 2 featured)
/// ```
fn section_header(title: &str, total: usize, featured: usize) -> String {
    format!("{} ({} videos, {} featured)", title, total, featured)
}

/// Context line describing where a video resolves to.
fn embed_line(video: &VideoReference) -> String {
    match embed::resolve(video) {
        Ok(url) => {
            let provider = Provider::from_type(&video.kind)
                .map(|p| p.to_string())
                .unwrap_or_else(|| video.kind.clone());
            format!("{} \u{2192} {}", provider, url)
        }
        Err(err) => format!("Unavailable: {}", err),
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the content inventory of a composed page.
///
/// Every video of each section is listed, including the ones only reachable
/// through the gallery (marked `(gallery)`).
pub fn format_check_output(config: &RootConfig, page: &Page) -> Vec<String> {
    let mut lines = vec![
        "Page".to_string(),
        format!("{}Title: {}", indent(1), page.head.title),
    ];
    if let Some(favicon) = &page.head.favicon {
        lines.push(format!("{}Favicon: {}", indent(1), favicon));
    }

    for block in &page.blocks {
        match block {
            Block::Hero(hero) => {
                lines.push("Hero".to_string());
                lines.push(format!("{}{}", indent(1), hero.title));
                if !hero.subtitle.is_empty() {
                    lines.push(format!("{}{}", indent(1), hero.subtitle));
                }
            }
            Block::Section(section) => {
                let Some(cfg) = config.section(section.key) else {
                    continue;
                };
                let title = if section.title.is_empty() {
                    section.key.label()
                } else {
                    section.title.as_str()
                };
                lines.push(section_header(title, cfg.videos.len(), section.cards.len()));
                for (i, video) in cfg.videos.iter().enumerate() {
                    let marker = if i < section.cards.len() { "" } else { " (gallery)" };
                    lines.push(format!(
                        "{}{} {}{}",
                        indent(1),
                        format_index(i + 1),
                        video.title,
                        marker
                    ));
                    lines.push(format!("{}{}", indent(2), embed_line(video)));
                }
            }
            Block::Contact(contact) => {
                lines.push(contact.title.clone());
                for (i, link) in contact.links.iter().enumerate() {
                    lines.push(format!(
                        "{}{} {} \u{2192} {}",
                        indent(1),
                        format_index(i + 1),
                        link.name,
                        link.url
                    ));
                }
            }
        }
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(config: &RootConfig, page: &Page) {
    for line in format_check_output(config, page) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format the build report.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![format!(
        "{} \u{2192} {}",
        report.title,
        report.output_dir.join("index.html").display()
    )];

    for section in &report.sections {
        let mut detail = format!("{} of {} featured", section.shown, section.total);
        if section.total > section.shown {
            detail.push_str(", gallery");
        }
        if section.unavailable > 0 {
            detail.push_str(&format!(", {} unavailable", section.unavailable));
        }
        let title = if section.title.is_empty() {
            section.key.label()
        } else {
            section.title.as_str()
        };
        lines.push(format!("{}{}: {}", indent(1), title, detail));
    }

    if !report.assets.is_empty() {
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("{}{}", indent(1), asset.display()));
        }
    }

    lines
}

/// Print the build report to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
