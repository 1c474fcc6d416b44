//! Static site generation.
//!
//! Loads the configuration from the content directory, composes the page,
//! and writes the result. The published site is a single document plus the
//! user's assets:
//!
//! ```text
//! dist/
//! ├── index.html        # Page, overlay, gallery templates, inline CSS + JS
//! └── assets/           # Copied verbatim from content/assets/
//! ```
//!
//! ## Load Failures
//!
//! When the configuration cannot be read or parsed, `index.html` is replaced
//! by a full-page error document (no partial page) and the error is returned
//! so the CLI can exit non-zero. There is no retry.
//!
//! ## CSS and JavaScript
//!
//! Embedded at compile time and inlined by [`crate::render`]:
//! - `static/style.css`: layout for sections, cards and the overlay
//! - `static/gallery.js`: overlay open/close runtime

use crate::compose::{self, Page};
use crate::config::{self, ConfigError, RootConfig};
use crate::embed;
use crate::render;
use crate::types::SectionKey;
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Asset directory name, both in the content dir and in the output.
pub const ASSETS_DIR: &str = "assets";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Per-section numbers for the build report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub key: SectionKey,
    pub title: String,
    /// Cards on the home page.
    pub shown: usize,
    /// Videos in the gallery (the full list).
    pub total: usize,
    /// Videos whose link could not be turned into an embed.
    pub unavailable: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub title: String,
    pub sections: Vec<SectionSummary>,
    /// Asset files copied, relative to the output directory.
    pub assets: Vec<PathBuf>,
}

impl GenerateReport {
    pub fn unavailable(&self) -> usize {
        self.sections.iter().map(|s| s.unavailable).sum()
    }
}

/// Build the site from `source` into `output_dir`.
pub fn generate(source: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let config = match config::load_config(source) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Could not load the portfolio configuration: {}", err);
            write_index(output_dir, render::render_load_error())?;
            return Err(err.into());
        }
    };

    let page = compose::compose(&config);
    write_index(output_dir, render::render_page(&page))?;
    tracing::info!("Generated {}", output_dir.join("index.html").display());

    let assets = copy_assets(&source.join(ASSETS_DIR), &output_dir.join(ASSETS_DIR))?;
    if !assets.is_empty() {
        tracing::debug!("Copied {} asset files", assets.len());
    }

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        title: page.head.title.clone(),
        sections: summarize_sections(&config, &page),
        assets,
    })
}

/// Section numbers for a composed page.
pub fn summarize_sections(config: &RootConfig, page: &Page) -> Vec<SectionSummary> {
    page.sections()
        .filter_map(|section| {
            let cfg = config.section(section.key)?;
            Some(SectionSummary {
                key: section.key,
                title: section.title.clone(),
                shown: section.cards.len(),
                total: cfg.videos.len(),
                unavailable: cfg
                    .videos
                    .iter()
                    .filter(|v| embed::resolve(v).is_err())
                    .count(),
            })
        })
        .collect()
}

fn write_index(output_dir: &Path, markup: Markup) -> std::io::Result<()> {
    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join("index.html"), markup.into_string())
}

/// Copy `src` recursively into `dst`. A missing `src` copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut copied = Vec::new();
    if !src.is_dir() {
        return Ok(copied);
    }

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied.push(Path::new(ASSETS_DIR).join(relative));
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_fixtures;
    use tempfile::TempDir;

    #[test]
    fn generate_writes_index_and_assets() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();

        let report = generate(content.path(), out.path()).unwrap();

        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.contains("Ver Galeria Completa"));
        assert!(out.path().join("assets/favicon.svg").exists());
        assert_eq!(report.assets, vec![PathBuf::from("assets/favicon.svg")]);
    }

    #[test]
    fn report_counts_sections() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();

        let report = generate(content.path(), out.path()).unwrap();

        let projects = &report.sections[0];
        assert_eq!(projects.key, SectionKey::Projects);
        assert_eq!((projects.shown, projects.total), (2, 5));
        assert_eq!(projects.unavailable, 0);

        let social = &report.sections[1];
        assert_eq!(social.key, SectionKey::SocialMedia);
        assert_eq!((social.shown, social.total), (3, 4));
        assert_eq!(social.unavailable, 1);
        assert_eq!(report.unavailable(), 1);
    }

    #[test]
    fn missing_config_writes_error_page_and_fails() {
        let content = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let result = generate(content.path(), out.path());

        assert!(matches!(
            result,
            Err(GenerateError::Config(ConfigError::NotFound(_)))
        ));
        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.contains(render::LOAD_ERROR_MESSAGE));
        assert!(!html.contains(r#"class="video-card""#));
    }

    #[test]
    fn malformed_config_writes_error_page() {
        let content = TempDir::new().unwrap();
        fs::write(content.path().join("config.json"), "{ not json").unwrap();
        let out = TempDir::new().unwrap();

        let result = generate(content.path(), out.path());

        assert!(matches!(
            result,
            Err(GenerateError::Config(ConfigError::Json(_)))
        ));
        assert!(out.path().join("index.html").exists());
    }

    #[test]
    fn no_assets_dir_copies_nothing() {
        let content = TempDir::new().unwrap();
        fs::write(content.path().join("config.json"), "{}").unwrap();
        let out = TempDir::new().unwrap();

        let report = generate(content.path(), out.path()).unwrap();
        assert!(report.assets.is_empty());
        assert!(report.sections.is_empty());
        assert_eq!(report.title, "Portfólio");
    }
}
