//! Portfolio configuration module.
//!
//! Handles loading the declarative document that describes the whole page.
//! The document lives in the content directory as `config.json` (checked
//! first) or `config.toml`; both carry the same shape.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.json              # Page description (or config.toml)
//! └── assets/                  # Copied to <output>/assets/ (favicon, images)
//! ```
//!
//! ## Document Shape
//!
//! ```json
//! {
//!   "siteTitle": "Ana Souza | Video",
//!   "favicon": "assets/favicon.png",
//!   "hero": { "enabled": true, "title": "Ana Souza", "subtitle": "Editor" },
//!   "projects": {
//!     "enabled": true,
//!     "title": "Projects",
//!     "featuredCount": 2,
//!     "videos": [
//!       { "type": "youtube", "id_or_url": "dQw4w9WgXcQ", "title": "Reel", "description": "" }
//!     ]
//!   },
//!   "socialMedia": { "enabled": true, "title": "Shorts", "videos": [] },
//!   "contact": {
//!     "enabled": true,
//!     "title": "Contact",
//!     "links": [{ "url": "https://github.com/ana", "icon": "fab fa-github", "name": "GitHub" }]
//!   }
//! }
//! ```
//!
//! ## Partial Configuration
//!
//! Every field is optional. Missing sections are skipped, missing strings are
//! empty, and a missing (or zero) `featuredCount` falls back to the section's
//! default. An explicit `null` counts as missing, and a `featuredCount` below
//! one does too. A document only fails to load when it cannot be read or
//! parsed.

use crate::types::{SectionKey, VideoReference, null_as_default};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names probed in the content directory, in priority order.
pub const CONFIG_JSON: &str = "config.json";
pub const CONFIG_TOML: &str = "config.toml";

/// Page title used when `siteTitle` is missing or empty.
pub const DEFAULT_SITE_TITLE: &str = "Portfólio";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no config.json or config.toml found in {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Root of the configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RootConfig {
    pub site_title: Option<String>,
    /// Favicon href, emitted as-is.
    pub favicon: Option<String>,
    pub hero: Option<HeroConfig>,
    pub projects: Option<SectionConfig>,
    pub social_media: Option<SectionConfig>,
    pub contact: Option<ContactConfig>,
}

impl RootConfig {
    /// Document title, falling back to [`DEFAULT_SITE_TITLE`].
    pub fn page_title(&self) -> &str {
        self.site_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_SITE_TITLE)
    }

    /// Favicon href if one was configured.
    pub fn favicon_href(&self) -> Option<&str> {
        self.favicon.as_deref().filter(|f| !f.is_empty())
    }

    /// Footer name, taken from the hero title whenever both exist.
    pub fn footer_name(&self) -> Option<&str> {
        self.hero
            .as_ref()
            .map(|h| h.title.as_str())
            .filter(|t| !t.is_empty())
    }

    /// Section config for a key, if present in the document.
    pub fn section(&self, key: SectionKey) -> Option<&SectionConfig> {
        match key {
            SectionKey::Projects => self.projects.as_ref(),
            SectionKey::SocialMedia => self.social_media.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
}

/// A titled list of videos.
///
/// `featured_count` only limits the home-page view; `videos` is always kept
/// whole so the gallery overlay can show everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "positive_count"
    )]
    pub featured_count: Option<usize>,
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<VideoReference>,
}

impl SectionConfig {
    /// Effective featured count. Unset and zero both mean `default`.
    pub fn featured_limit(&self, default: usize) -> usize {
        match self.featured_count {
            Some(n) if n > 0 => n,
            _ => default,
        }
    }

    /// The home-page prefix: the first `min(limit, len)` videos.
    pub fn featured(&self, default: usize) -> &[VideoReference] {
        let end = self.featured_limit(default).min(self.videos.len());
        &self.videos[..end]
    }

    /// Whether the home page hides some videos behind "see more".
    pub fn has_more(&self, default: usize) -> bool {
        self.videos.len() > self.featured_limit(default)
    }
}

/// Read `featuredCount` as any number, keeping only counts of at least one.
///
/// Fractions truncate (`2.5` shows two videos). `null`, zero and negatives
/// become `None`, which means "use the section default".
fn positive_count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = Option::<f64>::deserialize(deserializer)?;
    Ok(count
        .filter(|n| n.is_finite() && *n >= 1.0)
        .map(|n| n.trunc() as usize))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLink {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Icon font class list, e.g. `fab fa-instagram`.
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<ContactLink>,
}

// =============================================================================
// Config loading
// =============================================================================

/// Parse a JSON configuration document.
pub fn parse_json(content: &str) -> Result<RootConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a TOML configuration document (same keys as the JSON form).
pub fn parse_toml(content: &str) -> Result<RootConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Path of the config file that [`load_config`] would read, if any.
pub fn config_path(root: &Path) -> Option<PathBuf> {
    [CONFIG_JSON, CONFIG_TOML]
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Load the configuration from `config.json` or `config.toml` in `root`.
///
/// JSON wins when both exist. A missing file is an error: without a document
/// there is nothing to render.
pub fn load_config(root: &Path) -> Result<RootConfig, ConfigError> {
    let path = config_path(root).ok_or_else(|| ConfigError::NotFound(root.to_path_buf()))?;
    let content = fs::read_to_string(&path)?;
    if path.extension().is_some_and(|e| e == "toml") {
        parse_toml(&content)
    } else {
        parse_json(&content)
    }
}

/// Returns a starter `config.json` exercising every option.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_json() -> &'static str {
    r#"{
  "siteTitle": "Portfólio",
  "favicon": "assets/favicon.png",
  "hero": {
    "enabled": true,
    "title": "Your Name",
    "subtitle": "Video editor and motion designer"
  },
  "projects": {
    "enabled": true,
    "title": "Projects",
    "featuredCount": 2,
    "videos": [
      {
        "type": "youtube",
        "id_or_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "title": "Showreel",
        "description": "YouTube accepts watch, shorts, embed and youtu.be links or a bare 11-character ID."
      },
      {
        "type": "vimeo",
        "id_or_url": "https://vimeo.com/76979871",
        "title": "Short film",
        "description": "Vimeo accepts vimeo.com/<number> or the bare number."
      },
      {
        "type": "gdrive",
        "id_or_url": "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz/view",
        "title": "Client cut",
        "description": "Google Drive needs the full file/d/<id> share link; the file must be shared publicly."
      }
    ]
  },
  "socialMedia": {
    "enabled": true,
    "title": "Social Media",
    "featuredCount": 3,
    "videos": [
      {
        "type": "dailymotion",
        "id_or_url": "x8abc12",
        "title": "Behind the scenes",
        "description": "Dailymotion accepts dailymotion.com/video/<id> or the bare ID."
      }
    ]
  },
  "contact": {
    "enabled": true,
    "title": "Contact",
    "links": [
      { "url": "mailto:you@example.com", "icon": "fas fa-envelope", "name": "E-mail" },
      { "url": "https://instagram.com/you", "icon": "fab fa-instagram", "name": "Instagram" }
    ]
  }
}
"#
}
