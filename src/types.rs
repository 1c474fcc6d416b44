//! Shared types used across the page pipeline.
//!
//! [`VideoReference`] is read straight from the configuration document and
//! flows unchanged through card, section and overlay construction.
//! [`Orientation`] and [`SectionKey`] carry the layout vocabulary (CSS
//! classes, default truncation) that the builders and the renderer agree on.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Read an explicit `null` as the field's default.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A user-supplied pointer to a hosted video.
///
/// `kind` is kept as written in the config. It is interpreted by
/// [`crate::embed::Provider::from_type`]; an unknown value is not a config
/// error, it just renders as an unavailable card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoReference {
    /// Provider name: `youtube`, `gdrive`/`drive`, `vimeo`, `dailymotion`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// Full share URL or bare provider ID.
    #[serde(
        rename = "id_or_url",
        alias = "idOrUrl",
        deserialize_with = "null_as_default"
    )]
    pub id_or_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Card and grid layout mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Wide 16:9 frames.
    #[default]
    Horizontal,
    /// Tall frames for shorts/reels.
    Vertical,
}

impl Orientation {
    /// Class applied to a card's embed wrapper.
    pub fn embed_class(self) -> &'static str {
        match self {
            Orientation::Horizontal => "embed-16-9",
            Orientation::Vertical => "embed-vertical",
        }
    }

    /// Grid layout class, shared by home-page sections and the overlay panel.
    pub fn layout_class(self) -> &'static str {
        match self {
            Orientation::Horizontal => "projects-section",
            Orientation::Vertical => "social-media-section",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// The two video sections a page can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Projects,
    SocialMedia,
}

impl SectionKey {
    /// Stable slug used for element ids and `data-gallery` wiring.
    pub fn slug(self) -> &'static str {
        match self {
            SectionKey::Projects => "projects",
            SectionKey::SocialMedia => "social-media",
        }
    }

    /// Section class on the home page.
    pub fn css_class(self) -> &'static str {
        match self {
            SectionKey::Projects => "projects-section",
            SectionKey::SocialMedia => "social-media-section",
        }
    }

    /// Featured count used when the config leaves it unset (or zero).
    pub fn default_featured_count(self) -> usize {
        match self {
            SectionKey::Projects => 2,
            SectionKey::SocialMedia => 3,
        }
    }

    /// Orientation the page composer renders this section with.
    pub fn orientation(self) -> Orientation {
        match self {
            SectionKey::Projects => Orientation::Horizontal,
            SectionKey::SocialMedia => Orientation::Vertical,
        }
    }

    /// Human label for CLI output when the section has no title.
    pub fn label(self) -> &'static str {
        match self {
            SectionKey::Projects => "Projects",
            SectionKey::SocialMedia => "Social Media",
        }
    }
}
