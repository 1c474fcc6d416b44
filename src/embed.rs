//! Video embed URL resolution.
//!
//! Turns a [`VideoReference`] (a pasted share link or a bare provider ID)
//! into the URL an `<iframe>` can load directly.
//!
//! ## Accepted Forms
//!
//! | Provider | Reference | Embed URL |
//! |----------|-----------|-----------|
//! | YouTube | `dQw4w9WgXcQ`, `youtube.com/watch?v=…`, `youtube.com/shorts/…`, `youtube.com/embed/…`, `youtu.be/…` | `https://www.youtube.com/embed/<id>` |
//! | Google Drive | `drive.google.com/file/d/<id>/…` | `https://drive.google.com/file/d/<id>/preview` |
//! | Vimeo | `76979871`, `vimeo.com/76979871` | `https://player.vimeo.com/video/<id>` |
//! | Dailymotion | `x8abc12`, `dailymotion.com/video/…`, `dailymotion.com/embed/video/…` | `https://www.dailymotion.com/embed/video/<id>` |
//!
//! URL forms may appear anywhere in the reference (scheme, `www.`, query
//! strings and trailing path segments are ignored). Bare IDs must be the
//! whole reference. Google Drive has no bare-ID form.
//!
//! Resolution is pure and never panics: a reference that cannot be embedded
//! yields an [`EmbedError`] that the caller logs and renders around.

use crate::types::VideoReference;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:youtube\.com/(?:watch\?v=|shorts/|embed/)|youtu\.be/)([a-zA-Z0-9_-]{11})|^([a-zA-Z0-9_-]{11})$",
    )
    .expect("Invalid YouTube regex")
});

static GDRIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"drive\.google\.com/file/d/([a-zA-Z0-9_-]+)").expect("Invalid Google Drive regex")
});

static VIMEO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"vimeo\.com/([0-9]+)|^([0-9]+)$").expect("Invalid Vimeo regex")
});

static DAILYMOTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"dailymotion\.com/(?:video|embed/video)/([a-zA-Z0-9]+)|^([a-zA-Z0-9]+)$")
        .expect("Invalid Dailymotion regex")
});

/// A video host we know how to embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    YouTube,
    GoogleDrive,
    Vimeo,
    Dailymotion,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::YouTube,
        Provider::GoogleDrive,
        Provider::Vimeo,
        Provider::Dailymotion,
    ];

    /// Interpret a config `type` value. Case-insensitive; `gdrive` and
    /// `drive` both mean Google Drive.
    pub fn from_type(kind: &str) -> Option<Self> {
        match kind.to_lowercase().as_str() {
            "youtube" => Some(Provider::YouTube),
            "gdrive" | "drive" => Some(Provider::GoogleDrive),
            "vimeo" => Some(Provider::Vimeo),
            "dailymotion" => Some(Provider::Dailymotion),
            _ => None,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Provider::YouTube => &YOUTUBE_RE,
            Provider::GoogleDrive => &GDRIVE_RE,
            Provider::Vimeo => &VIMEO_RE,
            Provider::Dailymotion => &DAILYMOTION_RE,
        }
    }

    /// Pull the provider's video ID out of a URL or bare ID.
    ///
    /// Group 1 is the URL form, group 2 (where present) the bare form.
    pub fn extract_id(self, reference: &str) -> Option<&str> {
        let caps = self.pattern().captures(reference)?;
        caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
    }

    /// Player URL for an already-extracted ID.
    pub fn embed_url(self, id: &str) -> String {
        match self {
            Provider::YouTube => format!("https://www.youtube.com/embed/{id}"),
            Provider::GoogleDrive => format!("https://drive.google.com/file/d/{id}/preview"),
            Provider::Vimeo => format!("https://player.vimeo.com/video/{id}"),
            Provider::Dailymotion => format!("https://www.dailymotion.com/embed/video/{id}"),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::YouTube => "YouTube",
            Provider::GoogleDrive => "Google Drive",
            Provider::Vimeo => "Vimeo",
            Provider::Dailymotion => "Dailymotion",
        };
        f.write_str(name)
    }
}

/// Why a reference could not be embedded.
///
/// Both variants keep the title and raw reference so the diagnostic can point
/// at the offending config entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    #[error("unsupported video type \"{kind}\" for \"{title}\" (URL/ID: {reference})")]
    UnsupportedType {
        kind: String,
        title: String,
        reference: String,
    },
    #[error("unrecognized {provider} link for \"{title}\" (URL/ID: {reference})")]
    UnrecognizedReference {
        provider: Provider,
        title: String,
        reference: String,
    },
}

impl EmbedError {
    pub fn title(&self) -> &str {
        match self {
            EmbedError::UnsupportedType { title, .. }
            | EmbedError::UnrecognizedReference { title, .. } => title,
        }
    }

    pub fn reference(&self) -> &str {
        match self {
            EmbedError::UnsupportedType { reference, .. }
            | EmbedError::UnrecognizedReference { reference, .. } => reference,
        }
    }
}

/// Resolve a video reference to its embeddable player URL.
pub fn resolve(video: &VideoReference) -> Result<String, EmbedError> {
    let provider =
        Provider::from_type(&video.kind).ok_or_else(|| EmbedError::UnsupportedType {
            kind: video.kind.clone(),
            title: video.title.clone(),
            reference: video.id_or_url.clone(),
        })?;

    provider
        .extract_id(&video.id_or_url)
        .map(|id| provider.embed_url(id))
        .ok_or_else(|| EmbedError::UnrecognizedReference {
            provider,
            title: video.title.clone(),
            reference: video.id_or_url.clone(),
        })
}
