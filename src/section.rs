//! Titled video sections.
//!
//! A [`Section`] is a heading plus a grid of cards. The builder renders
//! exactly the videos it is handed; choosing between the featured prefix and
//! the full list is the caller's decision. When the caller also passes the
//! full config and it is longer than what was rendered, the section gets a
//! [`SeeMore`] trigger pointing at the gallery overlay.

use crate::card::{self, Card};
use crate::config::SectionConfig;
use crate::types::{Orientation, SectionKey, VideoReference};

/// Label of the "see more" trigger.
pub const SEE_MORE_LABEL: &str = "Ver Galeria Completa";

/// Trigger that opens the gallery overlay with the section's full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeeMore {
    pub section: SectionKey,
    pub orientation: Orientation,
    /// Number of videos only reachable through the gallery.
    pub hidden: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub key: SectionKey,
    pub title: String,
    pub orientation: Orientation,
    pub cards: Vec<Card>,
    pub see_more: Option<SeeMore>,
}

/// Build a section with one card per entry of `videos`.
pub fn build_section(
    title: &str,
    videos: &[VideoReference],
    key: SectionKey,
    orientation: Orientation,
    full: Option<&SectionConfig>,
) -> Section {
    let cards: Vec<Card> = videos
        .iter()
        .map(|video| card::build_card(video, orientation))
        .collect();

    let see_more = full
        .filter(|f| f.videos.len() > cards.len())
        .map(|f| SeeMore {
            section: key,
            orientation,
            hidden: f.videos.len() - cards.len(),
        });

    Section {
        key,
        title: title.to_string(),
        orientation,
        cards,
        see_more,
    }
}
