//! Gallery overlay lifecycle.
//!
//! The overlay is a two-state machine over an explicit [`OverlayState`]:
//!
//! ```text
//!            open(section)                     close()
//! Closed ──────────────────▶ Open ─────────────────────▶ Closed
//!                            │  ▲
//!                            └──┘ open(other section) replaces content
//! ```
//!
//! Opening builds one card per video of the *full* section list. Closing
//! reloads every frame before the grid is dropped: hiding a frame does not
//! stop its audio, reassigning its source does.
//!
//! The state is owned by the composed page and handed to these functions by
//! `&mut`; nothing here is global.

use crate::card::{self, Card, Frame};
use crate::config::SectionConfig;
use crate::types::{Orientation, SectionKey};

/// Heading used when the opened section has no title.
pub const DEFAULT_GALLERY_TITLE: &str = "Galeria";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayState {
    pub is_open: bool,
    pub current_section: Option<SectionConfig>,
    pub title: String,
    pub orientation: Orientation,
    pub grid: Vec<Card>,
    /// Background page scrolling is disabled while this is set.
    pub scroll_locked: bool,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single layout class on the content panel.
    pub fn layout_class(&self) -> &'static str {
        self.orientation.layout_class()
    }
}

/// Frames that were reloaded while closing, in grid order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloseOutcome {
    pub stopped: Vec<Frame>,
}

/// Where a pointer-style activation landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationTarget {
    /// The dimmed backdrop around the panel.
    Scrim,
    /// Anywhere inside the content panel.
    Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Abstract user input the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    SeeMore(SectionKey),
    CloseControl,
    Activation(ActivationTarget),
    Key(Key),
}

/// Heading shown for `section`, falling back to [`DEFAULT_GALLERY_TITLE`].
pub fn gallery_title(section: &SectionConfig) -> &str {
    if section.title.is_empty() {
        DEFAULT_GALLERY_TITLE
    } else {
        &section.title
    }
}

/// Show the full list of `section` in the overlay.
///
/// Valid from either state; any previous content is replaced.
pub fn open(state: &mut OverlayState, section: &SectionConfig, orientation: Orientation) {
    let cards = section
        .videos
        .iter()
        .map(|video| card::build_card(video, orientation))
        .collect();
    show(state, section, orientation, cards);
}

/// [`open`] with cards that were already built for `section`, one per video.
pub fn show(
    state: &mut OverlayState,
    section: &SectionConfig,
    orientation: Orientation,
    cards: Vec<Card>,
) {
    state.grid.clear();
    state.title = gallery_title(section).to_string();
    state.orientation = orientation;
    state.grid = cards;
    state.current_section = Some(section.clone());
    state.is_open = true;
    state.scroll_locked = true;
    tracing::debug!(
        "Opened gallery \"{}\" with {} videos",
        state.title,
        state.grid.len()
    );
}

/// Hide the overlay, stop playback and clear the grid.
///
/// Returns `None` when the overlay was already closed.
pub fn close(state: &mut OverlayState) -> Option<CloseOutcome> {
    if !state.is_open {
        return None;
    }
    state.is_open = false;
    state.scroll_locked = false;

    let stopped = state
        .grid
        .iter_mut()
        .filter_map(Card::frame_mut)
        .map(|frame| {
            frame.reload();
            frame.clone()
        })
        .collect();

    state.grid.clear();
    state.current_section = None;
    Some(CloseOutcome { stopped })
}

/// Whether `trigger` closes the overlay in its current state.
pub fn is_close_trigger(state: &OverlayState, trigger: Trigger) -> bool {
    state.is_open
        && matches!(
            trigger,
            Trigger::CloseControl
                | Trigger::Activation(ActivationTarget::Scrim)
                | Trigger::Key(Key::Escape)
        )
}

/// Route a close-type trigger. Other triggers are ignored here.
pub fn handle(state: &mut OverlayState, trigger: Trigger) -> Option<CloseOutcome> {
    if is_close_trigger(state, trigger) {
        close(state)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{card_titles, numbered_section, video};

    #[test]
    fn starts_closed_and_empty() {
        let state = OverlayState::new();
        assert!(!state.is_open);
        assert!(state.grid.is_empty());
        assert!(state.current_section.is_none());
        assert!(!state.scroll_locked);
    }

    #[test]
    fn open_shows_every_video() {
        let mut state = OverlayState::new();
        let section = numbered_section("Work", 7);
        open(&mut state, &section, Orientation::Horizontal);

        assert!(state.is_open);
        assert!(state.scroll_locked);
        assert_eq!(state.grid.len(), 7);
        assert_eq!(state.title, "Work");
        assert_eq!(state.layout_class(), "projects-section");
        assert_eq!(state.current_section.as_ref(), Some(&section));
    }

    #[test]
    fn open_without_title_uses_default() {
        let mut state = OverlayState::new();
        let section = numbered_section("", 1);
        open(&mut state, &section, Orientation::Vertical);
        assert_eq!(state.title, DEFAULT_GALLERY_TITLE);
        assert_eq!(state.layout_class(), "social-media-section");
    }

    #[test]
    fn show_uses_given_cards() {
        let mut state = OverlayState::new();
        let section = numbered_section("Work", 2);
        let cards = vec![
            card::build_card(&video("vimeo", "1", "Prebuilt 1"), Orientation::Horizontal),
            card::build_card(&video("vimeo", "2", "Prebuilt 2"), Orientation::Horizontal),
        ];
        show(&mut state, &section, Orientation::Horizontal, cards);
        assert!(state.is_open);
        assert_eq!(card_titles(&state.grid), vec!["Prebuilt 1", "Prebuilt 2"]);
    }

    #[test]
    fn reopening_replaces_content() {
        let mut state = OverlayState::new();
        let a = numbered_section("A", 4);
        let mut b = numbered_section("B", 2);
        b.videos[0].title = "Only B".to_string();

        open(&mut state, &a, Orientation::Horizontal);
        open(&mut state, &b, Orientation::Vertical);

        assert_eq!(state.title, "B");
        assert_eq!(card_titles(&state.grid), vec!["Only B", "Video 2"]);
        assert_eq!(state.layout_class(), "social-media-section");
        assert!(state.grid.iter().all(|c| c.orientation == Orientation::Vertical));
    }

    #[test]
    fn close_reloads_frames_then_clears() {
        let mut state = OverlayState::new();
        let mut section = numbered_section("Work", 3);
        section.videos.push(video("facebook", "nope", "Broken"));
        open(&mut state, &section, Orientation::Horizontal);
        let srcs: Vec<String> = state
            .grid
            .iter()
            .filter_map(|c| c.frame().map(|f| f.src.clone()))
            .collect();

        let outcome = close(&mut state).unwrap();

        // Only real frames are reloaded; the placeholder card has none
        assert_eq!(outcome.stopped.len(), 3);
        assert_eq!(
            outcome.stopped.iter().map(|f| f.src.clone()).collect::<Vec<_>>(),
            srcs
        );
        assert!(outcome.stopped.iter().all(|f| f.loads == 2));
        assert!(!state.is_open);
        assert!(!state.scroll_locked);
        assert!(state.grid.is_empty());
        assert!(state.current_section.is_none());
    }

    #[test]
    fn close_when_closed_is_noop() {
        let mut state = OverlayState::new();
        assert_eq!(close(&mut state), None);
        assert_eq!(state, OverlayState::new());
    }

    #[test]
    fn close_triggers_only_fire_while_open() {
        let mut state = OverlayState::new();
        for trigger in [
            Trigger::CloseControl,
            Trigger::Activation(ActivationTarget::Scrim),
            Trigger::Key(Key::Escape),
        ] {
            assert!(!is_close_trigger(&state, trigger));
            open(&mut state, &numbered_section("Work", 1), Orientation::Horizontal);
            assert!(is_close_trigger(&state, trigger));
            assert!(handle(&mut state, trigger).is_some());
            assert!(!state.is_open);
        }
    }

    #[test]
    fn panel_activation_and_other_keys_keep_overlay_open() {
        let mut state = OverlayState::new();
        open(&mut state, &numbered_section("Work", 2), Orientation::Horizontal);

        assert_eq!(handle(&mut state, Trigger::Activation(ActivationTarget::Panel)), None);
        assert_eq!(handle(&mut state, Trigger::Key(Key::Other)), None);
        assert_eq!(handle(&mut state, Trigger::SeeMore(SectionKey::Projects)), None);
        assert!(state.is_open);
        assert_eq!(state.grid.len(), 2);
    }
}
