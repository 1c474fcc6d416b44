//! Video card construction.
//!
//! A [`Card`] is the unit every grid is made of: a title, a description and
//! either a playable [`Frame`] or an inline "unavailable" placeholder. This
//! is the only place frames are created, so every card on the page is
//! guaranteed to show something.

use crate::embed::{self, EmbedError};
use crate::types::{Orientation, VideoReference};

/// Heading of the inline placeholder shown instead of a frame.
pub const UNAVAILABLE_HEADING: &str = "Erro:";
/// Body of the inline placeholder shown instead of a frame.
pub const UNAVAILABLE_MESSAGE: &str =
    "Não foi possível carregar este vídeo. Verifique o link/permissões no config.json.";

/// An embedded player pointed at a provider URL.
///
/// `loads` counts how many times the source was (re)assigned. Reassigning the
/// same source reloads the frame, which is how playback is stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub src: String,
    pub loads: u32,
}

impl Frame {
    pub fn new(src: String) -> Self {
        Self { src, loads: 1 }
    }

    /// Reassign the current source to itself.
    pub fn reload(&mut self) {
        let src = std::mem::take(&mut self.src);
        self.src = src;
        self.loads += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    Frame(Frame),
    Unavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub orientation: Orientation,
    pub body: CardBody,
}

impl Card {
    pub fn frame(&self) -> Option<&Frame> {
        match &self.body {
            CardBody::Frame(frame) => Some(frame),
            CardBody::Unavailable { .. } => None,
        }
    }

    pub fn frame_mut(&mut self) -> Option<&mut Frame> {
        match &mut self.body {
            CardBody::Frame(frame) => Some(frame),
            CardBody::Unavailable { .. } => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self.body, CardBody::Unavailable { .. })
    }
}

/// Build a card for one video.
///
/// Resolution failures are logged here and rendered as a placeholder; they
/// never reach the caller.
pub fn build_card(video: &VideoReference, orientation: Orientation) -> Card {
    let body = match embed::resolve(video) {
        Ok(src) => CardBody::Frame(Frame::new(src)),
        Err(err) => {
            log_unavailable(&err);
            CardBody::Unavailable {
                reason: err.to_string(),
            }
        }
    };

    Card {
        title: video.title.clone(),
        description: video.description.clone(),
        orientation,
        body,
    }
}

fn log_unavailable(err: &EmbedError) {
    tracing::warn!(
        title = err.title(),
        reference = err.reference(),
        "Could not process video link: {}",
        err
    );
}
