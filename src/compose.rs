//! Page composition.
//!
//! [`compose`] turns a [`RootConfig`] into a [`Page`]: the ordered element
//! tree of the home page plus the gallery overlay it controls. Construction
//! order is fixed (hero, projects, social media, contact) and each block is
//! skipped when absent from the config or not `enabled`.
//!
//! Video sections are truncated to their featured prefix here. The
//! untruncated config is kept in a [`Gallery`] so a "see more" trigger can
//! open the overlay with every video.

use crate::card::{self, Card};
use crate::config::{ContactConfig, ContactLink, HeroConfig, RootConfig, SectionConfig};
use crate::overlay::{self, CloseOutcome, OverlayState, Trigger};
use crate::section::{self, Section};
use crate::types::{Orientation, SectionKey};

/// Document-level values applied once: title, favicon, footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHead {
    pub title: String,
    pub favicon: Option<String>,
    pub footer_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub title: String,
    pub links: Vec<ContactLink>,
}

/// One top-level block of the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Hero(Hero),
    Section(Section),
    Contact(Contact),
}

/// Full video list reachable through a section's "see more" trigger.
///
/// `cards` holds one card per video of `config`. The featured ones are the
/// section's own cards, so each video is resolved once per page.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    pub key: SectionKey,
    pub orientation: Orientation,
    pub config: SectionConfig,
    pub cards: Vec<Card>,
}

/// What a trigger did to the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Opened { section: SectionKey, cards: usize },
    Closed(CloseOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub head: PageHead,
    pub blocks: Vec<Block>,
    pub galleries: Vec<Gallery>,
    pub overlay: OverlayState,
}

impl Page {
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Section(section) => Some(section),
            _ => None,
        })
    }

    pub fn section(&self, key: SectionKey) -> Option<&Section> {
        self.sections().find(|s| s.key == key)
    }

    pub fn gallery(&self, key: SectionKey) -> Option<&Gallery> {
        self.galleries.iter().find(|g| g.key == key)
    }

    /// Apply a user trigger.
    ///
    /// "See more" opens the overlay with the untruncated list of its section
    /// (replacing whatever was open). Close-type triggers close it. Anything
    /// else, or a trigger that does not apply in the current state, returns
    /// `None`.
    pub fn activate(&mut self, trigger: Trigger) -> Option<Transition> {
        match trigger {
            Trigger::SeeMore(key) => {
                let gallery = self.galleries.iter().find(|g| g.key == key)?;
                overlay::show(
                    &mut self.overlay,
                    &gallery.config,
                    gallery.orientation,
                    gallery.cards.clone(),
                );
                Some(Transition::Opened {
                    section: key,
                    cards: self.overlay.grid.len(),
                })
            }
            other => overlay::handle(&mut self.overlay, other).map(Transition::Closed),
        }
    }
}

/// Build the page for a loaded configuration.
pub fn compose(config: &RootConfig) -> Page {
    let head = PageHead {
        title: config.page_title().to_string(),
        favicon: config.favicon_href().map(str::to_string),
        footer_name: config.footer_name().map(str::to_string),
    };

    let mut blocks = Vec::new();
    let mut galleries = Vec::new();

    if let Some(hero) = config.hero.as_ref().filter(|h| h.enabled) {
        blocks.push(Block::Hero(build_hero(hero)));
    }

    for key in [SectionKey::Projects, SectionKey::SocialMedia] {
        let Some(cfg) = config.section(key).filter(|s| s.enabled) else {
            continue;
        };
        let orientation = key.orientation();
        let featured = cfg.featured(key.default_featured_count());
        let section = section::build_section(&cfg.title, featured, key, orientation, Some(cfg));
        if section.see_more.is_some() {
            let mut cards = section.cards.clone();
            cards.extend(
                cfg.videos[featured.len()..]
                    .iter()
                    .map(|video| card::build_card(video, orientation)),
            );
            galleries.push(Gallery {
                key,
                orientation,
                config: cfg.clone(),
                cards,
            });
        }
        blocks.push(Block::Section(section));
    }

    if let Some(contact) = config.contact.as_ref().filter(|c| c.enabled) {
        blocks.push(Block::Contact(build_contact(contact)));
    }

    Page {
        head,
        blocks,
        galleries,
        overlay: OverlayState::new(),
    }
}

fn build_hero(hero: &HeroConfig) -> Hero {
    Hero {
        title: hero.title.clone(),
        subtitle: hero.subtitle.clone(),
    }
}

fn build_contact(contact: &ContactConfig) -> Contact {
    Contact {
        title: contact.title.clone(),
        links: contact.links.clone(),
    }
}
