//! HTML rendering backend.
//!
//! Converts the composed element tree ([`Page`], [`Section`], [`Card`],
//! [`OverlayState`]) into a single self-contained document with
//! [maud](https://maud.lambda.xyz/). Nothing here makes layout decisions:
//! truncation, "see more" wiring and overlay content are settled by the
//! builders, this module only chooses markup.
//!
//! ## Document Layout
//!
//! ```text
//! <main id="app-container">     hero, video sections, contact
//! <footer>                      #footer-name
//! <div id="gallery-modal">      overlay root, rendered from OverlayState
//! <template id="gallery-…">     one per "see more", the overlay grid it opens
//! <script>                      static/gallery.js
//! ```
//!
//! The gallery templates hold the cards composed for each gallery, the same
//! ones [`Page::activate`] shows, so the browser runtime only has to clone
//! them into the grid.

use crate::card::{Card, CardBody, UNAVAILABLE_HEADING, UNAVAILABLE_MESSAGE};
use crate::compose::{Block, Contact, Gallery, Hero, Page, PageHead};
use crate::config::DEFAULT_SITE_TITLE;
use crate::overlay::{self, OverlayState};
use crate::section::{SEE_MORE_LABEL, Section};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/gallery.js");

/// Full-page message shown when the configuration cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar o portfólio. Verifique o console.";

const FRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

// ============================================================================
// Documents
// ============================================================================

fn base_document(head: &PageHead, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (head.title) }
                @if let Some(favicon) = &head.favicon {
                    link rel="shortcut icon" type="image/png" href=(favicon);
                }
                style { (PreEscaped(CSS)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Render the home page, its overlay and the gallery templates.
pub fn render_page(page: &Page) -> Markup {
    let content = html! {
        main id="app-container" {
            @for block in &page.blocks {
                @match block {
                    Block::Hero(hero) => { (render_hero(hero)) },
                    Block::Section(section) => { (render_section(section)) },
                    Block::Contact(contact) => { (render_contact(contact)) },
                }
            }
        }
        footer.site-footer {
            p {
                "© "
                span id="footer-name" {
                    @if let Some(name) = &page.head.footer_name { (name) }
                }
            }
        }
        (render_overlay(&page.overlay))
        @for gallery in &page.galleries {
            (render_gallery_template(gallery))
        }
        script { (PreEscaped(JS)) }
    };

    let body_class = page.overlay.scroll_locked.then_some("modal-open");
    base_document(&page.head, body_class, content)
}

/// Render the replacement document for a failed configuration load.
///
/// Nothing of the page is shown, only the message.
pub fn render_load_error() -> Markup {
    let head = PageHead {
        title: DEFAULT_SITE_TITLE.to_string(),
        favicon: None,
        footer_name: None,
    };
    let content = html! {
        main id="app-container" {
            h1.load-error { (LOAD_ERROR_MESSAGE) }
        }
    };
    base_document(&head, None, content)
}

// ============================================================================
// Blocks
// ============================================================================

pub fn render_hero(hero: &Hero) -> Markup {
    html! {
        section.hero-section {
            h1 { (hero.title) }
            p { (hero.subtitle) }
        }
    }
}

pub fn render_section(section: &Section) -> Markup {
    html! {
        section class={ "portfolio-section " (section.key.css_class()) } {
            h2 { (section.title) }
            div.video-grid {
                @for card in &section.cards {
                    (render_card(card))
                }
            }
            @if let Some(see_more) = &section.see_more {
                a.see-more-btn href="#" data-gallery=(see_more.section.slug()) {
                    (SEE_MORE_LABEL)
                }
            }
        }
    }
}

/// Renders one card: a frame, or the inline placeholder when the link
/// could not be resolved.
pub fn render_card(card: &Card) -> Markup {
    html! {
        div.video-card {
            div class={ "video-embed " (card.orientation.embed_class()) } {
                @match &card.body {
                    CardBody::Frame(frame) => {
                        iframe src=(frame.src) title=(card.title) frameborder="0"
                            allow=(FRAME_ALLOW) allowfullscreen {}
                    },
                    CardBody::Unavailable { .. } => {
                        div.embed-error {
                            p { strong { (UNAVAILABLE_HEADING) } }
                            p { (UNAVAILABLE_MESSAGE) }
                        }
                    },
                }
            }
            div.video-info {
                h3 { (card.title) }
                p { (card.description) }
            }
        }
    }
}

pub fn render_contact(contact: &Contact) -> Markup {
    html! {
        section.contact-section {
            h2 { (contact.title) }
            div.contact-links {
                @for link in &contact.links {
                    a href=(link.url) target="_blank" rel="noopener noreferrer" {
                        i class=(link.icon) {}
                        span { (link.name) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Overlay
// ============================================================================

/// Renders the overlay root in its current state.
pub fn render_overlay(state: &OverlayState) -> Markup {
    let display = if state.is_open {
        "display: flex;"
    } else {
        "display: none;"
    };
    html! {
        div.modal id="gallery-modal" style=(display) {
            div class={ "modal-content " (state.layout_class()) } {
                button.modal-close-btn type="button" aria-label="Fechar" { "×" }
                h2 id="modal-title" { (state.title) }
                div.video-grid id="modal-grid" {
                    @for card in &state.grid {
                        (render_card(card))
                    }
                }
            }
        }
    }
}

/// Renders the inert template a "see more" trigger clones into the overlay.
fn render_gallery_template(gallery: &Gallery) -> Markup {
    html! {
        template id={ "gallery-" (gallery.key.slug()) }
            data-title=(overlay::gallery_title(&gallery.config))
            data-layout=(gallery.orientation.layout_class()) {
            @for card in &gallery.cards {
                (render_card(card))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::build_card;
    use crate::compose::compose;
    use crate::overlay::Trigger;
    use crate::test_helpers::{sample_config, video};
    use crate::types::{Orientation, SectionKey};

    #[test]
    fn card_with_frame_renders_iframe() {
        let card = build_card(&video("youtube", "dQw4w9WgXcQ", "Reel"), Orientation::Horizontal);
        let html = render_card(&card).into_string();
        assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
        assert!(html.contains("embed-16-9"));
        assert!(html.contains("allowfullscreen"));
        assert!(html.contains("<h3>Reel</h3>"));
    }

    #[test]
    fn unavailable_card_renders_placeholder_not_iframe() {
        let card = build_card(&video("facebook", "xyz", "Party"), Orientation::Vertical);
        let html = render_card(&card).into_string();
        assert!(!html.contains("<iframe"));
        assert!(html.contains("embed-error"));
        assert!(html.contains("embed-vertical"));
        assert!(html.contains("<h3>Party</h3>"));
    }

    #[test]
    fn section_with_see_more_renders_one_trigger() {
        let page = compose(&sample_config());
        let html = render_section(page.section(SectionKey::Projects).unwrap()).into_string();
        assert_eq!(html.matches("video-card").count(), 2);
        assert_eq!(html.matches("see-more-btn").count(), 1);
        assert!(html.contains("Ver Galeria Completa"));
        assert!(html.contains(r#"data-gallery="projects""#));
        assert!(html.contains("portfolio-section projects-section"));
    }

    #[test]
    fn section_without_see_more_has_no_trigger() {
        let page = compose(&sample_config());
        let html = render_section(page.section(SectionKey::SocialMedia).unwrap()).into_string();
        assert_eq!(html.matches("video-card").count(), 2);
        assert!(!html.contains("see-more-btn"));
    }

    #[test]
    fn contact_links_open_in_new_context_without_opener() {
        let page = compose(&sample_config());
        let html = render_page(&page).into_string();
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains(r#"<i class="fab fa-instagram"></i>"#));
    }

    #[test]
    fn page_head_and_footer() {
        let html = render_page(&compose(&sample_config())).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ana Souza | Video</title>"));
        assert!(html.contains(r#"rel="shortcut icon""#));
        assert!(html.contains(r#"href="assets/favicon.svg""#));
        assert!(html.contains(r#"<span id="footer-name">Ana Souza</span>"#));
    }

    #[test]
    fn closed_overlay_is_hidden_and_empty() {
        let html = render_page(&compose(&sample_config())).into_string();
        assert!(html.contains(r#"style="display: none;""#));
        assert!(!html.contains(r#"<body class="modal-open">"#));
    }

    #[test]
    fn open_overlay_renders_full_grid_and_locks_body() {
        let mut page = compose(&sample_config());
        page.activate(Trigger::SeeMore(SectionKey::Projects));
        let html = render_overlay(&page.overlay).into_string();
        assert!(html.contains("display: flex;"));
        assert!(html.contains("modal-content projects-section"));
        assert_eq!(html.matches("<iframe").count(), 5);

        let doc = render_page(&page).into_string();
        assert!(doc.contains(r#"<body class="modal-open">"#));
    }

    #[test]
    fn gallery_template_holds_every_video() {
        let html = render_page(&compose(&sample_config())).into_string();
        let start = html.find(r#"<template id="gallery-projects""#).unwrap();
        let end = start + html[start..].find("</template>").unwrap();
        let template = &html[start..end];
        assert_eq!(template.matches("<iframe").count(), 5);
        assert!(template.contains(r#"data-title="Projetos""#));
        assert!(template.contains(r#"data-layout="projects-section""#));
        assert!(!html.contains("gallery-social-media"));
    }

    #[test]
    fn gallery_template_renders_composed_cards() {
        let mut page = compose(&sample_config());
        page.galleries[0].cards[3].title = "Composed once".to_string();
        let html = render_page(&page).into_string();
        assert!(html.contains("<h3>Composed once</h3>"));
        assert!(!html.contains("<h3>Project 4</h3>"));
    }

    #[test]
    fn untitled_gallery_template_uses_default_heading() {
        let mut page = compose(&sample_config());
        page.galleries[0].config.title = String::new();
        let html = render_page(&page).into_string();
        assert!(html.contains(r#"data-title="Galeria""#));
    }

    #[test]
    fn load_error_document_shows_only_message() {
        let html = render_load_error().into_string();
        assert!(html.contains(LOAD_ERROR_MESSAGE));
        assert!(!html.contains(r#"class="video-card""#));
        assert!(!html.contains(r#"id="gallery-modal""#));
        assert!(html.contains("<title>Portfólio</title>"));
    }

    #[test]
    fn config_text_is_escaped() {
        let mut config = sample_config();
        config.hero.as_mut().unwrap().title = "<script>alert('x')</script>".to_string();
        let html = render_page(&compose(&config)).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
