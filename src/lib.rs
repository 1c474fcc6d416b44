//! # Reel Folio
//!
//! A static generator for single-page video portfolios. One declarative
//! config document describes the page: a hero banner, a projects section, a
//! social-media section and contact links. Long video lists show a featured
//! prefix on the home page and open a gallery overlay with everything.
//!
//! # Architecture: Build a Tree, Then Render It
//!
//! ```text
//! config.json  →  RootConfig  →  Page (element tree + overlay state)  →  index.html
//!                 (config)       (compose)                               (render)
//! ```
//!
//! Composition never touches markup and rendering never makes decisions.
//! Every interesting rule (which videos are featured, when "see more"
//! appears, what the overlay contains after a trigger) is checked against
//! plain Rust values, without a browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`embed`] | Provider link parsing: share URL or bare ID → embeddable player URL |
//! | [`card`] | One video card: frame or inline "unavailable" placeholder |
//! | [`section`] | Titled card grid with an optional "see more" trigger |
//! | [`overlay`] | Gallery overlay open/close state machine and user triggers |
//! | [`compose`] | Root config → [`compose::Page`], featured truncation, trigger dispatch |
//! | [`render`] | Maud rendering of the page, overlay and gallery templates |
//! | [`generate`] | Loads config, writes `index.html`, copies assets |
//! | [`config`] | Config document types, JSON/TOML loading, defaults |
//! | [`types`] | Shared vocabulary: `VideoReference`, `Orientation`, `SectionKey` |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Failures Stay Local
//!
//! A video link that cannot be embedded is not an error for the page: its
//! card shows a placeholder, a diagnostic is logged, and every other card
//! renders normally. Only a configuration that cannot be loaded at all stops
//! the build, and then the published page is a single error message rather
//! than a half-built portfolio.
//!
//! ## Explicit Overlay State
//!
//! The gallery overlay is an [`overlay::OverlayState`] value owned by the
//! page and mutated only through [`overlay::open`] and [`overlay::close`].
//! The shipped `gallery.js` replays the same lifecycle in the browser,
//! cloning pre-rendered `<template>` grids built by that same `open`.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): markup is
//! checked at compile time and every interpolated config string is escaped,
//! so titles and descriptions cannot inject markup into the page.

pub mod card;
pub mod compose;
pub mod config;
pub mod embed;
pub mod generate;
pub mod output;
pub mod overlay;
pub mod render;
pub mod section;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
