//! VitalSense client application library.
//!
//! The library half of the VitalSense marketing/demo app: paged content
//! loading from the hosted CMS (`content`) and the simulated chat
//! assistant (`assistant`). The Dioxus UI on top is feature-gated so the
//! core builds and tests on any host with default features.

pub mod assistant;
pub mod content;
pub mod markdown;
pub mod theme;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;
