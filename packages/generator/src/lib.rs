//! Konstren generator - Render the bilingual Lithuanian constitution as a
//! static HTML page.
//!
//! Paragraph records (chapter, article, Lithuanian text, optional Russian
//! translation) are grouped into cards and serialized into a single HTML
//! document with an inlined stylesheet and per-line translation toggles.
//!
//! # Example
//!
//! ```
//! use konstren_generator::config::PageConfig;
//! use konstren_generator::generate_html;
//! use konstren_generator::types::Paragraph;
//!
//! let paragraphs = vec![
//!     Paragraph::new("I", "1", "A", ""),
//!     Paragraph::new("I", "2", "B", "Б"),
//! ];
//! let html = generate_html(&PageConfig::default(), "body {}", &paragraphs, None);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Page settings, constants and the references table
//! - [`types`]: Core data types (Paragraph, Card, ViewModel)
//! - [`error`]: Error types and Result alias
//! - [`loader`]: Reading the stylesheet and paragraph JSON
//! - [`grouping`]: First-seen-order grouping by chapter and article
//! - [`view_model`]: Card construction
//! - [`html`]: Tag builders, card views and page assembly
//! - [`generator`]: Main generator service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod grouping;
pub mod html;
pub mod loader;
pub mod types;
pub mod view_model;

// Re-export main functions
pub use generator::{generate_html, generate_page, GenerateOptions};

// Re-export commonly used items
pub use config::PageConfig;
pub use error::{GeneratorError, Result};
pub use types::{Card, CardType, Paragraph, ViewModel};
