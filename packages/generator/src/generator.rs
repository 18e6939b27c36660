//! Main generator service that ties all components together.

use std::path::{Path, PathBuf};

use crate::config::{PageConfig, DEFAULT_PARAGRAPHS_PATH, DEFAULT_STYLESHEET_PATH};
use crate::error::Result;
use crate::grouping::{group_by_article, group_by_chapter};
use crate::html::render_page;
use crate::loader::{load_paragraphs, read_text};
use crate::types::Paragraph;
use crate::view_model::build_view_model;

/// Inputs of one generator run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Stylesheet inlined into the page.
    pub stylesheet: PathBuf,

    /// Paragraph data.
    pub paragraphs: PathBuf,

    /// Optional script inlined at the end of the body.
    pub script: Option<PathBuf>,

    /// Page title and language.
    pub config: PageConfig,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            stylesheet: PathBuf::from(DEFAULT_STYLESHEET_PATH),
            paragraphs: PathBuf::from(DEFAULT_PARAGRAPHS_PATH),
            script: None,
            config: PageConfig::default(),
        }
    }
}

/// Counts describing a paragraph set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub chapters: usize,
    pub articles: usize,
    pub lines: usize,
    /// Lines without a secondary-language text.
    pub untranslated: usize,
}

impl Summary {
    /// Number of cards the page will contain, including the references card.
    #[must_use]
    pub fn cards(&self) -> usize {
        self.articles + 1
    }
}

/// A rendered page together with a summary of its content.
#[derive(Debug, Clone)]
pub struct Page {
    pub html: String,
    pub summary: Summary,
}

/// Count chapters, distinct (chapter, article) pairs, and lines.
#[must_use]
pub fn summarize(paragraphs: &[Paragraph]) -> Summary {
    let chapters = group_by_chapter(paragraphs);
    let articles = chapters
        .values()
        .map(|group| group_by_article(group.iter().copied()).len())
        .sum();

    Summary {
        chapters: chapters.len(),
        articles,
        lines: paragraphs.len(),
        untranslated: paragraphs.iter().filter(|p| p.ru.is_empty()).count(),
    }
}

/// Render paragraphs into an HTML document.
///
/// This is the pure core of the generator: identical inputs always produce
/// byte-identical output.
///
/// # Examples
/// ```
/// use konstren_generator::config::PageConfig;
/// use konstren_generator::generate_html;
/// use konstren_generator::types::Paragraph;
///
/// let paragraphs = vec![Paragraph::new("I", "1", "Lietuva", "Литва")];
/// let html = generate_html(&PageConfig::default(), "", &paragraphs, None);
/// assert!(html.contains("id=\"tr_0_0\""));
/// ```
#[must_use]
pub fn generate_html(
    config: &PageConfig,
    stylesheet: &str,
    paragraphs: &[Paragraph],
    script: Option<&str>,
) -> String {
    let mut view_model = build_view_model(config, stylesheet, paragraphs);
    if let Some(source) = script {
        view_model = view_model.with_script(source);
    }
    render_page(&view_model)
}

/// Load the inputs named in `options` and render the page.
pub fn generate_page(options: &GenerateOptions) -> Result<Page> {
    let stylesheet = read_text(&options.stylesheet)?;
    let paragraphs = load_paragraphs(&options.paragraphs)?;
    let script = options
        .script
        .as_deref()
        .map(read_text)
        .transpose()?;

    let summary = summarize(&paragraphs);
    tracing::info!(
        chapters = summary.chapters,
        articles = summary.articles,
        lines = summary.lines,
        "Rendering page"
    );

    let html = generate_html(&options.config, &stylesheet, &paragraphs, script.as_deref());
    Ok(Page { html, summary })
}

/// Load and validate paragraph data without rendering.
pub fn check_paragraphs(path: &Path) -> Result<Summary> {
    let paragraphs = load_paragraphs(path)?;
    Ok(summarize(&paragraphs))
}
