//! Core data types for the generator.
//!
//! A [`Paragraph`] is one line of the constitution as stored in the source
//! JSON. The view model turns them into [`Card`]s, one per article, which the
//! renderer serializes to HTML.

use serde::de::IgnoredAny;
use serde::Deserialize;

/// Chapter heading, e.g. "I SKIRSNIS LIETUVOS VALSTYBĖ".
pub type Chapter = String;

/// Article identifier, e.g. "1 straipsnis".
pub type Article = String;

/// One line of source text with its optional translation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawParagraph")]
pub struct Paragraph {
    /// Chapter the line belongs to.
    pub chapter: Chapter,

    /// Article the line belongs to.
    pub article: Article,

    /// Primary-language (Lithuanian) text.
    pub lt: String,

    /// Secondary-language (Russian) text. Empty when no translation exists.
    pub ru: String,
}

/// Record shape of the paragraph JSON.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParagraph {
    chapter: Chapter,
    article: Article,
    lt: String,
    #[serde(default)]
    ru: String,
    /// Free-form editor annotation, dropped on load.
    #[serde(rename = "_", default)]
    _annotation: Option<IgnoredAny>,
}

impl From<RawParagraph> for Paragraph {
    fn from(raw: RawParagraph) -> Self {
        Self {
            chapter: raw.chapter,
            article: raw.article,
            lt: raw.lt,
            ru: raw.ru,
        }
    }
}

impl Paragraph {
    /// Create a new paragraph.
    #[must_use]
    pub fn new(
        chapter: impl Into<String>,
        article: impl Into<String>,
        lt: impl Into<String>,
        ru: impl Into<String>,
    ) -> Self {
        Self {
            chapter: chapter.into(),
            article: article.into(),
            lt: lt.into(),
            ru: ru.into(),
        }
    }

    /// The text pair rendered for this paragraph.
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line {
            lt: self.lt.clone(),
            ru: self.ru.clone(),
        }
    }
}

/// A primary/secondary text pair inside a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub lt: String,
    pub ru: String,
}

/// How a line is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineView<'a> {
    /// No translation: the primary text is shown as-is.
    Bare(&'a str),

    /// Primary text with a toggle revealing the translation.
    Translatable { lt: &'a str, ru: &'a str },
}

impl Line {
    /// Classify the line by whether it carries a translation.
    #[must_use]
    pub fn view(&self) -> LineView<'_> {
        if self.ru.is_empty() {
            LineView::Bare(&self.lt)
        } else {
            LineView::Translatable {
                lt: &self.lt,
                ru: &self.ru,
            }
        }
    }
}

/// Kind of card on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    /// Card from the first chapter (the constitution's title block).
    Title,

    /// Regular article card.
    Article,

    /// Trailing references and credits card.
    Last,
}

impl CardType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Article => "ARTICLE",
            Self::Last => "LAST",
        }
    }
}

/// One visual block of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub card_type: CardType,
    pub chapter: Chapter,
    pub article: Article,
    pub lines: Vec<Line>,
}

impl Card {
    /// The references card closing every page.
    #[must_use]
    pub fn last() -> Self {
        Self {
            card_type: CardType::Last,
            chapter: String::new(),
            article: String::new(),
            lines: Vec::new(),
        }
    }
}

/// Everything needed to render the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// CSS inlined into the `<style>` block.
    pub stylesheet: String,

    /// Page title.
    pub title: String,

    /// Document language code.
    pub lang: String,

    /// Cards in display order.
    pub cards: Vec<Card>,

    /// Optional JavaScript inlined at the end of the body.
    pub script: Option<String>,
}

impl ViewModel {
    /// Attach a script to be inlined at the end of the body.
    #[must_use]
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }
}
