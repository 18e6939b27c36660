//! Construction of the page view model from grouped paragraphs.

use crate::config::PageConfig;
use crate::grouping::{group_by_article, group_by_chapter};
use crate::types::{Card, CardType, Paragraph, ViewModel};

/// Build the view model for a page.
///
/// Cards follow the first-seen order of chapters and, within a chapter, of
/// articles. Every card of the first chapter is a [`CardType::Title`] card;
/// the rest are [`CardType::Article`] cards. A single [`CardType::Last`] card
/// always closes the sequence.
///
/// # Examples
/// ```
/// use konstren_generator::config::PageConfig;
/// use konstren_generator::types::{CardType, Paragraph};
/// use konstren_generator::view_model::build_view_model;
///
/// let paragraphs = vec![
///     Paragraph::new("I", "1", "A", ""),
///     Paragraph::new("II", "2", "B", "Б"),
/// ];
/// let model = build_view_model(&PageConfig::default(), "", &paragraphs);
/// let types: Vec<CardType> = model.cards.iter().map(|c| c.card_type).collect();
/// assert_eq!(types, vec![CardType::Title, CardType::Article, CardType::Last]);
/// ```
pub fn build_view_model(
    config: &PageConfig,
    stylesheet: &str,
    paragraphs: &[Paragraph],
) -> ViewModel {
    let mut cards = Vec::new();

    let chapters = group_by_chapter(paragraphs);

    for (index, (chapter, chapter_paragraphs)) in chapters.into_iter().enumerate() {
        // Keyed on chapter position: all articles of the first chapter are title cards.
        let card_type = if index == 0 {
            CardType::Title
        } else {
            CardType::Article
        };

        for (article, article_paragraphs) in group_by_article(chapter_paragraphs) {
            cards.push(Card {
                card_type,
                chapter: chapter.clone(),
                article: article.clone(),
                lines: article_paragraphs.iter().map(|p| p.to_line()).collect(),
            });
        }
    }

    cards.push(Card::last());

    tracing::debug!(cards = cards.len(), "Built view model");

    ViewModel {
        stylesheet: stylesheet.to_string(),
        title: config.title.clone(),
        lang: config.lang.clone(),
        cards,
        script: None,
    }
}
