//! Rendering of individual cards.

use super::tags::{a, div, h1, h2, h3, input, label, p, span, Attrs, InputAttrs, LabelAttrs};
use crate::config::{
    Link, CREDIT_LINKS, PRIMARY_LANG, REFERENCES_HEADING, REFERENCE_LINKS, SECONDARY_LANG,
};
use crate::types::{Card, CardType, Line, LineView};

/// Id of the checkbox toggling the translation of one line.
///
/// # Examples
/// ```
/// use konstren_generator::html::translate_toggle_id;
///
/// assert_eq!(translate_toggle_id(2, 7), "tr_2_7");
/// ```
#[must_use]
pub fn translate_toggle_id(line_idx: usize, card_idx: usize) -> String {
    format!("tr_{line_idx}_{card_idx}")
}

/// Render a card at its position on the page.
pub fn card_view(card_idx: usize, card: &Card) -> String {
    match card.card_type {
        CardType::Last => references_card(card_idx, REFERENCE_LINKS, CREDIT_LINKS),
        CardType::Title => div(
            &Attrs::new()
                .with_id(card_idx.to_string())
                .with_class("card title-card"),
            &[h1(&Attrs::new(), &card.chapter), article_text(card_idx, &card.lines)],
        ),
        CardType::Article => div(
            &Attrs::new().with_id(card_idx.to_string()).with_class("card"),
            &[
                h2(&Attrs::new().with_class("chapter-title"), &card.chapter),
                h3(&Attrs::new().with_class("article-number"), &card.article),
                article_text(card_idx, &card.lines),
            ],
        ),
    }
}

fn article_text(card_idx: usize, lines: &[Line]) -> String {
    let paragraphs: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(line_idx, line)| line_view(line_idx, card_idx, line))
        .collect();
    div(&Attrs::new().with_class("article-text"), &paragraphs)
}

/// Render one line as a paragraph, with a translation toggle when available.
fn line_view(line_idx: usize, card_idx: usize, line: &Line) -> String {
    match line.view() {
        LineView::Bare(lt) => p(&[lt.to_string()]),
        LineView::Translatable { lt, ru } => {
            let toggle_id = translate_toggle_id(line_idx, card_idx);
            p(&[
                input(&InputAttrs::checkbox(
                    Attrs::new()
                        .with_class("translate-toggle")
                        .with_id(toggle_id.clone()),
                )),
                label(
                    &LabelAttrs::new(Attrs::new().with_class("translatable")).with_for(toggle_id),
                    &[
                        span(&Attrs::new().with_lang(PRIMARY_LANG), &[lt.to_string()]),
                        span(&Attrs::new().with_lang(SECONDARY_LANG), &[ru.to_string()]),
                    ],
                ),
            ])
        }
    }
}

fn link_paragraphs(links: &[Link]) -> Vec<String> {
    links
        .iter()
        .map(|link| p(&[a(&Attrs::new(), link.href, link.label)]))
        .collect()
}

/// The closing card listing the official sources and project credits.
pub fn references_card(card_idx: usize, references: &[Link], credits: &[Link]) -> String {
    div(
        &Attrs::new()
            .with_id(card_idx.to_string())
            .with_class("card title-card references-card"),
        &[
            div(
                &Attrs::new().with_class("references-section"),
                &[
                    h2(&Attrs::new().with_class("references-title"), REFERENCES_HEADING),
                    div(
                        &Attrs::new().with_class("references-list"),
                        &link_paragraphs(references),
                    ),
                ],
            ),
            div(
                &Attrs::new().with_class("credits-section"),
                &link_paragraphs(credits),
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(card_type: CardType, lines: &[(&str, &str)]) -> Card {
        Card {
            card_type,
            chapter: "II SKIRSNIS".to_string(),
            article: "5 straipsnis".to_string(),
            lines: lines
                .iter()
                .map(|(lt, ru)| Line {
                    lt: lt.to_string(),
                    ru: ru.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_bare_line_has_no_toggle() {
        let html = card_view(3, &card(CardType::Article, &[("Be vertimo", "")]));
        assert!(html.contains("<p>\nBe vertimo\n</p>"));
        assert!(!html.contains("<input"));
        assert!(!html.contains("<label"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn test_translatable_line() {
        let html = line_view(1, 4, &Line {
            lt: "B".to_string(),
            ru: "Б".to_string(),
        });
        assert_eq!(
            html,
            "<p>\n\
             <input id=\"tr_1_4\" class=\"translate-toggle\" type=\"checkbox\" />\n\
             <label class=\"translatable\" for=\"tr_1_4\">\n\
             <span lang=\"lt\">\nB\n</span>\n\
             <span lang=\"ru\">\nБ\n</span>\n\
             </label>\n\
             </p>"
        );
    }

    #[test]
    fn test_article_card() {
        let html = card_view(2, &card(CardType::Article, &[("A", ""), ("B", "Б")]));
        assert_eq!(
            html,
            "<div id=\"2\" class=\"card\">\n\
             <h2 class=\"chapter-title\">II SKIRSNIS</h2>\n\
             <h3 class=\"article-number\">5 straipsnis</h3>\n\
             <div class=\"article-text\">\n\
             <p>\nA\n</p>\n\
             <p>\n\
             <input id=\"tr_1_2\" class=\"translate-toggle\" type=\"checkbox\" />\n\
             <label class=\"translatable\" for=\"tr_1_2\">\n\
             <span lang=\"lt\">\nB\n</span>\n\
             <span lang=\"ru\">\nБ\n</span>\n\
             </label>\n\
             </p>\n\
             </div>\n\
             </div>"
        );
    }

    #[test]
    fn test_title_card_has_h1_and_no_article_heading() {
        let html = card_view(0, &card(CardType::Title, &[("Lietuvos Respublika", "")]));
        assert!(html.starts_with("<div id=\"0\" class=\"card title-card\">\n<h1>II SKIRSNIS</h1>\n"));
        assert!(!html.contains("<h3"));
        assert!(!html.contains("5 straipsnis"));
    }

    #[test]
    fn test_last_card_is_static() {
        let html = card_view(9, &Card::last());
        assert!(html.starts_with("<div id=\"9\" class=\"card title-card references-card\">"));
        assert!(html.contains("<h2 class=\"references-title\">Šaltiniai</h2>"));
        for link in REFERENCE_LINKS.iter().chain(CREDIT_LINKS) {
            let anchor = format!("<a href=\"{}\">{}</a>", link.href, link.label);
            assert!(html.contains(&anchor), "missing {anchor}");
        }
        assert!(!html.contains("<input"));
    }

    #[test]
    fn test_references_card_from_custom_table() {
        let references = [Link {
            label: "Seimas",
            href: "https://www.lrs.lt",
        }];
        let html = references_card(1, &references, &[]);
        assert_eq!(
            html,
            "<div id=\"1\" class=\"card title-card references-card\">\n\
             <div class=\"references-section\">\n\
             <h2 class=\"references-title\">Šaltiniai</h2>\n\
             <div class=\"references-list\">\n\
             <p>\n<a href=\"https://www.lrs.lt\">Seimas</a>\n</p>\n\
             </div>\n\
             </div>\n\
             <div class=\"credits-section\">\n\n</div>\n\
             </div>"
        );
    }
}
