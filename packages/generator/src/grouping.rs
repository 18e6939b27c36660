//! Grouping of paragraphs by chapter and article.
//!
//! Groups iterate in the order their keys were first encountered, and
//! paragraphs keep their source order inside each group.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::types::{Article, Chapter, Paragraph};

/// Paragraphs grouped under a key, in first-seen key order.
pub type Grouped<'a, K> = IndexMap<K, Vec<&'a Paragraph>>;

/// Group items by a key, preserving first-seen key order.
pub fn group_by_key<'a, K, F>(
    paragraphs: impl IntoIterator<Item = &'a Paragraph>,
    key: F,
) -> Grouped<'a, K>
where
    K: Hash + Eq,
    F: Fn(&'a Paragraph) -> K,
{
    let mut groups: Grouped<'a, K> = IndexMap::new();
    for paragraph in paragraphs {
        groups.entry(key(paragraph)).or_default().push(paragraph);
    }
    groups
}

/// Group paragraphs by chapter.
pub fn group_by_chapter<'a>(
    paragraphs: impl IntoIterator<Item = &'a Paragraph>,
) -> Grouped<'a, &'a Chapter> {
    group_by_key(paragraphs, |p| &p.chapter)
}

/// Group paragraphs by article.
pub fn group_by_article<'a>(
    paragraphs: impl IntoIterator<Item = &'a Paragraph>,
) -> Grouped<'a, &'a Article> {
    group_by_key(paragraphs, |p| &p.article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paragraphs() -> Vec<Paragraph> {
        vec![
            Paragraph::new("II", "5", "a", ""),
            Paragraph::new("I", "1", "b", ""),
            Paragraph::new("II", "3", "c", ""),
            Paragraph::new("II", "5", "d", ""),
            Paragraph::new("I", "1", "e", ""),
        ]
    }

    fn summary(grouped: &Grouped<'_, &String>) -> Vec<(String, Vec<String>)> {
        grouped
            .iter()
            .map(|(key, group)| {
                let texts = group.iter().map(|p| p.lt.clone()).collect();
                (key.to_string(), texts)
            })
            .collect()
    }

    fn owned(expected: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        expected
            .iter()
            .map(|(key, texts)| {
                (
                    key.to_string(),
                    texts.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_group_by_chapter_first_seen_order() {
        let paragraphs = paragraphs();
        let grouped = group_by_chapter(&paragraphs);

        assert_eq!(
            summary(&grouped),
            owned(&[("II", &["a", "c", "d"]), ("I", &["b", "e"])])
        );
    }

    #[test]
    fn test_group_by_article_within_chapter() {
        let paragraphs = paragraphs();
        let chapters = group_by_chapter(&paragraphs);
        let (_, first_chapter) = chapters.first().unwrap();
        let articles = group_by_article(first_chapter.iter().copied());

        assert_eq!(
            summary(&articles),
            owned(&[("5", &["a", "d"]), ("3", &["c"])])
        );
    }

    #[test]
    fn test_grouping_drops_nothing() {
        let paragraphs = paragraphs();
        let grouped = group_by_chapter(&paragraphs);
        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, paragraphs.len());
    }

    #[test]
    fn test_group_by_custom_key() {
        let paragraphs = paragraphs();
        let grouped = group_by_key(&paragraphs, |p| (p.chapter.as_str(), p.article.as_str()));
        let keys: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(keys, vec![("II", "5"), ("I", "1"), ("II", "3")]);
    }

    #[test]
    fn test_group_empty() {
        let paragraphs: Vec<Paragraph> = Vec::new();
        let grouped = group_by_chapter(&paragraphs);
        assert!(grouped.is_empty());
    }
}
