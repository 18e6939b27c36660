//! Loading of the stylesheet and paragraph data from disk.

use std::fs;
use std::path::Path;

use crate::error::{GeneratorError, Result};
use crate::types::Paragraph;

/// Read a UTF-8 text file.
///
/// Used for the stylesheet and the optional reader script, which are
/// inlined into the page without further processing.
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| GeneratorError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Read file");
    Ok(text)
}

/// Parse paragraph records from JSON text.
///
/// `path` is only used for error context.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use konstren_generator::loader::parse_paragraphs;
///
/// let json = r#"[{"_": "preamble", "chapter": "I", "article": "", "lt": "Lietuvių Tauta"}]"#;
/// let paragraphs = parse_paragraphs(json, Path::new("paragraphs.json")).unwrap();
/// assert_eq!(paragraphs[0].ru, "");
/// ```
pub fn parse_paragraphs(json: &str, path: &Path) -> Result<Vec<Paragraph>> {
    let paragraphs: Vec<Paragraph> =
        serde_json::from_str(json).map_err(|source| GeneratorError::ParagraphData {
            path: path.to_path_buf(),
            source,
        })?;
    validate_paragraphs(&paragraphs)?;
    Ok(paragraphs)
}

/// Read and parse the paragraph data file.
pub fn load_paragraphs(path: &Path) -> Result<Vec<Paragraph>> {
    let json = read_text(path)?;
    let paragraphs = parse_paragraphs(&json, path)?;
    tracing::info!(path = %path.display(), paragraphs = paragraphs.len(), "Loaded paragraphs");
    Ok(paragraphs)
}

/// Reject records without primary-language text.
fn validate_paragraphs(paragraphs: &[Paragraph]) -> Result<()> {
    match paragraphs.iter().position(|p| p.lt.is_empty()) {
        Some(index) => Err(GeneratorError::EmptyPrimaryText {
            index,
            chapter: paragraphs[index].chapter.clone(),
            article: paragraphs[index].article.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn parse(json: &str) -> Result<Vec<Paragraph>> {
        parse_paragraphs(json, Path::new("paragraphs.json"))
    }

    #[test]
    fn test_parse_paragraphs() {
        let paragraphs = parse(
            r#"[
                {"chapter": "I", "article": "1", "lt": "Lietuva", "ru": "Литва"},
                {"_": "no translation yet", "chapter": "I", "article": "2", "lt": "Tauta", "ru": ""}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            paragraphs,
            vec![
                Paragraph::new("I", "1", "Lietuva", "Литва"),
                Paragraph::new("I", "2", "Tauta", ""),
            ]
        );
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse("[{").unwrap_err();
        assert!(matches!(err, GeneratorError::ParagraphData { .. }));
        assert!(err.to_string().starts_with("Invalid paragraph data in paragraphs.json"));
    }

    #[test]
    fn test_missing_required_field() {
        let err = parse(r#"[{"chapter": "I", "lt": "A"}]"#).unwrap_err();
        assert!(err.to_string().contains("missing field `article`"), "{err}");
    }

    #[test]
    fn test_empty_primary_text() {
        let err = parse(
            r#"[
                {"chapter": "I", "article": "1", "lt": "A"},
                {"chapter": "I", "article": "2", "lt": "", "ru": "Б"}
            ]"#,
        )
        .unwrap_err();

        match err {
            GeneratorError::EmptyPrimaryText {
                index,
                chapter,
                article,
            } => {
                assert_eq!(index, 1);
                assert_eq!(chapter, "I");
                assert_eq!(article, "2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_paragraphs_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("paragraphs.json");
        fs::write(&path, r#"[{"chapter": "I", "article": "1", "lt": "A", "ru": "А"}]"#).unwrap();

        let paragraphs = load_paragraphs(&path).unwrap();
        assert_eq!(paragraphs, vec![Paragraph::new("I", "1", "A", "А")]);
    }

    #[test]
    fn test_read_missing_file() {
        let path = PathBuf::from("does/not/exist.css");
        let err = read_text(&path).unwrap_err();
        match err {
            GeneratorError::ReadFile { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
