//! Configuration constants and validation functions for the generator.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{GeneratorError, Result};

/// Default path of the stylesheet inlined into the page.
pub const DEFAULT_STYLESHEET_PATH: &str = "stylesheet.css";

/// Default path of the paragraph data.
pub const DEFAULT_PARAGRAPHS_PATH: &str = "source/paragraphs.json";

/// Default page title.
pub const DEFAULT_TITLE: &str = "Lietuvos Respublikos Konstitucija";

/// Language code of the original constitution text.
pub const PRIMARY_LANG: &str = "lt";

/// Language code of the translation revealed by the toggles.
pub const SECONDARY_LANG: &str = "ru";

/// Heading of the references section on the last card.
pub const REFERENCES_HEADING: &str = "Šaltiniai";

/// A hyperlink shown on the references card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Visible link text.
    pub label: &'static str,

    /// Link target.
    pub href: &'static str,
}

/// Official sources of the constitution text, in display order.
pub const REFERENCE_LINKS: &[Link] = &[
    Link {
        label: "Lietuvos Respublikos Seimas (LT)",
        href: "https://www.lrs.lt/home/Konstitucija/Konstitucija.htm",
    },
    Link {
        label: "Lietuvos Respublikos Seimas (EN)",
        href: "https://www.lrs.lt/home/Konstitucija/Constitution.htm",
    },
    Link {
        label: "Lietuvos Respublikos Seimas (RU)",
        href: "https://www.lrs.lt/home/Konstitucija/Konstitucija_RU.htm",
    },
    Link {
        label: "Teisės Aktų Registras (LT)",
        href: "https://www.e-tar.lt/portal/en/legalAct/TAR.47BB952431DA/asr",
    },
];

/// Project credits shown below the references.
pub const CREDIT_LINKS: &[Link] = &[Link {
    label: "github.com/grinchik/konstren.lt",
    href: "https://github.com/grinchik/konstren.lt",
}];

/// Language tag pattern: a 2-3 letter primary subtag with optional subtags.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LANG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]{2,3}(-[a-zA-Z0-9]{2,8})*$").expect("valid regex"));

/// Page-level settings: the document title and its language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Text of the `<title>` element.
    pub title: String,

    /// Value of the document's `lang` attribute.
    pub lang: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            lang: PRIMARY_LANG.to_string(),
        }
    }
}

impl PageConfig {
    /// Create a validated page configuration.
    ///
    /// # Examples
    /// ```
    /// use konstren_generator::config::PageConfig;
    ///
    /// assert!(PageConfig::new("Konstitucija", "lt").is_ok());
    /// assert!(PageConfig::new("Konstitucija", "not a tag").is_err());
    /// assert!(PageConfig::new("   ", "lt").is_err());
    /// ```
    pub fn new(title: impl Into<String>, lang: impl Into<String>) -> Result<Self> {
        let config = Self {
            title: title.into(),
            lang: lang.into(),
        };
        validate_title(&config.title)?;
        validate_lang(&config.lang)?;
        Ok(config)
    }
}

/// Validate a document language code.
///
/// # Examples
/// ```
/// use konstren_generator::config::validate_lang;
///
/// assert!(validate_lang("lt").is_ok());
/// assert!(validate_lang("en-GB").is_ok());
/// assert!(validate_lang("").is_err());
/// ```
pub fn validate_lang(lang: &str) -> Result<()> {
    if LANG_PATTERN.is_match(lang) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidLang(lang.to_string()))
    }
}

/// Validate that the page title has visible text.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        Err(GeneratorError::EmptyTitle)
    } else {
        Ok(())
    }
}
