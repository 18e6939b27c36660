//! Primitive HTML tag builders.
//!
//! Each builder renders one element: the opening tag, the children joined by
//! newlines, and the closing tag. Optional attributes appear only when set.
//! Text and attribute values are inserted verbatim.

const NEW_LINE: &str = "\n";

/// Attributes shared by every element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    pub id: Option<String>,
    pub class: Option<String>,
    pub lang: Option<String>,
}

impl Attrs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// Supported `<input>` types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Checkbox,
}

impl InputType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
        }
    }
}

/// Attributes of an `<input>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputAttrs {
    pub base: Attrs,
    pub input_type: InputType,
    pub value: Option<String>,
}

impl InputAttrs {
    /// A checkbox with the given base attributes.
    #[must_use]
    pub fn checkbox(base: Attrs) -> Self {
        Self {
            base,
            input_type: InputType::Checkbox,
            value: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Attributes of a `<label>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelAttrs {
    pub base: Attrs,
    /// Id of the control the label is bound to.
    pub html_for: Option<String>,
}

impl LabelAttrs {
    #[must_use]
    pub fn new(base: Attrs) -> Self {
        Self {
            base,
            html_for: None,
        }
    }

    #[must_use]
    pub fn with_for(mut self, target: impl Into<String>) -> Self {
        self.html_for = Some(target.into());
        self
    }
}

/// Render ` name="value"` when the value is present.
fn attr(name: &str, value: Option<&str>) -> String {
    value.map_or_else(String::new, |v| format!(" {name}=\"{v}\""))
}

fn id_and_class(attrs: &Attrs) -> String {
    format!(
        "{}{}",
        attr("id", attrs.id.as_deref()),
        attr("class", attrs.class.as_deref())
    )
}

/// Document root with doctype.
pub fn html(lang: &str, children: &[String]) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n{}\n</html>",
        children.join(NEW_LINE)
    )
}

/// Document head with charset and viewport meta tags.
pub fn head(children: &[String]) -> String {
    format!(
        "<head>\n<meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, viewport-fit=cover\" />\n\
         {}\n</head>",
        children.join(NEW_LINE)
    )
}

pub fn title(text: &str) -> String {
    format!("<title>{text}</title>")
}

pub fn body(children: &[String]) -> String {
    format!("<body>\n{}\n</body>", children.join(NEW_LINE))
}

pub fn p(children: &[String]) -> String {
    format!("<p>\n{}\n</p>", children.join(NEW_LINE))
}

fn heading(level: u8, attrs: &Attrs, text: &str) -> String {
    format!("<h{level}{}>{text}</h{level}>", id_and_class(attrs))
}

pub fn h1(attrs: &Attrs, text: &str) -> String {
    heading(1, attrs, text)
}

pub fn h2(attrs: &Attrs, text: &str) -> String {
    heading(2, attrs, text)
}

pub fn h3(attrs: &Attrs, text: &str) -> String {
    heading(3, attrs, text)
}

pub fn div(attrs: &Attrs, children: &[String]) -> String {
    format!(
        "<div{}>\n{}\n</div>",
        id_and_class(attrs),
        children.join(NEW_LINE)
    )
}

/// Inline span; the only element besides the root that carries `lang`.
pub fn span(attrs: &Attrs, children: &[String]) -> String {
    format!(
        "<span{}{}>\n{}\n</span>",
        id_and_class(attrs),
        attr("lang", attrs.lang.as_deref()),
        children.join(NEW_LINE)
    )
}

pub fn style(stylesheet: &str) -> String {
    format!("<style>\n{stylesheet}\n</style>")
}

pub fn script(source: &str) -> String {
    format!("<script>\n{source}\n</script>")
}

/// Self-closing input; `type` is always present.
pub fn input(attrs: &InputAttrs) -> String {
    format!(
        "<input{}{}{} />",
        id_and_class(&attrs.base),
        attr("type", Some(attrs.input_type.as_str())),
        attr("value", attrs.value.as_deref())
    )
}

pub fn label(attrs: &LabelAttrs, children: &[String]) -> String {
    format!(
        "<label{}{}>\n{}\n</label>",
        id_and_class(&attrs.base),
        attr("for", attrs.html_for.as_deref()),
        children.join(NEW_LINE)
    )
}

pub fn a(attrs: &Attrs, href: &str, text: &str) -> String {
    format!(
        "<a href=\"{href}\"{}>{text}</a>",
        attr("class", attrs.class.as_deref())
    )
}
