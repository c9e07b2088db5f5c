//! Content snapshot handed to the assessor.
//!
//! A [`Paper`] is an immutable bundle of the body text and the metadata an
//! editor attaches to it. Every attribute is optional on input and normalizes
//! to an empty string (or `0` for the title width) when absent.

#[cfg(test)]
mod tests;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional attributes accepted by [`Paper::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaperAttributes {
    /// Focus keyphrase.
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub keyword: Option<String>,
    /// SEO title.
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub title: Option<String>,
    /// Permalink or slug.
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub url: Option<String>,
    /// Meta description.
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub description: Option<String>,
    /// Rendered title width in pixels, as measured by the editor.
    pub title_width: Option<u32>,
}

impl PaperAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn title_width(mut self, width: u32) -> Self {
        self.title_width = Some(width);
        self
    }
}

/// Accepts a string, number or bool and keeps its string form; `null` is
/// treated as absent.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::invalid_type(
            de::Unexpected::Other(value_kind(&other)),
            &"a string, number or bool",
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        _ => "scalar",
    }
}

/// Wire shape of a paper: body text plus flattened attributes.
#[derive(Debug, Default, Deserialize)]
struct PaperInput {
    #[serde(default, deserialize_with = "scalar_as_string")]
    text: Option<String>,
    #[serde(flatten)]
    attributes: PaperAttributes,
}

impl From<PaperInput> for Paper {
    fn from(input: PaperInput) -> Self {
        Paper::new(input.text.unwrap_or_default(), input.attributes)
    }
}

/// Immutable content snapshot.
///
/// Derived facts (word counts, headings, function words) are computed on
/// demand by [`crate::research`]; nothing is cached here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaperInput")]
pub struct Paper {
    text: String,
    keyword: String,
    title: String,
    url: String,
    description: String,
    title_width: u32,
}

impl Paper {
    pub fn new(text: impl Into<String>, attributes: PaperAttributes) -> Self {
        Self {
            text: text.into(),
            keyword: attributes.keyword.unwrap_or_default(),
            title: attributes.title.unwrap_or_default(),
            url: attributes.url.unwrap_or_default(),
            description: attributes.description.unwrap_or_default(),
            title_width: attributes.title_width.unwrap_or(0),
        }
    }

    /// Paper with body text only.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(text, PaperAttributes::default())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn title_width(&self) -> u32 {
        self.title_width
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn has_keyword(&self) -> bool {
        !self.keyword.is_empty()
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
