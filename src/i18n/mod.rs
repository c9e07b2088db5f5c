//! Feedback text translation.
//!
//! Scorers write their feedback through a [`Translator`]. The assessor only
//! carries the handle; it never looks at feedback text itself.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::TranslationError;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use tracing::debug;

/// Looks up the translation of a message id.
pub trait Translator: Send + Sync {
    /// Returns the translation of `msgid`, or `msgid` itself when none exists.
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str>;
}

/// Returns every message id unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

/// In-memory message table, typically loaded from a JSON object of
/// `{"msgid": "translation"}` pairs.
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    messages: HashMap<String, String>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, TranslationError> {
        let messages: HashMap<String, String> = serde_json::from_str(json)?;
        debug!(entries = messages.len(), "Loaded message table");
        Ok(Self { messages })
    }

    /// Reads a JSON message table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TranslationError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TranslationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn insert(&mut self, msgid: impl Into<String>, translation: impl Into<String>) {
        self.messages.insert(msgid.into(), translation.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for MessageTable {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        match self.messages.get(msgid) {
            Some(translation) => Cow::Borrowed(translation.as_str()),
            None => Cow::Borrowed(msgid),
        }
    }
}

/// Substitutes positional `{0}`, `{1}`, ... placeholders in `template`.
///
/// Placeholders without a matching argument are kept verbatim.
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg.to_string(), close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(&value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
