//! Ordered assessment catalogs.
//!
//! Two built-in variants exist. The recalibration catalog drops the slug
//! length and slug stop-word checks and adds the single-H1 check; every other
//! descriptor is shared unchanged. Declaration order is the order in which
//! results are reported and is never re-sorted.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::CatalogError;

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::assessments::Assessment;
use crate::assessments::heading::SINGLE_H1;
use crate::assessments::keyword::{
    FUNCTION_WORDS_IN_KEYPHRASE, INTRODUCTION_KEYWORD, KEYPHRASE_LENGTH, KEYWORD_DENSITY,
    META_DESCRIPTION_KEYWORD, TITLE_KEYWORD, URL_KEYWORD,
};
use crate::assessments::length::{META_DESCRIPTION_LENGTH, TAXONOMY_TEXT_LENGTH, TITLE_WIDTH};
use crate::assessments::slug::{URL_LENGTH, URL_STOP_WORDS};

static STANDARD: &[Assessment] = &[
    INTRODUCTION_KEYWORD,
    KEYPHRASE_LENGTH,
    KEYWORD_DENSITY,
    META_DESCRIPTION_KEYWORD,
    META_DESCRIPTION_LENGTH,
    TAXONOMY_TEXT_LENGTH,
    TITLE_KEYWORD,
    TITLE_WIDTH,
    URL_KEYWORD,
    URL_LENGTH,
    URL_STOP_WORDS,
    FUNCTION_WORDS_IN_KEYPHRASE,
];

static RECALIBRATION: &[Assessment] = &[
    INTRODUCTION_KEYWORD,
    KEYPHRASE_LENGTH,
    KEYWORD_DENSITY,
    META_DESCRIPTION_KEYWORD,
    META_DESCRIPTION_LENGTH,
    TAXONOMY_TEXT_LENGTH,
    TITLE_KEYWORD,
    TITLE_WIDTH,
    URL_KEYWORD,
    FUNCTION_WORDS_IN_KEYPHRASE,
    SINGLE_H1,
];

/// Which built-in catalog an assessor runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CatalogVariant {
    #[default]
    Standard,
    Recalibration,
}

impl CatalogVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogVariant::Standard => "standard",
            CatalogVariant::Recalibration => "recalibration",
        }
    }
}

impl fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse, accepting the catalog names and the `enabled`/`disabled`
/// recalibration switch values.
impl FromStr for CatalogVariant {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "standard" | "disabled" => Ok(CatalogVariant::Standard),
            "recalibration" | "enabled" => Ok(CatalogVariant::Recalibration),
            other => Err(CatalogError::UnknownCatalog {
                value: other.to_string(),
            }),
        }
    }
}

/// An ordered, identifier-unique list of assessments.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: Cow<'static, str>,
    assessments: Cow<'static, [Assessment]>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self::for_variant(CatalogVariant::Standard)
    }

    pub fn recalibration() -> Self {
        Self::for_variant(CatalogVariant::Recalibration)
    }

    pub fn for_variant(variant: CatalogVariant) -> Self {
        let assessments = match variant {
            CatalogVariant::Standard => STANDARD,
            CatalogVariant::Recalibration => RECALIBRATION,
        };
        Self {
            name: Cow::Borrowed(variant.as_str()),
            assessments: Cow::Borrowed(assessments),
        }
    }

    /// Builds a custom catalog, keeping the given order.
    pub fn from_assessments(
        name: impl Into<String>,
        assessments: Vec<Assessment>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(assessments.len());
        for assessment in &assessments {
            if !seen.insert(assessment.identifier) {
                return Err(CatalogError::DuplicateIdentifier {
                    identifier: assessment.identifier,
                });
            }
        }

        Ok(Self {
            name: Cow::Owned(name.into()),
            assessments: Cow::Owned(assessments),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    pub fn identifiers(&self) -> Vec<&'static str> {
        self.assessments.iter().map(|a| a.identifier).collect()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.assessments.iter().any(|a| a.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
