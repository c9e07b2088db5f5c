//! Taxonomy assessor library crate (used by the CLI and integration tests).
//!
//! Decides which SEO checks apply to a piece of taxonomy content, runs them,
//! and reports the scored ones in catalog order.
//!
//! # Public API Surface
//!
//! ## Engine
//! - [`Assessor`] - Runs a catalog against a [`Paper`]
//! - [`Outcome`], [`Evaluation`] - Per-assessment bookkeeping
//! - [`Catalog`], [`CatalogVariant`] - Standard and recalibration catalogs
//!
//! ## Inputs
//! - [`Paper`], [`PaperAttributes`] - Content snapshot
//! - [`Config`], [`ConfigError`] - Catalog selection from `ASSESSOR_*` variables
//!
//! ## Assessments & Research
//! - [`Assessment`], [`AssessmentResult`], [`AssessmentError`] - Descriptors and scorer output
//! - [`research`] - English text, keyphrase and slug research
//! - [`Translator`], [`IdentityTranslator`], [`MessageTable`] - Feedback translation

pub mod assessments;
pub mod assessor;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod i18n;
pub mod paper;
pub mod research;

pub use assessments::{Assessment, AssessmentError, AssessmentResult, ids};
pub use assessor::{Assessor, Evaluation, Outcome};
pub use catalog::{Catalog, CatalogError, CatalogVariant};
pub use config::{Config, ConfigError};
pub use i18n::{IdentityTranslator, MessageTable, TranslationError, Translator, format_message};
pub use paper::{Paper, PaperAttributes};
