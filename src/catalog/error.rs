//! Catalog construction and parsing errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two descriptors share an identifier; results would be ambiguous.
    #[error("duplicate assessment identifier '{identifier}'")]
    DuplicateIdentifier { identifier: &'static str },

    /// Catalog name given to a strict parser was not recognized.
    ///
    /// The environment switch never produces this; it falls back to the
    /// standard catalog instead.
    #[error("unknown catalog '{value}': expected standard, recalibration, enabled or disabled")]
    UnknownCatalog { value: String },
}
