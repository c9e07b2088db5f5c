//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `ASSESSOR_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::CatalogVariant;
use crate::i18n::{IdentityTranslator, MessageTable, TranslationError, Translator};

/// Value of `ASSESSOR_RECALIBRATION` that selects the recalibration catalog.
pub const RECALIBRATION_ENABLED: &str = "enabled";
/// Value of `ASSESSOR_RECALIBRATION` that selects the standard catalog.
pub const RECALIBRATION_DISABLED: &str = "disabled";

/// Assessor configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `ASSESSOR_*` overrides on top of defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Catalog the assessor runs. Default: standard.
    pub catalog: CatalogVariant,

    /// JSON message table used to translate feedback. Default: none.
    pub messages_path: Option<PathBuf>,
}

impl Config {
    const ENV_RECALIBRATION: &'static str = "ASSESSOR_RECALIBRATION";
    const ENV_MESSAGES_PATH: &'static str = "ASSESSOR_MESSAGES";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Never fails: an unrecognized recalibration value selects the standard catalog.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let catalog = Self::parse_catalog_from_env(defaults.catalog);
        let messages_path = Self::parse_optional_path_from_env(Self::ENV_MESSAGES_PATH);

        Self {
            catalog,
            messages_path,
        }
    }

    /// Checks that a configured message table exists and is a file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.messages_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Translator for the configured message table, or the identity
    /// translator when none is set.
    pub fn translator(&self) -> Result<Arc<dyn Translator>, TranslationError> {
        match &self.messages_path {
            Some(path) => Ok(Arc::new(MessageTable::load(path)?)),
            None => Ok(Arc::new(IdentityTranslator)),
        }
    }

    fn parse_catalog_from_env(default: CatalogVariant) -> CatalogVariant {
        match env::var(Self::ENV_RECALIBRATION) {
            Ok(value) => Self::catalog_for_signal(&value),
            Err(_) => default,
        }
    }

    /// Maps a recalibration switch value onto a catalog.
    pub fn catalog_for_signal(value: &str) -> CatalogVariant {
        match value.trim() {
            RECALIBRATION_ENABLED => CatalogVariant::Recalibration,
            RECALIBRATION_DISABLED | "" => CatalogVariant::Standard,
            other => {
                debug!(
                    value = other,
                    "Unrecognized recalibration value, using standard catalog"
                );
                CatalogVariant::Standard
            }
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
