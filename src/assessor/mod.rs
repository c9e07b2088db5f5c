//! Assessment execution engine.
//!
//! An [`Assessor`] owns one catalog, fixed when it is constructed. Each call
//! to [`Assessor::assess`] walks that catalog in declaration order, evaluates
//! every predicate, runs the applicable scorers, and replaces the stored
//! outcome list. A scorer error or panic is recorded as a failed outcome and
//! never stops the pass.
//!
//! ```ignore
//! let mut assessor = Assessor::new(Arc::new(IdentityTranslator));
//! assessor.assess(&Paper::from_text("Some text"));
//! for outcome in assessor.valid_results() {
//!     println!("{}: {:?}", outcome.identifier, outcome.score());
//! }
//! ```

pub mod types;


pub use types::{Evaluation, Outcome};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::i18n::Translator;
use crate::paper::Paper;

pub struct Assessor {
    catalog: Catalog,
    i18n: Arc<dyn Translator>,
    results: Vec<Outcome>,
}

impl std::fmt::Debug for Assessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assessor")
            .field("catalog", &self.catalog.name())
            .field("results", &self.results.len())
            .finish()
    }
}

impl Assessor {
    /// Reads the catalog switch from the environment once; later changes to
    /// the environment do not affect this instance.
    ///
    /// Only the catalog is taken from the environment. `ASSESSOR_MESSAGES` is
    /// not loaded here: `i18n` is used as given. Build it with
    /// [`Config::translator`] to honor the message table.
    pub fn new(i18n: Arc<dyn Translator>) -> Self {
        let config = Config::from_env();
        if let Some(path) = &config.messages_path {
            warn!(
                path = %path.display(),
                "Message table path is set but Assessor::new uses the given translator"
            );
        }
        Self::with_config(i18n, &config)
    }

    pub fn with_config(i18n: Arc<dyn Translator>, config: &Config) -> Self {
        Self::with_catalog(i18n, Catalog::for_variant(config.catalog))
    }

    pub fn with_catalog(i18n: Arc<dyn Translator>, catalog: Catalog) -> Self {
        info!(
            catalog = catalog.name(),
            assessments = catalog.len(),
            "Assessor initialized"
        );
        Self {
            catalog,
            i18n,
            results: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs every assessment of the catalog against `paper`.
    pub fn assess(&mut self, paper: &Paper) {
        let i18n = self.i18n.as_ref();

        let results: Vec<Outcome> = self
            .catalog
            .assessments()
            .iter()
            .map(|assessment| {
                let identifier = assessment.identifier;

                let applicable =
                    panic::catch_unwind(AssertUnwindSafe(|| (assessment.is_applicable)(paper)));

                let applicable = match applicable {
                    Ok(applicable) => applicable,
                    Err(payload) => {
                        let reason = format!("predicate panicked: {}", panic_message(&*payload));
                        warn!(identifier, error = %reason, "Assessment panicked, skipping");
                        return Outcome::new(identifier, Evaluation::Failed { reason });
                    }
                };

                if !applicable {
                    debug!(identifier, "Assessment not applicable");
                    return Outcome::new(identifier, Evaluation::NotApplicable);
                }

                let scored =
                    panic::catch_unwind(AssertUnwindSafe(|| (assessment.get_result)(paper, i18n)));

                match scored {
                    Ok(Ok(result)) => {
                        debug!(identifier, score = ?result.score, "Assessment completed");
                        Outcome::new(identifier, Evaluation::Completed(result))
                    }
                    Ok(Err(e)) => {
                        warn!(identifier, error = %e, "Assessment failed, skipping");
                        Outcome::new(
                            identifier,
                            Evaluation::Failed {
                                reason: e.to_string(),
                            },
                        )
                    }
                    Err(payload) => {
                        let reason = format!("scorer panicked: {}", panic_message(&*payload));
                        warn!(identifier, error = %reason, "Assessment panicked, skipping");
                        Outcome::new(identifier, Evaluation::Failed { reason })
                    }
                }
            })
            .collect();

        debug!(
            catalog = self.catalog.name(),
            total = results.len(),
            valid = results.iter().filter(|o| o.has_score()).count(),
            "Assessment pass complete"
        );

        self.results = results;
    }

    /// Every outcome of the last pass, valid or not, in catalog order.
    pub fn results(&self) -> &[Outcome] {
        &self.results
    }

    /// Outcomes of the last pass that carry a score, in catalog order.
    ///
    /// Empty before the first [`assess`](Self::assess).
    pub fn valid_results(&self) -> Vec<&Outcome> {
        self.results.iter().filter(|o| o.has_score()).collect()
    }

    pub fn valid_identifiers(&self) -> Vec<&'static str> {
        self.results
            .iter()
            .filter(|o| o.has_score())
            .map(|o| o.identifier)
            .collect()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
