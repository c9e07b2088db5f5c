//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use taxonomy::{Assessor, Catalog, IdentityTranslator, Paper};

pub const LONG_URL_WITH_STOP_WORD: &str = "www.website.com/a-test-a-test-a-test-a-test-a-test-a-test-a-test-a-test-a-test-a-test-a-test-a-test-a-test-a-test";

/// 104 words, the first sentence containing "keyword".
pub const HUNDRED_WORD_TEXT: &str = "This is a keyword. Lorem ipsum dolor sit amet, vim illum \
    aeque constituam at. Id latine tritani alterum pro. Ei quod stet affert sed. Usu putent \
    fabellas suavitate id. Quo ut stet recusabo torquatos. Eum ridens possim expetenda te. Ex \
    per putant comprehensam. At vel utinam cotidieque, at erat brute eum, velit percipit ius \
    et. Has vidit accusata deterruisset ea, quod facete te vis. Vix ei duis dolor, id eum sonet \
    fabulas. Id vix imperdiet efficiantur. Percipit probatus pertinax te sit. Putant \
    intellegebat eu sit. Vix reque tation prompta id, ea quo labore viderer definiebas. Oratio \
    vocibus offendit an mei, est esse pericula liberavisse.";

pub const BASELINE: [&str; 4] = [
    "keyphraseLength",
    "metaDescriptionLength",
    "taxonomyTextLength",
    "titleWidth",
];

pub fn assessor(catalog: Catalog) -> Assessor {
    Assessor::with_catalog(Arc::new(IdentityTranslator), catalog)
}

/// Identifiers of the valid results for `paper` under `catalog`.
pub fn valid_identifiers(catalog: Catalog, paper: &Paper) -> Vec<&'static str> {
    let mut assessor = assessor(catalog);
    assessor.assess(paper);
    assessor.valid_identifiers()
}
