use super::*;
use crate::assessments::ids;

#[test]
fn test_standard_order() {
    assert_eq!(
        Catalog::standard().identifiers(),
        vec![
            ids::INTRODUCTION_KEYWORD,
            ids::KEYPHRASE_LENGTH,
            ids::KEYWORD_DENSITY,
            ids::META_DESCRIPTION_KEYWORD,
            ids::META_DESCRIPTION_LENGTH,
            ids::TAXONOMY_TEXT_LENGTH,
            ids::TITLE_KEYWORD,
            ids::TITLE_WIDTH,
            ids::URL_KEYWORD,
            ids::URL_LENGTH,
            ids::URL_STOP_WORDS,
            ids::FUNCTION_WORDS_IN_KEYPHRASE,
        ]
    );
}

#[test]
fn test_recalibration_order() {
    assert_eq!(
        Catalog::recalibration().identifiers(),
        vec![
            ids::INTRODUCTION_KEYWORD,
            ids::KEYPHRASE_LENGTH,
            ids::KEYWORD_DENSITY,
            ids::META_DESCRIPTION_KEYWORD,
            ids::META_DESCRIPTION_LENGTH,
            ids::TAXONOMY_TEXT_LENGTH,
            ids::TITLE_KEYWORD,
            ids::TITLE_WIDTH,
            ids::URL_KEYWORD,
            ids::FUNCTION_WORDS_IN_KEYPHRASE,
            ids::SINGLE_H1,
        ]
    );
}

#[test]
fn test_membership_differences() {
    let standard = Catalog::standard();
    let recalibration = Catalog::recalibration();

    assert!(standard.contains(ids::URL_LENGTH));
    assert!(standard.contains(ids::URL_STOP_WORDS));
    assert!(!standard.contains(ids::SINGLE_H1));

    assert!(!recalibration.contains(ids::URL_LENGTH));
    assert!(!recalibration.contains(ids::URL_STOP_WORDS));
    assert!(recalibration.contains(ids::SINGLE_H1));
}

#[test]
fn test_builtin_identifiers_unique() {
    for catalog in [Catalog::standard(), Catalog::recalibration()] {
        let ids = catalog.identifiers();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len(), "{}", catalog.name());
    }
}

#[test]
fn test_variant_names() {
    assert_eq!(Catalog::standard().name(), "standard");
    assert_eq!(Catalog::recalibration().name(), "recalibration");
    assert_eq!(CatalogVariant::Recalibration.to_string(), "recalibration");
    assert_eq!(CatalogVariant::default(), CatalogVariant::Standard);
    assert_eq!(Catalog::default().len(), 12);
}

#[test]
fn test_variant_from_str() {
    assert_eq!("standard".parse::<CatalogVariant>().ok(), Some(CatalogVariant::Standard));
    assert_eq!("disabled".parse::<CatalogVariant>().ok(), Some(CatalogVariant::Standard));
    assert_eq!(
        " recalibration ".parse::<CatalogVariant>().ok(),
        Some(CatalogVariant::Recalibration)
    );
    assert_eq!("enabled".parse::<CatalogVariant>().ok(), Some(CatalogVariant::Recalibration));

    let err = "sometimes".parse::<CatalogVariant>().unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCatalog { ref value } if value == "sometimes"));
    assert!(err.to_string().contains("recalibration"));
}

#[test]
fn test_custom_catalog_keeps_order() {
    use crate::assessments::keyword::KEYPHRASE_LENGTH;
    use crate::assessments::length::TITLE_WIDTH;

    let catalog = Catalog::from_assessments("custom", vec![TITLE_WIDTH, KEYPHRASE_LENGTH])
        .expect("unique identifiers");

    assert_eq!(catalog.name(), "custom");
    assert_eq!(catalog.identifiers(), vec![ids::TITLE_WIDTH, ids::KEYPHRASE_LENGTH]);
    assert!(!catalog.is_empty());
}

#[test]
fn test_custom_catalog_rejects_duplicates() {
    use crate::assessments::length::TITLE_WIDTH;

    let err = Catalog::from_assessments("dup", vec![TITLE_WIDTH, TITLE_WIDTH]).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::DuplicateIdentifier { identifier } if identifier == ids::TITLE_WIDTH
    ));
}
