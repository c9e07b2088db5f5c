use super::*;

#[test]
fn test_identity_translator() {
    let translator = IdentityTranslator;
    assert_eq!(translator.translate("Hello"), "Hello");
}

#[test]
fn test_message_table_lookup_and_fallback() {
    let mut table = MessageTable::new();
    assert!(table.is_empty());

    table.insert("Hello", "Hallo");

    assert_eq!(table.len(), 1);
    assert_eq!(table.translate("Hello"), "Hallo");
    assert_eq!(table.translate("Goodbye"), "Goodbye");
}

#[test]
fn test_message_table_from_json() {
    let table = MessageTable::from_json(r#"{"Title width": "Titelbreite"}"#)
        .expect("should parse");
    assert_eq!(table.translate("Title width"), "Titelbreite");
}

#[test]
fn test_message_table_from_invalid_json() {
    let result = MessageTable::from_json(r#"["not", "an", "object"]"#);
    assert!(matches!(result, Err(TranslationError::Parse { .. })));
}

#[test]
fn test_format_message_positional() {
    let text = format_message("{0} of {1} words", &[&3, &"ten"]);
    assert_eq!(text, "3 of ten words");
}

#[test]
fn test_format_message_repeated_and_reordered() {
    let text = format_message("{1}-{0}-{1}", &[&"a", &"b"]);
    assert_eq!(text, "b-a-b");
}

#[test]
fn test_format_message_keeps_unknown_placeholders() {
    assert_eq!(format_message("{2} and {x}", &[&1]), "{2} and {x}");
    assert_eq!(format_message("open { brace", &[]), "open { brace");
    assert_eq!(format_message("no placeholders", &[&1]), "no placeholders");
}

#[test]
fn test_message_table_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("de.json");
    std::fs::write(&path, r#"{"Hello": "Hallo"}"#).unwrap();

    let table = MessageTable::load(&path).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.translate("Hello"), "Hallo");
}

#[test]
fn test_message_table_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MessageTable::load(dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, TranslationError::Read { .. }));
    assert!(err.to_string().contains("missing.json"));
}
