use super::*;

#[test]
fn test_from_text_normalizes_attributes() {
    let paper = Paper::from_text("Some text");

    assert_eq!(paper.text(), "Some text");
    assert_eq!(paper.keyword(), "");
    assert_eq!(paper.title(), "");
    assert_eq!(paper.url(), "");
    assert_eq!(paper.description(), "");
    assert_eq!(paper.title_width(), 0);
    assert!(paper.has_text());
    assert!(!paper.has_keyword());
}

#[test]
fn test_empty_paper() {
    let paper = Paper::from_text("");

    assert!(!paper.has_text());
    assert!(!paper.has_title());
    assert!(!paper.has_url());
    assert!(!paper.has_description());
    assert_eq!(paper, Paper::default());
}

#[test]
fn test_new_with_attributes() {
    let paper = Paper::new(
        "text",
        PaperAttributes::new()
            .keyword("keyword")
            .title("title")
            .url("sample-url")
            .description("description")
            .title_width(450),
    );

    assert_eq!(paper.keyword(), "keyword");
    assert_eq!(paper.title(), "title");
    assert_eq!(paper.url(), "sample-url");
    assert_eq!(paper.description(), "description");
    assert_eq!(paper.title_width(), 450);
    assert!(paper.has_keyword() && paper.has_title() && paper.has_url());
}

#[test]
fn test_deserialize_missing_and_null_fields() {
    let paper: Paper =
        serde_json::from_str(r#"{"text": "body", "keyword": null, "title": "A title"}"#)
            .expect("should deserialize");

    assert_eq!(paper.text(), "body");
    assert_eq!(paper.keyword(), "");
    assert_eq!(paper.title(), "A title");
    assert_eq!(paper.url(), "");
}

#[test]
fn test_deserialize_empty_object() {
    let paper: Paper = serde_json::from_str("{}").expect("should deserialize");
    assert_eq!(paper, Paper::default());
}

#[test]
fn test_deserialize_title_width() {
    let paper: Paper = serde_json::from_str(r#"{"text": "", "title_width": 512}"#)
        .expect("should deserialize");
    assert_eq!(paper.title_width(), 512);
}

#[test]
fn test_serialize_shape() {
    let paper = Paper::new("body", PaperAttributes::new().keyword("kw"));
    let value = serde_json::to_value(&paper).expect("should serialize");

    assert_eq!(value["text"], "body");
    assert_eq!(value["keyword"], "kw");
    assert_eq!(value["url"], "");
    assert_eq!(value["title_width"], 0);
}

#[test]
fn test_deserialize_coerces_scalars_to_strings() {
    let paper: Paper = serde_json::from_str(
        r#"{"text": 42, "keyword": 5, "title": true, "url": 1.5, "description": false}"#,
    )
    .expect("scalars should coerce");

    assert_eq!(paper.text(), "42");
    assert_eq!(paper.keyword(), "5");
    assert_eq!(paper.title(), "true");
    assert_eq!(paper.url(), "1.5");
    assert_eq!(paper.description(), "false");
}

#[test]
fn test_deserialize_rejects_structured_attributes() {
    let err = serde_json::from_str::<Paper>(r#"{"keyword": ["cat", "food"]}"#).unwrap_err();
    assert!(err.to_string().contains("a string, number or bool"));

    assert!(serde_json::from_str::<Paper>(r#"{"title": {"en": "x"}}"#).is_err());
}
