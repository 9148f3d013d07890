use focal_core::selection::FocalSelector;
use focal_core::word::CharacterClass;
use focal_core::{FocalLetter, WordAnnotation};
use serde_json::Value;

#[test]
fn golden_focal_letter_serialization() {
    let letter = FocalLetter {
        index: 3,
        character: 'd',
        weight: 1.0,
    };

    let json_str = serde_json::to_string(&letter).unwrap();

    // "index" -> "char" -> "weight"
    assert_eq!(json_str, r#"{"index":3,"char":"d","weight":1.0}"#);

    let back: FocalLetter = serde_json::from_str(&json_str).unwrap();
    assert_eq!(back, letter);
}

#[test]
fn golden_word_annotation_serialization() {
    let selector = FocalSelector::default();
    let annotation = selector.annotate("reading");

    let json_str = serde_json::to_string_pretty(&annotation).unwrap();

    const EXPECTED_JSON: &str = r#"{
      "word": "reading",
      "focal_letters": [
        { "index": 3, "char": "d", "weight": 1.0 },
        { "index": 5, "char": "n", "weight": 0.6 }
      ]
    }"#;

    let actual: Value = serde_json::from_str(&json_str).unwrap();
    let expected: Value = serde_json::from_str(EXPECTED_JSON).unwrap();

    assert_eq!(actual["word"], expected["word"]);
    assert_eq!(actual["focal_letters"][0], expected["focal_letters"][0]);

    let second = &actual["focal_letters"][1];
    assert_eq!(second["index"], 5);
    assert_eq!(second["char"], "n");
    assert!((second["weight"].as_f64().unwrap() - 0.6).abs() < 1e-9);

    let back: WordAnnotation = serde_json::from_str(&json_str).unwrap();
    assert_eq!(back, annotation);
    assert_eq!(back.primary().map(|f| f.index), Some(3));
}

#[test]
fn empty_word_serializes_with_empty_letters() {
    let annotation = FocalSelector::default().annotate("");
    let json_str = serde_json::to_string(&annotation).unwrap();

    assert_eq!(json_str, r#"{"word":"","focal_letters":[]}"#);
    assert_eq!(annotation.primary(), None);
}

#[test]
fn score_breakdown_serializes_class_in_lowercase() {
    let breakdown = FocalSelector::default().score_word("cat");

    assert_eq!(breakdown[0].class, CharacterClass::Consonant);
    assert_eq!(breakdown[1].class, CharacterClass::Vowel);

    let json: Value = serde_json::to_value(&breakdown).unwrap();
    assert_eq!(json[0]["class"], "consonant");
    assert_eq!(json[1]["class"], "vowel");
    assert_eq!(json[0]["normalized"], 1.0);
}
