use chrono::{TimeZone, Utc};
use email_digest::*;

// --- EmailInput ---

#[test]
fn test_email_input_new() {
    let input = EmailInput::new("Hello", "World");
    assert_eq!(input.subject, "Hello");
    assert_eq!(input.body, "World");
}

#[test]
fn test_from_form_keeps_values() {
    let input = EmailInput::from_form(" Hi ", "Body ").unwrap();
    assert_eq!(input.subject, " Hi ");
    assert_eq!(input.body, "Body ");
}

#[test]
fn test_from_form_requires_subject() {
    let err = EmailInput::from_form("   ", "Body").unwrap_err();
    assert!(matches!(err, Error::MissingField(ref f) if f == "subject"));
}

#[test]
fn test_from_form_requires_body() {
    let err = EmailInput::from_form("Hi", "\n\t").unwrap_err();
    assert!(matches!(err, Error::MissingField(ref f) if f == "body"));
    assert_eq!(err.to_string(), "Missing required field: body");
}

// --- Sentiment ---

#[test]
fn test_sentiment_default() {
    assert_eq!(Sentiment::default(), Sentiment::Neutral);
}

#[test]
fn test_sentiment_display() {
    assert_eq!(Sentiment::Positive.to_string(), "positive");
    assert_eq!(Sentiment::Neutral.to_string(), "neutral");
    assert_eq!(Sentiment::Negative.to_string(), "negative");
}

#[test]
fn test_sentiment_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Sentiment::Negative).unwrap(),
        "\"negative\""
    );
    let parsed: Sentiment = serde_json::from_str("\"positive\"").unwrap();
    assert_eq!(parsed, Sentiment::Positive);
}

// --- ExtractionResult ---

#[test]
fn test_extraction_result_field_names() {
    let result = ExtractionResult {
        important_phrases: vec!["Budget review".into()],
        action_items: Vec::new(),
        key_points: Vec::new(),
        sentiment: Sentiment::Neutral,
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["important_phrases"][0], "Budget review");
    assert!(json["action_items"].as_array().unwrap().is_empty());
    assert!(json["key_points"].as_array().unwrap().is_empty());
    assert_eq!(json["sentiment"], "neutral");
}

#[test]
fn test_extraction_result_is_empty() {
    assert!(ExtractionResult::default().is_empty());

    let result = ExtractionResult {
        key_points: vec!["point".into()],
        ..ExtractionResult::default()
    };
    assert!(!result.is_empty());
}

// --- ProcessedEmail ---

#[test]
fn test_processed_email_id_from_timestamp() {
    let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let email = ProcessedEmail::at(
        EmailInput::new("Hi", "Body"),
        ExtractionResult::default(),
        created_at,
    );

    assert_eq!(email.id, "1735732800000");
    assert_eq!(email.original_subject, "Hi");
    assert_eq!(email.original_body, "Body");
    assert_eq!(email.created_at, created_at);
}

#[test]
fn test_processed_email_ids_are_unique() {
    let ids: Vec<String> = (0..50)
        .map(|_| ProcessedEmail::new(EmailInput::new("Hi", "Body"), ExtractionResult::default()).id)
        .collect();

    for pair in ids.windows(2) {
        let (prev, next): (i64, i64) = (pair[0].parse().unwrap(), pair[1].parse().unwrap());
        assert!(next > prev, "{next} should follow {prev}");
    }
}

#[test]
fn test_processed_email_json() {
    let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let email = ProcessedEmail::at(
        EmailInput::new("Hi", "Body"),
        ExtractionResult::default(),
        created_at,
    );

    let json = serde_json::to_value(&email).unwrap();
    assert_eq!(json["created_at"], "2025-01-01T12:00:00Z");
    assert_eq!(json["extracted_content"]["sentiment"], "neutral");

    let back: ProcessedEmail = serde_json::from_value(json).unwrap();
    assert_eq!(back, email);
}

#[test]
fn test_processed_email_display() {
    let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let email = ProcessedEmail::at(
        EmailInput::new("Quarterly report", "Body"),
        ExtractionResult::default(),
        created_at,
    );

    assert_eq!(
        email.to_string(),
        "[2025-01-01 12:00:00] Quarterly report (neutral)"
    );
}
