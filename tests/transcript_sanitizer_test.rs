use medivoice::infrastructure::observability::sanitize_transcript;

#[test]
fn given_empty_text_when_sanitizing_then_placeholder() {
    assert_eq!(sanitize_transcript("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returned_trimmed() {
    assert_eq!(
        sanitize_transcript("  my arm itches  "),
        "my arm itches"
    );
}

#[test]
fn given_long_text_when_sanitizing_then_truncated_with_length_note() {
    let long = "a".repeat(200);
    let sanitized = sanitize_transcript(&long);

    assert!(sanitized.starts_with(&"a".repeat(80)));
    assert!(sanitized.contains("200 chars total"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacted() {
    let sanitized = sanitize_transcript("Bearer sk-secret-value then more");

    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(!sanitized.contains("sk-secret-value"));
}
