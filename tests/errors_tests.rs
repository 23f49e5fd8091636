use std::error::Error;
use recap::errors::RecapError;

#[test]
fn test_recap_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = RecapError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_recap_error_display() {
    let error = RecapError::InvalidInput("No text provided".to_string());
    assert_eq!(format!("{error}"), "Invalid input: No text provided");

    let error = RecapError::UpstreamError("status 401: bad key".to_string());
    assert_eq!(
        format!("{error}"),
        "Model provider returned an error: status 401: bad key"
    );

    let error = RecapError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );
}

#[test]
fn test_status_codes() {
    assert_eq!(RecapError::InvalidInput("x".into()).status_code(), 400);
    assert_eq!(RecapError::HttpError("x".into()).status_code(), 500);
    assert_eq!(RecapError::UpstreamError("x".into()).status_code(), 500);
    assert_eq!(RecapError::ParseError("x".into()).status_code(), 500);
    assert_eq!(RecapError::ConfigError("x".into()).status_code(), 500);
}

#[test]
fn test_public_message_hides_provider_detail() {
    let error = RecapError::UpstreamError("status 401: {\"error\":\"sk-secret invalid\"}".into());
    assert_eq!(error.public_message(), "Failed to summarize");
    assert!(!error.public_message().contains("sk-secret"));

    let error = RecapError::ParseError("expected value at line 1 column 1".into());
    assert_eq!(error.public_message(), "Failed to parse AI JSON output");

    let error = RecapError::InvalidInput("No text provided".into());
    assert_eq!(error.public_message(), "No text provided");
}

#[test]
fn test_recap_error_from_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: RecapError = json_err.into();
    assert!(matches!(err, RecapError::ParseError(_)));

    // Only checks that the conversion exists.
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> RecapError {
        RecapError::from(err)
    }
}
