//! Tests for `error` module

use super::error::*;

#[test]
fn test_error_codes_are_unique() {
    // Arrange - create all error variants
    let errors: Vec<Error> = vec![
        Error::ColumnTooLarge {
            rows: usize::MAX,
            max: u32::MAX as usize,
        },
        Error::InvalidDistribution("NORMAL(0,1)".into()),
        Error::InvalidQuery("test".into()),
        Error::UnknownEvaluator("btree".into()),
        Error::Config("test".into()),
        Error::Io(std::io::Error::other("test")),
        Error::Serialization("test".into()),
    ];

    // Act
    let codes: Vec<&str> = errors.iter().map(Error::code).collect();

    // Assert
    let mut unique_codes = codes.clone();
    unique_codes.sort_unstable();
    unique_codes.dedup();
    assert_eq!(codes.len(), unique_codes.len(), "Error codes must be unique");

    for code in &codes {
        assert!(
            code.starts_with("RANGEVAL-"),
            "Code {code} should start with RANGEVAL-"
        );
    }
}

#[test]
fn test_error_display_includes_code() {
    // Arrange
    let err = Error::UnknownEvaluator("btree".into());

    // Act
    let display = format!("{err}");

    // Assert
    assert!(display.contains("[RANGEVAL-004]"));
    assert!(display.contains("btree"));
}

#[test]
fn test_column_too_large_display() {
    let err = Error::ColumnTooLarge { rows: 10, max: 5 };
    assert_eq!(
        err.to_string(),
        "[RANGEVAL-001] Column has 10 rows, at most 5 are supported"
    );
}

#[test]
fn test_io_error_conversion() {
    // Arrange
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");

    // Act
    let err: Error = io_err.into();

    // Assert
    assert_eq!(err.code(), "RANGEVAL-006");
}

#[test]
fn test_config_error_conversion() {
    // Arrange
    let config_err = crate::config::ConfigError::InvalidValue {
        key: "query.iterations".to_string(),
        message: "must be > 0".to_string(),
    };

    // Act
    let err: Error = config_err.into();

    // Assert
    assert_eq!(err.code(), "RANGEVAL-005");
    assert!(err.to_string().contains("query.iterations"));
}
