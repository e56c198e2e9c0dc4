//! Tests for `distribution` module

use super::distribution::Distribution;
use super::error::Error;

#[test]
fn test_parse_exponential() {
    let dist: Distribution = "EXP(0.5)".parse().expect("parse");
    assert_eq!(dist, Distribution::Exponential { lambda: 0.5 });
}

#[test]
fn test_parse_uniform_with_spaces_and_lowercase() {
    let dist: Distribution = " uniform( 1635012703 , 1635016303 ) ".parse().expect("parse");
    assert_eq!(
        dist,
        Distribution::Uniform {
            low: 1_635_012_703,
            high: 1_635_016_303
        }
    );
}

#[test]
fn test_parse_rejects_malformed() {
    for input in [
        "EXP",
        "EXP()",
        "EXP(0)",
        "EXP(-1)",
        "EXP(abc)",
        "EXP(0.5",
        "UNIFORM(5)",
        "UNIFORM(5,5)",
        "UNIFORM(9,1)",
        "NORMAL(0,1)",
    ] {
        let err = input.parse::<Distribution>().expect_err(input);
        assert!(matches!(err, Error::InvalidDistribution(_)), "{input}");
    }
}

#[test]
fn test_display_round_trips() {
    for input in ["EXP(0.0001)", "UNIFORM(-10,10)"] {
        let dist: Distribution = input.parse().expect("parse");
        assert_eq!(dist.to_string(), input);
    }
}

#[test]
fn test_serde_as_string() {
    let dist = Distribution::Uniform { low: 1, high: 9 };
    let json = serde_json::to_string(&dist).expect("serialize");
    assert_eq!(json, "\"UNIFORM(1,9)\"");
    let back: Distribution = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, dist);
}

#[test]
fn test_generate_is_seeded() {
    // Arrange
    let dist = Distribution::default();

    // Act
    let a = dist.generate(1000, 42);
    let b = dist.generate(1000, 42);
    let c = dist.generate(1000, 7);

    // Assert
    assert_eq!(a.len(), 1000);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_generate_uniform_within_bounds() {
    let values = Distribution::Uniform { low: -5, high: 5 }.generate(10_000, 1);
    assert!(values.iter().all(|v| (-5..5).contains(v)));
}

#[test]
fn test_generate_exponential_non_negative() {
    let values = Distribution::Exponential { lambda: 0.5 }.generate(10_000, 1);
    assert!(values.iter().all(|&v| v >= 0));
}

#[test]
fn test_smaller_rate_yields_more_distinct_values() {
    let distinct = |lambda: f64| {
        let mut values = Distribution::Exponential { lambda }.generate(10_000, 42);
        values.sort_unstable();
        values.dedup();
        values.len()
    };
    assert!(distinct(0.0001) > distinct(0.5));
}
