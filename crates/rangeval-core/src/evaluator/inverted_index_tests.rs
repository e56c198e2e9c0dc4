//! Tests for `InvertedIndexEvaluator`

use roaring::RoaringBitmap;

use super::{EvaluatorKind, InvertedIndexEvaluator, RangeEvaluator};

const COLUMN: [i64; 6] = [5, 1, 5, 3, 1, 5];

fn positions(evaluator: &InvertedIndexEvaluator, min: i64, max: i64) -> Vec<u32> {
    evaluator.between(min, max).iter().collect()
}

#[test]
fn test_build_one_posting_per_distinct_value() {
    // Arrange & Act
    let evaluator = InvertedIndexEvaluator::from_values(&COLUMN).expect("build");

    // Assert
    assert_eq!(evaluator.unique_values(), &[1, 3, 5]);
    let postings: Vec<Vec<u32>> = evaluator
        .postings()
        .iter()
        .map(|p| p.iter().collect())
        .collect();
    assert_eq!(postings, vec![vec![1, 4], vec![3], vec![0, 2, 5]]);
}

#[test]
fn test_between_scenario() {
    let evaluator = InvertedIndexEvaluator::from_values(&COLUMN).expect("build");

    assert_eq!(positions(&evaluator, 1, 3), vec![1, 3, 4]);
    assert_eq!(positions(&evaluator, 5, 5), vec![0, 2, 5]);
    assert_eq!(positions(&evaluator, 0, 10), vec![0, 1, 2, 3, 4, 5]);
    assert!(positions(&evaluator, 6, 9).is_empty());
}

#[test]
fn test_new_with_explicit_sorted_copy() {
    // Arrange
    let mut sorted = COLUMN.to_vec();
    sorted.sort_unstable();

    // Act
    let evaluator = InvertedIndexEvaluator::new(&COLUMN, &sorted).expect("build");

    // Assert
    assert_eq!(positions(&evaluator, 3, 5), vec![0, 2, 3, 5]);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "missing from sorted copy")]
fn test_new_rejects_sorted_copy_missing_a_value() {
    // 3 only appears in the row-order column
    let sorted = [1, 1, 5, 5, 5, 5];
    let _ = InvertedIndexEvaluator::new(&COLUMN, &sorted);
}

#[test]
#[cfg(not(debug_assertions))]
fn test_new_skips_rows_missing_from_sorted_copy() {
    let sorted = [1, 1, 5, 5, 5, 5];

    let evaluator = InvertedIndexEvaluator::new(&COLUMN, &sorted).expect("build");

    assert_eq!(positions(&evaluator, 1, 5), vec![0, 1, 2, 4, 5]);
}

#[test]
fn test_postings_partition_all_rows() {
    // Arrange
    let values: Vec<i64> = (0..5000).map(|i| (i * 7919) % 37).collect();

    // Act
    let evaluator = InvertedIndexEvaluator::from_values(&values).expect("build");

    // Assert
    let mut union = RoaringBitmap::new();
    let mut total = 0;
    for (value, posting) in evaluator.unique_values().iter().zip(evaluator.postings()) {
        assert!(posting.iter().all(|row| values[row as usize] == *value));
        total += posting.len();
        union |= posting;
    }
    assert_eq!(total, values.len() as u64, "postings must not overlap");
    assert_eq!(union.len(), values.len() as u64);
    assert_eq!(union.max(), Some(4999));
}

#[test]
fn test_max_at_i64_max_does_not_overflow() {
    let evaluator = InvertedIndexEvaluator::from_values(&[i64::MAX, 0, i64::MAX]).expect("build");
    assert_eq!(positions(&evaluator, 1, i64::MAX), vec![0, 2]);
}

#[test]
fn test_inverted_bounds_and_empty_column() {
    let evaluator = InvertedIndexEvaluator::from_values(&COLUMN).expect("build");
    assert!(evaluator.between(5, 1).is_empty());

    let empty = InvertedIndexEvaluator::from_values(&[]).expect("build");
    assert!(empty.between(i64::MIN, i64::MAX).is_empty());
    assert_eq!(empty.serialized_size(), 0);
}

#[test]
fn test_serialized_size_accounts_for_postings() {
    // Arrange
    let evaluator = InvertedIndexEvaluator::from_values(&COLUMN).expect("build");

    // Act
    let posting_bytes: usize = evaluator
        .postings()
        .iter()
        .map(RoaringBitmap::serialized_size)
        .sum();

    // Assert
    assert_eq!(evaluator.serialized_size(), 3 * 8 + 3 * 4 + posting_bytes);
    assert_eq!(evaluator.kind(), EvaluatorKind::InvertedIndex);
}

#[test]
fn test_serialized_size_grows_with_distinct_values() {
    let mut previous = 0;
    for distinct in [1_i64, 2, 4, 16, 256, 1024] {
        let values: Vec<i64> = (0..1024).map(|i| i % distinct).collect();
        let size = InvertedIndexEvaluator::from_values(&values)
            .expect("build")
            .serialized_size();
        assert!(size >= previous, "size shrank at {distinct} distinct values");
        previous = size;
    }
}
