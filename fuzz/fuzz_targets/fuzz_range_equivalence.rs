//! Fuzz target for cross-strategy equivalence.
//!
//! Arbitrary columns (duplicates, extreme values, empty input) and arbitrary
//! bounds, including `min > max`. Every evaluator must agree with a linear
//! scan of the array it indexes and must never panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rangeval_core::{Column, EvaluatorKind, RangeEvaluator, ScanEvaluator};

/// Keeps columns small enough for fast iterations.
const MAX_ROWS: usize = 4096;

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<i64>,
    min: i64,
    max: i64,
}

fuzz_target!(|input: Input| {
    let mut values = input.values;
    values.truncate(MAX_ROWS);
    let Ok(column) = Column::new(values) else {
        return;
    };

    let row_order = ScanEvaluator::new(column.values().to_vec()).expect("fits");
    let sorted_order = ScanEvaluator::new(column.sorted().to_vec()).expect("fits");

    for kind in EvaluatorKind::all() {
        let evaluator = kind.build(&column).expect("build");
        let reference = if kind.preserves_row_order() {
            &row_order
        } else {
            &sorted_order
        };
        assert_eq!(
            evaluator.between(input.min, input.max),
            reference.between(input.min, input.max),
            "{kind} disagrees"
        );
    }
});
