//! Builds the configured evaluators over a generated column and measures them.

use std::time::{Duration, Instant};

use rangeval_core::{Column, EvaluatorKind, RangeQuery, RangevalConfig};
use serde::Serialize;

/// Measurements for one evaluator.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatorReport {
    pub kind: EvaluatorKind,
    pub build_ms: f64,
    pub mean_query_us: f64,
    pub cardinality: u64,
    pub serialized_size: usize,
    pub matches_baseline: bool,
}

/// Result of one `run` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub rows: usize,
    pub distinct_values: usize,
    pub distribution: String,
    pub seed: u64,
    pub query: RangeQuery,
    pub expected_cardinality: u64,
    pub evaluators: Vec<EvaluatorReport>,
}

impl RunReport {
    /// Names of evaluators whose cardinality differs from the scan baseline.
    pub fn disagreeing(&self) -> Vec<String> {
        self.evaluators
            .iter()
            .filter(|e| !e.matches_baseline)
            .map(|e| e.kind.to_string())
            .collect()
    }
}

/// Generates the column, derives the query unless one is given, then builds
/// and queries every enabled evaluator.
pub fn run(config: &RangevalConfig, query: Option<RangeQuery>) -> anyhow::Result<RunReport> {
    let values = config
        .column
        .distribution
        .generate(config.column.size, config.column.seed);
    let column = Column::new(values)?;
    let query = match query {
        Some(query) => query,
        None => RangeQuery::from_quantiles(
            &column,
            config.query.lower_quantile,
            config.query.upper_quantile,
        )?,
    };
    tracing::info!(
        rows = column.len(),
        distinct = column.distinct_count(),
        distribution = %config.column.distribution,
        min = query.min,
        max = query.max,
        "Generated column"
    );

    let expected_cardinality = column
        .values()
        .iter()
        .filter(|&&v| query.contains(v))
        .count() as u64;

    let evaluators = config
        .evaluators
        .enabled
        .iter()
        .map(|&kind| {
            measure(
                &column,
                kind,
                query,
                config.query.iterations,
                expected_cardinality,
            )
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(RunReport {
        rows: column.len(),
        distinct_values: column.distinct_count(),
        distribution: config.column.distribution.to_string(),
        seed: config.column.seed,
        query,
        expected_cardinality,
        evaluators,
    })
}

fn measure(
    column: &Column,
    kind: EvaluatorKind,
    query: RangeQuery,
    iterations: usize,
    expected_cardinality: u64,
) -> anyhow::Result<EvaluatorReport> {
    let started = Instant::now();
    let evaluator = kind.build(column)?;
    let build = started.elapsed();

    let mut cardinality = 0;
    let mut total = Duration::ZERO;
    let iterations = iterations.max(1);
    for _ in 0..iterations {
        let started = Instant::now();
        let matches = query.evaluate(evaluator.as_ref());
        total += started.elapsed();
        cardinality = matches.len();
    }
    let mean = total / u32::try_from(iterations).unwrap_or(u32::MAX);

    tracing::info!(
        %kind,
        build_ms = build.as_secs_f64() * 1e3,
        mean_query_us = mean.as_secs_f64() * 1e6,
        cardinality,
        "Evaluated"
    );

    Ok(EvaluatorReport {
        kind,
        build_ms: build.as_secs_f64() * 1e3,
        mean_query_us: mean.as_secs_f64() * 1e6,
        cardinality,
        serialized_size: evaluator.serialized_size(),
        matches_baseline: cardinality == expected_cardinality,
    })
}
