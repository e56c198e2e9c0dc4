//! Report formatting.

use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::report::RunReport;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Print a run report in the specified format
pub fn print_report(report: &RunReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            println!(
                "{} rows, {} distinct values, {} (seed {})",
                report.rows, report.distinct_values, report.distribution, report.seed
            );
            println!(
                "between({}, {}): {} expected matches",
                report.query.min, report.query.max, report.expected_cardinality
            );
            println!("{}", report_table(report));
        }
    }
    Ok(())
}

/// Render one row per evaluator
pub fn report_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header: Vec<Cell> = [
        "evaluator",
        "build (ms)",
        "query (us)",
        "cardinality",
        "serialized size (bytes)",
    ]
    .iter()
    .map(|c| Cell::new(c).fg(Color::Cyan))
    .collect();
    table.set_header(header);

    for e in &report.evaluators {
        let cardinality = Cell::new(e.cardinality).set_alignment(CellAlignment::Right);
        table.add_row(vec![
            Cell::new(e.kind),
            Cell::new(format!("{:.3}", e.build_ms)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", e.mean_query_us)).set_alignment(CellAlignment::Right),
            if e.matches_baseline {
                cardinality
            } else {
                cardinality.fg(Color::Red)
            },
            Cell::new(e.serialized_size).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
