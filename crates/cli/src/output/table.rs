//! Table formatting for sampled curve points.

use alloy_primitives::I256;
use exactly_rs_sim::rate_to_f64;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct CurveRow {
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "Borrow Rate")]
    rate: String,
    #[tabled(rename = "Raw (WAD)")]
    raw: String,
}

fn format_percent(value: I256) -> String {
    format!("{:.2}%", rate_to_f64(value) * 100.0)
}

pub fn format_curve_table(points: &[(I256, I256)]) -> String {
    if points.is_empty() {
        return "No defined points in the requested range.".to_string();
    }

    let rows: Vec<CurveRow> = points
        .iter()
        .map(|(u, rate)| CurveRow {
            utilization: format_percent(*u),
            rate: format_percent(*rate),
            raw: rate.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}
