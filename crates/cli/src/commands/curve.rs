//! Base-curve sampling command implementation.

use alloy_primitives::{I256, U256};
use anyhow::{ensure, Context, Result};
use exactly_rs_sim::{base_rate, rate_to_f64};

use crate::cli::{CurveArgs, OutputFormat};
use crate::output::format_curve_table;

fn index(v: usize) -> I256 {
    I256::from_raw(U256::from(v as u64))
}

pub fn run_curve(args: &CurveArgs, format: OutputFormat) -> Result<()> {
    ensure!(args.steps > 0, "--steps must be positive");
    ensure!(args.to.0 > args.from.0, "--to must exceed --from");
    let span = args
        .to
        .0
        .checked_sub(args.from.0)
        .context("utilization range too wide")?;

    // Sample [from, to); points past the curve's asymptote are undefined
    // and simply skipped, the way a chart drops them.
    let mut points = Vec::with_capacity(args.steps);
    for step in 0..args.steps {
        let offset = span
            .checked_mul(index(step))
            .context("utilization range too wide")?
            / index(args.steps);
        let u = args.from.0 + offset;
        if let Ok(rate) = base_rate(args.a.0, args.b.0, args.max_utilization.0, u) {
            points.push((u, rate));
        }
    }

    match format {
        OutputFormat::Table => {
            println!("{}", format_curve_table(&points));
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = points
                .iter()
                .map(|(u, rate)| {
                    serde_json::json!({
                        "utilization_wad": u.to_string(),
                        "rate_wad": rate.to_string(),
                        "rate_percent": rate_to_f64(*rate) * 100.0,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
