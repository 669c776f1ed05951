//! Floating-rate command implementation.

use anyhow::{Context, Result};
use exactly_rs_sim::{floating_rate, rate_to_f64};

use crate::cli::{FloatingArgs, OutputFormat};
use crate::output::format_rate_detail;

pub fn run_floating(args: &FloatingArgs, format: OutputFormat) -> Result<()> {
    let params = args.curve.to_parameters();
    let rate = floating_rate(&params, args.u_floating.0, args.u_global.0)
        .context("rate undefined at the given utilization")?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_rate_detail("Floating borrow rate", rate));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "u_floating": args.u_floating.0.to_string(),
                "u_global": args.u_global.0.to_string(),
                "rate_wad": rate.to_string(),
                "rate_percent": rate_to_f64(rate) * 100.0,
            }))?;
            println!("{}", json);
        }
    }

    Ok(())
}
