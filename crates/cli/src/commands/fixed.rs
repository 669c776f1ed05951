//! Fixed-maturity rate command implementation.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use exactly_rs_sim::{fixed_rate, rate_to_f64, FixedParameters};

use crate::cli::{FixedArgs, OutputFormat};
use crate::output::format_rate_detail;

pub fn run_fixed(args: &FixedArgs, format: OutputFormat) -> Result<()> {
    // The engine takes an explicit timestamp so previews are reproducible;
    // only this outer layer falls back to the wall clock.
    let timestamp = match args.timestamp {
        Some(t) => t,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock is before the unix epoch")?
            .as_secs(),
    };

    let params = FixedParameters {
        floating: args.curve.to_parameters(),
        max_pools: args.term.max_pools,
        maturity: args.maturity,
        timestamp,
        spread_factor: args.term.spread_factor.0,
        time_preference: args.term.time_preference.0,
        maturity_speed: args.term.maturity_speed.0,
    };
    let rate = fixed_rate(&params, args.u_fixed.0, args.u_floating.0, args.u_global.0)
        .context("rate undefined for the given maturity and utilization")?;

    match format {
        OutputFormat::Table => {
            let title = format!("Fixed borrow rate (maturity {})", args.maturity);
            println!("{}", format_rate_detail(&title, rate));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "maturity": args.maturity,
                "timestamp": timestamp,
                "u_fixed": args.u_fixed.0.to_string(),
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
