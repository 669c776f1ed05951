//! Detailed output formatting for a single rate preview.

use alloy_primitives::I256;
use colored::Colorize;
use exactly_rs_sim::rate_to_f64;

fn format_percent(rate: I256) -> String {
    format!("{:.4}%", rate_to_f64(rate) * 100.0)
}

pub fn format_rate_detail(title: &str, rate: I256) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", title.cyan().bold()));
    output.push_str(&format!(
        "  Annual rate: {}\n",
        format_percent(rate).bold()
    ));
    output.push_str(&format!("  Raw (WAD):   {}\n", rate));

    output
}
