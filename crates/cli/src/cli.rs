//! CLI argument definitions using clap.

use std::str::FromStr;

use alloy_primitives::I256;
use clap::{Args, Parser, Subcommand, ValueEnum};
use exactly_rs_sim::FloatingParameters;

/// Exactly CLI - preview floating and fixed borrow rates
#[derive(Parser, Debug)]
#[command(name = "exactly")]
#[command(about = "CLI tool for previewing Exactly protocol borrow rates", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preview the instantaneous floating-pool borrow rate
    Floating(FloatingArgs),
    /// Preview the borrow rate for a specific maturity
    Fixed(FixedArgs),
    /// Sample the base utilization curve as chart data
    Curve(CurveArgs),
}

#[derive(Parser, Debug)]
pub struct FloatingArgs {
    /// Floating-pool utilization (WAD)
    #[arg(long)]
    pub u_floating: WadArg,

    /// Protocol-wide utilization (WAD)
    #[arg(long)]
    pub u_global: WadArg,

    #[command(flatten)]
    pub curve: FloatingCurveArgs,
}

#[derive(Parser, Debug)]
pub struct FixedArgs {
    /// Utilization of the quoted maturity pool (WAD)
    #[arg(long)]
    pub u_fixed: WadArg,

    /// Floating-pool utilization (WAD)
    #[arg(long)]
    pub u_floating: WadArg,

    /// Protocol-wide utilization (WAD)
    #[arg(long)]
    pub u_global: WadArg,

    /// Maturity to quote, unix seconds (a 28-day interval multiple)
    #[arg(long)]
    pub maturity: u64,

    /// Preview time, unix seconds (defaults to the current time)
    #[arg(long)]
    pub timestamp: Option<u64>,

    #[command(flatten)]
    pub curve: FloatingCurveArgs,

    #[command(flatten)]
    pub term: FixedCurveArgs,
}

#[derive(Parser, Debug)]
pub struct CurveArgs {
    /// Curve numerator constant (WAD)
    #[arg(long, default_value = "13829000000000000")]
    pub a: WadArg,

    /// Curve intercept (WAD)
    #[arg(long, default_value = "17429000000000000")]
    pub b: WadArg,

    /// Utilization where the curve diverges (WAD)
    #[arg(long, default_value = "1100000000000000000")]
    pub max_utilization: WadArg,

    /// Lower bound of the sampled range (WAD)
    #[arg(long, default_value = "0")]
    pub from: WadArg,

    /// Upper bound of the sampled range, exclusive (WAD)
    #[arg(long, default_value = "1000000000000000000")]
    pub to: WadArg,

    /// Number of sample points
    #[arg(short = 'n', long, default_value = "20")]
    pub steps: usize,
}

/// Floating-curve calibration flags; defaults are a live market calibration.
#[derive(Args, Debug)]
pub struct FloatingCurveArgs {
    /// Curve numerator constant (WAD)
    #[arg(long, default_value = "13829000000000000")]
    pub a: WadArg,

    /// Curve intercept (WAD)
    #[arg(long, default_value = "17429000000000000")]
    pub b: WadArg,

    /// Utilization where the base curve diverges (WAD)
    #[arg(long, default_value = "1100000000000000000")]
    pub max_utilization: WadArg,

    /// Utilization where the sigmoid skew is centered (WAD)
    #[arg(long, default_value = "700000000000000000")]
    pub natural_utilization: WadArg,

    /// Steepness of the sigmoid skew (WAD)
    #[arg(long, default_value = "2500000000000000000")]
    pub sigmoid_speed: WadArg,

    /// Exponent of the liquidity draw-down dampening (WAD)
    #[arg(long, default_value = "1000000000000000000")]
    pub growth_speed: WadArg,

    /// Hard ceiling on the returned rate (WAD)
    #[arg(long, default_value = "150000000000000000000")]
    pub max_rate: WadArg,
}

impl FloatingCurveArgs {
    pub fn to_parameters(&self) -> FloatingParameters {
        FloatingParameters {
            a: self.a.0,
            b: self.b.0,
            max_utilization: self.max_utilization.0,
            natural_utilization: self.natural_utilization.0,
            sigmoid_speed: self.sigmoid_speed.0,
            growth_speed: self.growth_speed.0,
            max_rate: self.max_rate.0,
        }
    }
}

/// Term-structure calibration flags for fixed-maturity quotes.
#[derive(Args, Debug)]
pub struct FixedCurveArgs {
    /// Number of simultaneously active maturity slots
    #[arg(long, default_value = "3")]
    pub max_pools: u64,

    /// Weight of the demand factor in the premium (WAD)
    #[arg(long, default_value = "200000000000000000")]
    pub spread_factor: WadArg,

    /// Constant term of the premium (WAD)
    #[arg(long, default_value = "10000000000000000")]
    pub time_preference: WadArg,

    /// Exponent of the time-to-maturity decay (WAD)
    #[arg(long, default_value = "500000000000000000")]
    pub maturity_speed: WadArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Wrapper parsing a WAD-scaled decimal integer argument.
#[derive(Clone, Copy, Debug)]
pub struct WadArg(pub I256);

impl FromStr for WadArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<I256>()
            .map(WadArg)
            .map_err(|e| format!("invalid WAD integer '{s}': {e}"))
    }
}
