//! CLI argument definitions.

use crate::charts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use clap::Parser;
use std::path::PathBuf;

/// PT Curve - compare zero-coupon and linear discount pricing of a principal token
#[derive(Parser, Debug)]
#[command(name = "pt_curve")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Annualized yield, in percent
    #[arg(long, env = "PT_CURVE_APY", default_value_t = 50.0)]
    pub apy: f64,

    /// Maturity horizon, in days
    #[arg(long, env = "PT_CURVE_MATURITY_DAYS", default_value_t = 365)]
    pub maturity_days: u32,

    /// Write the chart to a PNG file instead of opening a window
    #[arg(short, long, value_name = "FILE", conflicts_with = "json")]
    pub output: Option<PathBuf>,

    /// PNG width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// PNG height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Open the written PNG with the system viewer
    #[arg(long, requires = "output")]
    pub open: bool,

    /// Print the sampled curves as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, env = "PT_CURVE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};

    /// Parse without consulting `PT_CURVE_*` variables from the environment.
    fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
        let command = Cli::command()
            .mut_arg("apy", |arg| arg.env(None::<&str>))
            .mut_arg("maturity_days", |arg| arg.env(None::<&str>))
            .mut_arg("log_level", |arg| arg.env(None::<&str>));
        let matches = command.try_get_matches_from(args)?;
        Cli::from_arg_matches(&matches)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse_args(&["pt_curve"]).unwrap();
        assert_eq!(cli.apy, 50.0);
        assert_eq!(cli.maturity_days, 365);
        assert_eq!(cli.output, None);
        assert_eq!((cli.width, cli.height), (1000, 600));
        assert!(!cli.json);
        assert!(!cli.open);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_export_args() {
        let cli = parse_args(&[
            "pt_curve",
            "--apy",
            "100",
            "--maturity-days",
            "730",
            "-o",
            "curve.png",
            "--width",
            "800",
        ])
        .unwrap();
        assert_eq!(cli.apy, 100.0);
        assert_eq!(cli.maturity_days, 730);
        assert_eq!(cli.output, Some(PathBuf::from("curve.png")));
        assert_eq!(cli.width, 800);
    }

    #[test]
    fn test_json_conflicts_with_output() {
        assert!(parse_args(&["pt_curve", "--json", "-o", "curve.png"]).is_err());
        assert!(parse_args(&["pt_curve", "--open"]).is_err());
    }
}
