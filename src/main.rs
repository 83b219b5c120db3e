//! PT Curve - Principal token pricing model comparison
//!
//! Computes zero-coupon (autocompounded) and linear discount price curves for
//! a fixed-maturity instrument and shows them in an interactive chart.
//!
//! # Usage
//!
//! ```bash
//! # Interactive window with the default 50% APY, 365-day maturity
//! pt_curve
//!
//! # Static PNG export
//! pt_curve --apy 100 --maturity-days 730 --output curve.png
//!
//! # Raw series as JSON
//! pt_curve --apy 10 --json
//! ```

mod charts;
mod cli;
mod gui;
mod pricing;

use anyhow::{Context, Result};
use charts::{ChartData, StaticChartRenderer};
use clap::Parser;
use cli::Cli;
use pricing::{PriceCalculator, PricingParameters};
use std::io::Write;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let params = PricingParameters::new(cli.apy, cli.maturity_days)
        .context("Invalid pricing parameters")?;
    info!(
        apy = params.apy_percent(),
        days = params.maturity_days(),
        "computing price curves"
    );

    let curves = PriceCalculator::curves(params);

    if cli.json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &curves)
            .context("Failed to write curves as JSON")?;
        writeln!(stdout)?;
        return Ok(());
    }

    if let Some(path) = cli.output {
        let chart = ChartData::from_curves(&curves);
        StaticChartRenderer::save_png(&chart, &path, cli.width, cli.height)
            .with_context(|| format!("Failed to render chart to {}", path.display()))?;

        if cli.open {
            open::that(&path).with_context(|| format!("Failed to open {}", path.display()))?;
        }
        return Ok(());
    }

    // Blocks until the window is closed
    gui::run_viewer(curves).map_err(|e| anyhow::anyhow!("Chart window failed: {}", e))
}
