//! Price Calculator Module
//! Computes zero-coupon (autocompounded) and linear discount price curves
//! over the life of a principal token.

use serde::Serialize;
use thiserror::Error;

/// Number of samples along the countdown to maturity
pub const SAMPLE_COUNT: usize = 1000;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// 365-day year, leap years ignored
pub const SECONDS_PER_YEAR: f64 = 365.0 * SECONDS_PER_DAY;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("APY must be a positive, finite percentage (got {0})")]
    InvalidYield(f64),
    #[error("Maturity must be at least one day (got {0})")]
    InvalidMaturity(u32),
}

/// The two scalar model inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingParameters {
    apy_percent: f64,
    maturity_days: u32,
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            apy_percent: 50.0,
            maturity_days: 365,
        }
    }
}

impl PricingParameters {
    /// Validating constructor used at the input boundary.
    pub fn new(apy_percent: f64, maturity_days: u32) -> Result<Self, PricingError> {
        if !apy_percent.is_finite() || apy_percent <= 0.0 {
            return Err(PricingError::InvalidYield(apy_percent));
        }
        if maturity_days == 0 {
            return Err(PricingError::InvalidMaturity(maturity_days));
        }
        Ok(Self {
            apy_percent,
            maturity_days,
        })
    }

    pub fn apy_percent(&self) -> f64 {
        self.apy_percent
    }

    pub fn maturity_days(&self) -> u32 {
        self.maturity_days
    }
}

/// Sampled curves, index-aligned on `time_left`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceCurves {
    pub params: PricingParameters,
    /// Seconds remaining until maturity, descending to 0
    pub time_left: Vec<f64>,
    pub zero_coupon: Vec<f64>,
    pub linear: Vec<f64>,
}

/// `n` evenly spaced values from `start` to `stop`, both endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            // Pin the endpoint so it doesn't drift with accumulated rounding
            values[n - 1] = stop;
            values
        }
    }
}

/// Zero-coupon price: `1 / (1 + y)^t`.
pub fn zero_coupon_price(yield_fraction: f64, years: f64) -> f64 {
    1.0 / (1.0 + yield_fraction).powf(years)
}

/// Linear discount price: `1 - y * t`, floored at 0.
pub fn linear_price(yield_fraction: f64, years: f64) -> f64 {
    (1.0 - yield_fraction * years).max(0.0)
}

/// Computes PT price curves for both discount models.
pub struct PriceCalculator;

impl PriceCalculator {
    /// Raw computation on two scalars.
    ///
    /// Returns `(time_left, zero_coupon, linear)`. No validation is done here;
    /// non-positive inputs produce degenerate series.
    pub fn compute(apy_percent: f64, maturity_days: u32) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let yield_fraction = apy_percent / 100.0;
        let maturity_seconds = maturity_days as f64 * SECONDS_PER_DAY;

        // Countdown from maturity to issuance
        let time_left = linspace(maturity_seconds, 0.0, SAMPLE_COUNT);

        let (zero_coupon, linear): (Vec<f64>, Vec<f64>) = time_left
            .iter()
            .map(|&t| {
                let years = t / SECONDS_PER_YEAR;
                (
                    zero_coupon_price(yield_fraction, years),
                    linear_price(yield_fraction, years),
                )
            })
            .unzip();

        (time_left, zero_coupon, linear)
    }

    /// Compute curves for validated parameters.
    pub fn curves(params: PricingParameters) -> PriceCurves {
        let (time_left, zero_coupon, linear) =
            Self::compute(params.apy_percent(), params.maturity_days());

        tracing::debug!(
            apy = params.apy_percent(),
            days = params.maturity_days(),
            zero_coupon_at_issue = zero_coupon.first().copied().unwrap_or(f64::NAN),
            linear_at_issue = linear.first().copied().unwrap_or(f64::NAN),
            "computed price curves"
        );

        PriceCurves {
            params,
            time_left,
            zero_coupon,
            linear,
        }
    }
}
