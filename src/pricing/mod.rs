//! Pricing module - PT price curve computation

mod calculator;

pub use calculator::{
    PriceCalculator, PriceCurves, PricingError, PricingParameters, SECONDS_PER_DAY,
};
