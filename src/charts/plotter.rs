//! Chart Plotter Module
//! Shared chart data plus the interactive egui_plot rendering of the two
//! price curves.

use crate::pricing::PriceCurves;
use egui::{Color32, RichText};
use egui_plot::{Corner, Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints};

pub const ZERO_COUPON_LABEL: &str = "Zero Coupon (Autocompounded)";
pub const LINEAR_LABEL: &str = "Linear Discount";
pub const X_AXIS_LABEL: &str = "Time Remaining Until Maturity (%)";
pub const Y_AXIS_LABEL: &str = "Price (Normalized to Future Value)";

/// Series colors (RGB), shared with the static renderer
pub const ZERO_COUPON_RGB: (u8, u8, u8) = (31, 119, 180); // Blue
pub const LINEAR_RGB: (u8, u8, u8) = (255, 127, 14); // Orange

/// Everything needed to draw the comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    /// Time remaining as % of maturity, 100 -> 0
    pub time_left_pct: Vec<f64>,
    pub zero_coupon: Vec<f64>,
    pub linear: Vec<f64>,
}

impl ChartData {
    pub fn new(
        time_left: &[f64],
        zero_coupon: &[f64],
        linear: &[f64],
        maturity_days: u32,
        apy_percent: f64,
    ) -> Self {
        let total_seconds = maturity_days as f64 * crate::pricing::SECONDS_PER_DAY;
        Self {
            title: Self::title(apy_percent, maturity_days),
            time_left_pct: time_left
                .iter()
                .map(|&t| t / total_seconds * 100.0)
                .collect(),
            zero_coupon: zero_coupon.to_vec(),
            linear: linear.to_vec(),
        }
    }

    pub fn from_curves(curves: &PriceCurves) -> Self {
        Self::new(
            &curves.time_left,
            &curves.zero_coupon,
            &curves.linear,
            curves.params.maturity_days(),
            curves.params.apy_percent(),
        )
    }

    pub fn title(apy_percent: f64, maturity_days: u32) -> String {
        format!(
            "PT Token Pricing Models Comparison ({}% APY, {}-Day Maturity)",
            apy_percent, maturity_days
        )
    }

    /// Points in plot space. The x-axis is inverted by plotting against the
    /// negated percentage, so issuance (100%) sits on the left.
    pub fn countdown_points(&self, prices: &[f64]) -> Vec<(f64, f64)> {
        self.time_left_pct
            .iter()
            .zip(prices.iter())
            .map(|(&pct, &price)| (countdown_x(pct), price))
            .collect()
    }

    /// Padded y-range covering both series.
    pub fn y_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in self.zero_coupon.iter().chain(self.linear.iter()) {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min.is_infinite() {
            return (0.0, 1.0);
        }
        let pad = ((max - min) * 0.05).max(0.01);
        (min - pad, max + pad)
    }
}

/// Map a percentage of time remaining onto the inverted x-axis.
pub fn countdown_x(pct: f64) -> f64 {
    -pct
}

/// Tick label for a position on the inverted x-axis.
pub fn format_countdown_tick(x: f64) -> String {
    let pct = -x;
    if (pct - pct.round()).abs() < 1e-9 {
        // Avoid "-0"
        format!("{:.0}", pct.round() + 0.0)
    } else {
        format!("{:.1}", pct)
    }
}

fn color32((r, g, b): (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Draws the price comparison chart with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn draw_price_chart(ui: &mut egui::Ui, chart_data: &ChartData) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&chart_data.title).size(18.0).strong());
        });
        ui.add_space(8.0);

        let (y_min, y_max) = chart_data.y_range();

        Plot::new("pt_price_curves")
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .show_grid(true)
            .allow_scroll(false)
            .include_x(countdown_x(100.0))
            .include_x(countdown_x(0.0))
            .include_y(y_min)
            .include_y(y_max)
            .x_axis_formatter(|mark, _range| format_countdown_tick(mark.value))
            .label_formatter(|name, value: &PlotPoint| {
                let remaining = format_countdown_tick(value.x);
                if name.is_empty() {
                    format!("{}% remaining\nprice {:.4}", remaining, value.y)
                } else {
                    format!("{}\n{}% remaining\nprice {:.4}", name, remaining, value.y)
                }
            })
            .show(ui, |plot_ui| {
                let zero_coupon: PlotPoints = chart_data
                    .countdown_points(&chart_data.zero_coupon)
                    .into_iter()
                    .map(|(x, y)| [x, y])
                    .collect();
                plot_ui.line(
                    Line::new(zero_coupon)
                        .color(color32(ZERO_COUPON_RGB))
                        .width(2.0)
                        .name(ZERO_COUPON_LABEL),
                );

                let linear: PlotPoints = chart_data
                    .countdown_points(&chart_data.linear)
                    .into_iter()
                    .map(|(x, y)| [x, y])
                    .collect();
                plot_ui.line(
                    Line::new(linear)
                        .color(color32(LINEAR_RGB))
                        .width(2.0)
                        .style(LineStyle::dashed_loose())
                        .name(LINEAR_LABEL),
                );
            });
    }
}
