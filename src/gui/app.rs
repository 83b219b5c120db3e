//! PT Curve Main Application
//! Main window with control panel and chart viewer.

use crate::charts::{StaticChartRenderer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::pricing::{PriceCalculator, PriceCurves};
use egui::SidePanel;
use tracing::{info, warn};

/// Main application window.
pub struct PtCurveApp {
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl PtCurveApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, curves: PriceCurves) -> Self {
        Self {
            control_panel: ControlPanel::new(curves.params),
            chart_viewer: ChartViewer::new(curves),
        }
    }

    /// Recompute the curves from the panel inputs
    fn handle_parameters_changed(&mut self) {
        match self.control_panel.parameters() {
            Ok(params) => {
                let curves = PriceCalculator::curves(params);
                let status = format!(
                    "Issue price: {:.4} zero coupon, {:.4} linear",
                    curves.zero_coupon.first().copied().unwrap_or(f64::NAN),
                    curves.linear.first().copied().unwrap_or(f64::NAN),
                );
                self.chart_viewer.set_curves(curves);
                self.control_panel.set_status(&status);
            }
            Err(e) => {
                warn!(error = %e, "rejected viewer input");
                self.control_panel.set_error(&format!("Error: {}", e));
            }
        }
    }

    /// Handle PNG export - render off-screen and write the chosen file
    fn handle_save_png(&mut self) {
        let Some(chart_data) = self.chart_viewer.chart_data.as_ref() else {
            self.control_panel.set_error("No chart to export");
            return;
        };

        let default_name = self
            .chart_viewer
            .curves
            .as_ref()
            .map(|c| {
                format!(
                    "pt_curve_{}apy_{}d.png",
                    c.params.apy_percent(),
                    c.params.maturity_days()
                )
            })
            .unwrap_or_else(|| "pt_curve.png".to_string());

        // Ask user for output location
        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(&default_name)
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        match StaticChartRenderer::save_png(
            chart_data,
            &output_path,
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
        ) {
            Ok(()) => {
                self.control_panel
                    .set_status(&format!("Saved {}", output_path.display()));
            }
            Err(e) => {
                warn!(error = %e, "PNG export failed");
                self.control_panel.set_error(&format!("Export error: {}", e));
            }
        }
    }
}

impl eframe::App for PtCurveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui);

                match action {
                    ControlPanelAction::ParametersChanged => self.handle_parameters_changed(),
                    ControlPanelAction::SavePng => self.handle_save_png(),
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Open the chart window. Blocks until the window is closed.
pub fn run_viewer(curves: PriceCurves) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([900.0, 540.0])
            .with_title("PT Curve"),
        ..Default::default()
    };

    info!(
        apy = curves.params.apy_percent(),
        days = curves.params.maturity_days(),
        "opening chart window"
    );

    eframe::run_native(
        "PT Curve",
        options,
        Box::new(move |cc| Ok(Box::new(PtCurveApp::new(cc, curves)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingParameters;

    fn app_with_defaults() -> PtCurveApp {
        let curves = PriceCalculator::curves(PricingParameters::default());
        PtCurveApp {
            control_panel: ControlPanel::new(curves.params),
            chart_viewer: ChartViewer::new(curves),
        }
    }

    #[test]
    fn test_invalid_input_keeps_previous_chart() {
        let mut app = app_with_defaults();
        let before = app.chart_viewer.chart_data.clone();

        app.control_panel.maturity_days = 0;
        app.handle_parameters_changed();

        assert!(app.control_panel.is_error);
        assert!(app.control_panel.status.starts_with("Error:"));
        assert_eq!(app.chart_viewer.chart_data, before);
        assert_eq!(
            app.chart_viewer.curves.as_ref().unwrap().params,
            PricingParameters::default()
        );
    }

    #[test]
    fn test_valid_input_replaces_curves() {
        let mut app = app_with_defaults();

        app.control_panel.apy_percent = 100.0;
        app.control_panel.maturity_days = 730;
        app.handle_parameters_changed();

        assert!(!app.control_panel.is_error);
        assert_eq!(
            app.control_panel.status,
            "Issue price: 0.2500 zero coupon, 0.0000 linear"
        );

        let curves = app.chart_viewer.curves.as_ref().unwrap();
        assert_eq!(curves.params, PricingParameters::new(100.0, 730).unwrap());
        assert_eq!(
            app.chart_viewer.chart_data.as_ref().unwrap().title,
            "PT Token Pricing Models Comparison (100% APY, 730-Day Maturity)"
        );
    }
}
