//! Chart Viewer Widget
//! Central panel showing the interactive price curves.

use crate::charts::{ChartData, ChartPlotter};
use crate::pricing::PriceCurves;
use egui::RichText;

/// Holds the curves currently on screen.
#[derive(Default)]
pub struct ChartViewer {
    pub curves: Option<PriceCurves>,
    pub chart_data: Option<ChartData>,
}

impl ChartViewer {
    pub fn new(curves: PriceCurves) -> Self {
        let mut viewer = Self::default();
        viewer.set_curves(curves);
        viewer
    }

    /// Replace the displayed curves
    pub fn set_curves(&mut self, curves: PriceCurves) {
        self.chart_data = Some(ChartData::from_curves(&curves));
        self.curves = Some(curves);
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        match &self.chart_data {
            Some(data) => ChartPlotter::draw_price_chart(ui, data),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{PriceCalculator, PricingParameters};

    #[test]
    fn test_set_curves_rebuilds_chart() {
        let mut viewer = ChartViewer::new(PriceCalculator::curves(PricingParameters::default()));
        let before = viewer.chart_data.clone().unwrap();

        viewer.set_curves(PriceCalculator::curves(
            PricingParameters::new(20.0, 30).unwrap(),
        ));
        let after = viewer.chart_data.as_ref().unwrap();

        assert_ne!(before.title, after.title);
        assert_eq!(
            viewer.curves.as_ref().unwrap().params.maturity_days(),
            30
        );
    }
}
