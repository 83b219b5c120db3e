//! Control Panel Widget
//! Left side panel with the two pricing inputs and export controls.

use crate::pricing::{PricingError, PricingParameters};
use egui::{Color32, DragValue, RichText};

/// Left side control panel with pricing inputs and export button.
pub struct ControlPanel {
    pub apy_percent: f64,
    pub maturity_days: u32,
    pub status: String,
    pub is_error: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(PricingParameters::default())
    }
}

impl ControlPanel {
    pub fn new(params: PricingParameters) -> Self {
        Self {
            apy_percent: params.apy_percent(),
            maturity_days: params.maturity_days(),
            status: "Ready".to_string(),
            is_error: false,
        }
    }

    /// Validate the current inputs
    pub fn parameters(&self) -> Result<PricingParameters, PricingError> {
        PricingParameters::new(self.apy_percent, self.maturity_days)
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📈 PT Curve")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Zero Coupon vs Linear Discount")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Parameters Section =====
        ui.label(RichText::new("⚙️ Parameters").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 110.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("APY:"));
            let response = ui.add(
                DragValue::new(&mut self.apy_percent)
                    .speed(0.5)
                    .range(0.01..=1000.0)
                    .suffix(" %"),
            );
            if response.changed() {
                action = ControlPanelAction::ParametersChanged;
            }
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Maturity:"));
            let response = ui.add(
                DragValue::new(&mut self.maturity_days)
                    .speed(1.0)
                    .range(1..=36_500)
                    .suffix(" days"),
            );
            if response.changed() {
                action = ControlPanelAction::ParametersChanged;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("💾 Save PNG").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::SavePng;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.is_error {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = false;
    }

    pub fn set_error(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = true;
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    ParametersChanged,
    SavePng,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_starts_from_parameters() {
        let params = PricingParameters::new(8.0, 180).unwrap();
        let panel = ControlPanel::new(params);
        assert_eq!(panel.parameters(), Ok(params));
        assert!(!panel.is_error);
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let mut panel = ControlPanel::default();
        panel.maturity_days = 0;
        assert_eq!(panel.parameters(), Err(PricingError::InvalidMaturity(0)));

        panel.set_error("bad input");
        assert!(panel.is_error);
        panel.set_status("ok");
        assert!(!panel.is_error);
    }
}
