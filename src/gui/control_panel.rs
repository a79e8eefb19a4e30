//! Control Panel Widget
//! Left side panel with the data source, filter selectors, and actions.

use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

use crate::charts::aggregate;
use crate::data::{FilterState, VehicleRecord};

/// Actions the panel asks the application to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    ExportSummary,
}

/// Left side control panel. Filter changes are applied directly to the
/// shared [`FilterState`]; everything else is reported as an action.
pub struct ControlPanel {
    pub year_options: Vec<String>,
    pub make_options: Vec<String>,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            year_options: Vec::new(),
            make_options: Vec::new(),
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the selector option lists after a dataset load.
    pub fn update_options(&mut self, table: &[VehicleRecord]) {
        self.year_options = aggregate::year_options(table);
        self.make_options = aggregate::make_options(table);
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the panel.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        filter: &mut FilterState,
        source: Option<&PathBuf>,
        has_data: bool,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("⚡ EV Dash")
                    .size(22.0)
                    .color(Color32::from_rgb(0x00, 0xC4, 0x9F)),
            );
            ui.label(
                RichText::new("Electric Vehicle Population Analytics")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = source
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(if source.is_some() {
                        Color32::WHITE
                    } else {
                        Color32::GRAY
                    }));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Filter Section =====
        ui.label(RichText::new("🔧 Filters").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 90.0;
        let combo_width = 160.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Model Year:"));
            ComboBox::from_id_salt("year_filter")
                .width(combo_width)
                .selected_text(filter.year().unwrap_or("All Years").to_string())
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(filter.year().is_none(), "All Years")
                        .clicked()
                    {
                        filter.set_year(None);
                    }
                    for year in &self.year_options {
                        if ui
                            .selectable_label(filter.year() == Some(year.as_str()), year)
                            .clicked()
                        {
                            filter.set_year(Some(year.clone()));
                        }
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Make:"));
            ComboBox::from_id_salt("make_filter")
                .width(combo_width)
                .selected_text(filter.make().unwrap_or("All Manufacturers").to_string())
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(filter.make().is_none(), "All Manufacturers")
                        .clicked()
                    {
                        filter.set_make(None);
                    }
                    for make in &self.make_options {
                        if ui
                            .selectable_label(filter.make() == Some(make.as_str()), make)
                            .clicked()
                        {
                            filter.set_make(Some(make.clone()));
                        }
                    }
                });
        });

        ui.add_space(10.0);

        if filter.is_active() && ui.button("↺ Reset Filters").clicked() {
            filter.reset();
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Actions =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(has_data, |ui| {
                let button = egui::Button::new(RichText::new("📄 Export Summary").size(14.0))
                    .min_size(egui::vec2(180.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportSummary;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}
