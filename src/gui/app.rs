//! EV Dash Main Application
//! Main window with the control panel and the dashboard, plus the one-time
//! background dataset load.

use anyhow::Context;
use egui::{Color32, RichText, SidePanel};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use crate::data::{self, DataLoader, FilterState};
use crate::gui::{dashboard, ControlPanel, ControlPanelAction};
use crate::report::SummaryReport;
use crate::stats::{Metrics, MetricsCalculator};

/// Dataset picked up automatically from the working directory when present.
const DEFAULT_DATASET: &str = "Electric_Vehicle_Population_Data.csv";

/// Dataset loading result from the background thread.
enum LoadResult {
    Complete {
        path: PathBuf,
        records: Vec<data::VehicleRecord>,
    },
    Error(String),
}

/// Main application window.
pub struct EvDashApp {
    loader: DataLoader,
    control_panel: ControlPanel,
    filter: FilterState,
    metrics: Metrics,

    // One-shot load lifecycle: pending -> ready | failed.
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
    load_error: Option<String>,
}

impl EvDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            filter: FilterState::default(),
            metrics: Metrics::default(),
            load_rx: None,
            is_loading: false,
            load_error: None,
        };

        let default = Path::new(DEFAULT_DATASET);
        if default.exists() {
            app.start_load(default.to_path_buf());
        } else {
            app.control_panel
                .set_status("No dataset found - browse for a CSV file");
        }

        app
    }

    /// Kick off a background load and start polling for its result.
    fn start_load(&mut self, path: PathBuf) {
        if self.is_loading {
            return;
        }
        self.is_loading = true;
        self.load_error = None;
        self.control_panel
            .set_status(&format!("Loading {}...", path.display()));
        log::info!("loading dataset from {}", path.display());

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match data::read_records(&path) {
                Ok(records) => LoadResult::Complete { path, records },
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for dataset loading results.
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete { path, records } => {
                        let count = records.len();
                        self.metrics = MetricsCalculator::compute(&records);
                        self.loader.set_records(path, records);
                        self.filter.reset();
                        self.control_panel.update_options(self.loader.records());
                        self.control_panel
                            .set_status(&format!("Loaded {count} vehicles"));
                        log::info!("dataset ready: {count} records");
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        log::error!("dataset load failed: {error}");
                        self.control_panel.set_status(&format!("Error: {error}"));
                        self.load_error = Some(error);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Handle CSV file selection.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(path);
        }
    }

    /// Handle summary export to a user-chosen JSON file.
    fn handle_export_summary(&mut self) {
        if self.loader.records().is_empty() {
            self.control_panel.set_status("No data to export");
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("ev_summary.json")
            .save_file()
        else {
            return;
        };

        match self.export_summary(&path) {
            Ok(()) => {
                self.control_panel
                    .set_status(&format!("Exported {}", path.display()));
                log::info!("summary exported to {}", path.display());
            }
            Err(e) => {
                self.control_panel.set_status(&format!("Error: {e:#}"));
                log::error!("summary export failed: {e:#}");
            }
        }
    }

    fn export_summary(&self, path: &Path) -> anyhow::Result<()> {
        let source = self
            .loader
            .file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let report =
            SummaryReport::collect(source, self.loader.records(), &self.filter, &self.metrics);
        report
            .write_json(path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        Ok(())
    }

    fn draw_central_panel(&mut self, ui: &mut egui::Ui) {
        if let Some(error) = &self.load_error {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Error Loading Data")
                            .size(20.0)
                            .color(Color32::from_rgb(220, 53, 69)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(error).size(13.0));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!(
                            "Make sure {DEFAULT_DATASET} is in the working directory, \
                             or browse for another CSV"
                        ))
                        .size(12.0)
                        .color(Color32::GRAY),
                    );
                });
            });
            return;
        }

        if self.is_loading {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.add_space(8.0);
                    ui.label(RichText::new("Loading EV Analytics Data...").size(15.0));
                });
            });
            return;
        }

        if self.loader.records().is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        dashboard::show(ui, &self.metrics, self.loader.records(), &self.filter);
    }
}

impl eframe::App for EvDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while the dataset is loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let has_data = !self.loader.records().is_empty();
                    let source = self.loader.file_path().cloned();
                    let action =
                        self.control_panel
                            .show(ui, &mut self.filter, source.as_ref(), has_data);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::ExportSummary => self.handle_export_summary(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_central_panel(ui);
        });
    }
}
