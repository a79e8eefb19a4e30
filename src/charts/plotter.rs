//! Chart Plotter Module
//! Renders aggregator output as interactive visualizations using egui_plot.

use egui::{Color32, Pos2, RichText, Sense, Stroke, Vec2};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use super::aggregate::ChartEntry;

/// Dashboard color palette.
pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x00, 0xC4, 0x9F), // Teal
    Color32::from_rgb(0x00, 0x88, 0xFE), // Blue
    Color32::from_rgb(0xFF, 0xBB, 0x28), // Yellow
    Color32::from_rgb(0xFF, 0x80, 0x42), // Orange
    Color32::from_rgb(0x88, 0x84, 0xD8), // Purple
    Color32::from_rgb(0xFF, 0x6B, 0x9D), // Pink
    Color32::from_rgb(0xC0, 0x84, 0xFC), // Lavender
    Color32::from_rgb(0x34, 0xD3, 0x99), // Green
];

/// Creates dashboard charts from `ChartEntry` sequences.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Vertical bar chart with one bar per entry, labeled on the x-axis.
    pub fn draw_bar_chart(
        ui: &mut egui::Ui,
        id: &str,
        entries: &[ChartEntry],
        color: Color32,
        height: f32,
    ) {
        if entries.is_empty() {
            Self::draw_empty_placeholder(ui, height);
            return;
        }

        let labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();
        let bars: Vec<Bar> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| Bar::new(i as f64, e.count as f64).name(&e.label))
            .collect();

        Plot::new(id.to_string())
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                if mark.value < -0.5 {
                    return String::new();
                }
                let idx = mark.value.round() as usize;
                if idx < labels.len() && (mark.value - idx as f64).abs() < 0.25 {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(color).width(0.6));
            });
    }

    /// Horizontal bar chart, first entry on top, labeled on the y-axis.
    pub fn draw_horizontal_bar_chart(
        ui: &mut egui::Ui,
        id: &str,
        entries: &[ChartEntry],
        color: Color32,
        height: f32,
    ) {
        if entries.is_empty() {
            Self::draw_empty_placeholder(ui, height);
            return;
        }

        let n = entries.len();
        let labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();
        let bars: Vec<Bar> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| Bar::new((n - 1 - i) as f64, e.count as f64).name(&e.label))
            .collect();

        Plot::new(id.to_string())
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(0.0)
            .y_axis_formatter(move |mark, _range| {
                if mark.value < -0.5 {
                    return String::new();
                }
                let idx = mark.value.round() as usize;
                if idx < n && (mark.value - idx as f64).abs() < 0.25 {
                    labels[n - 1 - idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(color).width(0.6).horizontal());
            });
    }

    /// Area-filled line chart for the yearly growth trend.
    pub fn draw_growth_chart(
        ui: &mut egui::Ui,
        id: &str,
        entries: &[ChartEntry],
        color: Color32,
        height: f32,
    ) {
        if entries.is_empty() {
            Self::draw_empty_placeholder(ui, height);
            return;
        }

        let labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();
        let points: PlotPoints = entries
            .iter()
            .enumerate()
            .map(|(i, e)| [i as f64, e.count as f64])
            .collect();

        Plot::new(id.to_string())
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                if mark.value < -0.5 {
                    return String::new();
                }
                let idx = mark.value.round() as usize;
                if idx < labels.len() && (mark.value - idx as f64).abs() < 0.25 {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).color(color).width(2.0).fill(0.0));
            });
    }

    /// Pie chart drawn with the painter, with a color legend underneath.
    pub fn draw_pie_chart(ui: &mut egui::Ui, entries: &[ChartEntry], height: f32) {
        let total: u64 = entries.iter().map(|e| e.count).sum();
        if total == 0 {
            Self::draw_empty_placeholder(ui, height);
            return;
        }

        let size = Vec2::new(ui.available_width(), height);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = (rect.height().min(rect.width()) / 2.0 - 8.0).max(10.0);

        let mut start_angle = -std::f32::consts::FRAC_PI_2;
        for (i, entry) in entries.iter().enumerate() {
            let sweep = std::f32::consts::TAU * entry.count as f32 / total as f32;
            let color = PALETTE[i % PALETTE.len()];
            Self::fill_sector(&painter, center, radius, start_angle, sweep, color);
            start_angle += sweep;
        }

        ui.horizontal_wrapped(|ui| {
            for (i, entry) in entries.iter().enumerate() {
                let color = PALETTE[i % PALETTE.len()];
                let (swatch, _) = ui.allocate_exact_size(Vec2::new(12.0, 12.0), Sense::hover());
                ui.painter().rect_filled(swatch, 2.0, color);
                let percent = 100.0 * entry.count as f64 / total as f64;
                ui.label(RichText::new(format!("{}: {percent:.0}%", entry.label)).size(12.0));
                ui.add_space(10.0);
            }
        });
    }

    /// Fill a circle sector as a fan of small triangles, so sweeps wider
    /// than a half turn render correctly.
    fn fill_sector(
        painter: &egui::Painter,
        center: Pos2,
        radius: f32,
        start_angle: f32,
        sweep: f32,
        color: Color32,
    ) {
        let steps = ((sweep / 0.1).ceil() as usize).max(1);
        let mut prev = center + radius * Vec2::angled(start_angle);
        for step in 1..=steps {
            let angle = start_angle + sweep * step as f32 / steps as f32;
            let next = center + radius * Vec2::angled(angle);
            painter.add(egui::Shape::convex_polygon(
                vec![center, prev, next],
                color,
                Stroke::NONE,
            ));
            prev = next;
        }
    }

    fn draw_empty_placeholder(ui: &mut egui::Ui, height: f32) {
        let size = Vec2::new(ui.available_width(), height);
        ui.allocate_ui(size, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No data for current filters").color(Color32::GRAY));
            });
        });
    }
}
