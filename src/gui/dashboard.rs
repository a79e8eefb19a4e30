//! Dashboard View
//! Central panel: metric cards on top, then a responsive grid of chart
//! cards. Aggregators re-run over the current filtered view every frame;
//! each call is a linear scan, cheap enough to recompute at render time.

use egui::{Color32, RichText, ScrollArea};

use crate::charts::aggregate;
use crate::charts::{ChartEntry, ChartPlotter, PALETTE};
use crate::data::{FilterState, VehicleRecord};
use crate::stats::Metrics;

const CHART_SPACING: f32 = 15.0;
const CARD_WIDTH: f32 = 560.0;
const CARD_HEIGHT: f32 = 360.0;
const PLOT_HEIGHT: f32 = 260.0;

enum CardKind {
    Bars(Vec<ChartEntry>, Color32),
    HorizontalBars(Vec<ChartEntry>, Color32),
    Growth(Vec<ChartEntry>, Color32),
    Pie(Vec<ChartEntry>),
}

struct ChartCard {
    title: &'static str,
    kind: CardKind,
}

/// Draw the full dashboard for a loaded table.
pub fn show(
    ui: &mut egui::Ui,
    metrics: &Metrics,
    table: &[VehicleRecord],
    filter: &FilterState,
) {
    let view = filter.apply(table);

    let cards = [
        ChartCard {
            title: "Top 10 Manufacturers by Vehicle Count",
            kind: CardKind::Bars(aggregate::top_makes(&view), PALETTE[0]),
        },
        ChartCard {
            title: "EV Population Growth Over Time",
            kind: CardKind::Growth(aggregate::yearly_growth(table), PALETTE[1]),
        },
        ChartCard {
            title: "Electric Range Distribution",
            kind: CardKind::Bars(aggregate::range_buckets(&view), PALETTE[2]),
        },
        ChartCard {
            title: "Vehicle Type Distribution",
            kind: CardKind::Pie(aggregate::vehicle_types(&view)),
        },
        ChartCard {
            title: "Most Popular EV Models",
            kind: CardKind::HorizontalBars(aggregate::top_models(&view), PALETTE[4]),
        },
        ChartCard {
            title: "Geographic Distribution (Top 10 Locations)",
            kind: CardKind::Bars(aggregate::geo_distribution(&view), PALETTE[3]),
        },
    ];

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            draw_metric_cards(ui, metrics);
            ui.add_space(CHART_SPACING);
            draw_chart_grid(ui, &cards);
            ui.add_space(CHART_SPACING);
            draw_insights(ui, metrics);
        });
}

fn draw_metric_cards(ui: &mut egui::Ui, metrics: &Metrics) {
    let latest_year = metrics
        .latest_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let cards = [
        ("⚡ Total EVs", metrics.total_vehicles.to_string(), PALETTE[0]),
        ("📊 Avg Range", format!("{} mi", metrics.avg_range), PALETTE[1]),
        ("🏆 Top Manufacturer", metrics.popular_make.clone(), PALETTE[2]),
        ("🚗 Unique Models", metrics.unique_models.to_string(), PALETTE[4]),
        ("📅 Latest Year", latest_year, PALETTE[3]),
    ];

    ui.horizontal_wrapped(|ui| {
        for (label, value, accent) in cards {
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(8.0)
                .stroke(egui::Stroke::new(1.5, accent))
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_min_width(150.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(label).size(12.0).color(Color32::GRAY));
                        ui.label(RichText::new(value).size(20.0).strong().color(accent));
                    });
                });
            ui.add_space(10.0);
        }
    });
}

fn draw_chart_grid(ui: &mut egui::Ui, cards: &[ChartCard]) {
    // Fixed-width cards wrapped into as many columns as fit.
    let avail_width = ui.available_width();
    let card_total_width = CARD_WIDTH + CHART_SPACING;
    let num_columns = ((avail_width / card_total_width).floor() as usize).max(1);

    for row in cards.chunks(num_columns) {
        ui.horizontal(|ui| {
            for card in row {
                draw_chart_card(ui, card);
                ui.add_space(CHART_SPACING);
            }
        });
        ui.add_space(CHART_SPACING);
    }
}

fn draw_chart_card(ui: &mut egui::Ui, card: &ChartCard) {
    egui::Frame::none()
        .rounding(8.0)
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH - 24.0);
            ui.set_height(CARD_HEIGHT - 24.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(card.title).size(15.0).strong());
                ui.add_space(8.0);
                match &card.kind {
                    CardKind::Bars(entries, color) => {
                        ChartPlotter::draw_bar_chart(ui, card.title, entries, *color, PLOT_HEIGHT);
                    }
                    CardKind::HorizontalBars(entries, color) => {
                        ChartPlotter::draw_horizontal_bar_chart(
                            ui,
                            card.title,
                            entries,
                            *color,
                            PLOT_HEIGHT,
                        );
                    }
                    CardKind::Growth(entries, color) => {
                        ChartPlotter::draw_growth_chart(ui, card.title, entries, *color, PLOT_HEIGHT);
                    }
                    CardKind::Pie(entries) => {
                        ChartPlotter::draw_pie_chart(ui, entries, PLOT_HEIGHT - 30.0);
                    }
                }
            });
        });
}

fn draw_insights(ui: &mut egui::Ui, metrics: &Metrics) {
    ui.label(RichText::new("Key Insights").size(17.0).strong());
    ui.add_space(8.0);

    let latest = match metrics.latest_year {
        Some(year) => format!(
            "{} vehicles registered in {}, showing rapid adoption.",
            metrics.latest_year_count, year
        ),
        None => "No model-year data available for the growth trend.".to_string(),
    };

    let insights = [
        (
            "Market Leadership",
            format!(
                "{} leads the market with the highest number of registered vehicles.",
                metrics.popular_make
            ),
        ),
        ("Growth Trajectory", latest),
        (
            "Range Evolution",
            format!(
                "Average electric range of {} miles reflects battery improvements.",
                metrics.avg_range
            ),
        ),
        (
            "Vehicle Diversity",
            format!(
                "{} unique models give consumers a wide set of options.",
                metrics.unique_models
            ),
        ),
    ];

    ui.horizontal_wrapped(|ui| {
        for (i, (title, body)) in insights.iter().enumerate() {
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(8.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_width(260.0);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{:02}", i + 1))
                                .size(12.0)
                                .color(PALETTE[i % PALETTE.len()]),
                        );
                        ui.label(RichText::new(*title).size(13.0).strong());
                        ui.label(RichText::new(body).size(12.0).color(Color32::GRAY));
                    });
                });
            ui.add_space(10.0);
        }
    });
}
