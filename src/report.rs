//! Summary Report Module
//! Serializes the current dashboard state (metrics plus every chart
//! dataset) to a JSON file chosen by the user.

use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

use crate::charts::aggregate;
use crate::charts::ChartEntry;
use crate::data::{FilterState, VehicleRecord};
use crate::stats::Metrics;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct FilterSummary {
    pub year: Option<String>,
    pub make: Option<String>,
}

/// Everything the dashboard shows, in one exportable document.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub source: String,
    pub filters: FilterSummary,
    pub metrics: Metrics,
    pub top_makes: Vec<ChartEntry>,
    pub yearly_growth: Vec<ChartEntry>,
    pub range_buckets: Vec<ChartEntry>,
    pub vehicle_types: Vec<ChartEntry>,
    pub top_models: Vec<ChartEntry>,
    pub geo_distribution: Vec<ChartEntry>,
    pub year_options: Vec<String>,
    pub make_options: Vec<String>,
}

impl SummaryReport {
    /// Run every aggregator against the current table and filter state.
    pub fn collect(
        source: String,
        table: &[VehicleRecord],
        filter: &FilterState,
        metrics: &Metrics,
    ) -> Self {
        let view = filter.apply(table);

        Self {
            source,
            filters: FilterSummary {
                year: filter.year().map(str::to_string),
                make: filter.make().map(str::to_string),
            },
            metrics: metrics.clone(),
            top_makes: aggregate::top_makes(&view),
            yearly_growth: aggregate::yearly_growth(table),
            range_buckets: aggregate::range_buckets(&view),
            vehicle_types: aggregate::vehicle_types(&view),
            top_models: aggregate::top_models(&view),
            geo_distribution: aggregate::geo_distribution(&view),
            year_options: aggregate::year_options(table),
            make_options: aggregate::make_options(table),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BEV_TYPE;
    use crate::stats::MetricsCalculator;

    fn sample_table() -> Vec<VehicleRecord> {
        vec![
            VehicleRecord {
                make: "Tesla".to_string(),
                model: "Model 3".to_string(),
                model_year: "2020".to_string(),
                electric_range: "250".to_string(),
                ev_type: BEV_TYPE.to_string(),
                state: "WA".to_string(),
                ..VehicleRecord::default()
            },
            VehicleRecord {
                make: "Nissan".to_string(),
                model: "Leaf".to_string(),
                model_year: "2019".to_string(),
                electric_range: "150".to_string(),
                ev_type: BEV_TYPE.to_string(),
                state: "OR".to_string(),
                ..VehicleRecord::default()
            },
        ]
    }

    #[test]
    fn report_serializes_without_error() {
        let table = sample_table();
        let metrics = MetricsCalculator::compute(&table);
        let mut filter = FilterState::default();
        filter.set_make(Some("Tesla".to_string()));

        let report = SummaryReport::collect("test.csv".to_string(), &table, &filter, &metrics);
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"popular_make\""));
        assert!(json.contains("Tesla Model 3"));
    }

    #[test]
    fn filtered_charts_respect_the_filter_but_growth_does_not() {
        let table = sample_table();
        let metrics = MetricsCalculator::compute(&table);
        let mut filter = FilterState::default();
        filter.set_make(Some("Tesla".to_string()));

        let report = SummaryReport::collect("test.csv".to_string(), &table, &filter, &metrics);

        assert_eq!(report.top_makes.len(), 1);
        assert_eq!(report.top_makes[0].label, "Tesla");
        // Growth runs over the full table.
        assert_eq!(report.yearly_growth.len(), 2);
    }

    #[test]
    fn report_writes_to_disk() {
        let table = sample_table();
        let metrics = MetricsCalculator::compute(&table);
        let filter = FilterState::default();
        let report = SummaryReport::collect("test.csv".to_string(), &table, &filter, &metrics);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        report.write_json(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["metrics"]["total_vehicles"], 2);
    }
}
