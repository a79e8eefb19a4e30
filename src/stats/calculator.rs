//! Metrics Calculator Module
//! Scalar summary statistics over the full (unfiltered) record table.

use serde::Serialize;
use std::collections::HashSet;

use crate::data::{VehicleRecord, BEV_TYPE, PHEV_TYPE};

/// Dashboard headline metrics, computed once after load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub total_vehicles: usize,
    /// Mean of positive parseable ranges, rounded to 1 decimal; 0 when none.
    pub avg_range: f64,
    pub popular_make: String,
    pub unique_models: usize,
    pub bev_count: usize,
    pub phev_count: usize,
    /// `None` when no row has a parseable model year.
    pub latest_year: Option<i32>,
    pub latest_year_count: usize,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            total_vehicles: 0,
            avg_range: 0.0,
            popular_make: "N/A".to_string(),
            unique_models: 0,
            bev_count: 0,
            phev_count: 0,
            latest_year: None,
            latest_year_count: 0,
        }
    }
}

/// Computes [`Metrics`] from the record table. Pure; never mutates the table.
pub struct MetricsCalculator;

impl MetricsCalculator {
    pub fn compute(table: &[VehicleRecord]) -> Metrics {
        let total_vehicles = table.len();

        let ranges: Vec<f64> = table
            .iter()
            .filter_map(|r| r.parsed_range())
            .filter(|&v| v > 0.0)
            .collect();
        let avg_range = if ranges.is_empty() {
            0.0
        } else {
            let mean = ranges.iter().sum::<f64>() / ranges.len() as f64;
            (mean * 10.0).round() / 10.0
        };

        let popular_make = Self::most_frequent_make(table).unwrap_or_else(|| "N/A".to_string());

        let unique_models: usize = table
            .iter()
            .map(|r| r.model.as_str())
            .collect::<HashSet<_>>()
            .len();

        let bev_count = table.iter().filter(|r| r.ev_type == BEV_TYPE).count();
        let phev_count = table.iter().filter(|r| r.ev_type == PHEV_TYPE).count();

        let latest_year = table.iter().filter_map(|r| r.parsed_year()).max();
        let latest_year_count = latest_year
            .map(|latest| {
                table
                    .iter()
                    .filter(|r| r.parsed_year() == Some(latest))
                    .count()
            })
            .unwrap_or(0);

        Metrics {
            total_vehicles,
            avg_range,
            popular_make,
            unique_models,
            bev_count,
            phev_count,
            latest_year,
            latest_year_count,
        }
    }

    /// Make with the highest row count; ties go to the first make seen in
    /// input order.
    fn most_frequent_make(table: &[VehicleRecord]) -> Option<String> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for record in table {
            match counts.iter_mut().find(|(make, _)| *make == record.make) {
                Some((_, n)) => *n += 1,
                None => counts.push((&record.make, 1)),
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (make, n) in counts {
            if best.is_none_or(|(_, best_n)| n > best_n) {
                best = Some((make, n));
            }
        }
        best.map(|(make, _)| make.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(make: &str, model: &str, year: &str, range: &str, ev_type: &str) -> VehicleRecord {
        VehicleRecord {
            make: make.to_string(),
            model: model.to_string(),
            model_year: year.to_string(),
            electric_range: range.to_string(),
            ev_type: ev_type.to_string(),
            ..VehicleRecord::default()
        }
    }

    #[test]
    fn two_tesla_example() {
        let table = vec![
            rec("Tesla", "Model 3", "2020", "250", BEV_TYPE),
            rec("Tesla", "Model Y", "2021", "300", BEV_TYPE),
        ];
        let metrics = MetricsCalculator::compute(&table);

        assert_eq!(metrics.total_vehicles, 2);
        assert_eq!(metrics.avg_range, 275.0);
        assert_eq!(metrics.popular_make, "Tesla");
        assert_eq!(metrics.unique_models, 2);
        assert_eq!(metrics.bev_count, 2);
        assert_eq!(metrics.phev_count, 0);
        assert_eq!(metrics.latest_year, Some(2021));
        assert_eq!(metrics.latest_year_count, 1);
    }

    #[test]
    fn avg_range_is_zero_without_positive_parseable_ranges() {
        let table = vec![
            rec("Tesla", "Model 3", "2020", "0", BEV_TYPE),
            rec("Tesla", "Model 3", "2020", "-5", BEV_TYPE),
            rec("Tesla", "Model 3", "2020", "unknown", BEV_TYPE),
            rec("Tesla", "Model 3", "2020", "", BEV_TYPE),
        ];
        assert_eq!(MetricsCalculator::compute(&table).avg_range, 0.0);
        assert_eq!(MetricsCalculator::compute(&[]).avg_range, 0.0);
    }

    #[test]
    fn avg_range_rounds_to_one_decimal() {
        let table = vec![
            rec("A", "X", "2020", "100", BEV_TYPE),
            rec("A", "X", "2020", "101", BEV_TYPE),
            rec("A", "X", "2020", "101", BEV_TYPE),
        ];
        // 302 / 3 = 100.666...
        assert_eq!(MetricsCalculator::compute(&table).avg_range, 100.7);
    }

    #[test]
    fn popular_make_ties_break_first_seen() {
        let table = vec![
            rec("Nissan", "Leaf", "2019", "150", BEV_TYPE),
            rec("Tesla", "Model 3", "2020", "250", BEV_TYPE),
            rec("Tesla", "Model Y", "2021", "300", BEV_TYPE),
            rec("Nissan", "Ariya", "2022", "270", BEV_TYPE),
        ];
        assert_eq!(MetricsCalculator::compute(&table).popular_make, "Nissan");
    }

    #[test]
    fn empty_table_yields_placeholder_make() {
        let metrics = MetricsCalculator::compute(&[]);
        assert_eq!(metrics.popular_make, "N/A");
        assert_eq!(metrics.total_vehicles, 0);
    }

    #[test]
    fn type_counts_are_exact_matches_only() {
        let table = vec![
            rec("Tesla", "Model 3", "2020", "250", BEV_TYPE),
            rec("Toyota", "Prius Prime", "2020", "25", PHEV_TYPE),
            rec("Ford", "F-150", "2020", "", "Battery Electric Vehicle"),
        ];
        let metrics = MetricsCalculator::compute(&table);
        assert_eq!(metrics.bev_count, 1);
        assert_eq!(metrics.phev_count, 1);
    }

    #[test]
    fn latest_year_is_none_without_parseable_years() {
        let table = vec![rec("Tesla", "Model 3", "unknown", "250", BEV_TYPE)];
        let metrics = MetricsCalculator::compute(&table);
        assert_eq!(metrics.latest_year, None);
        assert_eq!(metrics.latest_year_count, 0);
    }
}
