//! Chart Aggregators Module
//! Pure transformations from record collections to chart-ready sequences.
//!
//! Counting preserves first-seen key order, and the descending sorts are
//! stable, so ties always resolve to the key that appeared first in the
//! input. Malformed per-row values are excluded, never errors.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::data::VehicleRecord;

/// One point of a chart dataset: a label and how many rows it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub label: String,
    pub count: u64,
}

impl ChartEntry {
    fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Counter that remembers the order keys were first seen in.
#[derive(Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<ChartEntry>,
}

impl OrderedCounter {
    fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push(ChartEntry::new(key, 1));
            }
        }
    }

    /// Entries in first-seen order.
    fn into_entries(self) -> Vec<ChartEntry> {
        self.entries
    }

    /// Entries sorted by descending count; the sort is stable, so equal
    /// counts keep first-seen order.
    fn into_sorted_desc(self) -> Vec<ChartEntry> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

/// Top 10 manufacturers by row count in the filtered view.
pub fn top_makes(view: &[&VehicleRecord]) -> Vec<ChartEntry> {
    let mut counter = OrderedCounter::default();
    for record in view {
        counter.add(&record.make);
    }
    let mut entries = counter.into_sorted_desc();
    entries.truncate(10);
    entries
}

/// Registrations per model year from 2010 on, ascending.
///
/// Runs over the full table rather than the filtered view; the growth trend
/// is global and ignores the active filters.
pub fn yearly_growth(table: &[VehicleRecord]) -> Vec<ChartEntry> {
    let mut counter = OrderedCounter::default();
    for record in table {
        if record.parsed_year().is_some_and(|y| y >= 2010) {
            counter.add(&record.model_year);
        }
    }
    let mut entries = counter.into_entries();
    entries.sort_by_key(|e| e.label.trim().parse::<i32>().unwrap_or(i32::MIN));
    entries
}

/// Fixed labels of the electric-range histogram, in emission order.
pub const RANGE_BUCKETS: [&str; 7] = [
    "0-50", "51-100", "101-150", "151-200", "201-250", "251-300", "300+",
];

const BUCKET_CEILINGS: [f64; 6] = [50.0, 100.0, 150.0, 200.0, 250.0, 300.0];

/// Histogram of parseable electric ranges over the filtered view. All seven
/// buckets are emitted in fixed order even when empty; each band includes
/// its upper bound.
pub fn range_buckets(view: &[&VehicleRecord]) -> Vec<ChartEntry> {
    let mut counts = [0u64; RANGE_BUCKETS.len()];
    for record in view {
        let Some(range) = record.parsed_range() else {
            continue;
        };
        let bucket = BUCKET_CEILINGS
            .iter()
            .position(|&ceiling| range <= ceiling)
            .unwrap_or(RANGE_BUCKETS.len() - 1);
        counts[bucket] += 1;
    }

    RANGE_BUCKETS
        .iter()
        .zip(counts)
        .map(|(label, count)| ChartEntry::new(*label, count))
        .collect()
}

/// BEV / PHEV / Other breakdown of the filtered view, classified by
/// substring containment. Rows with an empty type are excluded; categories
/// appear in first-seen order and only when present.
pub fn vehicle_types(view: &[&VehicleRecord]) -> Vec<ChartEntry> {
    let mut counter = OrderedCounter::default();
    for record in view {
        if record.ev_type.is_empty() {
            continue;
        }
        let category = if record.ev_type.contains("BEV") {
            "BEV"
        } else if record.ev_type.contains("PHEV") {
            "PHEV"
        } else {
            "Other"
        };
        counter.add(category);
    }
    counter.into_entries()
}

/// Top 8 "Make Model" combinations in the filtered view.
pub fn top_models(view: &[&VehicleRecord]) -> Vec<ChartEntry> {
    let mut counter = OrderedCounter::default();
    for record in view {
        counter.add(&format!("{} {}", record.make, record.model));
    }
    let mut entries = counter.into_sorted_desc();
    entries.truncate(8);
    entries
}

/// Top 10 locations in the filtered view. The key is State when non-empty,
/// else County; rows resolving to nothing or to the literal "Unknown" are
/// excluded.
pub fn geo_distribution(view: &[&VehicleRecord]) -> Vec<ChartEntry> {
    let mut counter = OrderedCounter::default();
    for record in view {
        let Some(location) = record.location() else {
            continue;
        };
        if location == "Unknown" {
            continue;
        }
        counter.add(location);
    }
    let mut entries = counter.into_sorted_desc();
    entries.truncate(10);
    entries
}

/// Distinct model-year values from 2010 on, newest first. Feeds the year
/// selector.
pub fn year_options(table: &[VehicleRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut years: Vec<String> = Vec::new();
    for record in table {
        if record.parsed_year().is_some_and(|y| y >= 2010) && seen.insert(record.model_year.clone())
        {
            years.push(record.model_year.clone());
        }
    }
    years.sort_by_key(|y| std::cmp::Reverse(y.trim().parse::<i32>().unwrap_or(i32::MIN)));
    years
}

/// Distinct non-empty makes, alphabetical. Feeds the make selector.
pub fn make_options(table: &[VehicleRecord]) -> Vec<String> {
    let mut makes: Vec<String> = table
        .iter()
        .filter(|r| !r.make.is_empty())
        .map(|r| r.make.clone())
        .collect();
    makes.sort();
    makes.dedup();
    makes
}
