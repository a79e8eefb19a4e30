//! End-to-end flow: load a CSV from disk, compute metrics, filter, and
//! aggregate into chart datasets.

use std::io::Write;

use tempfile::NamedTempFile;

use evdash::charts::aggregate;
use evdash::data::{DataLoader, FilterState, LoaderError};
use evdash::stats::MetricsCalculator;

const SAMPLE_CSV: &str = "\
State,County,Make,Model,Model Year,Electric Vehicle Type,Electric Range
WA,King,Tesla,Model 3,2020,Battery Electric Vehicle (BEV),250
CA,Orange,Tesla,Model Y,2021,Battery Electric Vehicle (BEV),300
WA,King,Nissan,Leaf,2019,Battery Electric Vehicle (BEV),150
WA,Snohomish,Toyota,Prius Prime,2021,Plug-in Hybrid Electric Vehicle (PHEV),25
,Thurston,Chevrolet,Bolt EV,2020,Battery Electric Vehicle (BEV),238
WA,King,,Leaf,2019,Battery Electric Vehicle (BEV),150
WA,King,Tesla,Model S,2012,Battery Electric Vehicle (BEV),265
";

fn load_sample() -> DataLoader {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{SAMPLE_CSV}").unwrap();

    let mut loader = DataLoader::new();
    let count = loader.load_csv(tmp.path()).unwrap();
    // The row with a missing Make is dropped.
    assert_eq!(count, 6);
    loader
}

#[test]
fn metrics_from_loaded_table() {
    let loader = load_sample();
    let metrics = MetricsCalculator::compute(loader.records());

    assert_eq!(metrics.total_vehicles, 6);
    assert_eq!(metrics.popular_make, "Tesla");
    assert_eq!(metrics.unique_models, 6);
    assert_eq!(metrics.bev_count, 5);
    assert_eq!(metrics.phev_count, 1);
    assert_eq!(metrics.latest_year, Some(2021));
    assert_eq!(metrics.latest_year_count, 2);
    // (250 + 300 + 150 + 25 + 238 + 265) / 6 = 204.666...
    assert_eq!(metrics.avg_range, 204.7);
}

#[test]
fn filtered_aggregation_counts_only_matching_rows() {
    let loader = load_sample();
    let table = loader.records();

    let mut filter = FilterState::default();
    filter.set_make(Some("Tesla".to_string()));
    let view = filter.apply(table);
    assert_eq!(view.len(), 3);

    let makes = aggregate::top_makes(&view);
    assert_eq!(makes.len(), 1);
    assert_eq!(makes[0].label, "Tesla");
    assert_eq!(makes[0].count, 3);

    // Growth always runs over the full table, so the make filter does not
    // change the trend.
    let growth = aggregate::yearly_growth(table);
    let labels: Vec<&str> = growth.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["2012", "2019", "2020", "2021"]);
    let total: u64 = growth.iter().map(|e| e.count).sum();
    assert_eq!(total, 6);
}

#[test]
fn option_lists_feed_the_selectors() {
    let loader = load_sample();
    let table = loader.records();

    assert_eq!(aggregate::year_options(table), vec!["2021", "2020", "2019", "2012"]);
    assert_eq!(
        aggregate::make_options(table),
        vec!["Chevrolet", "Nissan", "Tesla", "Toyota"]
    );
}

#[test]
fn geo_distribution_prefers_state_and_falls_back_to_county() {
    let loader = load_sample();
    let view: Vec<_> = loader.records().iter().collect();

    let geo = aggregate::geo_distribution(&view);
    assert_eq!(geo[0].label, "WA");
    assert_eq!(geo[0].count, 4);
    assert!(geo.iter().any(|e| e.label == "Thurston" && e.count == 1));
    assert!(geo.iter().any(|e| e.label == "CA" && e.count == 1));
}

#[test]
fn missing_file_is_terminal_fetch_error() {
    let mut loader = DataLoader::new();
    let err = loader
        .load_csv(std::path::Path::new("/does/not/exist.csv"))
        .unwrap_err();
    assert!(matches!(err, LoaderError::Fetch(_)));
}
