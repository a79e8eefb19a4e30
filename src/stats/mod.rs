//! Stats module - summary metrics

mod calculator;

pub use calculator::{Metrics, MetricsCalculator};
