//! Charts module - aggregation and rendering

pub mod aggregate;
mod plotter;

pub use aggregate::ChartEntry;
pub use plotter::{ChartPlotter, PALETTE};
