//! Filter State Module
//! Year/make equality predicates and derivation of the filtered view.

use super::record::VehicleRecord;

/// The two optional dashboard filters. `None` means "all" on that dimension.
///
/// Values are matched with exact string equality against the raw record
/// fields; a stale value that matches nothing simply yields an empty view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    year: Option<String>,
    make: Option<String>,
}

impl FilterState {
    pub fn set_year(&mut self, year: Option<String>) {
        self.year = year;
    }

    pub fn set_make(&mut self, make: Option<String>) {
        self.make = make;
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    /// Clear both constraints.
    pub fn reset(&mut self) {
        self.year = None;
        self.make = None;
    }

    /// Whether any constraint is set.
    pub fn is_active(&self) -> bool {
        self.year.is_some() || self.make.is_some()
    }

    fn matches(&self, record: &VehicleRecord) -> bool {
        self.year.as_deref().is_none_or(|y| record.model_year == y)
            && self.make.as_deref().is_none_or(|m| record.make == m)
    }

    /// Derive the filtered view by linear scan. Recomputed per use, never
    /// cached across filter changes.
    pub fn apply<'a>(&self, table: &'a [VehicleRecord]) -> Vec<&'a VehicleRecord> {
        table.iter().filter(|r| self.matches(r)).collect()
    }
}
