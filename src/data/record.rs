//! Vehicle Record Module
//! One row of the EV population dataset, with defensive numeric accessors.

/// `Electric Vehicle Type` value for battery electric vehicles.
pub const BEV_TYPE: &str = "Battery Electric Vehicle (BEV)";
/// `Electric Vehicle Type` value for plug-in hybrids.
pub const PHEV_TYPE: &str = "Plug-in Hybrid Electric Vehicle (PHEV)";

/// A single registration row. Fields hold the raw CSV text; an empty string
/// means the value was missing. Records are immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleRecord {
    pub make: String,
    pub model: String,
    pub model_year: String,
    pub electric_range: String,
    pub ev_type: String,
    pub state: String,
    pub county: String,
}

impl VehicleRecord {
    /// Model year as a number, `None` when missing or non-numeric.
    pub fn parsed_year(&self) -> Option<i32> {
        self.model_year.trim().parse().ok()
    }

    /// Electric range as a finite number, `None` when missing or non-numeric.
    pub fn parsed_range(&self) -> Option<f64> {
        let range: f64 = self.electric_range.trim().parse().ok()?;
        range.is_finite().then_some(range)
    }

    /// Location key: `State` when present, otherwise `County`.
    pub fn location(&self) -> Option<&str> {
        if !self.state.is_empty() {
            Some(&self.state)
        } else if !self.county.is_empty() {
            Some(&self.county)
        } else {
            None
        }
    }

    /// Rows missing Model Year, Make, or Model are dropped at load time.
    pub fn is_complete(&self) -> bool {
        !self.model_year.is_empty() && !self.make.is_empty() && !self.model.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numbers() {
        let record = VehicleRecord {
            model_year: " 2020 ".to_string(),
            electric_range: " 250.5 ".to_string(),
            ..VehicleRecord::default()
        };
        assert_eq!(record.parsed_year(), Some(2020));
        assert_eq!(record.parsed_range(), Some(250.5));
    }

    #[test]
    fn rejects_missing_and_malformed_numbers() {
        for raw in ["", "abc", "20x0", "NaN", "inf"] {
            let record = VehicleRecord {
                model_year: raw.to_string(),
                electric_range: raw.to_string(),
                ..VehicleRecord::default()
            };
            assert_eq!(record.parsed_year(), None, "year {raw:?}");
            assert_eq!(record.parsed_range(), None, "range {raw:?}");
        }
    }

    #[test]
    fn location_prefers_state_over_county() {
        let record = VehicleRecord {
            state: "WA".to_string(),
            county: "King".to_string(),
            ..VehicleRecord::default()
        };
        assert_eq!(record.location(), Some("WA"));

        let record = VehicleRecord {
            county: "King".to_string(),
            ..VehicleRecord::default()
        };
        assert_eq!(record.location(), Some("King"));

        assert_eq!(VehicleRecord::default().location(), None);
    }

    #[test]
    fn completeness_requires_year_make_model() {
        let complete = VehicleRecord {
            make: "Tesla".to_string(),
            model: "Model 3".to_string(),
            model_year: "2020".to_string(),
            ..VehicleRecord::default()
        };
        assert!(complete.is_complete());

        let missing_model = VehicleRecord {
            model: String::new(),
            ..complete.clone()
        };
        assert!(!missing_model.is_complete());
    }
}
