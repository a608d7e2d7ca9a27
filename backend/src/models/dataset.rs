//! In-memory launch dataset.
//!
//! The dataset is loaded once at startup and shared read-only by every
//! recomputation. Alongside the records it keeps the values the dashboard
//! controls are initialised from: the payload bounds and the launch sites in
//! the order they first appear in the source.

use std::path::Path;

use log::info;
use qtty::Kilograms;

use super::launch::LaunchRecord;
use super::selection::PayloadRange;
use crate::error::{DashboardError, DashboardResult};
use crate::parsing::csv_parser;

#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: Kilograms,
    max_payload: Kilograms,
    sites: Vec<String>,
}

impl Dataset {
    /// Load the dataset from a delimited text file.
    ///
    /// # Errors
    /// Returns [`DashboardError::DataUnavailable`] if the file cannot be read,
    /// is missing a required column, has a malformed row or holds no records.
    pub fn load(path: &Path) -> DashboardResult<Self> {
        if !path.exists() {
            return Err(DashboardError::data_unavailable(path, "file not found"));
        }

        let records = csv_parser::parse_launch_csv_to_records(path)?;
        let dataset = Self::from_records(records)
            .map_err(|e| DashboardError::data_unavailable(path, e))?;

        info!(
            "Loaded {} launch records from {} ({} sites, payload {}..={} kg)",
            dataset.len(),
            path.display(),
            dataset.sites.len(),
            dataset.min_payload.value(),
            dataset.max_payload.value()
        );

        Ok(dataset)
    }

    /// Build a dataset from records already in memory.
    ///
    /// Fails when `records` is empty or a payload mass is not finite, since
    /// the payload bounds are undefined in either case.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, String> {
        let first = records
            .first()
            .ok_or_else(|| "dataset contains no launch records".to_string())?;

        let mut min_payload = first.payload_mass;
        let mut max_payload = first.payload_mass;
        let mut sites: Vec<String> = Vec::new();

        for (i, record) in records.iter().enumerate() {
            if !record.payload_mass.value().is_finite() {
                return Err(format!(
                    "record {} has a non-finite payload mass ({})",
                    i,
                    record.payload_mass.value()
                ));
            }
            if record.payload_mass < min_payload {
                min_payload = record.payload_mass;
            }
            if record.payload_mass > max_payload {
                max_payload = record.payload_mass;
            }
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        Ok(Self {
            records,
            min_payload,
            max_payload,
            sites,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload(&self) -> Kilograms {
        self.min_payload
    }

    pub fn max_payload(&self) -> Kilograms {
        self.max_payload
    }

    /// The `[min, max]` payload window covering every record.
    pub fn payload_bounds(&self) -> PayloadRange {
        PayloadRange {
            low: self.min_payload,
            high: self.max_payload,
        }
    }

    /// Distinct launch sites, first-seen order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;

    fn record(site: &str, mass: f64) -> LaunchRecord {
        LaunchRecord::new(site, mass, Outcome::Success, "FT")
    }

    #[test]
    fn test_from_records_derives_bounds_and_sites() {
        let dataset = Dataset::from_records(vec![
            record("CCAFS LC-40", 2500.0),
            record("VAFB SLC-4E", 9600.0),
            record("CCAFS LC-40", 0.0),
            record("KSC LC-39A", 5300.0),
            record("VAFB SLC-4E", 475.0),
        ])
        .unwrap();

        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.min_payload().value(), 0.0);
        assert_eq!(dataset.max_payload().value(), 9600.0);
        assert_eq!(
            dataset.sites(),
            &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
        assert_eq!(dataset.payload_bounds(), PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_from_records_rejects_empty() {
        let err = Dataset::from_records(Vec::new()).unwrap_err();
        assert!(err.contains("no launch records"));
    }

    #[test]
    fn test_from_records_rejects_nan_payload() {
        let err =
            Dataset::from_records(vec![record("A", f64::NAN), record("A", 200.0)]).unwrap_err();
        assert!(err.contains("record 0"));
    }

    #[test]
    fn test_single_record_bounds_collapse() {
        let dataset = Dataset::from_records(vec![record("A", 1234.0)]).unwrap();
        assert_eq!(dataset.min_payload(), dataset.max_payload());
        assert_eq!(dataset.sites(), &["A"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load(Path::new("/nonexistent/launches.csv")).unwrap_err();
        assert!(err.is_data_unavailable());
        assert!(err.to_string().contains("file not found"));
    }
}
