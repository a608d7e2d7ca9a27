//! Launch record types.

use serde::{Deserialize, Serialize};
use std::fmt;

use qtty::Kilograms;

/// Binary mission outcome as recorded in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure = 0,
    Success = 1,
}

impl Outcome {
    /// Numeric class value (0 or 1).
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("outcome class must be 0 or 1, got {}", other)),
        }
    }
}

impl TryFrom<i64> for Outcome {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| format!("outcome class must be 0 or 1, got {}", value))
            .and_then(Outcome::try_from)
    }
}

/// Class values read from a float column must be exactly 0 or 1.
impl TryFrom<f64> for Outcome {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 0.0 {
            Ok(Outcome::Failure)
        } else if value == 1.0 {
            Ok(Outcome::Success)
        } else {
            Err(format!("outcome class must be 0 or 1, got {}", value))
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.value()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A single historical launch.
///
/// Records are immutable once loaded; every chart works on borrowed views of
/// the full collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<i64>,
    pub launch_site: String,
    pub payload_mass: Kilograms,
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            payload_mass: Kilograms::new(payload_mass),
            outcome,
            booster_version: None,
            booster_version_category: booster_version_category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class_value() {
        assert_eq!(Outcome::try_from(0u8), Ok(Outcome::Failure));
        assert_eq!(Outcome::try_from(1u8), Ok(Outcome::Success));
        assert!(Outcome::try_from(2u8).is_err());
        assert!(Outcome::try_from(-1i64).is_err());
        assert_eq!(Outcome::try_from(1i64), Ok(Outcome::Success));
    }

    #[test]
    fn test_outcome_from_float_class() {
        assert_eq!(Outcome::try_from(0.0f64), Ok(Outcome::Failure));
        assert_eq!(Outcome::try_from(1.0f64), Ok(Outcome::Success));
        assert!(Outcome::try_from(0.5f64).is_err());
        assert!(Outcome::try_from(1.5f64).is_err());
        assert!(Outcome::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_outcome_serializes_as_integer() {
        let json = serde_json::to_string(&Outcome::Success).unwrap();
        assert_eq!(json, "1");
        let parsed: Outcome = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, Outcome::Failure);
        assert!(serde_json::from_str::<Outcome>("3").is_err());
    }

    #[test]
    fn test_launch_record_serialization_skips_missing_optionals() {
        let record = LaunchRecord::new("CCAFS LC-40", 2500.0, Outcome::Success, "FT");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["launch_site"], "CCAFS LC-40");
        assert_eq!(value["payload_mass"], 2500.0);
        assert_eq!(value["outcome"], 1);
        assert!(value.get("flight_number").is_none());
        assert!(value.get("booster_version").is_none());
    }
}
