//! Filter selections coming from the dashboard controls.
//!
//! Both types are rebuilt from control values on every interaction and never
//! outlive a single recomputation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use qtty::Kilograms;

/// Wire value of the "all sites" dropdown entry.
pub const ALL_SITES: &str = "ALL";

/// Site chosen in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    /// Aggregate across every launch site.
    #[default]
    All,
    /// A single named launch site.
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value. `"ALL"` selects every site, anything else is a
    /// concrete site name.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }

    /// Whether a record launched from `site` is part of this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

impl Serialize for SiteSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_value())
    }
}

impl<'de> Deserialize<'de> for SiteSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(SiteSelection::from_value(&value))
    }
}

/// Inclusive payload mass window from the range slider.
///
/// `low > high` is not rejected; such a window simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: Kilograms,
    pub high: Kilograms,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low: Kilograms::new(low),
            high: Kilograms::new(high),
        }
    }

    pub fn contains(&self, mass: Kilograms) -> bool {
        self.low <= mass && mass <= self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        PayloadRange::new(low, high)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low.value(), range.high.value()]
    }
}
