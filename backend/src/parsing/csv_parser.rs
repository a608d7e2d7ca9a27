use polars::prelude::*;
use std::path::Path;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{LaunchRecord, Outcome};

/// Column holding the launch site name.
pub const LAUNCH_SITE: &str = "Launch Site";
/// Column holding the payload mass in kilograms.
pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
/// Column holding the binary outcome (1 = success).
pub const CLASS: &str = "class";
/// Column holding the booster version category.
pub const BOOSTER_VERSION_CATEGORY: &str = "Booster Version Category";
pub const FLIGHT_NUMBER: &str = "Flight Number";
pub const BOOSTER_VERSION: &str = "Booster Version";

/// Parse a launch CSV file into a Polars DataFrame.
///
/// Columns are read as inferred; [`dataframe_to_records`] casts what it needs.
pub fn parse_launch_csv(csv_path: &Path) -> DashboardResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))
        .and_then(|reader| reader.finish())
        .map_err(|e| {
            DashboardError::data_unavailable(csv_path, format!("Failed to parse CSV: {}", e))
        })
}

/// Parse a launch CSV file straight into records.
pub fn parse_launch_csv_to_records(csv_path: &Path) -> DashboardResult<Vec<LaunchRecord>> {
    let df = parse_launch_csv(csv_path)?;
    dataframe_to_records(&df, csv_path)
}

/// Convert a Polars DataFrame to launch records.
///
/// `source` is only used to label errors.
pub fn dataframe_to_records(df: &DataFrame, source: &Path) -> DashboardResult<Vec<LaunchRecord>> {
    let polars_err = |column: &str, e: PolarsError| {
        DashboardError::data_unavailable(source, format!("Column '{}': {}", column, e))
    };
    let missing = |column: &str, row: usize| {
        DashboardError::data_unavailable(source, format!("Missing {} at row {}", column, row))
    };

    // Numeric columns may be inferred as i64 when no value has a decimal point.
    // Class is read as f64 so fractional values are rejected instead of truncated.
    let sites = required_column(df, LAUNCH_SITE, &DataType::String)
        .map_err(|e| polars_err(LAUNCH_SITE, e))?;
    let payloads = required_column(df, PAYLOAD_MASS, &DataType::Float64)
        .map_err(|e| polars_err(PAYLOAD_MASS, e))?;
    let classes =
        required_column(df, CLASS, &DataType::Float64).map_err(|e| polars_err(CLASS, e))?;
    let categories = required_column(df, BOOSTER_VERSION_CATEGORY, &DataType::String)
        .map_err(|e| polars_err(BOOSTER_VERSION_CATEGORY, e))?;

    let flight_numbers = optional_column(df, FLIGHT_NUMBER, &DataType::Int64);
    let booster_versions = optional_column(df, BOOSTER_VERSION, &DataType::String);

    let sites = sites.str().map_err(|e| polars_err(LAUNCH_SITE, e))?;
    let payloads = payloads.f64().map_err(|e| polars_err(PAYLOAD_MASS, e))?;
    let classes = classes.f64().map_err(|e| polars_err(CLASS, e))?;
    let categories = categories
        .str()
        .map_err(|e| polars_err(BOOSTER_VERSION_CATEGORY, e))?;
    let flight_numbers = flight_numbers.as_ref().and_then(|c| c.i64().ok());
    let booster_versions = booster_versions.as_ref().and_then(|c| c.str().ok());

    let height = df.height();
    let mut records = Vec::with_capacity(height);

    for i in 0..height {
        let launch_site = sites.get(i).ok_or_else(|| missing(LAUNCH_SITE, i))?;
        let payload_mass = payloads.get(i).ok_or_else(|| missing(PAYLOAD_MASS, i))?;
        if !payload_mass.is_finite() {
            return Err(DashboardError::data_unavailable(
                source,
                format!("Invalid {} at row {}: {}", PAYLOAD_MASS, i, payload_mass),
            ));
        }
        let class = classes.get(i).ok_or_else(|| missing(CLASS, i))?;
        let category = categories
            .get(i)
            .ok_or_else(|| missing(BOOSTER_VERSION_CATEGORY, i))?;

        let outcome = Outcome::try_from(class).map_err(|e| {
            DashboardError::data_unavailable(
                source,
                format!("Invalid {} at row {}: {}", CLASS, i, e),
            )
        })?;

        let mut record = LaunchRecord::new(launch_site, payload_mass, outcome, category);
        record.flight_number = flight_numbers.and_then(|c| c.get(i));
        record.booster_version = booster_versions.and_then(|c| c.get(i)).map(str::to_string);

        records.push(record);
    }

    Ok(records)
}

/// Cast a required column, failing on any value the cast cannot represent.
fn required_column(df: &DataFrame, name: &str, dtype: &DataType) -> PolarsResult<Column> {
    df.column(name)?.strict_cast(dtype)
}

fn optional_column(df: &DataFrame, name: &str, dtype: &DataType) -> Option<Column> {
    df.column(name).ok().and_then(|c| c.cast(dtype).ok())
}
