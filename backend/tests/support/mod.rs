#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use launch_dash::models::{Dataset, LaunchRecord, Outcome};
use tempfile::NamedTempFile;

pub const HEADER: &str = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

/// The sample dataset shipped with the crate.
pub fn sample_csv_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/spacex_launch_dash.csv")
}

pub fn sample_dataset() -> Dataset {
    Dataset::load(&sample_csv_path()).expect("sample dataset should load")
}

/// Write `rows` under the standard header into a temporary CSV file.
pub fn write_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

/// Sites {A, B}: A has 3 successes and 1 failure, B has 0 successes and 2 failures.
pub fn two_site_csv() -> NamedTempFile {
    write_csv(&[
        "1,A,1,1000.0,F9 v1.1,v1.1",
        "2,A,1,2000.0,F9 FT,FT",
        "3,B,0,3000.0,F9 FT,FT",
        "4,A,0,4000.0,F9 B4,B4",
        "5,A,1,5000.0,F9 B4,B4",
        "6,B,0,6000.0,F9 B5,B5",
    ])
}

pub fn record(site: &str, mass: f64, outcome: Outcome, category: &str) -> LaunchRecord {
    LaunchRecord::new(site, mass, outcome, category)
}
