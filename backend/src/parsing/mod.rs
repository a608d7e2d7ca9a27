//! Parsers for launch record data.
//!
//! # Example
//!
//! ```no_run
//! use launch_dash::parsing::csv_parser::parse_launch_csv_to_records;
//! use std::path::Path;
//!
//! let records = parse_launch_csv_to_records(Path::new("spacex_launch_dash.csv"))
//!     .expect("Failed to parse launch records");
//! ```

pub mod csv_parser;
