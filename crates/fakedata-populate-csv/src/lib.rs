//! CSV writer for generated fake datasets.
//!
//! This crate serializes a [`Dataset`](fakedata_generator::Dataset) produced
//! by the fakedata-generator crate to a CSV file.
//!
//! # Example
//!
//! ```ignore
//! use fakedata_generator::DatasetGenerator;
//! use fakedata_populate_csv::save_dataset;
//!
//! let mut generator = DatasetGenerator::new("en_CA", Some(42))?;
//! let dataset = generator.generate_person(1000)?;
//!
//! // Header row followed by 1000 records
//! let metrics = save_dataset(&dataset, "/path/to/person.csv")?;
//! ```

mod error;
mod populator;

pub use error::CsvPopulatorError;
pub use populator::{save_dataset, PopulateMetrics, DEFAULT_BUFFER_SIZE};
