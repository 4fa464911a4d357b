//! Dataset to CSV serialization.

use crate::error::CsvPopulatorError;
use csv::Writer;
use fakedata_generator::Dataset;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a save operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Write a dataset to a CSV file.
///
/// The header row holds the field names in insertion order, followed by one
/// row per record. There is no index column. Absent values are written as
/// empty fields. The parent directory must already exist.
///
/// Rows go to a temporary file next to `output_path` that is renamed into
/// place once complete, so a failed write leaves no partial file behind.
pub fn save_dataset<P: AsRef<Path>>(
    dataset: &Dataset,
    output_path: P,
) -> Result<PopulateMetrics, CsvPopulatorError> {
    let start_time = Instant::now();
    let mut metrics = PopulateMetrics::default();

    let output_path = output_path.as_ref();
    info!(
        "Writing CSV file '{}' with {} rows and {} columns",
        output_path.display(),
        dataset.row_count(),
        dataset.columns().len()
    );

    let parent = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let temp_file = NamedTempFile::new_in(parent)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, temp_file);
    let mut writer = Writer::from_writer(buf_writer);

    writer.write_record(dataset.field_names())?;

    for row in dataset.rows() {
        writer.write_record(row.into_iter().map(Option::unwrap_or_default))?;
        metrics.rows_written += 1;

        if metrics.rows_written % 10000 == 0 {
            debug!("Written {} rows", metrics.rows_written);
        }
    }

    writer.flush()?;
    let buf_writer = writer
        .into_inner()
        .map_err(|e| CsvPopulatorError::Io(std::io::Error::other(e.to_string())))?;
    let temp_file = buf_writer.into_inner().map_err(|e| e.into_error())?;
    temp_file.persist(output_path).map_err(|e| e.error)?;

    metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
    metrics.total_duration = start_time.elapsed();

    info!(
        "CSV write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakedata_generator::{DatasetGenerator, EntityKind, PERSON_FIELDS};
    use tempfile::TempDir;

    fn small_dataset() -> Dataset {
        let mut dataset = Dataset::new();
        dataset
            .push_column(
                "name",
                vec![Some("Ada".into()), None, Some("Smith, Jr.".into())],
            )
            .unwrap();
        dataset
            .push_column(
                "city",
                vec![Some("Toronto".into()), Some("N/A".into()), Some(String::new())],
            )
            .unwrap();
        dataset
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            total_duration: Duration::from_secs(10),
            file_size_bytes: 100000,
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(PopulateMetrics::default().rows_per_second(), 0.0);
    }

    #[test]
    fn test_save_dataset_contents() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test.csv");

        let metrics = save_dataset(&small_dataset(), &output_path).unwrap();
        assert_eq!(metrics.rows_written, 3);
        assert!(metrics.file_size_bytes > 0);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec!["name,city", "Ada,Toronto", ",N/A", "\"Smith, Jr.\","]
        );
    }

    #[test]
    fn test_save_generated_person_data() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("person.csv");

        let mut generator = DatasetGenerator::new("en_CA", Some(42)).unwrap();
        let dataset = generator.generate(EntityKind::Person, 25).unwrap();
        save_dataset(&dataset, &output_path).unwrap();

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        let expected: Vec<&str> = PERSON_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(headers, expected);

        let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(records.len(), 25);
        assert!(records.iter().all(|r| r.len() == PERSON_FIELDS.len()));
    }

    #[test]
    fn test_save_empty_dataset_writes_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("empty.csv");

        let mut generator = DatasetGenerator::new("en_CA", Some(1)).unwrap();
        let dataset = generator.generate(EntityKind::Company, 0).unwrap();
        let metrics = save_dataset(&dataset, &output_path).unwrap();

        assert_eq!(metrics.rows_written, 0);
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("company,industry,catch_phrase"));
    }

    #[test]
    fn test_failed_save_leaves_no_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        // A directory at the destination makes the final rename fail
        let output_path = temp_dir.path().join("out.csv");
        std::fs::create_dir(&output_path).unwrap();

        let result = save_dataset(&small_dataset(), &output_path);
        assert!(matches!(result, Err(CsvPopulatorError::Io(_))));

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries, vec![output_path.clone()]);
        assert_eq!(std::fs::read_dir(&output_path).unwrap().count(), 0);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("out.csv");
        std::fs::write(&output_path, "stale contents\n").unwrap();

        save_dataset(&small_dataset(), &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("name,city\n"));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("missing").join("out.csv");

        let result = save_dataset(&small_dataset(), &output_path);
        assert!(matches!(result, Err(CsvPopulatorError::Io(_))));
    }
}
