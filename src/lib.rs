//! Fake Data Generator Library
//!
//! Generates synthetic person or company records with injected dirty values
//! and writes them to a timestamped CSV file.
//!
//! # Workflow
//!
//! 1. Parse the entity type and locale (nothing is written if either is invalid)
//! 2. Generate the dataset column by column with per-field dirty factors
//! 3. Reset the output directory (delete and recreate)
//! 4. Shuffle the rows
//! 5. Save to `<output-dir>/<type>_<timestamp>.csv`
//!
//! # CLI Usage
//!
//! ```bash
//! # 1000 Canadian person records in ./output
//! fake-data-generator
//!
//! # 50 French company records, reproducible
//! fake-data-generator --type company --localization fr_FR --n 50 --seed 42
//! ```

use anyhow::Context;
use clap::Parser;
use fakedata_generator::{DatasetGenerator, EntityKind};
use fakedata_populate_csv::save_dataset;
use std::path::PathBuf;

pub mod output;

pub use output::{generate_timestamp, reset_output_directory};

#[derive(Parser, Clone, Debug)]
#[command(name = "fake-data-generator")]
#[command(about = "Generate fake data.")]
#[command(long_about = None)]
pub struct GenerateArgs {
    /// The type of data to generate. Currently 'person' and 'company' are supported.
    #[arg(long = "type", default_value = "person")]
    pub data_type: String,

    /// The localization of the generated data.
    #[arg(long, default_value = "en_CA")]
    pub localization: String,

    /// The number of records to generate.
    #[arg(long = "n", default_value_t = 1000, allow_hyphen_values = true)]
    pub n: usize,

    /// Random seed for deterministic generation (same seed = same data and row order)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory, deleted and recreated on every run
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            data_type: "person".to_string(),
            localization: "en_CA".to_string(),
            n: 1000,
            seed: None,
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Generate a dataset and save it, returning the path of the CSV file.
pub fn run(args: &GenerateArgs) -> anyhow::Result<PathBuf> {
    let entity: EntityKind = args.data_type.parse()?;
    let mut generator = DatasetGenerator::new(&args.localization, args.seed)
        .context("Failed to configure fake value provider")?;

    tracing::info!(
        "Generating {} {} records (localization: {})",
        args.n,
        entity,
        args.localization
    );
    let dataset = generator
        .generate(entity, args.n)
        .with_context(|| format!("Failed to generate {entity} data"))?;

    reset_output_directory(&args.output_dir).with_context(|| {
        format!("Failed to reset output directory {:?}", args.output_dir)
    })?;
    let timestamp = generate_timestamp();

    let dataset = generator.shuffle(dataset);
    let output_path = args.output_dir.join(format!("{entity}_{timestamp}.csv"));
    let metrics = save_dataset(&dataset, &output_path)
        .with_context(|| format!("Failed to save data to {output_path:?}"))?;

    tracing::info!(
        "Saved {} rows ({} bytes) to {}",
        metrics.rows_written,
        metrics.file_size_bytes,
        output_path.display()
    );

    Ok(output_path)
}
