//! Command-line interface for fake-data-generator
//!
//! # Usage Examples
//!
//! ```bash
//! # 1000 person records using the default en_CA localization
//! fake-data-generator
//!
//! # 200 company records
//! fake-data-generator --type company --n 200
//!
//! # Reproducible output in a custom directory
//! fake-data-generator --type person --localization en_US --n 10 \
//!   --seed 42 --output-dir fixtures
//! ```
//!
//! The output directory is deleted and recreated on every run. Set
//! `RUST_LOG=info` to see progress logs on stderr.

use clap::Parser;
use fake_data_generator::{run, GenerateArgs};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = GenerateArgs::parse();
    let output_path = run(&args)?;

    println!("{}", output_path.display());
    Ok(())
}
