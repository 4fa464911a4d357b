//! Output file naming and output directory management.

use chrono::Utc;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Current UTC time as `YYYY-MM-DD-THHMMSSffffffZ`.
///
/// Lexicographic order of the strings matches chronological order.
pub fn generate_timestamp() -> String {
    Utc::now().format("%Y-%m-%d-T%H%M%S%6fZ").to_string()
}

/// Delete the directory and everything in it if it exists, then recreate it.
///
/// Missing parent directories are created. Fails if the path exists but is
/// not a directory.
pub fn reset_output_directory<P: AsRef<Path>>(output_dir: P) -> io::Result<()> {
    let output_dir = output_dir.as_ref();

    match fs::metadata(output_dir) {
        Ok(metadata) if metadata.is_dir() => {
            debug!("Removing existing output directory {:?}", output_dir);
            fs::remove_dir_all(output_dir)?;
        }
        Ok(_) => {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", output_dir.display()),
            ));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    fs::create_dir_all(output_dir)
}
