//! Dirty value injection.
//!
//! A dirty value is a placeholder standing in for missing or invalid data.
//! [`dirtify`] wraps a value producer and, with a configurable probability,
//! returns one of [`DIRTY_VALUES`] instead of calling the producer.

use rand::Rng;

use crate::dataset::FieldValue;
use crate::generator::GeneratorError;

/// Probability used for fields that do not specify their own.
pub const DEFAULT_DIRTY_FACTOR: f64 = 0.1;

/// Placeholder values substituted for generated data.
pub const DIRTY_VALUES: [Option<&str>; 8] = [
    None,
    Some(""),
    Some("N/A"),
    Some("NULL"),
    Some("Invalid"),
    Some("Not Available"),
    Some("Unknown"),
    Some("TBD"),
];

/// Produce a value, or a dirty value with probability `dirty_factor`.
///
/// The producer is not invoked when a dirty value is returned.
pub fn dirtify<R, F>(rng: &mut R, dirty_factor: f64, producer: F) -> FieldValue
where
    R: Rng,
    F: FnOnce(&mut R) -> String,
{
    if rng.gen::<f64>() < dirty_factor {
        let idx = rng.gen_range(0..DIRTY_VALUES.len());
        DIRTY_VALUES[idx].map(str::to_string)
    } else {
        Some(producer(rng))
    }
}

/// Whether a value is one of the placeholder dirty values.
pub fn is_dirty(value: &FieldValue) -> bool {
    DIRTY_VALUES.contains(&value.as_deref())
}

/// Check that a dirty factor is a probability in `[0, 1]`.
pub fn validate_dirty_factor(field: &str, dirty_factor: f64) -> Result<f64, GeneratorError> {
    if (0.0..=1.0).contains(&dirty_factor) {
        Ok(dirty_factor)
    } else {
        Err(GeneratorError::InvalidDirtyFactor {
            field: field.to_string(),
            dirty_factor,
        })
    }
}
