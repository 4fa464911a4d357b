//! Main data generator for producing datasets.

use crate::dataset::{Dataset, DatasetError, FieldValue};
use crate::dirty::{dirtify, validate_dirty_factor};
use crate::fields::{EntityKind, FieldSpec};
use crate::generators::{FakeValueProvider, Locale, LocaleProvider};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Locale code not recognized by the fake value provider
    #[error("Unsupported localization: '{0}'")]
    UnsupportedLocale(String),

    /// Entity type outside of the supported set
    #[error("Unsupported data type: '{0}', supported types are 'person' and 'company'")]
    UnsupportedEntity(String),

    /// Dirty probability outside of [0, 1]
    #[error("Invalid dirty factor {dirty_factor} for field '{field}': must be between 0 and 1")]
    InvalidDirtyFactor { field: String, dirty_factor: f64 },

    /// Field not defined for any entity
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Dataset error
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// Generator producing column-oriented datasets of fake records.
///
/// With a seed the generator is fully reproducible: the same seed, locale and
/// count yield the same dataset and the same shuffle order.
pub struct DatasetGenerator<P = LocaleProvider> {
    /// Source of clean values
    provider: P,
    /// Random number generator shared by value generation, dirtying and shuffling
    rng: StdRng,
    /// Per-field dirty factors replacing the table defaults
    dirty_overrides: HashMap<String, f64>,
}

impl DatasetGenerator<LocaleProvider> {
    /// Create a generator for the given locale code (e.g. `en_CA`).
    ///
    /// Without a seed the RNG is seeded from system entropy.
    pub fn new(localization: &str, seed: Option<u64>) -> Result<Self, GeneratorError> {
        let locale: Locale = localization.parse()?;
        Ok(Self::with_provider(LocaleProvider::new(locale), seed))
    }
}

impl<P: FakeValueProvider> DatasetGenerator<P> {
    /// Create a generator using a custom value provider.
    pub fn with_provider(provider: P, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            provider,
            rng,
            dirty_overrides: HashMap::new(),
        }
    }

    /// Override the dirty factor of a field for every entity that has it.
    pub fn with_dirty_factor(
        mut self,
        field: &str,
        dirty_factor: f64,
    ) -> Result<Self, GeneratorError> {
        let known = EntityKind::ALL
            .iter()
            .any(|entity| entity.field(field).is_some());
        if !known {
            return Err(GeneratorError::UnknownField(field.to_string()));
        }
        let dirty_factor = validate_dirty_factor(field, dirty_factor)?;
        self.dirty_overrides.insert(field.to_string(), dirty_factor);
        Ok(self)
    }

    /// Dirty factor in effect for a field.
    pub fn dirty_factor(&self, spec: &FieldSpec) -> f64 {
        self.dirty_overrides
            .get(spec.name)
            .copied()
            .unwrap_or(spec.dirty_factor)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate `count` records of the given entity.
    ///
    /// Values are produced column by column; every value is dirtied
    /// independently with its field's dirty factor.
    pub fn generate(&mut self, entity: EntityKind, count: usize) -> Result<Dataset, GeneratorError> {
        let mut dataset = Dataset::new();

        for spec in entity.fields() {
            let dirty_factor = self.dirty_factor(spec);
            let Self { provider, rng, .. } = &mut *self;

            let values: Vec<FieldValue> = (0..count)
                .map(|_| dirtify(&mut *rng, dirty_factor, |r| provider.fake_value(spec.kind, r)))
                .collect();

            debug!(
                "Generated {} values for '{}' (dirty factor {})",
                values.len(),
                spec.name,
                dirty_factor
            );
            dataset.push_column(spec.name, values)?;
        }

        Ok(dataset)
    }

    pub fn generate_person(&mut self, count: usize) -> Result<Dataset, GeneratorError> {
        self.generate(EntityKind::Person, count)
    }

    pub fn generate_company(&mut self, count: usize) -> Result<Dataset, GeneratorError> {
        self.generate(EntityKind::Company, count)
    }

    /// Shuffle the rows of a dataset with this generator's RNG.
    pub fn shuffle(&mut self, dataset: Dataset) -> Dataset {
        dataset.shuffled(&mut self.rng)
    }
}
