//! Fake record generator for the fake-data-generator tool.
//!
//! This crate produces column-oriented datasets of "person" or "company"
//! records using locale-aware fake values. Every generated value may be
//! replaced by a placeholder dirty value (`N/A`, `NULL`, empty, ...) with a
//! per-field probability, which makes the output useful for exercising
//! data-cleaning code.
//!
//! # Architecture
//!
//! ```text
//! EntityKind ──► &'static [FieldSpec]   (name, FieldKind, dirty factor)
//!                       │
//!                       ▼
//!             ┌───────────────────┐
//!             │ DatasetGenerator  │
//!             │                   │
//!             │  - provider (P)   │──► FakeValueProvider::fake_value(kind, rng)
//!             │  - rng (StdRng)   │──► dirtify(rng, factor, producer)
//!             └─────────┬─────────┘
//!                       │
//!                       ▼
//!      Dataset { columns: [Column { name, values }] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fakedata_generator::{DatasetGenerator, EntityKind};
//!
//! let mut generator = DatasetGenerator::new("en_CA", Some(42)).unwrap();
//! let dataset = generator.generate(EntityKind::Person, 10).unwrap();
//! assert_eq!(dataset.row_count(), 10);
//!
//! let shuffled = generator.shuffle(dataset);
//! assert_eq!(shuffled.field_names()[0], "first_name");
//! ```

pub mod dataset;
pub mod dirty;
pub mod fields;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use dataset::{Column, Dataset, DatasetError, FieldValue};
pub use dirty::{dirtify, is_dirty, DEFAULT_DIRTY_FACTOR, DIRTY_VALUES};
pub use fields::{EntityKind, FieldSpec, COMPANY_FIELDS, PERSON_FIELDS};
pub use generator::{DatasetGenerator, GeneratorError};
pub use generators::{FakeValueProvider, FieldKind, Language, Locale, LocaleProvider};
