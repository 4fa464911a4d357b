//! Column-oriented dataset of generated records.

use rand::seq::SliceRandom;
use rand::Rng;

/// A single generated value. `None` is the absent/null dirty value.
pub type FieldValue = Option<String>;

/// Error type for dataset construction.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// A column does not have the same number of values as the others
    #[error("Column '{name}' has {actual} values, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A column with the same name was already added
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),
}

/// A named sequence of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<FieldValue>,
}

/// Mapping from field name to an ordered sequence of values.
///
/// Columns keep their insertion order and all have the same length, so row
/// `i` across all columns forms one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Create an empty dataset with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column.
    ///
    /// The first column fixes the row count; every later column must match it.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<FieldValue>,
    ) -> Result<(), DatasetError> {
        let name = name.into();

        if self.column(&name).is_some() {
            return Err(DatasetError::DuplicateColumn(name));
        }

        if let Some(first) = self.columns.first() {
            if first.values.len() != values.len() {
                return Err(DatasetError::LengthMismatch {
                    name,
                    expected: first.values.len(),
                    actual: values.len(),
                });
            }
        }

        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Number of records.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Values of the named column.
    pub fn column(&self, name: &str) -> Option<&[FieldValue]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Values of record `index`, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<Option<&str>>> {
        if index >= self.row_count() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.values[index].as_deref())
                .collect(),
        )
    }

    /// Iterate over records in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<&str>>> + '_ {
        (0..self.row_count()).filter_map(move |i| self.row(i))
    }

    /// Return a new dataset with the row order permuted uniformly at random.
    ///
    /// The same permutation is applied to every column, so records stay
    /// intact. Values are moved, never altered.
    pub fn shuffled<R: Rng>(self, rng: &mut R) -> Dataset {
        let mut order: Vec<usize> = (0..self.row_count()).collect();
        order.shuffle(rng);

        let columns = self
            .columns
            .into_iter()
            .map(|mut column| {
                let values = order
                    .iter()
                    .map(|&i| std::mem::take(&mut column.values[i]))
                    .collect();
                Column {
                    name: column.name,
                    values,
                }
            })
            .collect();

        Dataset { columns }
    }
}
