//! Dataset: collection ordonnée d'enregistrements partageant un schéma

use tracing::debug;

use crate::error::DatasetError;
use crate::record::{Record, Value};

/// Collection immuable d'enregistrements validés
///
/// Le schéma est la liste ordonnée des champs du premier enregistrement;
/// tous les autres enregistrements ont exactement les mêmes champs, dans le même ordre.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    schema: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Charge et valide une séquence d'enregistrements.
    ///
    /// # Errors
    ///
    /// - `DatasetError::Empty` si la séquence est vide
    /// - `DatasetError::SchemaMismatch` dès qu'un enregistrement diffère du premier
    ///   (ensemble de champs ou ordre)
    pub fn load<I>(records: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut iter = records.into_iter();
        let first = iter.next().ok_or(DatasetError::Empty)?;
        let schema: Vec<String> = first.field_names().map(str::to_string).collect();

        let mut loaded = vec![first];
        for (offset, record) in iter.enumerate() {
            if !record.matches_schema(&schema) {
                return Err(DatasetError::SchemaMismatch {
                    index: offset + 1,
                    expected: schema,
                    found: record.field_names().map(str::to_string).collect(),
                });
            }
            loaded.push(record);
        }

        debug!(
            records = loaded.len(),
            fields = schema.len(),
            "Dataset loaded"
        );

        Ok(Self {
            schema,
            records: loaded,
        })
    }

    pub fn schema(&self) -> &[String] {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Toujours faux après `load`
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position d'un champ dans le schéma
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.schema.iter().position(|f| f == field)
    }

    /// Valeurs d'une colonne, dans l'ordre des enregistrements
    pub fn column(&self, field: &str) -> Result<Vec<&Value>, DatasetError> {
        let idx = self
            .field_index(field)
            .ok_or_else(|| DatasetError::field_not_found(field, &self.schema))?;

        // L'invariant de schéma garantit que chaque enregistrement a ce champ à cette position
        Ok(self
            .records
            .iter()
            .filter_map(|r| r.values().nth(idx))
            .collect())
    }
}
