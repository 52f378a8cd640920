//! Types d'erreurs pour le crate flatset

use std::path::PathBuf;

use thiserror::Error;

/// Erreurs pouvant survenir lors du chargement, de l'export ou du résumé d'un dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Aucun enregistrement fourni: pas de schéma possible
    #[error("Dataset is empty: at least one record is required to define a schema")]
    Empty,

    /// Un enregistrement ne partage pas le schéma du premier
    #[error("Schema mismatch at record {index}: expected [{}], found [{}]", .expected.join(", "), .found.join(", "))]
    SchemaMismatch {
        index: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Champ absent du schéma
    #[error("Field not found: '{field}' (available: {})", .available.join(", "))]
    FieldNotFound {
        field: String,
        available: Vec<String>,
    },

    /// Erreur d'I/O sur la destination
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Erreur de l'encodeur CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DatasetError {
    /// Crée une erreur d'I/O avec le chemin concerné
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Crée une erreur de champ introuvable
    pub fn field_not_found(field: impl Into<String>, schema: &[String]) -> Self {
        Self::FieldNotFound {
            field: field.into(),
            available: schema.to_vec(),
        }
    }
}
