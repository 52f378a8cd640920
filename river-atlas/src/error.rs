//! Erreurs de l'application river-atlas

use thiserror::Error;

use flatset::DatasetError;

/// Erreurs pouvant survenir lors de la préparation ou de l'export des catalogues
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Erreur du dataset (schéma, champ, I/O)
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Coordonnée hors des bornes WGS84
    #[error("{field} out of range for {site}: {value} (expected {min}..={max})")]
    CoordinateOutOfRange {
        site: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl AtlasError {
    pub fn out_of_range(
        site: impl Into<String>,
        field: &'static str,
        value: f64,
        (min, max): (f64, f64),
    ) -> Self {
        Self::CoordinateOutOfRange {
            site: site.into(),
            field,
            value,
            min,
            max,
        }
    }
}
