//! Catalogues embarqués (sites sacrés, sources des rivières)

pub mod origins;
pub mod sites;

use std::fmt;

use flatset::Dataset;
use serde::Serialize;

use crate::error::AtlasError;

pub use origins::{RiverOrigin, RIVER_ORIGINS};
pub use sites::{HolySite, HOLY_SITES};

/// Les datasets exportables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Sites sacrés sur les rivières et affluents
    Sites,
    /// Sources des rivières sacrées
    Origins,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::Sites, DatasetKind::Origins];

    /// Nom du fichier CSV produit
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::Sites => "hindu_holy_sites_rivers_tributaries.csv",
            DatasetKind::Origins => "india_holy_rivers_comprehensive.csv",
        }
    }

    /// Champ de regroupement pour le résumé
    pub fn group_field(&self) -> &'static str {
        match self {
            DatasetKind::Sites => sites::FIELD_RIVER,
            DatasetKind::Origins => origins::FIELD_NAME,
        }
    }

    /// Charge et valide le catalogue
    pub fn load(&self) -> Result<Dataset, AtlasError> {
        let records = match self {
            DatasetKind::Sites => sites::site_records()?,
            DatasetKind::Origins => origins::origin_records(),
        };
        Ok(Dataset::load(records)?)
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Sites => write!(f, "holy sites"),
            DatasetKind::Origins => write!(f, "river origins"),
        }
    }
}
