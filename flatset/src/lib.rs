//! # flatset
//!
//! Datasets tabulaires en mémoire avec schéma vérifié et export CSV atomique.
//!
//! ## Features
//!
//! - Enregistrements ordonnés (l'ordre d'insertion donne l'ordre des colonnes)
//! - Validation du schéma au chargement (mêmes champs, même ordre)
//! - Export CSV via `csv`, écrit dans un fichier temporaire puis renommé
//! - Résumé par champ de regroupement (total + valeurs distinctes triées)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flatset::{export, summarize, Dataset, ExportOptions, Record};
//! use std::path::Path;
//!
//! let dataset = Dataset::load(vec![
//!     Record::new().with("River", "Ganges").with("Latitude", 25.3109),
//!     Record::new().with("River", "Yamuna").with("Latitude", 27.49241),
//! ])?;
//!
//! export(&dataset, Path::new("rivers.csv"), &ExportOptions::default())?;
//! println!("{}", summarize(&dataset, "River")?);
//! ```

pub mod dataset;
pub mod error;
pub mod export;
pub mod preview;
pub mod record;
pub mod summary;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use export::{export, write_csv, ExportOptions, ExportStats};
pub use preview::preview;
pub use record::{Record, Value, DEFAULT_FLOAT_PRECISION};
pub use summary::{summarize, Summary};
