//! # river-atlas
//!
//! Préparation des données de la carte des rivières sacrées de l'Inde.
//!
//! ## Features
//!
//! - Catalogues embarqués: sites sacrés (coordonnées décimales) et sources des rivières
//! - Validation du schéma et des coordonnées avant export
//! - Export CSV atomique via `flatset`
//! - Résumé console et rapport JSON optionnel
//!
//! ## Usage CLI
//!
//! ```bash
//! # Exporter les deux catalogues dans le répertoire courant
//! river-atlas
//!
//! # Un seul catalogue, ailleurs, avec rapport JSON
//! river-atlas --output-dir ./public/data --report report.json sites
//! ```

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;

pub use catalogue::DatasetKind;
pub use config::AtlasConfig;
pub use error::AtlasError;
pub use report::RunReport;
