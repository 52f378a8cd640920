//! Configuration de l'export (variables d'environnement + surcharges CLI)

use std::path::PathBuf;

use flatset::{ExportOptions, DEFAULT_FLOAT_PRECISION};
use tracing::warn;

pub const ENV_OUTPUT_DIR: &str = "ATLAS_OUTPUT_DIR";
pub const ENV_FLOAT_PRECISION: &str = "ATLAS_FLOAT_PRECISION";
pub const ENV_PREVIEW_ROWS: &str = "ATLAS_PREVIEW_ROWS";

/// Au-delà, les décimales d'un f64 ne sont plus significatives
pub const MAX_FLOAT_PRECISION: usize = 15;

const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Configuration d'un run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasConfig {
    /// Répertoire de sortie des fichiers CSV
    pub output_dir: PathBuf,
    /// Décimales des coordonnées exportées
    pub float_precision: usize,
    /// Nombre de lignes affichées dans l'aperçu
    pub preview_rows: usize,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            float_precision: DEFAULT_FLOAT_PRECISION,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl AtlasConfig {
    /// Charge la configuration depuis les variables d'environnement
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Charge la configuration depuis une fonction de lecture de variables
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            output_dir: lookup(ENV_OUTPUT_DIR)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            float_precision: parse_or_default(
                ENV_FLOAT_PRECISION,
                lookup(ENV_FLOAT_PRECISION),
                defaults.float_precision,
            )
            .min(MAX_FLOAT_PRECISION),
            preview_rows: parse_or_default(
                ENV_PREVIEW_ROWS,
                lookup(ENV_PREVIEW_ROWS),
                defaults.preview_rows,
            ),
        }
    }

    /// Applique les options de la ligne de commande
    pub fn apply_overrides(&mut self, output_dir: Option<PathBuf>, precision: Option<usize>) {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if let Some(p) = precision {
            if p > MAX_FLOAT_PRECISION {
                warn!(
                    precision = p,
                    max = MAX_FLOAT_PRECISION,
                    "Precision too high, clamping"
                );
            }
            self.float_precision = p.min(MAX_FLOAT_PRECISION);
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            float_precision: self.float_precision,
            ..ExportOptions::default()
        }
    }
}

fn parse_or_default(key: &str, raw: Option<String>, default: usize) -> usize {
    match raw {
        None => default,
        Some(s) => match s.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                warn!(key, value = %s, default, "Invalid value, using default");
                default
            }
        },
    }
}
