//! Définition et implémentation des commandes CLI
//!
//! - sans sous-commande: exporte les deux catalogues
//! - `sites`: sites sacrés uniquement
//! - `origins`: sources des rivières uniquement

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Subcommand;
use flatset::summarize;
use tracing::{debug, info};

use crate::catalogue::DatasetKind;
use crate::config::AtlasConfig;
use crate::report::{render_console, DatasetReport, RunReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Export the holy sites table (hindu_holy_sites_rivers_tributaries.csv)
    Sites,
    /// Export the river origins table (india_holy_rivers_comprehensive.csv)
    Origins,
}

impl Commands {
    pub fn kind(&self) -> DatasetKind {
        match self {
            Commands::Sites => DatasetKind::Sites,
            Commands::Origins => DatasetKind::Origins,
        }
    }
}

/// Datasets à exporter pour une sous-commande optionnelle
pub fn selected_kinds(command: Option<Commands>) -> Vec<DatasetKind> {
    match command {
        Some(cmd) => vec![cmd.kind()],
        None => DatasetKind::ALL.to_vec(),
    }
}

/// Exécute la commande export
///
/// Le répertoire de sortie doit exister: il n'est pas créé.
pub fn cmd_export(
    kinds: &[DatasetKind],
    config: &AtlasConfig,
    report_path: Option<&Path>,
) -> Result<RunReport> {
    info!(
        output_dir = %config.output_dir.display(),
        precision = config.float_precision,
        datasets = kinds.len(),
        "Export"
    );

    let start = Instant::now();
    let mut report = RunReport::new();

    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            println!();
        }
        report.record(export_dataset(*kind, config)?);
    }

    report.set_duration(start.elapsed());

    if let Some(path) = report_path {
        report.save_to_file(path)?;
        info!(path = %path.display(), "Report saved");
    }

    Ok(report)
}

/// Charge, exporte et résume un catalogue
fn export_dataset(kind: DatasetKind, config: &AtlasConfig) -> Result<DatasetReport> {
    let dataset = kind
        .load()
        .with_context(|| format!("Failed to load {} catalogue", kind))?;
    debug!(%kind, records = dataset.len(), fields = dataset.schema().len(), "Catalogue loaded");

    let destination = config.output_dir.join(kind.file_name());
    let stats = flatset::export(&dataset, &destination, &config.export_options())
        .with_context(|| format!("Failed to export {} to {}", kind, destination.display()))?;

    let summary = summarize(&dataset, kind.group_field())
        .with_context(|| format!("Failed to summarize {}", kind))?;

    println!(
        "{}",
        render_console(kind, &dataset, &summary, config.preview_rows)
    );

    Ok(DatasetReport::new(kind, stats, summary))
}
