//! Rapport console et JSON des exports
//!
//! Chaque dataset a son propre affichage (aperçu pour les sites, fiche par
//! rivière pour les sources), puis un bilan commun du run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use flatset::{preview, Dataset, ExportStats, Summary};
use serde::Serialize;

use crate::catalogue::{origins, DatasetKind};

/// Résultat de l'export d'un dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub kind: DatasetKind,
    pub path: PathBuf,
    pub rows: usize,
    pub bytes: u64,
    pub summary: Summary,
}

impl DatasetReport {
    pub fn new(kind: DatasetKind, stats: ExportStats, summary: Summary) -> Self {
        Self {
            kind,
            path: stats.path,
            rows: stats.rows,
            bytes: stats.bytes,
            summary,
        }
    }
}

/// Rapport complet d'un run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Durée du run
    pub duration_secs: f64,
    pub datasets: Vec<DatasetReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: DatasetReport) {
        self.datasets.push(entry);
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Nombre total de lignes exportées
    pub fn total_rows(&self) -> usize {
        self.datasets.iter().map(|d| d.rows).sum()
    }

    /// Affiche le bilan sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("EXPORT REPORT");
        println!("{}", "=".repeat(60));
        println!("Duration: {:.3}s", self.duration_secs);
        for d in &self.datasets {
            println!(
                "  {}: {} rows, {} distinct '{}' -> {} ({} bytes)",
                d.kind,
                d.rows,
                d.summary.distinct(),
                d.summary.group_field,
                d.path.display(),
                d.bytes
            );
        }
        println!("{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }

    /// Affichage compact
    pub fn summary(&self) -> String {
        format!(
            "{} datasets, {} rows exported",
            self.datasets.len(),
            self.total_rows()
        )
    }
}

/// Texte console pour un dataset exporté
pub fn render_console(
    kind: DatasetKind,
    dataset: &Dataset,
    summary: &Summary,
    preview_rows: usize,
) -> String {
    match kind {
        DatasetKind::Sites => render_sites(dataset, summary, preview_rows),
        DatasetKind::Origins => render_origins(dataset),
    }
}

fn render_sites(dataset: &Dataset, summary: &Summary, preview_rows: usize) -> String {
    let mut out = format!(
        "Created comprehensive table with {} holy sites on rivers and tributaries\n",
        summary.total
    );
    if preview_rows > 0 {
        out.push_str("\nPreview of the data:\n");
        out.push_str(&preview(dataset, preview_rows));
        out.push('\n');
    }
    out.push_str(&format!(
        "\nNumber of unique rivers covered: {}\n",
        summary.distinct()
    ));
    out.push_str(&format!("Rivers included: [{}]", summary.values.join(", ")));
    out
}

fn render_origins(dataset: &Dataset) -> String {
    let mut out = format!(
        "INDIA'S MAJOR HOLY RIVERS - COMPREHENSIVE TABLE\n{}\n\n",
        "=".repeat(80)
    );

    let text = |record: &flatset::Record, field: &str| {
        record
            .get(field)
            .map(|v| v.to_string())
            .unwrap_or_default()
    };

    for (i, record) in dataset.records().iter().enumerate() {
        out.push_str(&format!(
            "{}. {}\n",
            i + 1,
            text(record, origins::FIELD_NAME).to_uppercase()
        ));
        out.push_str(&format!("   Origin: {}\n", text(record, origins::FIELD_ORIGIN)));
        out.push_str(&format!(
            "   Coordinates: {}, {}\n",
            text(record, origins::FIELD_LATITUDE),
            text(record, origins::FIELD_LONGITUDE)
        ));
        out.push_str(&format!(
            "   Flow Direction: {}\n",
            text(record, origins::FIELD_FLOW)
        ));
        out.push_str(&format!(
            "   Special Features: {}\n\n",
            text(record, origins::FIELD_FEATURES)
        ));
    }

    out.push_str(&format!(
        "Table saved as CSV with {} rivers.",
        dataset.len()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatset::summarize;

    fn stats(rows: usize) -> ExportStats {
        ExportStats {
            path: PathBuf::from("out.csv"),
            rows,
            bytes: 1024,
        }
    }

    #[test]
    fn test_sites_console() {
        let dataset = DatasetKind::Sites.load().unwrap();
        let summary = summarize(&dataset, DatasetKind::Sites.group_field()).unwrap();
        let text = render_console(DatasetKind::Sites, &dataset, &summary, 5);

        assert!(text.starts_with("Created comprehensive table with 37 holy sites"));
        assert!(text.contains("Preview of the data:"));
        assert!(text.contains("Gangotri Temple"));
        assert!(text.contains("Number of unique rivers covered: 20"));
        assert!(text.contains("Rivers included: [Alaknanda, Betwa,"));
    }

    #[test]
    fn test_sites_console_without_preview() {
        let dataset = DatasetKind::Sites.load().unwrap();
        let summary = summarize(&dataset, "River").unwrap();
        let text = render_console(DatasetKind::Sites, &dataset, &summary, 0);
        assert!(!text.contains("Preview of the data:"));
    }

    #[test]
    fn test_origins_console() {
        let dataset = DatasetKind::Origins.load().unwrap();
        let summary = summarize(&dataset, DatasetKind::Origins.group_field()).unwrap();
        let text = render_console(DatasetKind::Origins, &dataset, &summary, 5);

        assert!(text.contains("1. GANGA (GANGES)"));
        assert!(text.contains("   Coordinates: 30°55'36\"N, 79°4'51\"E"));
        assert!(text.contains("11. TAPTI (TAPI)"));
        assert!(text.ends_with("Table saved as CSV with 11 rivers."));
    }

    #[test]
    fn test_origins_console_entry_layout() {
        let dataset = DatasetKind::Origins.load().unwrap();
        let summary = summarize(&dataset, DatasetKind::Origins.group_field()).unwrap();
        let text = render_console(DatasetKind::Origins, &dataset, &summary, 5);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "INDIA'S MAJOR HOLY RIVERS - COMPREHENSIVE TABLE");
        assert_eq!(lines[1], "=".repeat(80));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "1. GANGA (GANGES)");
        assert!(lines[4].starts_with("   Origin: Gomukh (Gaumukh)"));
        assert_eq!(lines[5], "   Coordinates: 30°55'36\"N, 79°4'51\"E");
        assert!(lines[6].starts_with("   Flow Direction: Northwest to Southeast"));
        assert!(lines[7].starts_with("   Special Features: Length: 2,525 km"));
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "2. YAMUNA");
    }

    #[test]
    fn test_sites_console_line_breaks() {
        let dataset = DatasetKind::Sites.load().unwrap();
        let summary = summarize(&dataset, "River").unwrap();
        let text = render_console(DatasetKind::Sites, &dataset, &summary, 2);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Created comprehensive table with 37 holy sites on rivers and tributaries"
        );
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Preview of the data:");
        // en-tête + 2 lignes d'aperçu
        assert!(lines[4].starts_with("0  Ganges"));
        assert!(lines[5].starts_with("1  Ganges"));
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Number of unique rivers covered: 20");
        assert!(lines[8].starts_with("Rivers included: ["));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_run_report_totals() {
        let mut report = RunReport::new();
        let summary = Summary {
            group_field: "River".to_string(),
            total: 37,
            values: vec!["Ganges".to_string()],
        };
        report.record(DatasetReport::new(DatasetKind::Sites, stats(37), summary.clone()));
        report.record(DatasetReport::new(DatasetKind::Origins, stats(11), summary));

        assert_eq!(report.total_rows(), 48);
        assert_eq!(report.summary(), "2 datasets, 48 rows exported");
    }

    #[test]
    fn test_save_to_file() {
        let mut report = RunReport::new();
        report.set_duration(Duration::from_millis(250));
        report.record(DatasetReport::new(
            DatasetKind::Origins,
            stats(11),
            Summary {
                group_field: "River Name".to_string(),
                total: 11,
                values: vec![],
            },
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.save_to_file(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["duration_secs"], 0.25);
        assert_eq!(json["datasets"][0]["kind"], "origins");
        assert_eq!(json["datasets"][0]["summary"]["total"], 11);
    }
}
