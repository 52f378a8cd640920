//! Aperçu texte des premières lignes d'un dataset

use crate::dataset::Dataset;
use crate::record::DEFAULT_FLOAT_PRECISION;

/// Largeur maximale d'une cellule dans l'aperçu (en caractères)
pub const MAX_CELL_WIDTH: usize = 24;

/// Rend les `rows` premiers enregistrements sous forme de tableau à largeur fixe.
///
/// La première colonne est l'index de l'enregistrement. Les cellules trop
/// longues sont tronquées avec `…`.
pub fn preview(dataset: &Dataset, rows: usize) -> String {
    let header: Vec<String> = dataset.schema().iter().map(|f| truncate(f)).collect();
    let body: Vec<Vec<String>> = dataset
        .records()
        .iter()
        .take(rows)
        .map(|r| {
            r.values()
                .map(|v| truncate(&v.render(DEFAULT_FLOAT_PRECISION)))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    let index_width = body.len().saturating_sub(1).to_string().len();

    let mut out = String::new();
    out.push_str(&format_line(&" ".repeat(index_width), &header, &widths));
    for (i, row) in body.iter().enumerate() {
        out.push('\n');
        out.push_str(&format_line(
            &format!("{:<w$}", i, w = index_width),
            row,
            &widths,
        ));
    }
    out
}

fn format_line(index: &str, cells: &[String], widths: &[usize]) -> String {
    let mut line = index.to_string();
    for (cell, w) in cells.iter().zip(widths) {
        line.push_str("  ");
        line.push_str(&format!("{:<w$}", cell, w = *w));
    }
    line.trim_end().to_string()
}

fn truncate(s: &str) -> String {
    if s.chars().count() <= MAX_CELL_WIDTH {
        return s.to_string();
    }
    let mut out: String = s.chars().take(MAX_CELL_WIDTH - 1).collect();
    out.push('…');
    out
}
