//! Export CSV atomique (fichier temporaire + rename)

use std::borrow::Cow;
use std::fs::Permissions;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::record::DEFAULT_FLOAT_PRECISION;

/// Options d'export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Séparateur de colonnes (virgule par défaut)
    pub delimiter: u8,
    /// Nombre de décimales pour les flottants
    pub float_precision: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            float_precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}

/// Résultat d'un export réussi
#[derive(Debug, Clone, Serialize)]
pub struct ExportStats {
    /// Fichier écrit
    pub path: PathBuf,
    /// Nombre de lignes de données (hors en-tête)
    pub rows: usize,
    /// Taille du fichier en octets
    pub bytes: u64,
}

/// Écrit le dataset en CSV dans `writer`: une ligne d'en-tête puis une ligne par enregistrement.
///
/// Retourne le nombre de lignes de données écrites.
pub fn write_csv<W: Write>(
    dataset: &Dataset,
    writer: W,
    options: &ExportOptions,
) -> Result<usize, DatasetError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(options.delimiter)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(dataset.schema())?;

    for record in dataset.records() {
        let row: Vec<Cow<'_, str>> = record
            .values()
            .map(|v| v.render(options.float_precision))
            .collect();
        wtr.write_record(row.iter().map(|cell| cell.as_bytes()))?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(dataset.len())
}

/// Exporte le dataset vers `destination`.
///
/// Le contenu est écrit dans un fichier temporaire du même répertoire, puis renommé
/// sur la destination une fois complet. En cas d'échec, le fichier temporaire est
/// supprimé et la destination n'est pas touchée.
///
/// # Errors
///
/// `DatasetError::Io` si le répertoire parent n'existe pas, n'est pas accessible
/// en écriture, ou si l'écriture échoue en cours de route.
pub fn export(
    dataset: &Dataset,
    destination: &Path,
    options: &ExportOptions,
) -> Result<ExportStats, DatasetError> {
    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".flatset-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| DatasetError::io(destination, e))?;

    debug!(tmp = %tmp.path().display(), "Writing temporary file");

    let rows = write_csv(dataset, tmp.as_file_mut(), options).map_err(|e| match e {
        DatasetError::Csv(err) => csv_error(destination, err),
        other => other,
    })?;

    tmp.as_file()
        .sync_all()
        .map_err(|e| DatasetError::io(destination, e))?;
    let bytes = tmp
        .as_file()
        .metadata()
        .map_err(|e| DatasetError::io(destination, e))?
        .len();

    if let Some(permissions) = output_permissions(destination) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| DatasetError::io(destination, e))?;
    }

    tmp.persist(destination)
        .map_err(|e| DatasetError::io(destination, e.error))?;

    info!(
        path = %destination.display(),
        rows,
        bytes,
        "Dataset exported"
    );

    Ok(ExportStats {
        path: destination.to_path_buf(),
        rows,
        bytes,
    })
}

/// Permissions du fichier final: celles du fichier remplacé s'il existe,
/// sinon 0644 (le fichier temporaire est créé en 0600)
fn output_permissions(destination: &Path) -> Option<Permissions> {
    match std::fs::metadata(destination) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Rattache les erreurs d'I/O de l'encodeur au chemin de destination
fn csv_error(path: &Path, err: csv::Error) -> DatasetError {
    if !err.is_io_error() {
        return DatasetError::Csv(err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DatasetError::io(path, source),
        other => DatasetError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", other)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn render(dataset: &Dataset, options: &ExportOptions) -> String {
        let mut buf = Vec::new();
        write_csv(dataset, &mut buf, options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_csv_header_and_rows() {
        let dataset = Dataset::load(vec![
            Record::new()
                .with("River", "Ganges")
                .with("Latitude", 30.994)
                .with("Longitude", 78.941),
            Record::new()
                .with("River", "Yamuna")
                .with("Latitude", 31.0167)
                .with("Longitude", 78.45),
        ])
        .unwrap();

        let csv = render(&dataset, &ExportOptions::default());
        assert_eq!(
            csv,
            "River,Latitude,Longitude\n\
             Ganges,30.99400,78.94100\n\
             Yamuna,31.01670,78.45000\n"
        );
    }

    #[test]
    fn test_write_csv_quotes_when_needed() {
        let dataset = Dataset::load(vec![Record::new()
            .with("Name", "Tungabhadra, Karnataka")
            .with("Lat", "30°55'36\"N")
            .with("Note", "line\nbreak")
            .with("Plain", "Ujjain")])
        .unwrap();

        let csv = render(&dataset, &ExportOptions::default());
        let row = csv.lines().skip(1).collect::<Vec<_>>().join("\n");
        assert_eq!(
            row,
            "\"Tungabhadra, Karnataka\",\"30°55'36\"\"N\",\"line\nbreak\",Ujjain"
        );
    }

    #[test]
    fn test_write_csv_custom_delimiter_and_precision() {
        let dataset = Dataset::load(vec![Record::new()
            .with("River", "Ken; Yamuna")
            .with("Latitude", 25.2)])
        .unwrap();
        let options = ExportOptions {
            delimiter: b';',
            float_precision: 2,
        };

        let csv = render(&dataset, &options);
        assert_eq!(csv, "River;Latitude\n\"Ken; Yamuna\";25.20\n");
    }

    #[test]
    fn test_export_to_file() {
        let dataset = Dataset::load(vec![Record::new().with("River", "Narmada")]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rivers.csv");

        let stats = export(&dataset, &output, &ExportOptions::default()).unwrap();

        assert_eq!(stats.rows, 1);
        assert_eq!(stats.path, output);
        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content, "River\nNarmada\n");
        assert_eq!(stats.bytes, content.len() as u64);
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dataset = Dataset::load(vec![Record::new().with("River", "Kaveri")]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rivers.csv");
        std::fs::write(&output, "stale content that is longer than the new one\n").unwrap();

        export(&dataset, &output, &ExportOptions::default()).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "River\nKaveri\n");
    }

    #[test]
    fn test_export_missing_directory_fails_without_file() {
        let dataset = Dataset::load(vec![Record::new().with("River", "Tapti")]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("rivers.csv");

        let err = export(&dataset, &output, &ExportOptions::default()).unwrap_err();

        match err {
            DatasetError::Io { path, .. } => assert_eq!(path, output),
            other => panic!("expected Io error, got {:?}", other),
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_export_leaves_no_temporary_file() {
        let dataset = Dataset::load(vec![Record::new().with("River", "Mahanadi")]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rivers.csv");

        export(&dataset, &output, &ExportOptions::default()).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("rivers.csv")]);
    }
    #[test]
    fn test_export_onto_directory_cleans_up() {
        let dataset = Dataset::load(vec![Record::new().with("River", "Godavari")]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rivers.csv");
        std::fs::create_dir(&output).unwrap();

        let err = export(&dataset, &output, &ExportOptions::default()).unwrap_err();

        match err {
            DatasetError::Io { path, .. } => assert_eq!(path, output),
            other => panic!("expected Io error, got {:?}", other),
        }
        assert!(output.is_dir());
        assert_eq!(std::fs::read_dir(&output).unwrap().count(), 0);
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("rivers.csv")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_export_new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dataset = Dataset::load(vec![Record::new().with("River", "Krishna")]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rivers.csv");

        export(&dataset, &output, &ExportOptions::default()).unwrap();

        let mode = std::fs::metadata(&output).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_export_keeps_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dataset = Dataset::load(vec![Record::new().with("River", "Kaveri")]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rivers.csv");
        std::fs::write(&output, "River\nold\n").unwrap();
        std::fs::set_permissions(&output, Permissions::from_mode(0o640)).unwrap();

        export(&dataset, &output, &ExportOptions::default()).unwrap();

        let mode = std::fs::metadata(&output).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "River\nKaveri\n");
    }
}
