//! Tests d'intégration du binaire river-atlas

use std::path::Path;
use std::process::{Command, Output};

const SITES_FILE: &str = "hindu_holy_sites_rivers_tributaries.csv";
const ORIGINS_FILE: &str = "india_holy_rivers_comprehensive.csv";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_river-atlas"))
        .args(args)
        .current_dir(dir)
        .env_remove("ATLAS_OUTPUT_DIR")
        .env_remove("ATLAS_FLOAT_PRECISION")
        .env_remove("ATLAS_PREVIEW_ROWS")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run river-atlas")
}

fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap()
        .records()
        .map(|r| r.unwrap())
        .collect()
}

#[test]
fn test_default_run_exports_both_datasets() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &[]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let sites = read_rows(&dir.path().join(SITES_FILE));
    assert_eq!(sites.len(), 37 + 1);
    assert_eq!(
        sites[0].iter().collect::<Vec<_>>(),
        vec![
            "River",
            "Holy Site",
            "City",
            "State",
            "Latitude",
            "Longitude",
            "Significance"
        ]
    );
    assert_eq!(&sites[1][4], "30.99400");
    assert_eq!(&sites[1][5], "78.94100");

    let origins = read_rows(&dir.path().join(ORIGINS_FILE));
    assert_eq!(origins.len(), 11 + 1);
    assert_eq!(&origins[0][0], "River Name");
    assert_eq!(&origins[1][2], "30°55'36\"N");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Number of unique rivers covered: 20"));
    assert!(stdout.contains("Table saved as CSV with 11 rivers."));
}

#[test]
fn test_subcommand_exports_single_dataset() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &["origins"]);
    assert!(output.status.success());

    assert!(dir.path().join(ORIGINS_FILE).exists());
    assert!(!dir.path().join(SITES_FILE).exists());
}

#[test]
fn test_output_dir_and_precision_flags() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data");
    std::fs::create_dir(&out).unwrap();

    let output = run(
        dir.path(),
        &[
            "--output-dir",
            out.to_str().unwrap(),
            "--precision",
            "2",
            "--report",
            "report.json",
            "sites",
        ],
    );
    assert!(output.status.success());

    let sites = read_rows(&out.join(SITES_FILE));
    assert_eq!(&sites[1][4], "30.99");

    let report = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    assert!(report.contains("\"kind\": \"sites\""));
}

#[test]
fn test_missing_output_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let output = run(dir.path(), &["--output-dir", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing"), "stderr: {}", stderr);
    assert!(!missing.exists());
}
