//! Point d'entrée CLI pour river-atlas

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use river_atlas::cli::{self, Commands};
use river_atlas::AtlasConfig;

// Charger .env au démarrage
fn load_env() {
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

/// Exporter les catalogues des rivières sacrées de l'Inde en CSV
#[derive(Parser)]
#[command(name = "river-atlas")]
#[command(author, version)]
#[command(about = "Export the holy rivers reference datasets to CSV for the map")]
#[command(long_about = "Validate the embedded holy sites and river origins datasets and export them as CSV files.\n\nWithout a subcommand, both datasets are exported.")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output directory (must exist). Overrides ATLAS_OUTPUT_DIR
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Decimal places for coordinates. Overrides ATLAS_FLOAT_PRECISION
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Save a JSON report of the run to this file
    #[arg(long, global = true)]
    report: Option<PathBuf>,

    /// Dataset to export (défaut: tous)
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    load_env();

    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let mut config = AtlasConfig::from_env();
    config.apply_overrides(cli.output_dir, cli.precision);

    let kinds = cli::selected_kinds(cli.command);
    let report = cli::cmd_export(&kinds, &config, cli.report.as_deref())?;

    if !cli.quiet {
        report.display();
    }
    info!("{}", report.summary());

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
