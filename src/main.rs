//! Factory-Belt-Sandbox (Headless-CLI).
//!
//! Lädt Layout-Dateien, routet alle Belts und gibt die Pfade bzw. blockierte
//! Belts als JSON aus.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use factory_belt_sandbox::io::{load_layout_file, RouteReport};
use factory_belt_sandbox::{GameCatalog, SandboxOptions};

/// Fabrik-Sandbox mit automatisch gerouteten Förderbändern
#[derive(Parser)]
#[command(name = "factory-belt-sandbox")]
#[command(version)]
#[command(about = "Orthogonales Belt-Routing für Fabrik-Layouts", long_about = None)]
struct Cli {
    /// Spieldaten-Katalog (TOML); ohne Angabe wird der eingebaute Katalog genutzt
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// JSON formatiert ausgeben
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Routet alle Belts eines Layouts und gibt die Pfade aus
    Route {
        /// Layout-Datei (JSON)
        layout: PathBuf,
    },

    /// Meldet Belts, deren Pfad ein Hindernis schneidet (Exit-Code 1, falls vorhanden)
    Check {
        /// Layout-Datei (JSON)
        layout: PathBuf,
    },

    /// Gibt den aktiven Katalog als TOML aus
    Catalog,

    /// Schreibt die Standard-Optionen als TOML-Datei
    InitOptions {
        /// Zielpfad; Standard: neben der Binary
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    log::info!(
        "Factory-Belt-Sandbox v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let options_path = cli.options.clone().unwrap_or_else(SandboxOptions::config_path);
    let options = SandboxOptions::load_from_file(&options_path);

    match cli.command {
        Commands::Route { layout } => {
            let layout = load_layout_file(&layout, &catalog, &options)?;
            let report = RouteReport::from_layout(&layout);
            print_json(&report, cli.pretty)?;
        }
        Commands::Check { layout } => {
            let layout = load_layout_file(&layout, &catalog, &options)?;
            let report = RouteReport::from_layout(&layout);
            print_json(&report.blocked, cli.pretty)?;
            if !report.is_clear() {
                bail!("{} Belts schneiden ein Hindernis", report.blocked.len());
            }
        }
        Commands::Catalog => {
            let toml = toml::to_string_pretty(&catalog).context("Katalog nicht serialisierbar")?;
            println!("{}", toml);
        }
        Commands::InitOptions { path } => {
            let path = path.unwrap_or(options_path);
            SandboxOptions::default().save_to_file(&path)?;
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<GameCatalog> {
    match path {
        Some(path) => GameCatalog::load_from_file(path),
        None => Ok(GameCatalog::builtin()),
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
