//! Coursebook - a course catalog in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use coursebook_app::config::{self, Settings};
use coursebook_app::{ColorScheme, EngineConfig};
use coursebook_core::prelude::*;
use coursebook_core::{logging, sample_catalog, Catalog};

/// Color scheme override from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ColorScheme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ColorScheme::Light,
            ThemeArg::Dark => ColorScheme::Dark,
        }
    }
}

/// Coursebook - browse a course catalog in the terminal
#[derive(Parser, Debug)]
#[command(name = "coursebook")]
#[command(about = "Browse a course catalog in the terminal", long_about = None)]
struct Args {
    /// Force the light or dark color scheme
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Config file (default: <config dir>/coursebook/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// TOML file of [[courses]] tables to show instead of the built-in catalog
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    let args = Args::parse();

    let config_path = args.config.or_else(config::default_config_path);

    if args.init_config {
        let path = config_path.ok_or_else(|| {
            Error::config("No config directory on this platform, pass --config <PATH>")
        })?;
        if config::init_config_file(&path)? {
            println!("Wrote default config to {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    logging::init()?;

    let settings = config_path
        .as_deref()
        .map(config::load_settings)
        .unwrap_or_else(Settings::default);

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Loading catalog {}", path.display()))?,
        None => sample_catalog(),
    };
    info!("Catalog has {} courses", catalog.len());

    coursebook_tui::run(EngineConfig {
        catalog: Arc::new(catalog),
        settings,
        config_path,
        cli_color_scheme: args.theme.map(ColorScheme::from),
    })
}
