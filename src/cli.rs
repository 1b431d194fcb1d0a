// CLI module - command-line argument parsing and handlers
//
// Running without a subcommand opens the gallery. Subcommands:
// - list: Print the catalog
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::catalog::Catalog;
use crate::config::{Config, VERSION};
use crate::util::truncate_to_width;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Art Space - browse an art catalog in the terminal
#[derive(Parser, Debug)]
#[command(name = "artspace")]
#[command(version = VERSION)]
#[command(about = "Browse an art catalog in the terminal", long_about = None)]
pub struct Cli {
    /// Catalog file (TOML or JSON) to browse instead of the bundled one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Item to show first (1-based)
    #[arg(long)]
    pub start: Option<usize>,

    /// Run a scripted session without the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Comma-separated inputs for headless mode
    #[arg(long, requires = "headless")]
    pub script: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the catalog
    List,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of env/file config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if let Some(start) = self.start {
            config.start_index = start.saturating_sub(1);
        }
        if self.headless {
            config.enable_tui = false;
        }
    }
}

/// Handle a subcommand. Returns Ok(true) if one ran (exit after).
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Some(Commands::List) => {
            let mut config = Config::from_env();
            cli.apply_overrides(&mut config);
            handle_list(&config)?;
            Ok(true)
        }
        Some(Commands::Config { show, reset, path }) => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset()?;
            } else {
                // No flag provided, show help
                println!("Usage: artspace config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, open the gallery
    }
}

fn handle_list(config: &Config) -> Result<()> {
    let catalog = Catalog::load_or_bundled(config.catalog.as_deref())?;
    print!("{}", format_catalog(&catalog));
    Ok(())
}

/// Catalog as an aligned table
fn format_catalog(catalog: &Catalog) -> String {
    const TITLE_WIDTH: usize = 32;
    const ARTIST_WIDTH: usize = 20;

    let mut out = format!("{} ({} items)\n\n", catalog.name, catalog.len());
    for (i, item) in catalog.items.iter().enumerate() {
        let title = truncate_to_width(&item.title, TITLE_WIDTH);
        let artist = truncate_to_width(&item.subtitle, ARTIST_WIDTH);
        out.push_str(&format!(
            "  {:>2}. {:<tw$}  {:<aw$}  {}\n",
            i + 1,
            title,
            artist,
            item.year,
            tw = TITLE_WIDTH,
            aw = ARTIST_WIDTH,
        ));
    }
    out
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
