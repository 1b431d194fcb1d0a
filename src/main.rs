// Art Space - a terminal art gallery
//
// Browse a catalog of artworks one at a time: Previous/Next wrap around the
// ends, and a long press on Next shows a tooltip that hides itself after a
// couple of seconds.
//
// Architecture:
// - Carousel: index + tooltip state in a watch channel, owned tooltip timer
// - Catalog: bundled artworks or a TOML/JSON file
// - TUI (ratatui): renders the carousel, maps keys/mouse to carousel inputs
// - Demo: headless scripted runs against the same controller

use anyhow::{Context, Result};
use artspace::carousel::CarouselController;
use artspace::catalog::Catalog;
use artspace::config::Config;
use artspace::logging::{self, LogBuffer};
use artspace::{cli, demo, startup, tui};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle subcommands first (list, config --show/--path/--reset)
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Precedence: flags > env > file > defaults
    let mut config = Config::from_env();
    cli.apply_overrides(&mut config);

    // Resolve the script before touching the terminal so typos fail fast
    let script = match &cli.script {
        Some(script) => demo::parse_script(script)?,
        None => demo::parse_script(demo::DEFAULT_SCRIPT)?,
    };

    let catalog = Catalog::load_or_bundled(config.catalog.as_deref())?;

    startup::print_startup(&config, &catalog);

    // In TUI mode logs go to the buffer shown in the status bar,
    // otherwise to stderr. The file guard flushes on drop.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, config.enable_tui, &log_buffer);

    let mut controller =
        CarouselController::with_tooltip_duration(catalog.items.clone(), config.tooltip.duration())
            .context("Cannot open the gallery")?;
    if config.start_index > 0 {
        controller.select(config.start_index);
    }

    tracing::info!(
        "Opened '{}' at {}/{}",
        catalog.name,
        controller.current_index() + 1,
        controller.len()
    );

    if config.enable_tui {
        tui::run_tui(controller, &catalog, &config, log_buffer).await?;
    } else {
        demo::run_demo(
            controller,
            &script,
            config.tooltip.duration(),
            &config.tooltip.message,
        )
        .await?;
    }

    tracing::info!("Gallery closed");
    Ok(())
}
