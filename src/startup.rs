// Startup module - banner and a summary of what is about to run
//
// Printed before the TUI takes over the screen (or before a headless run).

use crate::catalog::Catalog;
use crate::config::{Config, VERSION};
use crate::theme::Theme;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// One line of the startup summary
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: String,
}

/// Print the startup banner
pub fn print_startup(config: &Config, catalog: &Catalog) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}Art Space{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Terminal art gallery{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    for module in module_status(config, catalog) {
        print_module_status(&module);
    }
    println!();

    if !config.enable_tui {
        println!("  {YELLOW}▸{RESET} {YELLOW}Headless mode{RESET} {DIM}(scripted inputs){RESET}");
        println!();
    }
}

fn module_status(config: &Config, catalog: &Catalog) -> Vec<ModuleStatus> {
    let source = match &config.catalog {
        Some(path) => path.display().to_string(),
        None => "bundled".to_string(),
    };

    vec![
        ModuleStatus {
            name: "catalog",
            enabled: true,
            description: format!("{} ({} items, {})", catalog.name, catalog.len(), source),
        },
        ModuleStatus {
            name: "tui",
            enabled: config.enable_tui,
            // Unknown names fall back, so show the one actually used
            description: format!("Terminal interface, theme {}", Theme::by_name(&config.theme).name),
        },
        ModuleStatus {
            name: "tooltip",
            enabled: true,
            description: format!("Auto-dismiss after {}ms", config.tooltip.duration_ms),
        },
        ModuleStatus {
            name: "file-logs",
            enabled: config.logging.file_enabled,
            description: config.logging.file_dir.display().to_string(),
        },
    ]
}

fn print_module_status(module: &ModuleStatus) {
    use colors::*;

    let (icon, style) = if module.enabled {
        (format!("{GREEN}✓{RESET}"), "")
    } else {
        (format!("{DIM}○{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        module.name, module.description
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_shows_resolved_theme() {
        let mut config = Config::default();
        config.theme = "solarized".to_string();
        let modules = module_status(&config, &Catalog::bundled());
        let tui = modules.iter().find(|m| m.name == "tui").unwrap();
        assert_eq!(tui.description, "Terminal interface, theme auto");
    }

    #[test]
    fn summary_reflects_config() {
        let mut config = Config::default();
        config.enable_tui = false;
        let modules = module_status(&config, &Catalog::bundled());

        let catalog = &modules[0];
        assert_eq!(catalog.description, "Art Space (3 items, bundled)");

        let tui = modules.iter().find(|m| m.name == "tui").unwrap();
        assert!(!tui.enabled);

        assert!(tui.description.ends_with("theme auto"));

        let tooltip = modules.iter().find(|m| m.name == "tooltip").unwrap();
        assert!(tooltip.description.contains("2000ms"));
    }
}
