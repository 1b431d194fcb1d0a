//! Configuration tests
//!
//! Round-trip guards: every field written by `to_toml()` must parse back
//! into `FileConfig` and produce the same `Config`.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let reloaded = Config::from_sources(parsed.unwrap(), no_env);
    assert_eq!(reloaded.theme, config.theme);
    assert_eq!(reloaded.catalog, None);
    assert_eq!(reloaded.tooltip, config.tooltip);
    assert_eq!(reloaded.input, config.input);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.catalog = Some(PathBuf::from("/srv/gallery/catalog.json"));
    config.start_index = 2;
    config.tooltip.message = "Say \"hi\"".to_string();
    config.tooltip.duration_ms = 750;
    config.input.long_press_ms = 300;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Never;

    let toml_str = config.to_toml();
    let parsed: FileConfig = toml::from_str(&toml_str)
        .unwrap_or_else(|e| panic!("TOML:\n{}\nError: {}", toml_str, e));
    let reloaded = Config::from_sources(parsed, no_env);

    assert_eq!(reloaded.theme, "nord");
    assert_eq!(
        reloaded.catalog,
        Some(PathBuf::from("/srv/gallery/catalog.json"))
    );
    assert_eq!(reloaded.start_index, 2);
    assert_eq!(reloaded.tooltip, config.tooltip);
    assert_eq!(reloaded.input.long_press_ms, 300);
    assert!(reloaded.logging.file_enabled);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Never);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "dracula"
catalog = "from-file.toml"
"#,
    )
    .unwrap();

    let config = Config::from_sources(
        file,
        env_from(&[
            ("ARTSPACE_THEME", "gruvbox"),
            ("ARTSPACE_CATALOG", "from-env.json"),
        ]),
    );

    assert_eq!(config.theme, "gruvbox");
    assert_eq!(config.catalog, Some(PathBuf::from("from-env.json")));
}

#[test]
fn test_file_overrides_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
[tooltip]
duration_ms = 1234

[logging]
level = "debug"
file_rotation = "hourly"
"#,
    )
    .unwrap();

    let config = Config::from_sources(file, no_env);
    assert_eq!(config.tooltip.duration_ms, 1234);
    assert_eq!(config.tooltip.message, "Hold for more info!");
    assert_eq!(config.logging.level, Verbosity::Debug);
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_no_tui_flag() {
    let headless = Config::from_sources(FileConfig::default(), env_from(&[("ARTSPACE_NO_TUI", "1")]));
    assert!(!headless.enable_tui);

    let tui = Config::from_sources(FileConfig::default(), env_from(&[("ARTSPACE_NO_TUI", "0")]));
    assert!(tui.enable_tui);
}

#[test]
fn test_catalog_tilde_expands_to_home() {
    let file: FileConfig = toml::from_str(r#"catalog = "~/Pictures/gallery.toml""#).unwrap();
    let config = Config::from_sources(file, no_env);

    let expected = match dirs::home_dir() {
        Some(home) => home.join("Pictures/gallery.toml"),
        None => PathBuf::from("~/Pictures/gallery.toml"),
    };
    assert_eq!(config.catalog, Some(expected));
}

#[test]
fn test_expand_home_leaves_other_paths_alone() {
    assert_eq!(expand_home("/srv/art.json"), PathBuf::from("/srv/art.json"));
    assert_eq!(expand_home("art/~/x.toml"), PathBuf::from("art/~/x.toml"));
    // Only the current user's home is expanded
    assert_eq!(expand_home("~bob/art.toml"), PathBuf::from("~bob/art.toml"));
}

#[test]
fn test_blank_catalog_means_bundled() {
    let config = Config::from_sources(
        FileConfig::default(),
        env_from(&[("ARTSPACE_CATALOG", "  ")]),
    );
    assert_eq!(config.catalog, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Invalid values are parse errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_rotation_is_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str(
        r#"
[logging]
file_rotation = "weekly"
"#,
    );
    let err = parsed.unwrap_err().to_string();
    assert!(err.contains("weekly"), "error should name the bad value: {}", err);
}

#[test]
fn test_unknown_level_is_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str(
        r#"
[logging]
level = "loud"
"#,
    );
    assert!(parsed.is_err());
}

#[test]
fn test_every_level_round_trips() {
    for level in [
        Verbosity::Trace,
        Verbosity::Debug,
        Verbosity::Info,
        Verbosity::Warn,
        Verbosity::Error,
    ] {
        let mut config = Config::default();
        config.logging.level = level;
        let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        assert_eq!(Config::from_sources(parsed, no_env).logging.level, level);
    }
}

#[test]
fn test_template_lists_every_theme() {
    let toml_str = Config::default().to_toml();
    for name in crate::theme::Theme::NAMES {
        assert!(toml_str.contains(name), "template should mention theme {}", name);
    }
}
