//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use crate::theme::Theme;

impl Config {
    /// Catalog line: commented example when unset
    fn catalog_to_toml(&self) -> String {
        match &self.catalog {
            Some(path) => format!("catalog = {:?}", path.display().to_string()),
            None => "# catalog = \"~/Pictures/gallery.toml\"".to_string(),
        }
    }

    /// Render the full config file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# artspace configuration

# Theme: {theme_names}
theme = "{theme}"

# Catalog file (.toml or .json) with an [[items]] list of
# {{ image, title, subtitle, year }}. Unset = bundled artworks.
{catalog}

# Item shown first
start_index = {start_index}

# Tooltip shown when the Next control is held
[tooltip]
message = {message:?}
duration_ms = {duration_ms}

# Input timing
[input]
long_press_ms = {long_press_ms}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"  # trace, debug, info, warn, error
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            theme_names = Theme::NAMES.join(", "),
            catalog = self.catalog_to_toml(),
            start_index = self.start_index,
            message = self.tooltip.message,
            duration_ms = self.tooltip.duration_ms,
            long_press_ms = self.input.long_press_ms,
            log_level = self.logging.level.as_str(),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
