//! Interaction configuration: tooltip behavior and input timing

use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Tooltip
// ─────────────────────────────────────────────────────────────────────────────

/// Tooltip shown on a long press of the Next control
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    /// Text of the overlay
    pub message: String,
    /// How long the tooltip stays visible (milliseconds)
    pub duration_ms: u64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            message: "Hold for more info!".to_string(),
            duration_ms: 2000,
        }
    }
}

impl TooltipConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Create from file config with defaults
    pub fn from_file(file: Option<FileTooltip>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            message: file.message.unwrap_or(defaults.message),
            duration_ms: file.duration_ms.unwrap_or(defaults.duration_ms),
        }
    }
}

/// Tooltip settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileTooltip {
    pub message: Option<String>,
    pub duration_ms: Option<u64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Input
// ─────────────────────────────────────────────────────────────────────────────

/// Input timing
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    /// How long a press must last to count as a long press (milliseconds)
    pub long_press_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { long_press_ms: 500 }
    }
}

impl InputConfig {
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    /// Create from file config with defaults
    pub fn from_file(file: Option<FileInput>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            long_press_ms: file
                .long_press_ms
                .unwrap_or(Self::default().long_press_ms),
        }
    }
}

/// Input settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileInput {
    pub long_press_ms: Option<u64>,
}
