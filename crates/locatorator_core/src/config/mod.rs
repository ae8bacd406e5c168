//! Configuration management for Locatorator.
//!
//! This module provides:
//! - TOML-based configuration with `[import]`, `[export]` and `[logging]` sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Defaults for every missing key
//!
//! # Example
//!
//! ```no_run
//! use locatorator_core::config::{ConfigManager, ConfigSection};
//! use locatorator_core::markers::MarkerColor;
//!
//! let mut config = ConfigManager::new(".config/locatorator.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Timebase: {}", config.settings().import.timebase);
//!
//! config.settings_mut().export.marker_color = MarkerColor::Cyan;
//! config.update_section(ConfigSection::Export).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, ExportSettings, ImportSettings, LoggingSettings, Settings};
