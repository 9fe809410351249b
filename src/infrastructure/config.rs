use std::path::PathBuf;
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::presentation::config::keybindings::KeyBindings;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Periods of the page's timers, in milliseconds
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TimingConfig {
    #[serde(default = "TimingConfig::default_clock")]
    pub clock_interval_ms: u64,
    #[serde(default = "TimingConfig::default_title")]
    pub title_interval_ms: u64,
    #[serde(default = "TimingConfig::default_quote")]
    pub quote_interval_ms: u64,
    #[serde(default = "TimingConfig::default_loading")]
    pub loading_ms: u64,
}

impl TimingConfig {
    fn default_clock() -> u64 {
        1000
    }

    fn default_title() -> u64 {
        3000
    }

    fn default_quote() -> u64 {
        10_000
    }

    fn default_loading() -> u64 {
        2000
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    pub fn title_interval(&self) -> Duration {
        Duration::from_millis(self.title_interval_ms)
    }

    pub fn quote_interval(&self) -> Duration {
        Duration::from_millis(self.quote_interval_ms)
    }

    pub fn loading(&self) -> Duration {
        Duration::from_millis(self.loading_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: Self::default_clock(),
            title_interval_ms: Self::default_title(),
            quote_interval_ms: Self::default_quote(),
            loading_ms: Self::default_loading(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Viewports strictly wider than this are treated as wide
    #[serde(default = "LayoutConfig::default_breakpoint")]
    pub breakpoint_px: u32,
    /// Pixel width assumed for one terminal column
    #[serde(default = "LayoutConfig::default_column_width")]
    pub column_width_px: u32,
    #[serde(default = "LayoutConfig::default_page_size")]
    pub gallery_page_size: usize,
}

impl LayoutConfig {
    fn default_breakpoint() -> u32 {
        768
    }

    fn default_column_width() -> u32 {
        8
    }

    fn default_page_size() -> usize {
        4
    }

    /// Viewport width in pixels for a terminal `columns` wide
    pub fn width_px(&self, columns: u16) -> u32 {
        u32::from(columns) * self.column_width_px
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: Self::default_breakpoint(),
            column_width_px: Self::default_column_width(),
            gallery_page_size: Self::default_page_size(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Default for Config {
    /// The embedded configuration, key bindings included
    fn default() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            log::warn!("{e}; falling back to built-in values without key bindings");
            Self {
                config: AppConfig::default(),
                keybindings: KeyBindings::default(),
                timing: TimingConfig::default(),
                layout: LayoutConfig::default(),
            }
        })
    }
}

impl Config {
    /// Configuration shipped with the binary, without any user overrides
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Embedded defaults overlaid with the user's config file, if there is one
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::config::keybindings::Action;

    #[test]
    fn test_embedded_config() -> Result<(), ConfigError> {
        let cfg = Config::embedded()?;

        assert_eq!(cfg.timing, TimingConfig::default());
        assert_eq!(cfg.layout, LayoutConfig::default());
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())),
            Some(Action::Quit)
        );
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Esc, KeyModifiers::empty())),
            Some(Action::CloseOverlay)
        );
        Ok(())
    }

    #[test]
    fn test_default_is_embedded() {
        let cfg = Config::default();

        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('3'), KeyModifiers::empty())),
            Some(Action::OpenProjects)
        );
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Action::Submit)
        );
    }

    #[test]
    fn test_config_new_always_has_bindings() {
        // A user config may or may not exist where tests run; either way the
        // embedded bindings are merged in.
        match Config::new() {
            Ok(cfg) => assert!(!cfg.keybindings.is_empty()),
            Err(e) => panic!("config should load without a user file: {e:?}"),
        }
    }

    #[test]
    fn test_width_px() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.width_px(96), 768);
        assert_eq!(layout.width_px(97), 776);
    }
}
