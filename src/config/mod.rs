//! Presentation settings for the interactive guide
//!
//! Settings are read from a JSON file; every field is optional and missing
//! ones take their defaults. The singularity tolerance is deliberately absent:
//! it is fixed in [`crate::constants::TOLERANCE`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::GuideError;

const DEFAULT_PLOT_WIDTH: usize = 72;
const MIN_PLOT_WIDTH: usize = 40;
const MAX_PLOT_WIDTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Decimal places for calculator output
    pub decimal_places: usize,
    /// Clear the terminal before each screen
    pub clear_screen: bool,
    /// Wait for Enter after each screen
    pub pause_after_screen: bool,
    /// Plot width in columns; terminal width when absent
    pub plot_width: Option<usize>,
    /// Plot height in rows
    pub plot_height: usize,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            decimal_places: 6,
            clear_screen: true,
            pause_after_screen: true,
            plot_width: None,
            plot_height: 21,
        }
    }
}

impl GuideConfig {
    /// Loads settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, GuideError> {
        let content = std::fs::read_to_string(path).map_err(|source| GuideError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Writes settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), GuideError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Width to draw plots at
    ///
    /// Uses the configured width, otherwise the terminal width, clamped to a
    /// readable range.
    pub fn effective_plot_width(&self) -> usize {
        let width = self.plot_width.unwrap_or_else(|| {
            term_size::dimensions()
                .map(|(w, _)| w.saturating_sub(8))
                .unwrap_or(DEFAULT_PLOT_WIDTH)
        });
        width.clamp(MIN_PLOT_WIDTH, MAX_PLOT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("guide.json");
        std::fs::write(&path, r#"{ "decimal_places": 3, "clear_screen": false }"#).unwrap();

        let config = GuideConfig::load(&path).unwrap();
        assert_eq!(config.decimal_places, 3);
        assert!(!config.clear_screen);
        assert!(config.pause_after_screen);
        assert_eq!(config.plot_height, 21);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("guide.json");
        let config = GuideConfig {
            plot_width: Some(60),
            ..GuideConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(GuideConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            GuideConfig::load(&missing),
            Err(GuideError::ConfigRead { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ decimal_places: ").unwrap();
        assert!(matches!(
            GuideConfig::load(&broken),
            Err(GuideError::ConfigFormat(_))
        ));
    }

    #[test]
    fn test_plot_width_is_clamped() {
        let narrow = GuideConfig {
            plot_width: Some(10),
            ..GuideConfig::default()
        };
        assert_eq!(narrow.effective_plot_width(), MIN_PLOT_WIDTH);

        let wide = GuideConfig {
            plot_width: Some(500),
            ..GuideConfig::default()
        };
        assert_eq!(wide.effective_plot_width(), MAX_PLOT_WIDTH);
    }
}
