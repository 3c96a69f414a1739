// Settings persistence: toolbar sizing configuration.
// Uses platform-native config dir: e.g. ~/Library/Application Support/panefit/settings.json
// on macOS, ~/.config/panefit/settings.json on Linux.

use panefit_core::{Anchor, FitMetrics};
use panefit_layout::ToolbarFit;
use panefit_platform::Coordinator;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanefitSettings {
    #[serde(default)]
    pub sizing: SizingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingSettings {
    /// Gap between adjacent toolbar items, in points.
    #[serde(default = "default_item_spacing")]
    pub item_spacing: f32,
    /// Extra width kept after the last toolbar item.
    #[serde(default)]
    pub trailing_padding: f32,
    /// Which point of the window's top edge stays fixed while it resizes.
    #[serde(default)]
    pub anchor: AnchorSetting,
}

fn default_item_spacing() -> f32 {
    FitMetrics::default().item_spacing
}

impl Default for SizingSettings {
    fn default() -> Self {
        Self {
            item_spacing: default_item_spacing(),
            trailing_padding: 0.0,
            anchor: AnchorSetting::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorSetting {
    #[default]
    TopLeft,
    TopCenter,
}

impl SizingSettings {
    pub fn metrics(&self) -> FitMetrics {
        FitMetrics {
            item_spacing: self.item_spacing,
            trailing_padding: self.trailing_padding,
        }
    }

    pub fn anchor(&self) -> Anchor {
        match self.anchor {
            AnchorSetting::TopLeft => Anchor::TopLeft,
            AnchorSetting::TopCenter => Anchor::TopCenter,
        }
    }

    /// Build the resize coordinator these settings describe.
    pub fn coordinator(&self) -> Coordinator {
        Coordinator::new(ToolbarFit::new(self.metrics()), self.anchor())
    }
}

fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("panefit").join("settings.json"))
}

/// Parse settings JSON, falling back to defaults on malformed input.
pub fn parse_settings(data: &str) -> PanefitSettings {
    match serde_json::from_str(data) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to parse settings: {}", e);
            PanefitSettings::default()
        }
    }
}

/// Load settings from the config dir. A missing file means defaults; nothing
/// is written until `save_settings` is called.
pub fn load_settings() -> PanefitSettings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => PanefitSettings::default(),
    }
}

fn load_settings_from(path: &Path) -> PanefitSettings {
    match std::fs::read_to_string(path) {
        Ok(data) => parse_settings(&data),
        Err(_) => PanefitSettings::default(),
    }
}

pub fn save_settings(settings: &PanefitSettings) {
    match settings_path() {
        Some(path) => save_settings_to(&path, settings),
        None => log::warn!("Cannot determine settings path"),
    }
}

fn save_settings_to(path: &Path, settings: &PanefitSettings) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create config dir {}: {}", parent.display(), e);
            return;
        }
    }

    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                log::error!("Failed to write {}: {}", path.display(), e);
            }
        }
        Err(e) => {
            log::error!("Failed to serialize settings: {}", e);
        }
    }
}
