use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::defaults::*;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// OSD level: 0 Disabled, 1 Minimal, 2 Extended, 3 Full, 4 External.
    #[serde(default = "default_on_screen_display_level")]
    pub on_screen_display_level: i64,

    /// Force-kill RTSS on shutdown.
    #[serde(default = "default_platform_rtss_enabled")]
    pub platform_rtss_enabled: bool,

    /// Force-kill HWiNFO on shutdown.
    #[serde(default = "default_platform_hwinfo_enabled")]
    pub platform_hwinfo_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            on_screen_display_level: default_on_screen_display_level(),
            platform_rtss_enabled: default_platform_rtss_enabled(),
            platform_hwinfo_enabled: default_platform_hwinfo_enabled(),
        }
    }
}

impl Settings {
    fn settings_dir() -> PathBuf {
        default_config_root().join(".hc_companion")
    }

    fn settings_path() -> PathBuf {
        Self::settings_dir().join("settings.json")
    }

    /// Load settings from disk.
    ///
    /// Falls back to defaults (and persists them, best effort) if the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        if let Ok(content) = fs::read_to_string(Self::settings_path())
            && let Ok(settings) = serde_json::from_str::<Settings>(&content)
        {
            return settings;
        }

        let default_settings = Self::default();
        let _ = default_settings.save();
        default_settings
    }

    /// Save settings to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::settings_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.on_screen_display_level, 0);
        assert!(settings.platform_rtss_enabled);
        assert!(settings.platform_hwinfo_enabled);
    }

    #[test]
    fn roundtrips_through_json() {
        let mut settings = Settings::default();
        settings.on_screen_display_level = 3;
        settings.platform_hwinfo_enabled = false;
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.on_screen_display_level, 3);
        assert!(!back.platform_hwinfo_enabled);
    }
}
