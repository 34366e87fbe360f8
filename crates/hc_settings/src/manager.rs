use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;
use tracing::warn;

use crate::keys;
use crate::settings::Settings;

/// Value carried by a change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
}

/// Broadcast on every settings write.
#[derive(Debug, Clone)]
pub struct SettingChanged {
    pub name: &'static str,
    pub value: SettingValue,
}

/// Settings store: cached snapshot, disk persistence, change broadcast.
///
/// Writes go through the typed setters, which persist best-effort and
/// notify subscribers; readers take cheap snapshots.
pub struct SettingsManager {
    settings: Arc<RwLock<Settings>>,
    changes: broadcast::Sender<SettingChanged>,
    persist: bool,
}

impl SettingsManager {
    /// Load settings from disk once and cache them.
    pub fn new() -> Self {
        Self::build(Settings::load(), true)
    }

    /// Non-persisting store over the given settings (tests, dry runs).
    pub fn in_memory(settings: Settings) -> Self {
        Self::build(settings, false)
    }

    fn build(settings: Settings, persist: bool) -> Self {
        let (changes, _) = broadcast::channel(32);
        Self {
            settings: Arc::new(RwLock::new(settings)),
            changes,
            persist,
        }
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<SettingChanged> {
        self.changes.subscribe()
    }

    /// Snapshot of the current settings.
    pub fn get(&self) -> Settings {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|_| Settings::default())
    }

    /// Read a boolean setting by name; unknown names read as `false`.
    pub fn get_boolean(&self, name: &str) -> bool {
        let settings = self.get();
        match name {
            keys::PLATFORM_RTSS_ENABLED => settings.platform_rtss_enabled,
            keys::PLATFORM_HWINFO_ENABLED => settings.platform_hwinfo_enabled,
            _ => false,
        }
    }

    pub fn on_screen_display_level(&self) -> i64 {
        self.get().on_screen_display_level
    }

    pub fn set_on_screen_display_level(&self, level: i64) {
        self.write(keys::ON_SCREEN_DISPLAY_LEVEL, SettingValue::Int(level), |s| {
            s.on_screen_display_level = level;
        });
    }

    pub fn set_platform_rtss_enabled(&self, enabled: bool) {
        self.write(
            keys::PLATFORM_RTSS_ENABLED,
            SettingValue::Bool(enabled),
            |s| s.platform_rtss_enabled = enabled,
        );
    }

    pub fn set_platform_hwinfo_enabled(&self, enabled: bool) {
        self.write(
            keys::PLATFORM_HWINFO_ENABLED,
            SettingValue::Bool(enabled),
            |s| s.platform_hwinfo_enabled = enabled,
        );
    }

    fn write(
        &self,
        name: &'static str,
        value: SettingValue,
        mutate: impl FnOnce(&mut Settings),
    ) {
        let snapshot = match self.settings.write() {
            Ok(mut guard) => {
                mutate(&mut guard);
                guard.clone()
            }
            Err(_) => return,
        };
        if self.persist
            && let Err(e) = snapshot.save()
        {
            warn!("failed to persist settings: {e}");
        }
        // No subscribers is fine; nobody is listening yet.
        let _ = self.changes.send(SettingChanged { name, value });
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}
