use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// What triggered a profile application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSource {
    Startup,
    User,
    Background,
}

/// Per-game profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Whether the framerate limiter is active for this profile.
    pub framerate_enabled: bool,
    /// Target cap in frames per second, when enabled.
    pub framerate_limit: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            framerate_enabled: false,
            framerate_limit: 60,
        }
    }
}

/// Power profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerProfile {
    pub name: String,
    /// Whether automatic TDP adjustment is active.
    pub auto_tdp_enabled: bool,
    /// Sustained power limit in watts, when fixed.
    pub tdp_watts: Option<u32>,
}

impl Default for PowerProfile {
    fn default() -> Self {
        Self {
            name: "Balanced".to_string(),
            auto_tdp_enabled: false,
            tdp_watts: None,
        }
    }
}

/// Applied notification payload.
#[derive(Debug, Clone)]
pub struct Applied<P> {
    pub profile: P,
    pub source: UpdateSource,
}

/// Profile store. Broadcasts an `Applied` event whenever a profile is
/// applied; the platform manager folds the framerate-limiter bit from
/// these events.
pub struct ProfileManager {
    applied: broadcast::Sender<Applied<Profile>>,
}

impl ProfileManager {
    pub fn new() -> Self {
        let (applied, _) = broadcast::channel(32);
        Self { applied }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Applied<Profile>> {
        self.applied.subscribe()
    }

    pub fn apply(&self, profile: Profile, source: UpdateSource) {
        debug!(profile = %profile.name, ?source, "profile applied");
        let _ = self.applied.send(Applied { profile, source });
    }
}

impl Default for ProfileManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Power-profile store, mirroring `ProfileManager` for power profiles.
pub struct PowerProfileManager {
    applied: broadcast::Sender<Applied<PowerProfile>>,
}

impl PowerProfileManager {
    pub fn new() -> Self {
        let (applied, _) = broadcast::channel(32);
        Self { applied }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Applied<PowerProfile>> {
        self.applied.subscribe()
    }

    pub fn apply(&self, profile: PowerProfile, source: UpdateSource) {
        debug!(profile = %profile.name, ?source, "power profile applied");
        let _ = self.applied.send(Applied { profile, source });
    }
}

impl Default for PowerProfileManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applied_events_reach_subscribers() {
        let manager = ProfileManager::new();
        let mut rx = manager.subscribe();

        let mut profile = Profile::default();
        profile.framerate_enabled = true;
        manager.apply(profile, UpdateSource::User);

        let event = rx.try_recv().unwrap();
        assert!(event.profile.framerate_enabled);
        assert_eq!(event.source, UpdateSource::User);
    }

    #[test]
    fn apply_without_subscribers_is_fine() {
        let manager = PowerProfileManager::new();
        manager.apply(PowerProfile::default(), UpdateSource::Startup);
    }
}
