use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use hc_core::{InstalledTools, NeedTracker, OverlayLevel, PlatformNeeds, ToolCommand};
use hc_platform::{PlatformAdapter, PlatformType, ProcessInfo};
use hc_profiles::{Applied, PowerProfile, PowerProfileManager, Profile, ProfileManager};
use hc_settings::{SettingChanged, SettingValue, SettingsManager, keys};

use crate::debounce::Debounce;

/// Quiet interval before a burst of need changes is reconciled.
const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(1000);

/// Every adapter handle the platform manager owns for its process
/// lifetime. Installation state is probed by the adapters at
/// construction and stays fixed from then on.
pub struct PlatformSet {
    pub steam: Arc<dyn PlatformAdapter>,
    pub gog_galaxy: Arc<dyn PlatformAdapter>,
    pub ubisoft_connect: Arc<dyn PlatformAdapter>,
    pub rtss: Arc<dyn PlatformAdapter>,
    pub hwinfo: Arc<dyn PlatformAdapter>,
    pub hardware_monitor: Arc<dyn PlatformAdapter>,
}

/// Aggregates feature demand from the settings, profile and
/// power-profile stores into a need set and reconciles it against the
/// previously satisfied state, issuing minimal start/stop commands to
/// RTSS and HWiNFO.
///
/// A single actor task owns the need set; producers never touch shared
/// state, they broadcast events that the actor folds in. Reconciliation
/// runs once per quiet interval after a burst of changes.
pub struct PlatformManager {
    platforms: Arc<PlatformSet>,
    settings: Arc<SettingsManager>,
    profiles: Arc<ProfileManager>,
    power_profiles: Arc<PowerProfileManager>,
    initialized_tx: watch::Sender<bool>,
    initialized_rx: watch::Receiver<bool>,
    actor: Mutex<Option<JoinHandle<()>>>,
}

impl PlatformManager {
    pub fn new(
        platforms: PlatformSet,
        settings: Arc<SettingsManager>,
        profiles: Arc<ProfileManager>,
        power_profiles: Arc<PowerProfileManager>,
    ) -> Self {
        let (initialized_tx, initialized_rx) = watch::channel(false);
        Self {
            platforms: Arc::new(platforms),
            settings,
            profiles,
            power_profiles,
            initialized_tx,
            initialized_rx,
            actor: Mutex::new(None),
        }
    }

    /// Observe readiness; flips to `true` once startup completes and
    /// back to `false` on shutdown.
    pub fn initialized(&self) -> watch::Receiver<bool> {
        self.initialized_rx.clone()
    }

    /// Start the subsystem: launch already-needed tools, prime the need
    /// set from the current OSD level, and spawn the reconciliation
    /// actor. Must be called from within a tokio runtime.
    pub fn start(&self) {
        if *self.initialized_rx.borrow() {
            debug!("platform manager already started");
            return;
        }

        let platforms = &self.platforms;
        let installed = InstalledTools {
            rtss: platforms.rtss.is_installed(),
            hwinfo: platforms.hwinfo.is_installed(),
        };

        if platforms.steam.is_installed()
            && let Err(e) = platforms.steam.start()
        {
            warn!("failed to start Steam: {e}");
        }
        // GOG Galaxy and Ubisoft Connect need no startup work; they are
        // consulted by get_platform and torn down at shutdown.

        let mut tracker = NeedTracker::new();
        if installed.rtss {
            // Prime the OSD needs from the live setting instead of
            // waiting for a change notification.
            let level = OverlayLevel::from_raw(self.settings.on_screen_display_level());
            tracker.set_overlay_level(level);
            let commands = tracker.reconcile(installed);
            apply_commands(platforms, &commands);
        }

        if platforms.hardware_monitor.is_installed()
            && let Err(e) = platforms.hardware_monitor.start()
        {
            warn!("failed to start hardware monitor: {e}");
        }

        // Subscribe before spawning so no producer event can slip by.
        let actor = actor_loop(
            tracker,
            installed,
            Arc::clone(&self.platforms),
            Arc::clone(&self.settings),
            self.settings.subscribe(),
            self.profiles.subscribe(),
            self.power_profiles.subscribe(),
        );
        *self.actor.lock() = Some(tokio::spawn(actor));

        let _ = self.initialized_tx.send(true);
        info!("platform manager started");
    }

    /// Stop the subsystem: tear down the actor, then every installed
    /// platform. Whether RTSS/HWiNFO are force-killed follows the
    /// persisted `Platform*Enabled` preferences.
    pub fn stop(&self) {
        if let Some(handle) = self.actor.lock().take() {
            handle.abort();
        }

        let platforms = &self.platforms;
        if platforms.steam.is_installed()
            && let Err(e) = platforms.steam.stop(false)
        {
            warn!("failed to stop Steam: {e}");
        }
        if platforms.gog_galaxy.is_installed() {
            platforms.gog_galaxy.dispose();
        }
        if platforms.ubisoft_connect.is_installed() {
            platforms.ubisoft_connect.dispose();
        }

        if platforms.rtss.is_installed() {
            let kill = self.settings.get_boolean(keys::PLATFORM_RTSS_ENABLED);
            if let Err(e) = platforms.rtss.stop(kill) {
                warn!("failed to stop RTSS: {e}");
            }
            platforms.rtss.dispose();
        }
        if platforms.hwinfo.is_installed() {
            let kill = self.settings.get_boolean(keys::PLATFORM_HWINFO_ENABLED);
            if let Err(e) = platforms.hwinfo.stop(kill) {
                warn!("failed to stop HWiNFO: {e}");
            }
            platforms.hwinfo.dispose();
        }

        if platforms.hardware_monitor.is_installed()
            && let Err(e) = platforms.hardware_monitor.stop(false)
        {
            warn!("failed to stop hardware monitor: {e}");
        }

        let _ = self.initialized_tx.send(false);
        info!("platform manager stopped");
    }

    /// Which gaming platform owns the given process. Safe to call at
    /// any time; returns `Windows` before startup completes and for
    /// unmatched processes.
    pub fn get_platform(&self, process: &ProcessInfo) -> PlatformType {
        if !*self.initialized_rx.borrow() {
            return PlatformType::Windows;
        }
        // Fixed relation order: Steam, GOG Galaxy, Ubisoft Connect.
        for adapter in [
            &self.platforms.steam,
            &self.platforms.gog_galaxy,
            &self.platforms.ubisoft_connect,
        ] {
            if adapter.is_related(process) {
                return adapter.platform_type();
            }
        }
        PlatformType::Windows
    }
}

impl Drop for PlatformManager {
    fn drop(&mut self) {
        if let Some(handle) = self.actor.lock().take() {
            handle.abort();
        }
    }
}

/// The single writer of the need set. Folds producer events into the
/// tracker, coalesces bursts through the debounce, and applies the
/// resulting commands.
async fn actor_loop(
    mut tracker: NeedTracker,
    installed: InstalledTools,
    platforms: Arc<PlatformSet>,
    settings: Arc<SettingsManager>,
    mut settings_rx: broadcast::Receiver<SettingChanged>,
    mut profiles_rx: broadcast::Receiver<Applied<Profile>>,
    mut power_rx: broadcast::Receiver<Applied<PowerProfile>>,
) {
    let mut debounce = Debounce::new(DEBOUNCE_INTERVAL);
    // Armed once at startup so the first pass runs even without events.
    debounce.rearm();

    loop {
        tokio::select! {
            changed = settings_rx.recv() => match changed {
                Ok(change) => {
                    if change.name == keys::ON_SCREEN_DISPLAY_LEVEL
                        && let SettingValue::Int(level) = change.value
                    {
                        tracker.set_overlay_level(OverlayLevel::from_raw(level));
                        debounce.rearm();
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    // Missed notifications may include the latest OSD
                    // level; re-sync it from the store.
                    warn!(skipped, "settings notifications lagged, re-syncing");
                    let level = OverlayLevel::from_raw(settings.on_screen_display_level());
                    tracker.set_overlay_level(level);
                    debounce.rearm();
                }
                Err(RecvError::Closed) => break,
            },
            applied = profiles_rx.recv() => match applied {
                Ok(event) => {
                    tracker.set(
                        PlatformNeeds::FRAMERATE_LIMITER,
                        event.profile.framerate_enabled,
                    );
                    debounce.rearm();
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "profile notifications lagged");
                }
                Err(RecvError::Closed) => break,
            },
            applied = power_rx.recv() => match applied {
                Ok(event) => {
                    tracker.set(PlatformNeeds::AUTO_TDP, event.profile.auto_tdp_enabled);
                    debounce.rearm();
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "power profile notifications lagged");
                }
                Err(RecvError::Closed) => break,
            },
            _ = debounce.elapsed() => {
                debounce.disarm();
                let commands = tracker.reconcile(installed);
                if !commands.is_empty() {
                    debug!(?commands, "reconciling platform needs");
                }
                apply_commands(&platforms, &commands);
            }
        }
    }
    debug!("platform actor exited");
}

/// Dispatch reconciliation commands to the tool adapters.
///
/// Fire and forget: a failed call is logged and the need bookkeeping
/// stays advanced as if it had succeeded; the next pass will not retry
/// because the edge has been consumed.
fn apply_commands(platforms: &PlatformSet, commands: &[ToolCommand]) {
    for command in commands {
        let result = match command {
            ToolCommand::StartRtss => {
                info!("starting RTSS");
                platforms.rtss.start()
            }
            ToolCommand::StopRtss { force_kill } => {
                info!(force_kill, "stopping RTSS");
                platforms.rtss.stop(*force_kill)
            }
            ToolCommand::StartHwinfo => {
                info!("starting HWiNFO");
                platforms.hwinfo.start()
            }
            ToolCommand::StopHwinfo { force_kill } => {
                info!(force_kill, "stopping HWiNFO");
                platforms.hwinfo.stop(*force_kill)
            }
        };
        if let Err(e) = result {
            warn!("platform command failed: {e}");
        }
    }
}
