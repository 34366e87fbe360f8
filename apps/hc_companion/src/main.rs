use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use hc_manager::{PlatformManager, PlatformSet};
use hc_platform_windows::{GogGalaxy, HardwareMonitor, Hwinfo, Rtss, Steam, UbisoftConnect};
use hc_profiles::{PowerProfileManager, ProfileManager};
use hc_settings::SettingsManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Arc::new(SettingsManager::new());
    let profiles = Arc::new(ProfileManager::new());
    let power_profiles = Arc::new(PowerProfileManager::new());

    // Installation is probed once, here, for the process lifetime.
    let platforms = PlatformSet {
        steam: Arc::new(Steam::probe()),
        gog_galaxy: Arc::new(GogGalaxy::probe()),
        ubisoft_connect: Arc::new(UbisoftConnect::probe()),
        rtss: Arc::new(Rtss::probe()),
        hwinfo: Arc::new(Hwinfo::probe()),
        hardware_monitor: Arc::new(HardwareMonitor::probe()),
    };

    let manager = PlatformManager::new(platforms, settings, profiles, power_profiles);
    manager.start();

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    manager.stop();

    Ok(())
}
