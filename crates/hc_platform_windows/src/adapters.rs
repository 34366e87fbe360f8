use hc_platform::{PlatformAdapter, PlatformError, PlatformType, ProcessInfo};

use crate::tool::{ExternalTool, name_matches};

macro_rules! delegate_adapter {
    ($ty:ty) => {
        impl PlatformAdapter for $ty {
            fn name(&self) -> &str {
                self.tool.name()
            }

            fn is_installed(&self) -> bool {
                self.tool.is_installed()
            }

            fn start(&self) -> Result<(), PlatformError> {
                self.tool.start()
            }

            fn stop(&self, force_kill: bool) -> Result<(), PlatformError> {
                self.tool.stop(force_kill)
            }

            fn dispose(&self) {
                self.tool.dispose()
            }

            fn is_related(&self, process: &ProcessInfo) -> bool {
                name_matches(&process.name, Self::RELATED)
            }

            fn platform_type(&self) -> PlatformType {
                Self::PLATFORM_TYPE
            }
        }
    };
}

/// Steam client.
pub struct Steam {
    tool: ExternalTool,
}

impl Steam {
    const RELATED: &'static [&'static str] =
        &["steam.exe", "steamwebhelper.exe", "gameoverlayui.exe"];
    const PLATFORM_TYPE: PlatformType = PlatformType::Steam;

    pub fn probe() -> Self {
        Self {
            tool: ExternalTool::probe("Steam", "steam.exe", "HC_STEAM_DIR", &["Steam"]),
        }
    }
}

delegate_adapter!(Steam);

/// GOG Galaxy client.
pub struct GogGalaxy {
    tool: ExternalTool,
}

impl GogGalaxy {
    const RELATED: &'static [&'static str] = &["GalaxyClient.exe", "GalaxyClientService.exe"];
    const PLATFORM_TYPE: PlatformType = PlatformType::GOGGalaxy;

    pub fn probe() -> Self {
        Self {
            tool: ExternalTool::probe(
                "GOG Galaxy",
                "GalaxyClient.exe",
                "HC_GOG_GALAXY_DIR",
                &["GOG Galaxy"],
            ),
        }
    }
}

delegate_adapter!(GogGalaxy);

/// Ubisoft Connect client.
pub struct UbisoftConnect {
    tool: ExternalTool,
}

impl UbisoftConnect {
    const RELATED: &'static [&'static str] = &["upc.exe", "UbisoftGameLauncher.exe"];
    const PLATFORM_TYPE: PlatformType = PlatformType::UbisoftConnect;

    pub fn probe() -> Self {
        Self {
            tool: ExternalTool::probe(
                "Ubisoft Connect",
                "upc.exe",
                "HC_UBISOFT_CONNECT_DIR",
                &["Ubisoft/Ubisoft Game Launcher"],
            ),
        }
    }
}

delegate_adapter!(UbisoftConnect);

/// RivaTuner Statistics Server — framerate limiting and OSD rendering.
pub struct Rtss {
    tool: ExternalTool,
}

impl Rtss {
    const RELATED: &'static [&'static str] = &["RTSS.exe", "RTSSHooksLoader64.exe"];
    const PLATFORM_TYPE: PlatformType = PlatformType::Windows;

    pub fn probe() -> Self {
        Self {
            tool: ExternalTool::probe(
                "RTSS",
                "RTSS.exe",
                "HC_RTSS_DIR",
                &["RivaTuner Statistics Server"],
            ),
        }
    }
}

delegate_adapter!(Rtss);

/// HWiNFO — hardware telemetry source for the complex OSD.
pub struct Hwinfo {
    tool: ExternalTool,
}

impl Hwinfo {
    const RELATED: &'static [&'static str] = &["HWiNFO64.exe", "HWiNFO32.exe"];
    const PLATFORM_TYPE: PlatformType = PlatformType::Windows;

    pub fn probe() -> Self {
        Self {
            tool: ExternalTool::probe("HWiNFO", "HWiNFO64.exe", "HC_HWINFO_DIR", &["HWiNFO64"]),
        }
    }
}

delegate_adapter!(Hwinfo);

/// Open Hardware Monitor — always-on sensor backend.
pub struct HardwareMonitor {
    tool: ExternalTool,
}

impl HardwareMonitor {
    const RELATED: &'static [&'static str] = &["OpenHardwareMonitor.exe"];
    const PLATFORM_TYPE: PlatformType = PlatformType::Windows;

    pub fn probe() -> Self {
        Self {
            tool: ExternalTool::probe(
                "Open Hardware Monitor",
                "OpenHardwareMonitor.exe",
                "HC_HARDWARE_MONITOR_DIR",
                &["OpenHardwareMonitor"],
            ),
        }
    }
}

delegate_adapter!(HardwareMonitor);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steam_relates_to_its_helper_processes() {
        let steam = Steam::probe();
        assert!(steam.is_related(&ProcessInfo::new(100, "steam.exe")));
        assert!(steam.is_related(&ProcessInfo::new(101, "SteamWebHelper.exe")));
        assert!(!steam.is_related(&ProcessInfo::new(102, "GalaxyClient.exe")));
    }

    #[test]
    fn gaming_platforms_report_their_type() {
        assert_eq!(Steam::probe().platform_type(), PlatformType::Steam);
        assert_eq!(GogGalaxy::probe().platform_type(), PlatformType::GOGGalaxy);
        assert_eq!(
            UbisoftConnect::probe().platform_type(),
            PlatformType::UbisoftConnect
        );
    }

    #[test]
    fn tools_report_the_native_type() {
        assert_eq!(Rtss::probe().platform_type(), PlatformType::Windows);
        assert_eq!(Hwinfo::probe().platform_type(), PlatformType::Windows);
    }
}
