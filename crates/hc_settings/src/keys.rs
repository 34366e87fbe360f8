//! Setting names as used in change notifications and `get_boolean`.

pub const ON_SCREEN_DISPLAY_LEVEL: &str = "OnScreenDisplayLevel";
pub const PLATFORM_RTSS_ENABLED: &str = "PlatformRTSSEnabled";
pub const PLATFORM_HWINFO_ENABLED: &str = "PlatformHWiNFOEnabled";
