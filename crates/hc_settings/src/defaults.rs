use std::path::PathBuf;

pub fn default_on_screen_display_level() -> i64 {
    0
}

pub fn default_platform_rtss_enabled() -> bool {
    true
}

pub fn default_platform_hwinfo_enabled() -> bool {
    true
}

/// Settings root: the user profile directory, falling back to the
/// current directory on exotic setups.
pub fn default_config_root() -> PathBuf {
    std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}
