use std::path::PathBuf;

/// Which gaming platform owns a process.
///
/// `Windows` doubles as the default for native games and for queries
/// made before the platform manager is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformType {
    #[default]
    Windows,
    Steam,
    GOGGalaxy,
    UbisoftConnect,
}

/// Snapshot of an OS process, as supplied by the foreground-process
/// monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    /// Executable file name, e.g. `steam.exe`.
    pub name: String,
    /// Full executable path when the caller could resolve it.
    pub path: Option<PathBuf>,
}

impl ProcessInfo {
    pub fn new(pid: u32, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}
