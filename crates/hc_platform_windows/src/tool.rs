use std::env;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use parking_lot::Mutex;
use tracing::debug;

use hc_platform::PlatformError;

/// Shared plumbing for a managed external process.
///
/// The install location is probed once at construction: an env override
/// (`HC_<TOOL>_DIR`) wins, then candidate directories under the Program
/// Files roots. The spawned child handle lives behind a mutex so the
/// adapter surface can take `&self`.
pub struct ExternalTool {
    name: &'static str,
    executable: &'static str,
    install_dir: Option<PathBuf>,
    child: Mutex<Option<Child>>,
}

impl ExternalTool {
    pub fn probe(
        name: &'static str,
        executable: &'static str,
        env_override: &str,
        candidates: &[&str],
    ) -> Self {
        let install_dir = Self::locate(executable, env_override, candidates);
        match &install_dir {
            Some(dir) => debug!(tool = name, dir = %dir.display(), "tool found"),
            None => debug!(tool = name, "tool not installed"),
        }
        Self {
            name,
            executable,
            install_dir,
            child: Mutex::new(None),
        }
    }

    /// Construct with a known install directory (tests, user-configured
    /// locations). The directory must contain the executable.
    pub fn with_install_dir(
        name: &'static str,
        executable: &'static str,
        dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name,
            executable,
            install_dir: Some(dir.into()),
            child: Mutex::new(None),
        }
    }

    fn locate(executable: &str, env_override: &str, candidates: &[&str]) -> Option<PathBuf> {
        if let Ok(dir) = env::var(env_override) {
            let dir = PathBuf::from(dir);
            if dir.join(executable).is_file() {
                return Some(dir);
            }
        }
        for root in ["ProgramFiles", "ProgramFiles(x86)"] {
            if let Ok(base) = env::var(root) {
                for candidate in candidates {
                    let dir = Path::new(&base).join(candidate);
                    if dir.join(executable).is_file() {
                        return Some(dir);
                    }
                }
            }
        }
        None
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_installed(&self) -> bool {
        self.install_dir.is_some()
    }

    pub fn install_dir(&self) -> Option<&Path> {
        self.install_dir.as_deref()
    }

    /// Spawn the tool if it is not already running under our handle.
    pub fn start(&self) -> Result<(), PlatformError> {
        let Some(dir) = self.install_dir.as_deref() else {
            return Err(PlatformError::NotInstalled {
                tool: self.name.to_string(),
            });
        };

        let mut slot = self.child.lock();
        if let Some(child) = slot.as_mut()
            && matches!(child.try_wait(), Ok(None))
        {
            debug!(tool = self.name, "already running");
            return Ok(());
        }

        let child = Command::new(dir.join(self.executable))
            .current_dir(dir)
            .spawn()
            .map_err(|source| PlatformError::Launch {
                tool: self.name.to_string(),
                source,
            })?;
        debug!(tool = self.name, pid = child.id(), "spawned");
        *slot = Some(child);
        Ok(())
    }

    /// Stop the tool. With `force_kill` the child is terminated and
    /// reaped; otherwise the handle is detached and the process left
    /// alone.
    pub fn stop(&self, force_kill: bool) -> Result<(), PlatformError> {
        let Some(mut child) = self.child.lock().take() else {
            return Ok(());
        };
        if force_kill {
            child.kill().map_err(|source| PlatformError::Stop {
                tool: self.name.to_string(),
                source,
            })?;
            let _ = child.wait();
            debug!(tool = self.name, "killed");
        } else {
            debug!(tool = self.name, "detached");
        }
        Ok(())
    }

    /// Drop the child handle without touching the process.
    pub fn dispose(&self) {
        let _ = self.child.lock().take();
    }
}

/// Case-insensitive match of a process name against a table of known
/// executable names.
pub(crate) fn name_matches(process_name: &str, known: &[&str]) -> bool {
    known
        .iter()
        .any(|name| name.eq_ignore_ascii_case(process_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_on_missing_install_errors() {
        let tool = ExternalTool::probe("Nonexistent", "nonexistent.exe", "HC_TEST_NO_SUCH_DIR", &[]);
        assert!(!tool.is_installed());
        assert!(matches!(
            tool.start(),
            Err(PlatformError::NotInstalled { .. })
        ));
    }

    #[test]
    fn stop_without_a_child_is_a_noop() {
        let tool = ExternalTool::with_install_dir("Tool", "tool.exe", "/does/not/matter");
        assert!(tool.stop(true).is_ok());
        assert!(tool.stop(false).is_ok());
        tool.dispose();
    }

    #[test]
    fn spawn_failure_surfaces_as_launch_error() {
        let tool = ExternalTool::with_install_dir("Tool", "tool.exe", "/definitely/not/a/dir");
        assert!(matches!(tool.start(), Err(PlatformError::Launch { .. })));
    }

    #[test]
    fn name_matching_ignores_case() {
        let known = &["steam.exe", "steamwebhelper.exe"];
        assert!(name_matches("Steam.exe", known));
        assert!(name_matches("STEAMWEBHELPER.EXE", known));
        assert!(!name_matches("steam", known));
    }
}
