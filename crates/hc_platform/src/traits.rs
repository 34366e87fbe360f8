use crate::types::{PlatformType, ProcessInfo};
use crate::PlatformError;

/// Contract every managed external tool exposes to the platform manager.
///
/// Installation is probed once at construction and stays immutable for
/// the process lifetime. `start`/`stop` are fire-and-forget requests;
/// the manager does not await or retry them.
pub trait PlatformAdapter: Send + Sync {
    /// Human-readable tool name, used for logging.
    fn name(&self) -> &str;

    fn is_installed(&self) -> bool;

    fn start(&self) -> Result<(), PlatformError>;

    /// Stop the tool. `force_kill` terminates the underlying process;
    /// otherwise the handle is released without touching it.
    fn stop(&self, force_kill: bool) -> Result<(), PlatformError>;

    /// Release any held resources. Idempotent.
    fn dispose(&self);

    /// Whether the given process belongs to this platform.
    fn is_related(&self, process: &ProcessInfo) -> bool;

    /// Gaming platforms override this; tools report `Windows`.
    fn platform_type(&self) -> PlatformType {
        PlatformType::Windows
    }
}
