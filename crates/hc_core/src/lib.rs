pub mod needs;
pub mod overlay;
pub mod reconcile;

pub use needs::PlatformNeeds;
pub use overlay::OverlayLevel;
pub use reconcile::{InstalledTools, NeedTracker, ToolCommand, reconcile};
