pub mod adapters;
pub mod tool;

pub use adapters::{GogGalaxy, HardwareMonitor, Hwinfo, Rtss, Steam, UbisoftConnect};
pub use tool::ExternalTool;
