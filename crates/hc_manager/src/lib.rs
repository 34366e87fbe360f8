pub mod debounce;
pub mod manager;

pub use debounce::Debounce;
pub use manager::{PlatformManager, PlatformSet};
