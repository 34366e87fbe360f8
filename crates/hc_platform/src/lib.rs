pub mod traits;
pub mod types;

pub use traits::PlatformAdapter;
pub use types::{PlatformType, ProcessInfo};

/// Platform adapter error type.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("{tool} is not installed")]
    NotInstalled { tool: String },
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to stop {tool}: {source}")]
    Stop {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}
