pub mod defaults;
pub mod keys;
pub mod manager;
pub mod settings;

pub use manager::{SettingChanged, SettingValue, SettingsManager};
pub use settings::Settings;
