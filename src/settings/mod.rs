pub mod constants;
pub mod errors;
pub mod methods;
pub mod models;

pub use errors::SettingsError;
pub use models::{ConfigManager, Settings};
