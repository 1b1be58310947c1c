mod manager;

pub use manager::{AppConfig, ConfigManager};
