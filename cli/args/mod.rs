mod app_config;
mod flags;

pub use app_config::AppConfig;
pub use flags::*;
