pub use anyhow;
pub use chrono;
pub use clap;
pub use dotenv;
pub use env_logger;
pub use fastrand;
pub use getrandom;
pub use hex;
pub use hmac;
pub use log;
pub use once_cell;
pub use parking_lot;
pub use serde_json;
pub use sha2;
pub use tera;
pub use termcolor;
pub use tokio;
pub use url;
pub use warp;
