pub mod error;

pub use libs::anyhow;
