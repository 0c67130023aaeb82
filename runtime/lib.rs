pub mod colors;
pub mod tokio_util;
