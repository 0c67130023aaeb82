pub mod info;
pub mod serve;
