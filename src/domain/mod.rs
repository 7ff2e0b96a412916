pub mod config;
pub mod weather;
