pub mod config;
pub mod handlers;
pub mod output;

pub use config::ScrubConfig;
