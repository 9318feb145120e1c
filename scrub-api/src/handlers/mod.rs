pub mod scrub;
pub mod settings;
