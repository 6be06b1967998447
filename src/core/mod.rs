pub mod configuration;
pub mod types;
