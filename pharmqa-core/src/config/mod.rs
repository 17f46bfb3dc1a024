//! PharmQA Configuration Module
//!
//! Loads `pharmqa.toml`, resolves the API key and exposes the constants the
//! rest of the crate is anchored on.

pub mod api_keys;
pub mod constants;
pub mod core;
pub mod loader;
pub mod types;

pub use core::{AgentConfig, LoggingConfig, SessionConfig};
pub use loader::{ConfigManager, PharmQaConfig};
pub use types::Locale;
