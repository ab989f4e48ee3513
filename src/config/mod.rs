//! Application configuration.
//!
//! Loaded once at startup from `~/.config/character-browser/config.toml`
//! (platform equivalent via `dirs`), then overridden by CLI flags.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig, DEFAULT_ENDPOINT};
