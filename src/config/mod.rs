//! Configuration module for Pagelens
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every field has a default, so a config file is optional. The reasoning-service
//! API key is deliberately not part of the file: it is read from the environment
//! once at startup and injected into the reasoning client.
//!
//! # Example
//!
//! ```no_run
//! use pagelens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Completion endpoint: {}", config.reasoning.endpoint);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BatchConfig, Config, FetchConfig, ReasoningConfig};

// Re-export parser functions
pub use parser::{default_config, load_config};
