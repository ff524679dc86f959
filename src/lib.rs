//! Pagelens: an on-page SEO and content quality auditor
//!
//! This crate fetches web pages, audits their HTML structure and readability,
//! detects missing structured-data markup, and asks a text-completion service
//! for topical gaps and structural improvements, merging everything into one
//! report per URL.

pub mod analyzers;
pub mod config;
pub mod document;
pub mod fetch;
pub mod pipeline;
pub mod reasoning;
pub mod report;
pub mod schema;
pub mod text;

use thiserror::Error;

/// Main error type for Pagelens operations
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Batch submission errors, raised before any fetch occurs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("No URLs submitted: the URL list is empty")]
    Empty,

    #[error("Too many URLs submitted: {count} exceeds the maximum of {max}")]
    TooLarge { count: usize, max: usize },
}

/// Page retrieval errors, terminal for that URL's analysis
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read response body for {url}: {message}")]
    Body { url: String, message: String },

    #[error("Request failed for {url}: {message}")]
    Transport { url: String, message: String },
}

/// Reasoning-service errors, localized to a single generator call
#[derive(Debug, Error)]
pub enum ReasoningError {
    #[error("API key not found in environment")]
    MissingApiKey,

    #[error("Reasoning request timed out")]
    Timeout,

    #[error("Reasoning service returned status {status}")]
    Status { status: u16 },

    #[error("Malformed reasoning response: {0}")]
    MalformedResponse(String),

    #[error("Reasoning transport error: {0}")]
    Transport(String),
}

/// Result type alias for Pagelens operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analyzers::{Finding, Severity};
pub use config::Config;
pub use document::ParsedDocument;
pub use pipeline::{parse_url_list, Analyzer};
pub use report::UrlReport;
