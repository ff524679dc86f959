use serde::Deserialize;

/// Main configuration structure for Pagelens
///
/// Every field has a default so the auditor runs without a config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reasoning: ReasoningConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Text-completion service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReasoningConfig {
    /// Chat-completions endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key
    #[serde(rename = "api-key-env", default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Batch submission configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of URLs accepted per submission
    #[serde(rename = "max-urls", default = "default_max_urls")]
    pub max_urls: usize,

    /// Maximum number of URL pipelines running at once
    #[serde(rename = "max-concurrent", default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

/// Page fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_fetch_timeout")]
    pub timeout_secs: u64,

    /// User agent string sent with page requests
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

fn default_max_urls() -> usize {
    500
}

fn default_max_concurrent() -> usize {
    8
}

fn default_fetch_timeout() -> u64 {
    15
}

fn default_user_agent() -> String {
    format!("pagelens/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_urls: default_max_urls(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
