use std::num::NonZeroU64;

use anyhow::{anyhow, Context, Result};

const DEFAULT_API_VERSION: &str = "2024-02-01";
const DEFAULT_TIMEOUT_SECS: u64 = 100;

/// Application configuration loaded from environment variables.
/// Startup fails if the completion service settings are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_endpoint: String,
    pub openai_key: String,
    pub openai_deployment_name: String,
    pub openai_api_version: String,
    pub completion_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint = get("OPENAI_ENDPOINT");
        let key = get("OPENAI_KEY");
        let deployment = get("OPENAI_DEPLOYMENT_NAME");

        let (openai_endpoint, openai_key, openai_deployment_name) = match (endpoint, key, deployment)
        {
            (Some(endpoint), Some(key), Some(deployment)) => (endpoint, key, deployment),
            (endpoint, key, deployment) => {
                let missing: Vec<&str> = [
                    ("OPENAI_ENDPOINT", endpoint.is_none()),
                    ("OPENAI_KEY", key.is_none()),
                    ("OPENAI_DEPLOYMENT_NAME", deployment.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, is_missing)| is_missing.then_some(name))
                .collect();
                return Err(anyhow!(
                    "OpenAI configuration is missing or incomplete (unset: {})",
                    missing.join(", ")
                ));
            }
        };

        Ok(Config {
            openai_endpoint,
            openai_key,
            openai_deployment_name,
            openai_api_version: get("OPENAI_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            // Zero would make every completion call time out immediately
            completion_timeout_secs: get("COMPLETION_TIMEOUT_SECS")
                .map(|v| v.parse::<NonZeroU64>())
                .transpose()
                .context("COMPLETION_TIMEOUT_SECS must be a positive whole number of seconds")?
                .map_or(DEFAULT_TIMEOUT_SECS, NonZeroU64::get),
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
