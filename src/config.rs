//! Server configuration from the environment.

use std::env;
use tracing::{info, warn};

/// Configuration for the subscription proxy server.
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Brevo API key. Absence is tolerated at startup and surfaced as a
    /// configuration error on the first subscription attempt.
    pub brevo_api_key: Option<String>,
    /// Name of the Brevo contact list subscribers are added to.
    pub list_name: String,
}

impl Config {
    /// Default contact list name.
    pub const DEFAULT_LIST_NAME: &'static str = "cookingtemps";

    /// Load configuration from environment variables.
    pub fn load() -> Self {
        let bind_addr = var_or("BIND_ADDR", "0.0.0.0:3001");
        let list_name = var_or("BREVO_LIST_NAME", Self::DEFAULT_LIST_NAME);

        let brevo_api_key = env::var("BREVO_API_KEY").ok().filter(|k| !k.is_empty());
        if brevo_api_key.is_none() {
            warn!("BREVO_API_KEY is not set, subscriptions will fail with a configuration error");
        }

        Self {
            bind_addr,
            brevo_api_key,
            list_name,
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_name() {
        assert_eq!(Config::DEFAULT_LIST_NAME, "cookingtemps");
    }
}
