/// Configuration management for the fedialias gateway
use crate::alias::grammar;
use crate::error::{GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub service: ServiceConfig,
    pub aliases: AliasConfig,
    pub logging: LoggingConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub hostname: String,
    pub port: u16,
}

/// Static alias tables, loaded once and never mutated afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasConfig {
    /// `@handle@instance` -> `@handle@instance`
    pub handle_aliases: HashMap<String, String>,
    /// `@instance` -> `@did:...`
    pub did_aliases: HashMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        dotenv::dotenv().ok();

        let hostname = env::var("GATEWAY_HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("GATEWAY_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| GatewayError::Config("Invalid port number".to_string()))?;

        let handle_aliases = parse_alias_pairs(
            &env::var("GATEWAY_HANDLE_ALIASES").unwrap_or_default(),
            "GATEWAY_HANDLE_ALIASES",
        )?;
        let did_aliases = parse_alias_pairs(
            &env::var("GATEWAY_DID_ALIASES").unwrap_or_default(),
            "GATEWAY_DID_ALIASES",
        )?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(GatewayConfig {
            service: ServiceConfig { hostname, port },
            aliases: AliasConfig {
                handle_aliases,
                did_aliases,
            },
            logging: LoggingConfig { level: log_level },
        })
    }

    /// Validate configuration
    ///
    /// Malformed alias values are an operator defect; they are reported here
    /// at startup but do not refuse service, so the healthy tables keep
    /// answering while the bad entry surfaces as a 500 if queried.
    pub fn validate(&self) -> GatewayResult<()> {
        if self.service.hostname.is_empty() {
            return Err(GatewayError::Config("Hostname cannot be empty".to_string()));
        }

        for (key, value) in &self.aliases.handle_aliases {
            if grammar::parse_handle_alias(value).is_err() {
                tracing::warn!(key = %key, value = %value, "handle alias value fails target grammar");
            }
        }
        for (key, value) in &self.aliases.did_aliases {
            if grammar::parse_did_alias(value).is_err() {
                tracing::warn!(key = %key, value = %value, "DID alias value fails target grammar");
            }
        }

        Ok(())
    }
}

/// Parse a comma-separated list of `key=value` alias pairs
fn parse_alias_pairs(raw: &str, var: &str) -> GatewayResult<HashMap<String, String>> {
    let mut table = HashMap::new();
    for pair in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            GatewayError::Config(format!("{var}: expected key=value pair, got {pair:?}"))
        })?;
        table.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(table)
}
