/// Application context and shared state
use crate::{
    alias::AliasStore,
    config::GatewayConfig,
    error::GatewayResult,
};
use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<GatewayConfig>,
    pub aliases: Arc<AliasStore>,
}

impl AppContext {
    /// Create a new application context from configuration
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        config.validate()?;

        let aliases = AliasStore::new(
            config.aliases.handle_aliases.clone(),
            config.aliases.did_aliases.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            aliases: Arc::new(aliases),
        })
    }
}
