/// fedialias - identity alias gateway
///
/// Presents an externally-owned domain as an alias for accounts hosted on
/// other federation servers: WebFinger discovery, profile-path redirects,
/// and atproto DID lookups, all answered from a static alias table.
pub mod alias;
pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod server;

pub use context::AppContext;
pub use error::{GatewayError, GatewayResult};
