/// Alias resolution core: identity grammars, the immutable alias store, the
/// resolver, and the response builders.
pub mod grammar;
pub mod resolver;
pub mod store;
pub mod webfinger;

pub use grammar::{AliasKey, HandleTarget};
pub use store::AliasStore;
