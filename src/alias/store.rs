/// Alias store
///
/// Immutable alias tables, populated once at startup from configuration and
/// never mutated afterwards. Lookups are exact composite-key matches; there
/// is no fuzzy matching and no wildcard aliasing.
use crate::alias::grammar::AliasKey;
use std::collections::HashMap;

/// The two process-wide alias tables
#[derive(Debug, Default)]
pub struct AliasStore {
    /// `@handle@instance` -> canonical `@handle@instance`
    handle_aliases: HashMap<String, String>,
    /// `@instance` -> `@did:...`
    did_aliases: HashMap<String, String>,
}

impl AliasStore {
    pub fn new(
        handle_aliases: HashMap<String, String>,
        did_aliases: HashMap<String, String>,
    ) -> Self {
        Self {
            handle_aliases,
            did_aliases,
        }
    }

    /// Exact lookup of a handle alias by its normalized key
    pub fn lookup_handle(&self, key: &AliasKey) -> Option<&str> {
        self.handle_aliases.get(&key.composite()).map(String::as_str)
    }

    /// Exact lookup of a DID alias by serving instance
    pub fn lookup_did(&self, instance: &str) -> Option<&str> {
        self.did_aliases.get(&format!("@{instance}")).map(String::as_str)
    }

    /// All stored values, for startup validation
    pub fn handle_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.handle_aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn did_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.did_aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
