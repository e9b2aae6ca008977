/// Alias resolver
///
/// Orchestrates parse -> lookup -> parse-target over the immutable store.
/// Resolution is a pure function of the query and the store snapshot and
/// performs exactly one indirection: resolved targets are never fed back
/// into the store for a second lookup.
use crate::{
    alias::grammar::{self, AliasKey, HandleTarget},
    alias::store::AliasStore,
    error::{GatewayError, GatewayResult},
};

/// Resolve a normalized handle key to its canonical target.
///
/// Absence of an alias is `NotFound`; a stored value that fails the target
/// grammar is `CorruptAlias`, never reported as `NotFound`.
pub fn resolve_handle(store: &AliasStore, key: &AliasKey) -> GatewayResult<HandleTarget> {
    let value = store.lookup_handle(key).ok_or(GatewayError::NotFound)?;
    grammar::parse_handle_alias(value)
}

/// Resolve a WebFinger `resource` reference end to end.
pub fn resolve_resource(store: &AliasStore, resource: &str) -> GatewayResult<HandleTarget> {
    let key = grammar::parse_resource(resource)?;
    resolve_handle(store, &key)
}

/// Resolve a serving instance to its aliased DID.
pub fn resolve_did(store: &AliasStore, instance: &str) -> GatewayResult<String> {
    let value = store.lookup_did(instance).ok_or(GatewayError::NotFound)?;
    grammar::parse_did_alias(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_store() -> AliasStore {
        let mut handles = HashMap::new();
        handles.insert(
            "@puzakura@puzakura.com".to_string(),
            "@dampuzakura@fedibird.com".to_string(),
        );
        // A chained entry: the target of the alias above is itself aliased.
        handles.insert(
            "@dampuzakura@fedibird.com".to_string(),
            "@elsewhere@example.com".to_string(),
        );
        handles.insert(
            "@broken@puzakura.com".to_string(),
            "not-an-alias".to_string(),
        );
        let mut dids = HashMap::new();
        dids.insert(
            "@puzakura.com".to_string(),
            "@did:plc:bsxc4xeomcekctnqkojxws42".to_string(),
        );
        dids.insert("@corrupt.example".to_string(), "did-without-tag".to_string());
        AliasStore::new(handles, dids)
    }

    #[test]
    fn every_grammar_resolves_to_the_same_target() {
        let store = test_store();
        for resource in [
            "acct:puzakura@puzakura.com",
            "https://puzakura.com/@puzakura",
            "https://puzakura.com/users/puzakura",
        ] {
            let target = resolve_resource(&store, resource).unwrap();
            assert_eq!(target.handle, "dampuzakura");
            assert_eq!(target.instance, "fedibird.com");
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let store = test_store();
        let first = resolve_resource(&store, "acct:puzakura@puzakura.com").unwrap();
        let second = resolve_resource(&store, "acct:puzakura@puzakura.com").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn resolution_never_chains() {
        let store = test_store();
        // puzakura -> dampuzakura, and dampuzakura -> elsewhere; resolving
        // puzakura must stop at the literal recorded target.
        let target = resolve_resource(&store, "acct:puzakura@puzakura.com").unwrap();
        assert_eq!(target.handle, "dampuzakura");
        assert_eq!(target.instance, "fedibird.com");
    }

    #[test]
    fn absent_keys_are_not_found_under_every_grammar() {
        let store = test_store();
        for resource in [
            "acct:nobody@puzakura.com",
            "https://puzakura.com/@nobody",
            "https://puzakura.com/users/nobody",
        ] {
            assert!(matches!(
                resolve_resource(&store, resource).unwrap_err(),
                GatewayError::NotFound
            ));
        }
    }

    #[test]
    fn malformed_query_is_invalid_format() {
        let store = test_store();
        assert!(matches!(
            resolve_resource(&store, "puzakura@puzakura.com").unwrap_err(),
            GatewayError::InvalidFormat(_)
        ));
    }

    #[test]
    fn corrupt_stored_value_is_a_fault_not_absence() {
        let store = test_store();
        assert!(matches!(
            resolve_resource(&store, "acct:broken@puzakura.com").unwrap_err(),
            GatewayError::CorruptAlias(_)
        ));
        assert!(matches!(
            resolve_did(&store, "corrupt.example").unwrap_err(),
            GatewayError::CorruptAlias(_)
        ));
    }

    #[test]
    fn did_resolution_by_serving_instance() {
        let store = test_store();
        assert_eq!(
            resolve_did(&store, "puzakura.com").unwrap(),
            "did:plc:bsxc4xeomcekctnqkojxws42"
        );
        assert!(matches!(
            resolve_did(&store, "unaliased.example").unwrap_err(),
            GatewayError::NotFound
        ));
    }
}
