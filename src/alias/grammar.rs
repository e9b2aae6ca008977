/// Identity grammar parser
///
/// Converts the textual identity references accepted on the wire into
/// normalized keys, and decomposes stored alias values into their target
/// components. Each accepted grammar is a single compiled regex with its own
/// uniquely named capture groups, tried in order; there is no combined
/// alternation. Inputs are matched literally, with no case folding,
/// punycode, or percent-decoding.
use crate::error::{GatewayError, GatewayResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `acct:<handle>@<instance>`
    static ref ACCT_RESOURCE: Regex =
        Regex::new(r"^acct:(?P<acct_handle>[^@/]+)@(?P<acct_instance>[^@/]+)$").unwrap();

    /// `https://<instance>/@<handle>`
    static ref PROFILE_RESOURCE: Regex =
        Regex::new(r"^https://(?P<profile_instance>[^/]+)/@(?P<profile_handle>[^@/]+)$").unwrap();

    /// `https://<instance>/users/<handle>` (http accepted too)
    static ref USERS_RESOURCE: Regex =
        Regex::new(r"^https?://(?P<users_instance>[^/]+)/users/(?P<users_handle>[^@/]+)$").unwrap();

    /// Path segment `@<handle>` from a profile request
    static ref PATH_HANDLE: Regex = Regex::new(r"^@(?P<path_handle>[^@/]+)$").unwrap();

    /// Stored handle alias value, `@<handle>@<instance>` exactly
    static ref HANDLE_ALIAS_VALUE: Regex =
        Regex::new(r"^@(?P<target_handle>[^@/]+)@(?P<target_instance>[^@/]+)$").unwrap();

    /// Stored DID alias value, `@<did>` exactly
    static ref DID_ALIAS_VALUE: Regex = Regex::new(r"^@(?P<did>did:[^@\s]+)$").unwrap();
}

/// Normalized identity key for the handle-alias family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasKey {
    pub handle: String,
    pub instance: String,
}

impl AliasKey {
    /// Composite store key, `@handle@instance`
    pub fn composite(&self) -> String {
        format!("@{}@{}", self.handle, self.instance)
    }
}

/// Decomposed target of a handle-family alias value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleTarget {
    pub handle: String,
    pub instance: String,
}

/// Parse a WebFinger `resource` reference into a normalized key.
///
/// Accepts `acct:h@i`, `https://i/@h`, and `https?://i/users/h`; all three
/// forms yield the same key for the same handle and instance.
pub fn parse_resource(resource: &str) -> GatewayResult<AliasKey> {
    if let Some(caps) = ACCT_RESOURCE.captures(resource) {
        return Ok(AliasKey {
            handle: caps["acct_handle"].to_string(),
            instance: caps["acct_instance"].to_string(),
        });
    }
    if let Some(caps) = PROFILE_RESOURCE.captures(resource) {
        return Ok(AliasKey {
            handle: caps["profile_handle"].to_string(),
            instance: caps["profile_instance"].to_string(),
        });
    }
    if let Some(caps) = USERS_RESOURCE.captures(resource) {
        return Ok(AliasKey {
            handle: caps["users_handle"].to_string(),
            instance: caps["users_instance"].to_string(),
        });
    }
    Err(GatewayError::InvalidFormat(
        "invalid resource format".to_string(),
    ))
}

/// Parse a profile path segment (`@handle`) into the bare handle.
///
/// The serving instance is supplied by the caller from the Host context,
/// never from the path.
pub fn parse_path_handle(segment: &str) -> GatewayResult<String> {
    let caps = PATH_HANDLE
        .captures(segment)
        .ok_or_else(|| GatewayError::InvalidFormat("invalid path format".to_string()))?;
    Ok(caps["path_handle"].to_string())
}

/// Decompose a stored handle alias value (`@handle@instance`).
///
/// Failure here is a configuration defect, not a client error.
pub fn parse_handle_alias(value: &str) -> GatewayResult<HandleTarget> {
    let caps = HANDLE_ALIAS_VALUE
        .captures(value)
        .ok_or_else(|| GatewayError::CorruptAlias(value.to_string()))?;
    Ok(HandleTarget {
        handle: caps["target_handle"].to_string(),
        instance: caps["target_instance"].to_string(),
    })
}

/// Decompose a stored DID alias value (`@did:...`) into the bare DID.
pub fn parse_did_alias(value: &str) -> GatewayResult<String> {
    let caps = DID_ALIAS_VALUE
        .captures(value)
        .ok_or_else(|| GatewayError::CorruptAlias(value.to_string()))?;
    Ok(caps["did"].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_resource_grammars_yield_the_same_key() {
        let expected = AliasKey {
            handle: "puzakura".to_string(),
            instance: "puzakura.com".to_string(),
        };

        assert_eq!(parse_resource("acct:puzakura@puzakura.com").unwrap(), expected);
        assert_eq!(
            parse_resource("https://puzakura.com/@puzakura").unwrap(),
            expected
        );
        assert_eq!(
            parse_resource("https://puzakura.com/users/puzakura").unwrap(),
            expected
        );
        assert_eq!(
            parse_resource("http://puzakura.com/users/puzakura").unwrap(),
            expected
        );
    }

    #[test]
    fn composite_key_is_tagged_form() {
        let key = parse_resource("acct:alice@example.com").unwrap();
        assert_eq!(key.composite(), "@alice@example.com");
    }

    #[test]
    fn malformed_resources_are_rejected() {
        for input in [
            "",
            "puzakura@puzakura.com",
            "acct:puzakura",
            "acct:puz@kura@puzakura.com",
            "acct:puzakura@puza/kura.com",
            "http://puzakura.com/@puzakura", // profile form is https only
            "https://puzakura.com/users/",
            "https://puzakura.com/profile/puzakura",
        ] {
            let err = parse_resource(input).unwrap_err();
            assert!(
                matches!(err, GatewayError::InvalidFormat(_)),
                "expected InvalidFormat for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn no_case_folding_is_applied() {
        let key = parse_resource("acct:Puzakura@Puzakura.Com").unwrap();
        assert_eq!(key.handle, "Puzakura");
        assert_eq!(key.instance, "Puzakura.Com");
    }

    #[test]
    fn path_segment_parses_only_the_handle() {
        assert_eq!(parse_path_handle("@puzakura").unwrap(), "puzakura");
        assert!(parse_path_handle("puzakura").is_err());
        assert!(parse_path_handle("@puza@kura").is_err());
        assert!(parse_path_handle("@").is_err());
    }

    #[test]
    fn handle_alias_values_decompose() {
        let target = parse_handle_alias("@dampuzakura@fedibird.com").unwrap();
        assert_eq!(target.handle, "dampuzakura");
        assert_eq!(target.instance, "fedibird.com");
    }

    #[test]
    fn malformed_alias_values_are_corrupt_not_invalid() {
        for value in ["dampuzakura@fedibird.com", "@dampuzakura", "@a@b@c", ""] {
            let err = parse_handle_alias(value).unwrap_err();
            assert!(
                matches!(err, GatewayError::CorruptAlias(_)),
                "expected CorruptAlias for {value:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn did_alias_values_unwrap_the_tag() {
        assert_eq!(
            parse_did_alias("@did:plc:bsxc4xeomcekctnqkojxws42").unwrap(),
            "did:plc:bsxc4xeomcekctnqkojxws42"
        );
        assert!(matches!(
            parse_did_alias("did:plc:bsxc4xeomcekctnqkojxws42").unwrap_err(),
            GatewayError::CorruptAlias(_)
        ));
        assert!(matches!(
            parse_did_alias("@plc:not-a-did").unwrap_err(),
            GatewayError::CorruptAlias(_)
        ));
    }
}
