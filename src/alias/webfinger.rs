/// Response builders
///
/// Pure mappings from a resolved target to the bodies the HTTP layer
/// serializes: the WebFinger discovery document, the permanent-redirect
/// target URL, and the plain-text DID body.
use crate::alias::grammar::HandleTarget;
use serde::{Deserialize, Serialize};

const REL_PROFILE_PAGE: &str = "http://webfinger.net/rel/profile-page";
const REL_SELF: &str = "self";
const REL_SUBSCRIBE: &str = "http://ostatus.org/schema/1.0/subscribe";

/// WebFinger discovery document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebFingerDocument {
    pub subject: String,
    pub aliases: Vec<String>,
    pub links: Vec<WebFingerLink>,
}

/// A single `links` entry of a discovery document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebFingerLink {
    pub rel: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Canonical profile URL for a target, also the redirect destination
pub fn profile_url(target: &HandleTarget) -> String {
    format!("https://{}/@{}", target.instance, target.handle)
}

fn actor_url(target: &HandleTarget) -> String {
    format!("https://{}/users/{}", target.instance, target.handle)
}

/// Build the discovery document for a resolved target.
///
/// `subject` is the canonical `acct:` form of the TARGET, independent of
/// which grammar the original query used.
pub fn discovery_document(target: &HandleTarget) -> WebFingerDocument {
    WebFingerDocument {
        subject: format!("acct:{}@{}", target.handle, target.instance),
        aliases: vec![profile_url(target), actor_url(target)],
        links: vec![
            WebFingerLink {
                rel: REL_PROFILE_PAGE.to_string(),
                media_type: Some("text/html".to_string()),
                href: Some(profile_url(target)),
                template: None,
            },
            WebFingerLink {
                rel: REL_SELF.to_string(),
                media_type: Some("application/activity+json".to_string()),
                href: Some(actor_url(target)),
                template: None,
            },
            WebFingerLink {
                rel: REL_SUBSCRIBE.to_string(),
                media_type: None,
                href: None,
                template: Some(format!(
                    "https://{}/authorize_interaction?uri={{uri}}",
                    target.instance
                )),
            },
        ],
    }
}

/// The DID body is the bare DID string, no wrapping.
pub fn did_body(did: String) -> String {
    did
}
