//! Credential classification for the Mollie API.
//!
//! Mollie accepts three bearer credential families: API keys (`test_…` /
//! `live_…`), organization tokens (`org_…`) and OAuth access tokens
//! (`access_…`). The transport treats API keys and organization tokens
//! identically; access tokens additionally unlock partner-scoped behaviour
//! such as test-mode injection.

use secrecy::{ExposeSecret, SecretString};

/// Prefix identifying an OAuth access token.
pub const ACCESS_TOKEN_PREFIX: &str = "access_";

/// Prefix identifying an organization token.
pub const ORG_TOKEN_PREFIX: &str = "org_";

/// The active bearer credential, classified by prefix.
#[derive(Clone)]
pub enum Credential {
    /// Per-profile API key, test or live (the variant is encoded upstream)
    ApiKey(SecretString),
    /// Long-lived organization token
    OrganizationToken(SecretString),
    /// OAuth access token obtained on behalf of a partner organization
    AccessToken(SecretString),
    /// No credential; valid only with a pre-authorized transport
    None,
}

impl Credential {
    /// Parses a raw bearer value into its credential family. Empty input
    /// yields [`Credential::None`].
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            Credential::None
        } else if raw.starts_with(ACCESS_TOKEN_PREFIX) {
            Credential::AccessToken(SecretString::new(raw.to_string()))
        } else if raw.starts_with(ORG_TOKEN_PREFIX) {
            Credential::OrganizationToken(SecretString::new(raw.to_string()))
        } else {
            Credential::ApiKey(SecretString::new(raw.to_string()))
        }
    }

    /// Does the current credential grant partner-scope operations?
    pub fn has_access_token(&self) -> bool {
        matches!(self, Credential::AccessToken(_))
    }

    /// The raw bearer value for the `Authorization` header, if any.
    pub fn bearer(&self) -> Option<&str> {
        match self {
            Credential::ApiKey(s)
            | Credential::OrganizationToken(s)
            | Credential::AccessToken(s) => Some(s.expose_secret()),
            Credential::None => None,
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never leak the secret into logs.
        match self {
            Credential::ApiKey(_) => f.write_str("Credential::ApiKey(…)"),
            Credential::OrganizationToken(_) => f.write_str("Credential::OrganizationToken(…)"),
            Credential::AccessToken(_) => f.write_str("Credential::AccessToken(…)"),
            Credential::None => f.write_str("Credential::None"),
        }
    }
}
