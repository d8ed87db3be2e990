//! Configuration types for the Mollie API client.

/// Environment variable holding an API key (`test_…` or `live_…`).
pub const API_TOKEN_ENV: &str = "MOLLIE_API_TOKEN";

/// Environment variable holding an organization access token.
pub const ORG_TOKEN_ENV: &str = "MOLLIE_ORG_TOKEN";

/// Configuration for the Mollie API client.
///
/// Immutable after construction. `auth_source` is either a literal bearer
/// credential or one of the recognised environment variable names
/// ([`API_TOKEN_ENV`], [`ORG_TOKEN_ENV`]); resolution happens once, when the
/// client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether operations should run against the sandbox. Only honoured for
    /// OAuth access tokens, by injecting `testmode: true` into request
    /// bodies; it never changes the base URL.
    pub testing: bool,
    /// Literal credential, or the name of the env var to read it from. May
    /// be empty when the underlying transport is pre-authorized.
    pub auth_source: String,
}

impl Config {
    /// Creates a configuration.
    pub fn new(testing: bool, auth_source: impl Into<String>) -> Self {
        Self {
            testing,
            auth_source: auth_source.into(),
        }
    }

    /// Live-mode configuration.
    pub fn live(auth_source: impl Into<String>) -> Self {
        Self::new(false, auth_source)
    }

    /// Test-mode configuration.
    pub fn test(auth_source: impl Into<String>) -> Self {
        Self::new(true, auth_source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let live = Config::live("live_abc");
        assert!(!live.testing);
        assert_eq!(live.auth_source, "live_abc");

        let test = Config::test(API_TOKEN_ENV);
        assert!(test.testing);
        assert_eq!(test.auth_source, "MOLLIE_API_TOKEN");
    }
}
