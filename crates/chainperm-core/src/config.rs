//! Endpoint configuration for the RDP REST platform.
//!
//! Each value has a compiled-in default and may be overridden by one
//! environment variable:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `RDP_BASE_URL` | `https://api.refinitiv.com` |
//! | `RDP_AUTH_URL` | `/auth/oauth2/v1/token` |
//! | `RDP_AUTH_REVOKE_URL` | `/auth/oauth2/v1/revoke` |
//! | `RDP_CHAIN_URL` | `/data/pricing/chains/v1` |
//! | `RDP_SYMBOLOGY_URL` | `/discovery/symbology/v1/lookup` |

pub const DEFAULT_BASE_URL: &str = "https://api.refinitiv.com";
pub const DEFAULT_AUTH_PATH: &str = "/auth/oauth2/v1/token";
pub const DEFAULT_REVOKE_PATH: &str = "/auth/oauth2/v1/revoke";
pub const DEFAULT_CHAIN_PATH: &str = "/data/pricing/chains/v1";
pub const DEFAULT_SYMBOLOGY_PATH: &str = "/discovery/symbology/v1/lookup";

pub const ENV_BASE_URL: &str = "RDP_BASE_URL";
pub const ENV_AUTH_URL: &str = "RDP_AUTH_URL";
pub const ENV_REVOKE_URL: &str = "RDP_AUTH_REVOKE_URL";
pub const ENV_CHAIN_URL: &str = "RDP_CHAIN_URL";
pub const ENV_SYMBOLOGY_URL: &str = "RDP_SYMBOLOGY_URL";

/// Server origin plus per-operation paths. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: String,
    auth_path: String,
    revoke_path: String,
    chain_path: String,
    symbology_path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl EndpointConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing or blank values fall back
    /// to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        Self {
            base_url: value(ENV_BASE_URL, DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            auth_path: value(ENV_AUTH_URL, DEFAULT_AUTH_PATH),
            revoke_path: value(ENV_REVOKE_URL, DEFAULT_REVOKE_PATH),
            chain_path: value(ENV_CHAIN_URL, DEFAULT_CHAIN_PATH),
            symbology_path: value(ENV_SYMBOLOGY_URL, DEFAULT_SYMBOLOGY_PATH),
        }
    }

    /// Same paths, different origin. Used to point the client at a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_url(&self) -> String {
        self.join(&self.auth_path)
    }

    pub fn revoke_url(&self) -> String {
        self.join(&self.revoke_path)
    }

    pub fn chain_url(&self) -> String {
        self.join(&self.chain_path)
    }

    pub fn symbology_url(&self) -> String {
        self.join(&self.symbology_path)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
