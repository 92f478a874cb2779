//! Environments and gateway configuration.

use std::fmt;
use std::time::Duration;

use crate::constants::{DEFAULT_TIMEOUT_SECS, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

/// A hosted gateway environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// The sandbox gateway; accepts test card numbers only.
    Sandbox,
    /// The production gateway.
    Production,
}

impl Environment {
    /// Returns the environment's base URL.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Configuration for a [`Gateway`](crate::gateway::Gateway).
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use vaultpay_http::{Environment, GatewayConfig};
///
/// let config = GatewayConfig::new(
///     Environment::Sandbox,
///     "merchant_id",
///     "public_key",
///     "private_key",
/// )
/// .with_timeout(Duration::from_secs(10));
/// ```
pub struct GatewayConfig {
    /// Gateway base URL, without the merchant path.
    pub base_url: String,

    /// The merchant account all requests are scoped to.
    pub merchant_id: String,

    /// API public key; the basic-auth username.
    pub public_key: String,

    /// API private key; the basic-auth password.
    pub private_key: String,

    /// Per-request timeout. Ignored when `http_client` is provided.
    pub timeout: Duration,

    /// Optional pre-configured reqwest client. When `None`, a client is
    /// built with the configured timeout.
    pub http_client: Option<reqwest::Client>,
}

impl GatewayConfig {
    /// Creates a configuration for the given environment and credentials.
    #[must_use]
    pub fn new(
        environment: Environment,
        merchant_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: environment.base_url().to_owned(),
            merchant_id: merchant_id.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http_client: None,
        }
    }

    /// Overrides the base URL. Intended for self-hosted proxies and test
    /// servers.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supplies a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

// The private key never appears in logs.
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("merchant_id", &self.merchant_id)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}
