//! Well-known gateway URLs and header names.

/// Base URL of the sandbox gateway.
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.vaultpay.io";

/// Base URL of the production gateway.
pub const PRODUCTION_BASE_URL: &str = "https://api.vaultpay.io";

/// Request header carrying the gateway API version.
pub const API_VERSION_HEADER: &str = "X-ApiVersion";

/// The gateway API version this client speaks.
pub const API_VERSION: &str = "6";

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
