//! Hard-failure error type for gateway calls.
//!
//! Validation and business failures are not errors at this layer; they come
//! back inside [`vaultpay::PaymentMethodResult::Failure`]. [`GatewayError`]
//! covers everything that makes the call itself fail: bad URLs, transport
//! problems, undecodable bodies, and the gateway's hard status codes.

use reqwest::StatusCode;

/// Errors that can occur while talking to the gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A gateway URL could not be constructed.
    #[error("invalid gateway URL: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The HTTP request could not be sent or the connection failed.
    #[error("HTTP error: {context}: {source}")]
    Transport {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be decoded.
    #[error("failed to decode gateway response: {context}: {source}")]
    Decode {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// No payment method exists for the given token.
    #[error("payment method with token {token} not found")]
    NotFound {
        /// The token that matched nothing.
        token: String,
    },

    /// The gateway rejected the API credentials.
    #[error("authentication failed; check the public and private keys")]
    AuthenticationFailed,

    /// The credentials are valid but not allowed to perform this operation.
    #[error("authorization failed for the requested operation")]
    AuthorizationFailed,

    /// The gateway no longer speaks this client's API version.
    #[error("the client library is too old for this gateway; upgrade required")]
    UpgradeRequired,

    /// The gateway rate-limited the request.
    #[error("too many requests; the gateway is rate limiting this account")]
    TooManyRequests,

    /// The gateway failed internally or is unavailable.
    #[error("gateway server error (status {status})")]
    ServerError {
        /// The 5xx status the gateway returned.
        status: StatusCode,
    },

    /// The gateway returned a status this client does not recognize.
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: StatusCode,
        /// The response body.
        body: String,
    },
}

impl GatewayError {
    /// Whether this is the not-found error kind.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
