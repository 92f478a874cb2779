//! Single-use tokenization nonces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, single-use reference to a payment credential held by the
/// tokenization service.
///
/// A nonce stands in for raw card data or a PayPal consent that has not yet
/// been vaulted. It is consumed exactly once, by
/// `PaymentMethodGateway::create` in `vaultpay-http`; reusing a spent nonce
/// is rejected server-side.
///
/// Nonces are produced by a separate tokenization endpoint (typically from
/// client-side code, so raw card numbers never touch the integrating
/// server). This crate treats them as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethodNonce(String);

impl PaymentMethodNonce {
    /// Wraps a raw nonce string received from the tokenization service.
    #[must_use]
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }

    /// Returns the raw nonce string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PaymentMethodNonce {
    fn from(nonce: String) -> Self {
        Self(nonce)
    }
}

impl From<&str> for PaymentMethodNonce {
    fn from(nonce: &str) -> Self {
        Self(nonce.to_owned())
    }
}

impl fmt::Display for PaymentMethodNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_a_bare_string() {
        let nonce = PaymentMethodNonce::new("fake-valid-nonce");
        let json = serde_json::to_string(&nonce).unwrap();
        assert_eq!(json, "\"fake-valid-nonce\"");

        let back: PaymentMethodNonce = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nonce);
    }
}
