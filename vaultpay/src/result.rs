//! Soft success/failure outcome of a gateway call.
//!
//! The gateway has two failure tiers. Validation and business failures are
//! part of the normal response contract: the call itself succeeded, the
//! requested change did not. Those come back as
//! [`PaymentMethodResult::Failure`] inside an `Ok`. Transport, auth, and
//! not-found failures are hard errors and surface as
//! `Err(GatewayError)` from the client in `vaultpay-http`.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCollection;
use crate::payment_method::PaymentMethod;
use crate::verification::CardVerification;

/// Outcome of a create or update call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethodResult {
    /// The payment method was created or updated.
    Success(Box<PaymentMethod>),
    /// The gateway rejected the request with validation errors.
    Failure(Box<ApiErrorResponse>),
}

impl PaymentMethodResult {
    /// Whether the call succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The resulting payment method, on success.
    #[must_use]
    pub fn payment_method(&self) -> Option<&PaymentMethod> {
        match self {
            Self::Success(method) => Some(method),
            Self::Failure(_) => None,
        }
    }

    /// The validation error tree, on failure.
    #[must_use]
    pub fn errors(&self) -> Option<&ErrorCollection> {
        match self {
            Self::Success(_) => None,
            Self::Failure(response) => Some(&response.errors),
        }
    }

    /// The card verification attached to a failure, when a `verifyCard`
    /// re-verification was declined.
    #[must_use]
    pub fn verification(&self) -> Option<&CardVerification> {
        match self {
            Self::Success(_) => None,
            Self::Failure(response) => response.verification.as_ref(),
        }
    }

    /// Unwraps the payment method, converting a validation failure into the
    /// given error.
    ///
    /// # Errors
    ///
    /// Returns `error(response)` when the result is a failure.
    pub fn into_payment_method<E>(
        self,
        error: impl FnOnce(ApiErrorResponse) -> E,
    ) -> Result<PaymentMethod, E> {
        match self {
            Self::Success(method) => Ok(*method),
            Self::Failure(response) => Err(error(*response)),
        }
    }
}

/// Body of a gateway validation-failure response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Summary message for the whole failure.
    #[serde(default)]
    pub message: String,

    /// Validation errors, keyed by nested field group.
    #[serde(default)]
    pub errors: ErrorCollection,

    /// Verification details, when a card re-verification was declined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<CardVerification>,
}
