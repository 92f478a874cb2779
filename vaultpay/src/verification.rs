//! Card verification results.

use serde::{Deserialize, Serialize};

/// Outcome of a card verification run by the gateway.
///
/// Verification happens when `verifyCard` is set on a create or update, or
/// when the gateway account forces it. A declined verification does not
/// raise a transport error; it comes back inside the failure result so the
/// caller can inspect the processor response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardVerification {
    /// Final verification status.
    pub status: VerificationStatus,

    /// Processor response code (e.g. `"2000"` for a decline).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor_response_code: Option<String>,

    /// Processor response text (e.g. `"Do Not Honor"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor_response_text: Option<String>,

    /// Why the gateway rejected the verification, when `status` is
    /// [`VerificationStatus::GatewayRejected`] (e.g. `"cvv"`, `"avs"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_rejection_reason: Option<String>,

    /// Amount the verification authorized against, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// ISO 4217 currency of the verification amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_iso_code: Option<String>,
}

impl CardVerification {
    /// Whether the card passed verification.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }
}

/// Terminal states of a card verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// The processor authorized the verification.
    Verified,
    /// The processor declined the verification.
    ProcessorDeclined,
    /// The gateway rejected the verification before reaching the processor
    /// (CVV/AVS rules, duplicate checks, fraud tooling).
    GatewayRejected,
    /// The verification could not be completed.
    Failed,
}
