//! Create/update request parameters and their options.

use serde::{Deserialize, Serialize};

use crate::address::AddressParams;
use crate::nonce::PaymentMethodNonce;

/// Parameters for vaulting a payment method from a nonce.
///
/// Attributes embedded in the nonce (a token chosen at tokenization time, a
/// billing address collected client-side) are inherited unless the
/// corresponding top-level parameter here overrides them; an explicit
/// override always wins. Billing-address parameters are ignored server-side
/// for PayPal nonces, which carry no address.
///
/// # Example
///
/// ```rust
/// use vaultpay::params::{CreateRequest, PaymentMethodOptions};
///
/// let request = CreateRequest::new("fake-valid-nonce")
///     .with_customer_id("cust_42")
///     .with_options(PaymentMethodOptions::new().make_default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    /// The single-use nonce to vault. Consumed by this call.
    pub payment_method_nonce: PaymentMethodNonce,

    /// The customer to vault the payment method under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Vault token to assign. Overrides any token embedded in the nonce;
    /// when absent the gateway generates one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Billing address to attach. Overrides any address embedded in the
    /// nonce for not-yet-vaulted cards; ignored for PayPal nonces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressParams>,

    /// Attach an existing shared address by id instead of creating one.
    /// Ignored for PayPal nonces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address_id: Option<String>,

    /// Vaulting behavior flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PaymentMethodOptions>,
}

impl CreateRequest {
    /// Creates a request vaulting the given nonce.
    #[must_use]
    pub fn new(nonce: impl Into<PaymentMethodNonce>) -> Self {
        Self {
            payment_method_nonce: nonce.into(),
            customer_id: None,
            token: None,
            billing_address: None,
            billing_address_id: None,
            options: None,
        }
    }

    /// Sets the owning customer.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Assigns a vault token, overriding any token embedded in the nonce.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attaches a billing address.
    #[must_use]
    pub fn with_billing_address(mut self, address: AddressParams) -> Self {
        self.billing_address = Some(address);
        self
    }

    /// Attaches an existing shared address by id.
    #[must_use]
    pub fn with_billing_address_id(mut self, address_id: impl Into<String>) -> Self {
        self.billing_address_id = Some(address_id.into());
        self
    }

    /// Sets vaulting options.
    #[must_use]
    pub fn with_options(mut self, options: PaymentMethodOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Parameters for updating a vaulted payment method.
///
/// Same shape as [`CreateRequest`] minus the nonce, plus the writable card
/// fields. Only set fields are sent; everything else keeps its vaulted
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    /// Replacement vault token. Fails with code
    /// [`crate::error::codes::PAYMENT_METHOD_TOKEN_IS_IN_USE`] if another
    /// payment method already owns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// New cardholder name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,

    /// Replacement card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Card security code, for re-verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,

    /// Two-digit expiration month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,

    /// Four-digit expiration year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,

    /// Combined expiration as `"MM/YYYY"`; alternative to the split fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// Billing address changes. Replaces the current address with a new one
    /// unless [`crate::address::AddressOptions::update_existing`] is set,
    /// which edits it in place instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressParams>,

    /// Point the payment method at an existing shared address by id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address_id: Option<String>,

    /// Update behavior flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PaymentMethodOptions>,
}

impl UpdateRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a replacement vault token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the cardholder name.
    #[must_use]
    pub fn with_cardholder_name(mut self, name: impl Into<String>) -> Self {
        self.cardholder_name = Some(name.into());
        self
    }

    /// Sets a replacement card number.
    #[must_use]
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Sets the card security code.
    #[must_use]
    pub fn with_cvv(mut self, cvv: impl Into<String>) -> Self {
        self.cvv = Some(cvv.into());
        self
    }

    /// Sets the expiration month.
    #[must_use]
    pub fn with_expiration_month(mut self, month: impl Into<String>) -> Self {
        self.expiration_month = Some(month.into());
        self
    }

    /// Sets the expiration year.
    #[must_use]
    pub fn with_expiration_year(mut self, year: impl Into<String>) -> Self {
        self.expiration_year = Some(year.into());
        self
    }

    /// Sets the combined `"MM/YYYY"` expiration.
    #[must_use]
    pub fn with_expiration_date(mut self, date: impl Into<String>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    /// Sets billing address changes.
    #[must_use]
    pub fn with_billing_address(mut self, address: AddressParams) -> Self {
        self.billing_address = Some(address);
        self
    }

    /// Points the payment method at an existing shared address.
    #[must_use]
    pub fn with_billing_address_id(mut self, address_id: impl Into<String>) -> Self {
        self.billing_address_id = Some(address_id.into());
        self
    }

    /// Sets update options.
    #[must_use]
    pub fn with_options(mut self, options: PaymentMethodOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Behavior flags for create and update calls.
///
/// Booleans are serialized only when set, so an absent flag defers to the
/// gateway account's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodOptions {
    /// Make this the customer's default payment method. The gateway clears
    /// the flag from every sibling payment method.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub make_default: bool,

    /// Run a card verification before vaulting or applying the update. A
    /// declined verification fails the call softly, with the verification
    /// attached to the failure result.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub verify_card: bool,

    /// Reject vaulting when the same card already exists for this customer
    /// (code [`crate::error::codes::CREDIT_CARD_DUPLICATE_EXISTS`]).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fail_on_duplicate_payment_method: bool,

    /// Merchant account to run the verification against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_merchant_account_id: Option<String>,

    /// Amount to authorize during verification, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_amount: Option<String>,
}

impl PaymentMethodOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`Self::make_default`].
    #[must_use]
    pub fn make_default(mut self) -> Self {
        self.make_default = true;
        self
    }

    /// Sets [`Self::verify_card`].
    #[must_use]
    pub fn verify_card(mut self) -> Self {
        self.verify_card = true;
        self
    }

    /// Sets [`Self::fail_on_duplicate_payment_method`].
    #[must_use]
    pub fn fail_on_duplicate_payment_method(mut self) -> Self {
        self.fail_on_duplicate_payment_method = true;
        self
    }

    /// Sets the verification merchant account.
    #[must_use]
    pub fn with_verification_merchant_account_id(mut self, id: impl Into<String>) -> Self {
        self.verification_merchant_account_id = Some(id.into());
        self
    }

    /// Sets the verification amount.
    #[must_use]
    pub fn with_verification_amount(mut self, amount: impl Into<String>) -> Self {
        self.verification_amount = Some(amount.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressParams;
    use serde_json::json;

    #[test]
    fn create_request_serializes_only_set_fields() {
        let request = CreateRequest::new("fake-valid-nonce").with_customer_id("cust_42");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "paymentMethodNonce": "fake-valid-nonce",
                "customerId": "cust_42"
            })
        );
    }

    #[test]
    fn options_flags_serialize_only_when_set() {
        let request = CreateRequest::new("nonce").with_options(
            PaymentMethodOptions::new()
                .make_default()
                .fail_on_duplicate_payment_method(),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["options"],
            json!({
                "makeDefault": true,
                "failOnDuplicatePaymentMethod": true
            })
        );
    }

    #[test]
    fn explicit_token_override_is_sent_top_level() {
        let request = CreateRequest::new("nonce-with-embedded-token").with_token("SECOND_TOKEN");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["token"], json!("SECOND_TOKEN"));
    }

    #[test]
    fn update_request_nests_address_options() {
        let request = UpdateRequest::new()
            .with_billing_address(AddressParams::new().with_region("IL").update_existing());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "billingAddress": {
                    "region": "IL",
                    "options": { "updateExisting": true }
                }
            })
        );
    }

    #[test]
    fn empty_update_serializes_to_an_empty_object() {
        let value = serde_json::to_value(UpdateRequest::new()).unwrap();
        assert_eq!(value, json!({}));
    }
}
