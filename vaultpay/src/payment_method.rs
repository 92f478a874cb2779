//! The polymorphic vaulted payment method.
//!
//! The gateway discriminates payment methods by the top-level wire key of
//! the response body:
//!
//! ```json
//! { "creditCard": { "token": "abc123", "bin": "411111", "last4": "1111" } }
//! { "paypalAccount": { "token": "pp789", "email": "jane.doe@example.com" } }
//! ```
//!
//! which maps directly onto the externally tagged [`PaymentMethod`] enum.

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// A payment credential vaulted under a durable, account-unique token.
///
/// Tokens are unique across all payment methods for a gateway account, and
/// at most one payment method per customer carries the default flag at a
/// time; the gateway clears the flag from siblings when a new default is
/// assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    /// A vaulted credit or debit card.
    CreditCard(CreditCard),
    /// A vaulted PayPal account (billing agreement).
    PaypalAccount(PaypalAccount),
}

impl PaymentMethod {
    /// Returns the vault token identifying this payment method.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::CreditCard(card) => &card.token,
            Self::PaypalAccount(account) => &account.token,
        }
    }

    /// Returns the owning customer's id, when the gateway included it.
    #[must_use]
    pub fn customer_id(&self) -> Option<&str> {
        match self {
            Self::CreditCard(card) => card.customer_id.as_deref(),
            Self::PaypalAccount(account) => account.customer_id.as_deref(),
        }
    }

    /// Whether this is the customer's default payment method.
    #[must_use]
    pub fn is_default(&self) -> bool {
        match self {
            Self::CreditCard(card) => card.default,
            Self::PaypalAccount(account) => account.default,
        }
    }

    /// Returns the gateway-hosted image URL for this payment method.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::CreditCard(card) => card.image_url.as_deref(),
            Self::PaypalAccount(account) => account.image_url.as_deref(),
        }
    }

    /// Subscriptions billing against this payment method.
    ///
    /// Read-only; populated on find.
    #[must_use]
    pub fn subscriptions(&self) -> &[Subscription] {
        match self {
            Self::CreditCard(card) => &card.subscriptions,
            Self::PaypalAccount(account) => &account.subscriptions,
        }
    }

    /// Returns the card variant, if this is a credit card.
    #[must_use]
    pub fn as_credit_card(&self) -> Option<&CreditCard> {
        match self {
            Self::CreditCard(card) => Some(card),
            Self::PaypalAccount(_) => None,
        }
    }

    /// Returns the PayPal variant, if this is a PayPal account.
    #[must_use]
    pub fn as_paypal_account(&self) -> Option<&PaypalAccount> {
        match self {
            Self::PaypalAccount(account) => Some(account),
            Self::CreditCard(_) => None,
        }
    }
}

/// A vaulted credit or debit card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    /// Vault token identifying this card.
    pub token: String,

    /// First six digits of the card number (bank identification number).
    pub bin: String,

    /// Last four digits of the card number.
    pub last4: String,

    /// Card brand as reported by the gateway (e.g. `"Visa"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,

    /// Name embossed on the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,

    /// Two-digit expiration month (`"01"`–`"12"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,

    /// Four-digit expiration year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,

    /// The customer this card is vaulted under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Whether this is the customer's default payment method.
    #[serde(default)]
    pub default: bool,

    /// Gateway-hosted card art URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Billing address owned by this card, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    /// Subscriptions billing against this card. Read-only; populated on
    /// find.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscriptions: Vec<Subscription>,
}

impl CreditCard {
    /// Returns the expiration as `"MM/YYYY"`, when both parts are present.
    #[must_use]
    pub fn expiration_date(&self) -> Option<String> {
        match (&self.expiration_month, &self.expiration_year) {
            (Some(month), Some(year)) => Some(format!("{month}/{year}")),
            _ => None,
        }
    }
}

/// A vaulted PayPal account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaypalAccount {
    /// Vault token identifying this account.
    pub token: String,

    /// Email address on the PayPal account.
    pub email: String,

    /// The customer this account is vaulted under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Whether this is the customer's default payment method.
    #[serde(default)]
    pub default: bool,

    /// Gateway-hosted PayPal logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Subscriptions billing against this account. Read-only; populated on
    /// find.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscriptions: Vec<Subscription>,
}

/// Read-only summary of a subscription attached to a payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Subscription identifier.
    pub id: String,

    /// The billing plan the subscription was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    /// Recurring price, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Subscription status as reported by the gateway (e.g. `"Active"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
