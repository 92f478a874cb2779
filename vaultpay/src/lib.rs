//! Core types for the VaultPay payment gateway SDK.
//!
//! This crate defines the domain model shared by every VaultPay client:
//! vaulted payment methods, the single-use nonces they are created from,
//! billing addresses, request parameters, and the structured validation
//! errors the gateway reports. It performs no I/O; the HTTP client lives in
//! the `vaultpay-http` crate.
//!
//! # Overview
//!
//! A payment credential (a credit card or a PayPal account) is first
//! tokenized into a single-use [`PaymentMethodNonce`] by the tokenization
//! service. Vaulting that nonce produces a durable [`PaymentMethod`] keyed
//! by an account-unique token, which can then be found, updated, and
//! deleted. Validation failures come back as an ordered, nested
//! [`ErrorCollection`] rather than an `Err`, so callers can inspect
//! field-level errors without losing the distinction from transport
//! failures.
//!
//! # Modules
//!
//! - [`address`] — billing addresses and their writable parameters
//! - [`error`] — validation error trees and well-known error codes
//! - [`nonce`] — the single-use tokenization nonce
//! - [`params`] — create/update request parameters and options
//! - [`payment_method`] — the polymorphic vaulted payment method
//! - [`result`] — soft success/failure outcome of a gateway call
//! - [`testing`] — sandbox card numbers for downstream test suites
//! - [`verification`] — card verification results

pub mod address;
pub mod error;
pub mod nonce;
pub mod params;
pub mod payment_method;
pub mod result;
pub mod testing;
pub mod verification;

pub use address::{Address, AddressOptions, AddressParams};
pub use error::{ErrorCollection, ValidationError, codes};
pub use nonce::PaymentMethodNonce;
pub use params::{CreateRequest, PaymentMethodOptions, UpdateRequest};
pub use payment_method::{CreditCard, PaymentMethod, PaypalAccount, Subscription};
pub use result::{ApiErrorResponse, PaymentMethodResult};
pub use verification::{CardVerification, VerificationStatus};
