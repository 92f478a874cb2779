#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP client for the VaultPay payment gateway.
//!
//! Wraps the domain types from the `vaultpay` crate in an authenticated
//! reqwest transport and exposes the payment-method lifecycle
//! (create/find/update/delete) as [`PaymentMethodGateway`].
//!
//! # Example
//!
//! ```no_run
//! use vaultpay::CreateRequest;
//! use vaultpay_http::{Environment, Gateway, GatewayConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = Gateway::new(GatewayConfig::new(
//!     Environment::Sandbox,
//!     "merchant_id",
//!     "public_key",
//!     "private_key",
//! ))?;
//!
//! let result = gateway
//!     .payment_method()
//!     .create(&CreateRequest::new("nonce-from-the-client").with_customer_id("cust_42"))
//!     .await?;
//!
//! if let Some(method) = result.payment_method() {
//!     println!("vaulted under token {}", method.token());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`] — environments and gateway configuration
//! - [`constants`] — well-known URLs and header names
//! - [`error`] — hard-failure error type for gateway calls
//! - [`gateway`] — the authenticated transport
//! - [`payment_method`] — the payment-method lifecycle facade
//!
//! # Feature Flags
//!
//! - `telemetry` — `tracing` spans around every gateway call

pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod payment_method;

pub use config::{Environment, GatewayConfig};
pub use error::GatewayError;
pub use gateway::Gateway;
pub use payment_method::PaymentMethodGateway;
