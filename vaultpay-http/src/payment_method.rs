//! The payment-method lifecycle facade.
//!
//! One facade covers both payment-method variants; the gateway
//! discriminates in its responses. Validation failures (HTTP 422) are
//! returned as [`PaymentMethodResult::Failure`], not as `Err`; only
//! not-found, auth, and transport problems fail the call hard.

use reqwest::{Response, StatusCode};
use serde::Deserialize;

use vaultpay::params::{CreateRequest, UpdateRequest};
use vaultpay::payment_method::PaymentMethod;
use vaultpay::result::{ApiErrorResponse, PaymentMethodResult};

use crate::error::GatewayError;
use crate::gateway::{Gateway, status_error};

#[cfg(feature = "telemetry")]
use tracing::instrument;

/// Wrapper the gateway puts around a validation-failure body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    api_error_response: ApiErrorResponse,
}

/// Create, find, update, and delete vaulted payment methods.
///
/// Obtained from [`Gateway::payment_method`]; borrows the gateway's shared
/// transport.
#[derive(Debug, Clone, Copy)]
pub struct PaymentMethodGateway<'a> {
    gateway: &'a Gateway,
}

impl<'a> PaymentMethodGateway<'a> {
    pub(crate) const fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Vaults a payment method from a single-use nonce.
    ///
    /// Attributes embedded in the nonce are inherited unless the request's
    /// top-level parameters override them. With `options.make_default` set,
    /// the gateway clears the default flag from the customer's other
    /// payment methods.
    ///
    /// Validation failures come back as [`PaymentMethodResult::Failure`];
    /// typical causes are a one-time-use PayPal nonce without vault consent
    /// and a duplicate card with `fail_on_duplicate_payment_method` set.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport, auth, and server failures.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "vaultpay.payment_method.create", skip_all, err)
    )]
    pub async fn create(
        &self,
        request: &CreateRequest,
    ) -> Result<PaymentMethodResult, GatewayError> {
        let url = self.gateway.endpoint(&["payment_methods"]);
        let response = self
            .gateway
            .post(url, request, "POST payment_methods")
            .await?;
        self.read_result(response, None, "POST payment_methods")
            .await
    }

    /// Finds a payment method by its vault token.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when no payment method exists for
    /// the token; this is the one operation whose miss is a hard failure.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "vaultpay.payment_method.find", skip_all, err)
    )]
    pub async fn find(&self, token: &str) -> Result<PaymentMethod, GatewayError> {
        let url = self.gateway.endpoint(&["payment_methods", token]);
        let response = self
            .gateway
            .get(url, "GET payment_methods/{token}")
            .await?;

        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(|e| GatewayError::Decode {
                context: "GET payment_methods/{token}",
                source: e,
            });
        }
        Err(self.hard_error(response, Some(token)).await)
    }

    /// Updates a vaulted payment method.
    ///
    /// A billing-address change replaces the address (new id) unless
    /// `update_existing` is set on the address options, which edits it in
    /// place (same id). Assigning a token already owned by another payment
    /// method fails softly with code
    /// [`vaultpay::codes::PAYMENT_METHOD_TOKEN_IS_IN_USE`]; a declined
    /// `verify_card` verification fails softly with the verification
    /// attached.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the token matches nothing,
    /// and [`GatewayError`] on transport, auth, and server failures.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "vaultpay.payment_method.update", skip_all, err)
    )]
    pub async fn update(
        &self,
        token: &str,
        request: &UpdateRequest,
    ) -> Result<PaymentMethodResult, GatewayError> {
        let url = self.gateway.endpoint(&["payment_methods", token]);
        let response = self
            .gateway
            .put(url, request, "PUT payment_methods/{token}")
            .await?;
        self.read_result(response, Some(token), "PUT payment_methods/{token}")
            .await
    }

    /// Deletes a payment method.
    ///
    /// Subsequent [`find`](Self::find) calls for the token fail with
    /// [`GatewayError::NotFound`]. Repeat-delete behavior is a server
    /// contract and is mapped, not interpreted, here.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the token matches nothing,
    /// and [`GatewayError`] on transport, auth, and server failures.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "vaultpay.payment_method.delete", skip_all, err)
    )]
    pub async fn delete(&self, token: &str) -> Result<(), GatewayError> {
        let url = self.gateway.endpoint(&["payment_methods", token]);
        let response = self
            .gateway
            .delete(url, "DELETE payment_methods/{token}")
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(self.hard_error(response, Some(token)).await)
    }

    /// Turns a create/update response into a soft result, or a hard error
    /// for non-422 failure statuses.
    async fn read_result(
        &self,
        response: Response,
        token: Option<&str>,
        context: &'static str,
    ) -> Result<PaymentMethodResult, GatewayError> {
        let status = response.status();
        if status.is_success() {
            let method: PaymentMethod =
                response.json().await.map_err(|e| GatewayError::Decode {
                    context,
                    source: e,
                })?;
            return Ok(PaymentMethodResult::Success(Box::new(method)));
        }
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            let body: ApiErrorBody = response.json().await.map_err(|e| GatewayError::Decode {
                context,
                source: e,
            })?;
            return Ok(PaymentMethodResult::Failure(Box::new(
                body.api_error_response,
            )));
        }
        Err(self.hard_error(response, token).await)
    }

    async fn hard_error(&self, response: Response, token: Option<&str>) -> GatewayError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        status_error(status, token, body)
    }
}
