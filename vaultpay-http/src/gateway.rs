//! The authenticated gateway transport.
//!
//! [`Gateway`] owns the shared reqwest client, the merchant-scoped base
//! URL, and the API credentials. Resource facades such as
//! [`PaymentMethodGateway`](crate::payment_method::PaymentMethodGateway)
//! borrow it to issue requests.

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use url::Url;

use crate::config::GatewayConfig;
use crate::constants::{API_VERSION, API_VERSION_HEADER};
use crate::error::GatewayError;

/// An authenticated connection to one merchant account on the gateway.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct Gateway {
    /// Merchant-scoped base URL, with a trailing slash.
    base_url: Url,
    public_key: String,
    private_key: String,
    client: Client,
}

impl Gateway {
    /// Builds a gateway from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UrlParse`] when the base URL or merchant id
    /// do not form a valid URL.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let root = Url::parse(&base).map_err(|e| GatewayError::UrlParse {
            context: "failed to parse the gateway base URL",
            source: e,
        })?;
        let base_url = root
            .join(&format!("merchants/{}/", config.merchant_id))
            .map_err(|e| GatewayError::UrlParse {
                context: "failed to construct the merchant URL",
                source: e,
            })?;

        let client = config.http_client.unwrap_or_else(|| {
            Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("failed to build reqwest::Client")
        });

        Ok(Self {
            base_url,
            public_key: config.public_key,
            private_key: config.private_key,
            client,
        })
    }

    /// Returns the merchant-scoped base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the payment-method lifecycle facade.
    #[must_use]
    pub const fn payment_method(&self) -> crate::payment_method::PaymentMethodGateway<'_> {
        crate::payment_method::PaymentMethodGateway::new(self)
    }

    /// Resolves an endpoint URL under the merchant base. Segments are
    /// percent-encoded, so opaque tokens are safe to pass through.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("gateway base URL is never cannot-be-a-base")
            .pop_if_empty()
            .extend(segments);
        url
    }

    /// Sends a `GET` request.
    pub(crate) async fn get(
        &self,
        url: Url,
        context: &'static str,
    ) -> Result<Response, GatewayError> {
        self.send(self.client.get(url), context).await
    }

    /// Sends a `POST` request with a JSON body.
    pub(crate) async fn post<T>(
        &self,
        url: Url,
        body: &T,
        context: &'static str,
    ) -> Result<Response, GatewayError>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.send(self.client.post(url).json(body), context).await
    }

    /// Sends a `PUT` request with a JSON body.
    pub(crate) async fn put<T>(
        &self,
        url: Url,
        body: &T,
        context: &'static str,
    ) -> Result<Response, GatewayError>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.send(self.client.put(url).json(body), context).await
    }

    /// Sends a `DELETE` request.
    pub(crate) async fn delete(
        &self,
        url: Url,
        context: &'static str,
    ) -> Result<Response, GatewayError> {
        self.send(self.client.delete(url), context).await
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        context: &'static str,
    ) -> Result<Response, GatewayError> {
        request
            .basic_auth(&self.public_key, Some(&self.private_key))
            .header(API_VERSION_HEADER, API_VERSION)
            .send()
            .await
            .map_err(|e| GatewayError::Transport { context, source: e })
    }
}

// Credentials never appear in logs.
impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url.as_str())
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Maps a hard-failure status to its error.
///
/// `token` names the resource for the 404 contract; 422 never reaches this
/// function (its body is the validation-failure payload, handled by the
/// facade).
pub(crate) fn status_error(status: StatusCode, token: Option<&str>, body: String) -> GatewayError {
    if status == StatusCode::UNAUTHORIZED {
        GatewayError::AuthenticationFailed
    } else if status == StatusCode::FORBIDDEN {
        GatewayError::AuthorizationFailed
    } else if status == StatusCode::NOT_FOUND {
        GatewayError::NotFound {
            token: token.unwrap_or("<unknown>").to_owned(),
        }
    } else if status == StatusCode::UPGRADE_REQUIRED {
        GatewayError::UpgradeRequired
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        GatewayError::TooManyRequests
    } else if status.is_server_error() {
        GatewayError::ServerError { status }
    } else {
        GatewayError::UnexpectedStatus { status, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, GatewayConfig};

    fn gateway() -> Gateway {
        Gateway::new(GatewayConfig::new(
            Environment::Sandbox,
            "merchant_42",
            "pub",
            "priv",
        ))
        .unwrap()
    }

    #[test]
    fn base_url_is_merchant_scoped() {
        assert_eq!(
            gateway().base_url().as_str(),
            "https://api.sandbox.vaultpay.io/merchants/merchant_42/"
        );
    }

    #[test]
    fn endpoint_percent_encodes_tokens() {
        let url = gateway().endpoint(&["payment_methods", "token with spaces"]);
        assert_eq!(
            url.as_str(),
            "https://api.sandbox.vaultpay.io/merchants/merchant_42/payment_methods/token%20with%20spaces"
        );
    }

    #[test]
    fn accepts_a_base_url_without_a_trailing_slash() {
        let gateway = Gateway::new(
            GatewayConfig::new(Environment::Sandbox, "m", "pub", "priv")
                .with_base_url("http://127.0.0.1:9123"),
        )
        .unwrap();
        assert_eq!(gateway.base_url().as_str(), "http://127.0.0.1:9123/merchants/m/");
    }

    #[test]
    fn maps_hard_statuses_to_errors() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, None, String::new()),
            GatewayError::AuthenticationFailed
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, None, String::new()),
            GatewayError::AuthorizationFailed
        ));
        assert!(matches!(
            status_error(StatusCode::UPGRADE_REQUIRED, None, String::new()),
            GatewayError::UpgradeRequired
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, None, String::new()),
            GatewayError::TooManyRequests
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, None, String::new()),
            GatewayError::ServerError { status } if status == StatusCode::BAD_GATEWAY
        ));
    }

    #[test]
    fn not_found_carries_the_token() {
        let error = status_error(StatusCode::NOT_FOUND, Some("NON_EXISTENT"), String::new());
        assert!(error.is_not_found());
        assert_eq!(
            error.to_string(),
            "payment method with token NON_EXISTENT not found"
        );
    }

    #[test]
    fn unexpected_status_keeps_the_body() {
        let error = status_error(StatusCode::IM_A_TEAPOT, None, "short and stout".to_owned());
        assert!(matches!(
            error,
            GatewayError::UnexpectedStatus { status, ref body }
                if status == StatusCode::IM_A_TEAPOT && body == "short and stout"
        ));
    }
}
