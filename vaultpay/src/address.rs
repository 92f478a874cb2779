//! Billing addresses and their writable parameters.

use serde::{Deserialize, Serialize};

/// A billing address as returned by the gateway.
///
/// An address is owned by the payment method it is attached to unless it was
/// shared by reference via `billing_address_id` at create time. The `id` is
/// stable for the life of the address: updating a payment method's billing
/// address with [`AddressOptions::update_existing`] set edits the address in
/// place (same id), while the default behavior replaces it with a new
/// address (new id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Gateway-assigned address identifier.
    pub id: String,

    /// The customer this address belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// First name on the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name on the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Street address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,

    /// Second address line (apartment, suite, unit).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_address: Option<String>,

    /// City or town.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    /// State, province, or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Postal or ZIP code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Full country name (e.g. `"United States of America"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,

    /// ISO 3166-1 alpha-2 country code (e.g. `"US"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code_alpha2: Option<String>,

    /// ISO 3166-1 alpha-3 country code (e.g. `"USA"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code_alpha3: Option<String>,

    /// ISO 3166-1 numeric country code (e.g. `"840"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code_numeric: Option<String>,
}

/// Writable billing-address fields for create and update requests.
///
/// All fields are optional; unset fields are omitted from the request body
/// and left untouched server-side.
///
/// # Example
///
/// ```rust
/// use vaultpay::address::{AddressOptions, AddressParams};
///
/// let params = AddressParams::new()
///     .with_street_address("123 Abc Way")
///     .with_locality("Chicago")
///     .with_region("IL")
///     .with_options(AddressOptions { update_existing: true });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressParams {
    /// First name on the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name on the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Street address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,

    /// Second address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_address: Option<String>,

    /// City or town.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    /// State, province, or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Postal or ZIP code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Full country name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code_alpha2: Option<String>,

    /// ISO 3166-1 alpha-3 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code_alpha3: Option<String>,

    /// ISO 3166-1 numeric country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code_numeric: Option<String>,

    /// Address update behavior flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<AddressOptions>,
}

impl AddressParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first name.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the street address line.
    #[must_use]
    pub fn with_street_address(mut self, street_address: impl Into<String>) -> Self {
        self.street_address = Some(street_address.into());
        self
    }

    /// Sets the second address line.
    #[must_use]
    pub fn with_extended_address(mut self, extended_address: impl Into<String>) -> Self {
        self.extended_address = Some(extended_address.into());
        self
    }

    /// Sets the city or town.
    #[must_use]
    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    /// Sets the state, province, or region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the postal or ZIP code.
    #[must_use]
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Sets the full country name.
    #[must_use]
    pub fn with_country_name(mut self, country_name: impl Into<String>) -> Self {
        self.country_name = Some(country_name.into());
        self
    }

    /// Sets the ISO 3166-1 alpha-2 country code.
    #[must_use]
    pub fn with_country_code_alpha2(mut self, code: impl Into<String>) -> Self {
        self.country_code_alpha2 = Some(code.into());
        self
    }

    /// Sets the ISO 3166-1 alpha-3 country code.
    #[must_use]
    pub fn with_country_code_alpha3(mut self, code: impl Into<String>) -> Self {
        self.country_code_alpha3 = Some(code.into());
        self
    }

    /// Sets the ISO 3166-1 numeric country code.
    #[must_use]
    pub fn with_country_code_numeric(mut self, code: impl Into<String>) -> Self {
        self.country_code_numeric = Some(code.into());
        self
    }

    /// Sets the address update options.
    #[must_use]
    pub fn with_options(mut self, options: AddressOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Shorthand for setting [`AddressOptions::update_existing`].
    #[must_use]
    pub fn update_existing(mut self) -> Self {
        self.options = Some(AddressOptions {
            update_existing: true,
        });
        self
    }
}

/// Behavior flags for billing-address updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressOptions {
    /// Edit the payment method's existing billing address in place instead
    /// of replacing it. The address keeps its id; unset fields keep their
    /// current values.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub update_existing: bool,
}
