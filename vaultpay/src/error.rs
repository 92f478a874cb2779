//! Validation error trees and well-known gateway error codes.
//!
//! The gateway reports validation failures as a tree keyed by nested
//! field-group names, where each node carries the ordered errors reported
//! directly on that group:
//!
//! ```json
//! {
//!   "creditCard": {
//!     "errors": [
//!       { "code": "81716", "attribute": "number",
//!         "message": "Credit card number must be 12-19 digits." }
//!     ],
//!     "billingAddress": { "errors": [] }
//!   }
//! }
//! ```
//!
//! [`ErrorCollection`] mirrors that shape: the reserved `"errors"` key holds
//! the node's own error list and every other key is a child collection.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Well-known gateway validation error codes.
///
/// Codes are stable across gateway releases; messages are not. Match on the
/// code when branching on a specific failure.
pub mod codes {
    /// A PayPal nonce carried neither a consent code nor an access token.
    pub const PAYPAL_CONSENT_CODE_OR_ACCESS_TOKEN_IS_REQUIRED: &str = "82901";

    /// A one-time-use PayPal nonce (access token, no vault consent) cannot
    /// be vaulted.
    pub const PAYPAL_CANNOT_VAULT_ONE_TIME_USE_ACCOUNT: &str = "82902";

    /// Credit card number was not 12-19 digits.
    pub const CREDIT_CARD_NUMBER_INVALID_LENGTH: &str = "81716";

    /// The card is already vaulted for this customer and
    /// `failOnDuplicatePaymentMethod` was set.
    pub const CREDIT_CARD_DUPLICATE_EXISTS: &str = "81724";

    /// The requested token is already in use by another payment method.
    pub const PAYMENT_METHOD_TOKEN_IS_IN_USE: &str = "92906";
}

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Stable numeric error code, as a string (e.g. `"82902"`).
    pub code: String,

    /// The request attribute the error applies to (e.g. `"number"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    /// Human-readable message. Subject to change; match on `code` instead.
    pub message: String,
}

/// An ordered tree of validation errors, keyed by field-group name.
///
/// Group names follow the request body structure: `"creditCard"`,
/// `"paypalAccount"`, `"billingAddress"`, and so on. Error order within a
/// node is the order the gateway reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCollection {
    /// Errors reported directly on this group.
    errors: Vec<ValidationError>,
    /// Child groups, by name.
    children: BTreeMap<String, ErrorCollection>,
}

impl ErrorCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node holding the given errors, with no children.
    #[must_use]
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            errors,
            children: BTreeMap::new(),
        }
    }

    /// Errors reported directly on this group, in server order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the child collection for a nested field group, if present.
    #[must_use]
    pub fn for_key(&self, key: &str) -> Option<&ErrorCollection> {
        self.children.get(key)
    }

    /// Errors on this group whose `attribute` matches.
    #[must_use]
    pub fn on_attribute(&self, attribute: &str) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|error| error.attribute.as_deref() == Some(attribute))
            .collect()
    }

    /// All errors in this subtree, depth-first, preserving server order
    /// within each node.
    #[must_use]
    pub fn deep_all(&self) -> Vec<&ValidationError> {
        let mut all = Vec::with_capacity(self.deep_size());
        self.collect_into(&mut all);
        all
    }

    fn collect_into<'a>(&'a self, into: &mut Vec<&'a ValidationError>) {
        into.extend(self.errors.iter());
        for child in self.children.values() {
            child.collect_into(into);
        }
    }

    /// Total number of errors in this subtree.
    #[must_use]
    pub fn deep_size(&self) -> usize {
        self.errors.len()
            + self
                .children
                .values()
                .map(ErrorCollection::deep_size)
                .sum::<usize>()
    }

    /// Whether the subtree contains no errors at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deep_size() == 0
    }

    /// Inserts a child collection under the given group name.
    ///
    /// Intended for constructing expected values in tests and mock
    /// responses.
    pub fn insert_child(&mut self, key: impl Into<String>, child: ErrorCollection) {
        self.children.insert(key.into(), child);
    }
}

// The wire object interleaves the node's own error list (under the reserved
// "errors" key) with child groups (every other key), so serde's derived
// impls cannot express it.

impl Serialize for ErrorCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1 + self.children.len()))?;
        map.serialize_entry("errors", &self.errors)?;
        for (key, child) in &self.children {
            map.serialize_entry(key, child)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ErrorCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ErrorCollection;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a validation error group object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut collection = ErrorCollection::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key == "errors" {
                        collection.errors = map.next_value()?;
                    } else {
                        let child = map.next_value()?;
                        collection.children.insert(key, child);
                    }
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
