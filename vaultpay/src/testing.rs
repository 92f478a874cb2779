//! Sandbox card numbers for downstream test suites.
//!
//! These numbers are recognized by the gateway sandbox only; production
//! rejects them. They are exported so integrating applications can exercise
//! their own vaulting flows without real card data.

/// Visa test number that vaults and verifies successfully.
pub const VISA: &str = "4111111111111111";

/// Mastercard test number that vaults and verifies successfully.
pub const MASTERCARD: &str = "5105105105105100";

/// Mastercard test number that fails sandbox card verification with a
/// processor decline.
pub const MASTERCARD_FAILS_VERIFICATION: &str = "5555555555554444";

/// Returns the bank identification number (first six digits) of a test card
/// number.
#[must_use]
pub fn bin(number: &str) -> &str {
    &number[..6]
}

/// Returns the last four digits of a test card number.
#[must_use]
pub fn last4(number: &str) -> &str {
    &number[number.len() - 4..]
}
