use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Monetary amount - uses Decimal for precision
pub type Amount = Decimal;

/// Exchange rate between two currencies (units of target per unit of source)
pub type Rate = Decimal;

/// Decimal places of a currency without an explicit minor-unit entry
pub const DEFAULT_MINOR_UNITS: u32 = 2;

/// Currency code (e.g. `USD`, `EUR`)
///
/// Codes are normalised to upper case so `usd` and `USD` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Create a new currency code
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    /// Get the code as a string slice
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Currency {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Currency> for String {
    fn from(c: Currency) -> Self {
        c.0
    }
}

/// Account identifier as typed by the user (e.g. `alice`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Correlates every log line and notification of a single transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferId(Uuid);

impl TransferId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransferId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An amount tagged with its currency
///
/// Immutable value type. Displayed at the currency's minor units, e.g.
/// `10.00 USD` or `1512 JPY`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    pub amount: Amount,
    pub currency: Currency,
    /// Decimal places used when displaying the amount
    #[serde(default = "default_minor_units")]
    pub minor_units: u32,
}

fn default_minor_units() -> u32 {
    DEFAULT_MINOR_UNITS
}

impl Money {
    pub fn new(amount: Amount, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            minor_units: DEFAULT_MINOR_UNITS,
        }
    }

    pub fn with_minor_units(mut self, minor_units: u32) -> Self {
        self.minor_units = minor_units;
        self
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self
            .amount
            .round_dp_with_strategy(self.minor_units, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.*} {}", self.minor_units as usize, amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_normalised() {
        assert_eq!(Currency::new(" usd "), Currency::new("USD"));
        assert_eq!(Currency::from("eur").code(), "EUR");
    }

    #[test]
    fn test_money_display_two_decimals() {
        assert_eq!(Money::new(dec!(10), "USD").to_string(), "10.00 USD");
        assert_eq!(Money::new(dec!(9.0), "EUR").to_string(), "9.00 EUR");
    }

    #[test]
    fn test_money_display_at_minor_units() {
        let yen = Money::new(dec!(1512), "JPY").with_minor_units(0);
        assert_eq!(yen.to_string(), "1512 JPY");

        let dinar = Money::new(dec!(1.5), "KWD").with_minor_units(3);
        assert_eq!(dinar.to_string(), "1.500 KWD");
    }

    #[test]
    fn test_money_display_rounds_half_up() {
        assert_eq!(Money::new(dec!(10.005), "USD").to_string(), "10.01 USD");
        assert_eq!(Money::new(dec!(10.004), "USD").to_string(), "10.00 USD");
    }

    #[test]
    fn test_transfer_ids_unique() {
        assert_ne!(TransferId::new(), TransferId::new());
    }
}
