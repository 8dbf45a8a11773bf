use serde::{Deserialize, Serialize};
use std::fmt;

use crate::values::{Money, Rate};

/// Currency conversion priced once per cross-currency transfer
///
/// The same quote is shown for confirmation and used for the credit leg,
/// so the two sides of a transfer can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionQuote {
    /// Amount debited, in the source account's currency
    pub source: Money,
    /// Amount credited, in the destination account's currency
    pub target: Money,
    /// Rate applied (target units per source unit)
    pub rate: Rate,
}

impl ConversionQuote {
    pub fn new(source: Money, target: Money, rate: Rate) -> Self {
        Self {
            source,
            target,
            rate,
        }
    }
}

impl fmt::Display for ConversionQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Convert {} -> {} at {:.4}",
            self.source, self.target, self.rate
        )
    }
}
