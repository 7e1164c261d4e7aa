//! The balance summary returned alongside the transactions.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Differences smaller than half a cent are treated as rounding noise.
const TOTAL_TOLERANCE: f64 = 0.005;

/// The balance summary as sent by the finance API.
///
/// The API sends each figure as a decimal string, e.g. `"5000.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The sum of all incoming transactions.
    pub income: String,
    /// The sum of all outgoing transactions.
    pub outcome: String,
    /// The net total, expected to be `income - outcome`.
    pub total: String,
}

/// The three balance figures parsed into numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceFigures {
    /// The sum of all incoming transactions.
    pub income: f64,
    /// The sum of all outgoing transactions.
    pub outcome: f64,
    /// The net total as reported by the API.
    pub total: f64,
}

impl Balance {
    /// Parse the three decimal strings.
    ///
    /// # Errors
    /// Returns [Error::InvalidBalance] with the offending string if any figure
    /// is not a finite decimal number.
    pub fn parse(&self) -> Result<BalanceFigures, Error> {
        Ok(BalanceFigures {
            income: parse_figure(&self.income)?,
            outcome: parse_figure(&self.outcome)?,
            total: parse_figure(&self.total)?,
        })
    }
}

impl BalanceFigures {
    /// Whether `total` agrees with `income - outcome` to within half a cent.
    ///
    /// The dashboard always shows the total reported by the API; this is only
    /// used to warn about inconsistent data.
    pub fn is_consistent(&self) -> bool {
        (self.income - self.outcome - self.total).abs() < TOTAL_TOLERANCE
    }
}

fn parse_figure(text: &str) -> Result<f64, Error> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::InvalidBalance(text.to_owned()))
}
