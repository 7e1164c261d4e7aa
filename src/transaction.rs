//! The transactions returned by the finance API.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

/// Whether a transaction brought money in or sent money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received, e.g. a salary payment.
    Income,
    /// Money spent, e.g. a grocery shop.
    Outcome,
}

impl TransactionKind {
    /// The CSS class and wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Outcome => "outcome",
        }
    }

    /// The prefix shown before a formatted amount of this kind.
    pub fn sign_prefix(self) -> &'static str {
        match self {
            TransactionKind::Income => "",
            TransactionKind::Outcome => "- ",
        }
    }
}

/// A non-negative, finite amount of money.
///
/// The direction of a transaction is carried by [TransactionKind], so the
/// amount itself is never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `value` is negative, NaN or infinite.
    pub fn new(value: f64) -> Result<Self, Error> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAmount(value))
        }
    }

    /// The amount as a float.
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

/// The category a transaction was filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The display name of the category, e.g. "Food".
    pub title: String,
}

/// A financial movement recorded by the finance API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The API's identifier for the transaction.
    pub id: String,
    /// A short description, e.g. "Website hosting".
    pub title: String,
    /// How much money moved.
    pub value: Amount,
    /// Whether the money came in or went out.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::Error;

    use super::{Amount, Transaction, TransactionKind};

    #[test]
    fn deserializes_api_transaction() {
        let json = r#"{
            "id": "9c0b5b1e-0c47-4c8f-a8a1-4b5e0a3c2f11",
            "title": "Loan",
            "value": 1500,
            "type": "income",
            "category": { "title": "Others" },
            "created_at": "2020-04-20T18:22:01.000Z"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.id, "9c0b5b1e-0c47-4c8f-a8a1-4b5e0a3c2f11");
        assert_eq!(transaction.title, "Loan");
        assert_eq!(transaction.value.as_f64(), 1500.0);
        assert_eq!(transaction.kind, TransactionKind::Income);
        assert_eq!(transaction.category.title, "Others");
        assert_eq!(transaction.created_at, datetime!(2020-04-20 18:22:01 UTC));
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let json = r#"{
            "id": "1",
            "title": "Loan",
            "value": 1500,
            "type": "transfer",
            "category": { "title": "Others" },
            "created_at": "2020-04-20T18:22:01Z"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn rejects_negative_value() {
        let json = r#"{
            "id": "1",
            "title": "Refund",
            "value": -20.5,
            "type": "outcome",
            "category": { "title": "Food" },
            "created_at": "2020-04-20T18:22:01Z"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn amount_rejects_non_finite_values() {
        assert!(matches!(
            Amount::new(f64::INFINITY),
            Err(Error::InvalidAmount(_))
        ));
        assert!(Amount::new(f64::NAN).is_err());
        assert_eq!(Amount::new(0.0).unwrap().as_f64(), 0.0);
    }

    #[test]
    fn only_outcome_has_sign_prefix() {
        assert_eq!(TransactionKind::Income.sign_prefix(), "");
        assert_eq!(TransactionKind::Outcome.sign_prefix(), "- ");
    }
}
