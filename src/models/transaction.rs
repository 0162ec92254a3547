//! Transaction model
//!
//! A transaction is one row of the input file: a dated, categorized, signed
//! amount that is either money coming in (`entrada`) or going out (`saida`).
//! The month key is derived from the date when the record is built and the
//! record is never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use super::period::MonthKey;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money coming in, stored as a positive amount
    #[serde(rename = "entrada")]
    Inbound,
    /// Money going out, stored as a negative amount
    #[serde(rename = "saida")]
    Outbound,
}

impl TransactionType {
    /// The token used for this type in CSV files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbound => "entrada",
            Self::Outbound => "saida",
        }
    }

    pub fn is_inbound(&self) -> bool {
        matches!(self, Self::Inbound)
    }

    pub fn is_outbound(&self) -> bool {
        matches!(self, Self::Outbound)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entrada" => Ok(Self::Inbound),
            "saida" | "saída" => Ok(Self::Outbound),
            other => Err(TransactionValidationError::UnknownType(other.to_string())),
        }
    }
}

/// A single loaded transaction record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    date: NaiveDate,
    description: String,
    category: String,
    amount: Money,
    kind: TransactionType,
    month: MonthKey,
}

impl Transaction {
    /// Create a new transaction, deriving its month key from `date`
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        kind: TransactionType,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category: category.into(),
            amount,
            kind,
            month: MonthKey::from_date(date),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Signed amount (negative for outbound)
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    /// The month this transaction is bucketed in
    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn is_inbound(&self) -> bool {
        self.kind.is_inbound()
    }

    pub fn is_outbound(&self) -> bool {
        self.kind.is_outbound()
    }

    /// Validate that the sign of the amount agrees with the type.
    ///
    /// Inbound amounts must not be negative and outbound amounts must not be
    /// positive; zero is accepted for both.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        match self.kind {
            TransactionType::Inbound if self.amount.is_negative() => {
                Err(TransactionValidationError::SignMismatch {
                    kind: self.kind,
                    amount: self.amount,
                })
            }
            TransactionType::Outbound if self.amount.is_positive() => {
                Err(TransactionValidationError::SignMismatch {
                    kind: self.kind,
                    amount: self.amount,
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    UnknownType(String),
    SignMismatch {
        kind: TransactionType,
        amount: Money,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType(s) => {
                write!(f, "Unknown transaction type '{}': expected entrada or saida", s)
            }
            Self::SignMismatch { kind, amount } => match kind {
                TransactionType::Inbound => {
                    write!(f, "Inbound (entrada) amount must not be negative: {}", amount)
                }
                TransactionType::Outbound => {
                    write!(f, "Outbound (saida) amount must not be positive: {}", amount)
                }
            },
        }
    }
}

impl std::error::Error for TransactionValidationError {}
