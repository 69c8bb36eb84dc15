//! Operation models for CSV scripts and internal representation.

use crate::amount::Amount;
use crate::category::DEFAULT_DESCRIPTION;
use serde::Deserialize;

/// Raw operation record as read from CSV.
///
/// Columns are `type,category,amount,description,destination`. Only the
/// first two are needed for every row; the rest depend on the type.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    /// Operation type: open, deposit, withdraw, transfer
    #[serde(rename = "type")]
    pub op_type: String,

    /// Category the operation applies to (the source of a transfer)
    pub category: String,

    /// Amount (required for deposit, withdraw and transfer). A malformed
    /// value fails the whole row at deserialization.
    #[serde(default)]
    pub amount: Option<Amount>,

    /// Free-text description for deposits and withdrawals
    #[serde(default)]
    pub description: Option<String>,

    /// Destination category of a transfer
    #[serde(default)]
    pub destination: Option<String>,
}

impl OperationRecord {
    /// Parses the raw CSV record into a typed operation.
    ///
    /// Returns `None` if the record is incomplete (unknown type, missing amount, etc.).
    pub fn parse(&self) -> Option<Operation> {
        let category = self.category.trim();
        if category.is_empty() {
            return None;
        }

        let kind = match self.op_type.trim().to_lowercase().as_str() {
            "open" => OpKind::Open,
            "deposit" => OpKind::Deposit {
                amount: self.amount?,
                description: self.description(),
            },
            "withdraw" | "withdrawal" => OpKind::Withdraw {
                amount: self.amount?,
                description: self.description(),
            },
            "transfer" => OpKind::Transfer {
                amount: self.amount?,
                destination: non_empty(self.destination.as_deref())?.to_string(),
            },
            _ => return None,
        };

        Some(Operation {
            category: category.to_string(),
            kind,
        })
    }

    fn description(&self) -> String {
        non_empty(self.description.as_deref())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string()
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// A parsed and validated operation ready to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Category the operation applies to
    pub category: String,

    /// Operation type with associated data
    pub kind: OpKind,
}

/// Operation variants with associated data.
#[derive(Debug, Clone, PartialEq)]
pub enum OpKind {
    /// Create a new, empty category.
    Open,

    /// Credit funds to the category.
    Deposit { amount: Amount, description: String },

    /// Debit funds from the category if its balance covers them.
    Withdraw { amount: Amount, description: String },

    /// Move a whole number of funds to another category.
    Transfer { amount: Amount, destination: String },
}
