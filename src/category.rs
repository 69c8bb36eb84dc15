//! Spending category model and operations.
//!
//! Maintains the invariant: `balance == deposits - successful withdrawals`
//! at all times.

use crate::amount::Amount;
use crate::error::{LedgerError, Result};
use crate::statement::{self, Sign};
use log::debug;
use std::fmt;

/// Description used when the caller has nothing better to say.
pub const DEFAULT_DESCRIPTION: &str = "None";

/// A single movement recorded in a category's ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub amount: Amount,
    pub description: String,
}

/// Result of a withdrawal or transfer that was allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The funds moved and the ledger was updated.
    Completed,

    /// The category could not cover `requested`; only the action log changed.
    InsufficientFunds { requested: Amount, balance: Amount },
}

impl Outcome {
    /// Returns `true` if the funds moved.
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// A named budget bucket.
///
/// # Invariants
///
/// - `balance` equals the sum of deposits minus the sum of successful
///   withdrawals
/// - `withdrawn` never decreases
/// - `actions` is at least as long as `ledger`, since declined operations
///   are logged without a ledger entry
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    ledger: Vec<LedgerEntry>,
    actions: Vec<String>,
    balance: Amount,
    withdrawn: Amount,
}

impl Category {
    /// Creates an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            name: name.into(),
            ledger: Vec::new(),
            actions: Vec::new(),
            balance: Amount::ZERO,
            withdrawn: Amount::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in the order they were recorded.
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Pre-formatted action log, one line per event.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Current balance.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Cumulative total of successful withdrawals.
    pub fn withdrawn(&self) -> Amount {
        self.withdrawn
    }

    /// Returns `true` if the balance covers `amount`.
    pub fn check_funds(&self, amount: Amount) -> bool {
        self.balance >= amount
    }

    /// Deposits funds into the category.
    ///
    /// Negative amounts are accepted and reduce the balance. Fails only when
    /// the new balance would leave the representable range, in which case
    /// nothing changes.
    pub fn deposit(&mut self, amount: Amount, description: &str) -> Result<()> {
        let balance = self.credited(amount)?;
        self.apply_deposit(amount, description, balance);
        Ok(())
    }

    /// Withdraws funds from the category.
    ///
    /// Returns [`Outcome::InsufficientFunds`] when the balance does not cover
    /// `amount`; the failure is logged in the action log and nothing else
    /// changes. A negative amount, or one that would overflow the withdrawn
    /// total, is rejected before any state is touched.
    pub fn withdraw(&mut self, amount: Amount, description: &str) -> Result<Outcome> {
        ensure_non_negative(amount, "withdrawal")?;

        if !self.check_funds(amount) {
            self.actions
                .push(format!("Withdrawal of {} failed - {}", amount, description));
            debug!(
                "{}: withdrawal of {} declined, balance {}",
                self.name, amount, self.balance
            );
            return Ok(Outcome::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        let debit = self.debited(amount)?;
        self.apply_withdrawal(amount, description, debit);
        Ok(Outcome::Completed)
    }

    /// Transfers funds to another category.
    ///
    /// The amount is truncated to a whole number first. On success the
    /// source records a withdrawal `Transfer to <destination>` and the
    /// destination a deposit `Transfer from <source>`. On insufficient funds
    /// only the source's action log changes. Both sides are checked for
    /// overflow before either is updated.
    pub fn transfer(&mut self, amount: Amount, destination: &mut Category) -> Result<Outcome> {
        let amount = amount.trunc();
        ensure_non_negative(amount, "transfer")?;

        if !self.check_funds(amount) {
            self.actions.push(format!(
                "Transfer of {} to {} failed",
                amount, destination.name
            ));
            debug!(
                "{}: transfer of {} to {} declined, balance {}",
                self.name, amount, destination.name, self.balance
            );
            return Ok(Outcome::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        let debit = self.debited(amount)?;
        let credit = destination.credited(amount)?;
        self.apply_withdrawal(amount, &format!("Transfer to {}", destination.name), debit);
        destination.apply_deposit(amount, &format!("Transfer from {}", self.name), credit);
        Ok(Outcome::Completed)
    }

    /// Renders the statement block for this category.
    pub fn statement(&self) -> String {
        statement::render(self)
    }

    /// Balance after crediting `amount`.
    fn credited(&self, amount: Amount) -> Result<Amount> {
        self.balance
            .checked_add(amount)
            .ok_or_else(|| overflow(&self.name, "deposit", amount))
    }

    /// Balance and withdrawn total after debiting `amount`.
    fn debited(&self, amount: Amount) -> Result<Debit> {
        match (
            self.balance.checked_sub(amount),
            self.withdrawn.checked_add(amount),
        ) {
            (Some(balance), Some(withdrawn)) => Ok(Debit { balance, withdrawn }),
            _ => Err(overflow(&self.name, "withdrawal", amount)),
        }
    }

    fn apply_deposit(&mut self, amount: Amount, description: &str, balance: Amount) {
        self.actions
            .push(statement::action_line(description, amount, Sign::Credit));
        self.ledger.push(LedgerEntry {
            amount,
            description: description.to_string(),
        });
        self.balance = balance;

        debug!("{}: deposited {} ({})", self.name, amount, description);
    }

    /// Records a withdrawal whose funds have already been checked.
    fn apply_withdrawal(&mut self, amount: Amount, description: &str, debit: Debit) {
        self.actions
            .push(statement::action_line(description, amount, Sign::Debit));
        self.ledger.push(LedgerEntry {
            amount,
            description: description.to_string(),
        });
        self.withdrawn = debit.withdrawn;
        self.balance = debit.balance;

        debug!("{}: withdrew {} ({})", self.name, amount, description);
    }

    /// Verifies the invariant: `balance == deposits - withdrawn`.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        let recorded = self
            .ledger
            .iter()
            .try_fold(Amount::ZERO, |sum, entry| sum.checked_add(entry.amount));
        // Every withdrawal is in the ledger too, so it is counted once as a
        // movement and once more in `withdrawn`.
        let deposits = recorded.and_then(|sum| sum.checked_sub(self.withdrawn));
        let expected = deposits.and_then(|sum| sum.checked_sub(self.withdrawn));
        expected == Some(self.balance) && self.actions.len() >= self.ledger.len()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.statement())
    }
}

/// Totals a withdrawal will leave behind.
#[derive(Debug, Clone, Copy)]
struct Debit {
    balance: Amount,
    withdrawn: Amount,
}

fn ensure_non_negative(amount: Amount, operation: &str) -> Result<()> {
    if amount.is_negative() {
        return Err(LedgerError::InvalidArgument(format!(
            "{} amount must not be negative, got {}",
            operation, amount
        )));
    }
    Ok(())
}

fn overflow(name: &str, operation: &str, amount: Amount) -> LedgerError {
    LedgerError::InvalidArgument(format!(
        "{} of {} overflows the totals of {}",
        operation, amount, name
    ))
}
