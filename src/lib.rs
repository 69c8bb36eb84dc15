//! # Budget Ledger
//!
//! Tracks deposits, withdrawals and transfers across named spending
//! categories, renders a fixed-width statement per category and an ASCII
//! chart of how much each category has spent.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: amounts are `rust_decimal` values, shown with two decimals
//! - **Recoverable declines**: insufficient funds is an [`Outcome`], not an error
//! - **Strict invariants**: `balance == deposits - withdrawals` always holds
//! - **Deterministic output**: statements and chart columns follow creation order
//!
//! ## Example
//!
//! ```
//! use budget_ledger::{render_spend_chart, Amount, Category};
//!
//! let mut food = Category::new("Food");
//! let mut shopping = Category::new("Shopping");
//! food.deposit(Amount::from(500), "initial deposit").unwrap();
//! food.withdraw(Amount::from(20), "groceries").unwrap();
//! food.transfer(Amount::from(300), &mut shopping).unwrap();
//!
//! assert_eq!(food.balance(), Amount::from(180));
//! println!("{}", food);
//! print!("{}", render_spend_chart([&food, &shopping]).unwrap());
//! ```

pub mod amount;
pub mod budget;
pub mod category;
pub mod chart;
pub mod error;
pub mod operation;
pub mod statement;

pub use amount::Amount;
pub use budget::Budget;
pub use category::{Category, LedgerEntry, Outcome, DEFAULT_DESCRIPTION};
pub use chart::{render_spend_chart, spent_percentage};
pub use error::{LedgerError, Result};
pub use operation::{OpKind, Operation, OperationRecord};
