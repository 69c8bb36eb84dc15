//! Ordered collection of categories and script processing.
//!
//! Categories are kept in creation order, which is the order statements and
//! chart columns are rendered in. Operation scripts are streamed row by row.

use crate::amount::Amount;
use crate::category::{Category, Outcome};
use crate::chart;
use crate::error::{LedgerError, Result};
use crate::operation::{OpKind, Operation, OperationRecord};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::collections::HashMap;
use std::io::{Read, Write};

/// A set of uniquely named categories.
///
/// Owns every category outright. Transfers borrow the two categories
/// involved mutably for the duration of the call, so no partial transfer is
/// ever observable.
#[derive(Debug, Default)]
pub struct Budget {
    /// Categories in creation order.
    categories: Vec<Category>,

    /// Position of each category in `categories`, by name.
    index: HashMap<String, usize>,
}

impl Budget {
    /// Creates an empty budget.
    pub fn new() -> Self {
        Budget {
            categories: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds an empty category.
    pub fn open(&mut self, name: &str) -> Result<&mut Category> {
        if self.index.contains_key(name) {
            return Err(LedgerError::DuplicateCategory(name.to_string()));
        }

        let position = self.categories.len();
        self.index.insert(name.to_string(), position);
        self.categories.push(Category::new(name));
        debug!("Opened category {}", name);
        Ok(&mut self.categories[position])
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.index.get(name).map(|&i| &self.categories[i])
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        let position = *self.index.get(name)?;
        self.categories.get_mut(position)
    }

    /// Categories in creation order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Deposits into the named category.
    pub fn deposit(&mut self, name: &str, amount: Amount, description: &str) -> Result<()> {
        self.existing_mut(name)?.deposit(amount, description)
    }

    /// Withdraws from the named category.
    pub fn withdraw(&mut self, name: &str, amount: Amount, description: &str) -> Result<Outcome> {
        self.existing_mut(name)?.withdraw(amount, description)
    }

    /// Transfers between two distinct named categories.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Amount) -> Result<Outcome> {
        let (source, destination) = self.pair_mut(from, to)?;
        source.transfer(amount, destination)
    }

    /// Applies operations from a CSV script in streaming fashion.
    ///
    /// Rows that fail to parse or apply are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<OperationRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse() {
                    Some(op) => {
                        if let Err(e) = self.apply(op, row_num) {
                            warn!("Row {}: {}", row_num, e);
                        }
                    }
                    None => {
                        let e = LedgerError::InvalidRecord {
                            row: row_num,
                            message: format!("unusable '{}' record", record.op_type),
                        };
                        warn!("{}", e);
                    }
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Applies a single parsed operation.
    fn apply(&mut self, op: Operation, row: usize) -> Result<()> {
        let outcome = match op.kind {
            OpKind::Open => {
                self.open(&op.category)?;
                return Ok(());
            }
            OpKind::Deposit {
                amount,
                description,
            } => {
                self.deposit(&op.category, amount, &description)?;
                return Ok(());
            }
            OpKind::Withdraw {
                amount,
                description,
            } => self.withdraw(&op.category, amount, &description)?,
            OpKind::Transfer {
                amount,
                destination,
            } => self.transfer(&op.category, &destination, amount)?,
        };

        if let Outcome::InsufficientFunds { requested, balance } = outcome {
            debug!(
                "Row {}: {} cannot cover {} (balance {}), declined",
                row, op.category, requested, balance
            );
        }

        Ok(())
    }

    /// Writes every statement followed by the spend chart.
    pub fn write_report<W: Write>(&self, mut writer: W) -> Result<()> {
        for category in &self.categories {
            writeln!(writer, "{}", category)?;
        }
        writer.write_all(chart::render_spend_chart(&self.categories)?.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn existing_mut(&mut self, name: &str) -> Result<&mut Category> {
        self.category_mut(name)
            .ok_or_else(|| LedgerError::UnknownCategory(name.to_string()))
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| LedgerError::UnknownCategory(name.to_string()))
    }

    /// Borrows two distinct categories mutably at once.
    fn pair_mut(&mut self, first: &str, second: &str) -> Result<(&mut Category, &mut Category)> {
        let i = self.position(first)?;
        let j = self.position(second)?;
        if i == j {
            return Err(LedgerError::InvalidArgument(format!(
                "cannot transfer from {} to itself",
                first
            )));
        }

        if i < j {
            let (head, tail) = self.categories.split_at_mut(j);
            Ok((&mut head[i], &mut tail[0]))
        } else {
            let (head, tail) = self.categories.split_at_mut(i);
            Ok((&mut tail[0], &mut head[j]))
        }
    }
}
