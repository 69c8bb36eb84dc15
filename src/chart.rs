//! ASCII spend chart across categories.

use crate::category::Category;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;

const HEADER: &str = "Percentage spent by category";
const INDENT: &str = "     ";
const BAR_CELL: &str = " o ";
const EMPTY_CELL: &str = "   ";

/// Withdrawal percentage used to size a category's bar.
///
/// This is `floor(withdrawn * 100 / balance)`, measured against the current
/// balance rather than total turnover, so it exceeds 100 once a category has
/// spent more than it still holds. A zero balance always yields 0.
///
/// When `withdrawn * 100` no longer fits in a `Decimal` the division is done
/// first, and a quotient that still overflows saturates at `Decimal::MAX`
/// (or `Decimal::MIN` for a negative balance).
pub fn spent_percentage(category: &Category) -> Decimal {
    let balance = category.balance().value();
    if balance.is_zero() {
        return Decimal::ZERO;
    }

    let withdrawn = category.withdrawn().value();
    let percentage = match withdrawn.checked_mul(Decimal::ONE_HUNDRED) {
        Some(scaled) => scaled.checked_div(balance),
        None => withdrawn
            .checked_div(balance)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED)),
    };

    match percentage {
        Some(percentage) => percentage.floor(),
        None if balance.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Renders the spend chart for `categories`, left to right in the given order.
///
/// The text opens with a blank line and every row, including the last name
/// row, ends with a newline. An empty list has no columns to draw and is
/// rejected.
pub fn render_spend_chart<'a, I>(categories: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Category>,
{
    let categories: Vec<&Category> = categories.into_iter().collect();
    if categories.is_empty() {
        return Err(LedgerError::InvalidArgument(
            "spend chart needs at least one category".to_string(),
        ));
    }

    let percentages: Vec<Decimal> = categories.iter().map(|c| spent_percentage(c)).collect();
    let mut out = String::new();

    out.push('\n');
    out.push_str(HEADER);
    out.push('\n');

    for threshold in (0..=100u32).rev().step_by(10) {
        out.push_str(&format!(" {:>3} |", threshold));
        let threshold = Decimal::from(threshold);
        for percentage in &percentages {
            out.push_str(if *percentage >= threshold {
                BAR_CELL
            } else {
                EMPTY_CELL
            });
        }
        out.push('\n');
    }

    out.push_str(INDENT);
    out.push('-');
    out.push_str(&"---".repeat(categories.len()));
    out.push('\n');

    let names: Vec<Vec<char>> = categories.iter().map(|c| c.name().chars().collect()).collect();
    let rows = names.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..rows {
        out.push_str(INDENT);
        for name in &names {
            match name.get(i) {
                Some(ch) => out.push_str(&format!(" {ch} ")),
                None => out.push_str(EMPTY_CELL),
            }
        }
        out.push('\n');
    }

    Ok(out)
}
