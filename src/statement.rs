//! Fixed-width text layout for category statements.
//!
//! Action lines are laid out in a 30 character column: the description on
//! the left, the signed two-decimal amount on the right.

use crate::amount::Amount;
use crate::category::Category;

/// Width of a statement line.
pub const LINE_WIDTH: usize = 30;

/// Descriptions longer than this are truncated.
pub const MAX_DESCRIPTION: usize = 24;

/// Characters kept from a truncated description, before the ellipsis.
pub const TRUNCATED_DESCRIPTION: usize = 19;

/// Room reserved for the sign and the `.00` cents.
const SIGN_AND_CENTS: usize = 4;

const ELLIPSIS: &str = "...";

/// Direction of a ledger movement, rendered in front of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Credit,
    Debit,
}

impl Sign {
    fn as_char(self) -> char {
        match self {
            Sign::Credit => '+',
            Sign::Debit => '-',
        }
    }
}

/// Formats one deposit or withdrawal line.
///
/// The padding is measured against the original description length and the
/// literal width of `amount`, and clamps at zero when they overflow the
/// column. Descriptions longer than [`MAX_DESCRIPTION`] keep their first
/// [`TRUNCATED_DESCRIPTION`] characters followed by `...`.
pub fn action_line(description: &str, amount: Amount, sign: Sign) -> String {
    let description_len = description.chars().count();
    let space_left = LINE_WIDTH
        .saturating_sub(description_len)
        .saturating_sub(amount.literal_width())
        .saturating_sub(SIGN_AND_CENTS);

    let mut line = String::with_capacity(LINE_WIDTH);
    if description_len > MAX_DESCRIPTION {
        line.extend(description.chars().take(TRUNCATED_DESCRIPTION));
        line.push_str(ELLIPSIS);
    } else {
        line.push_str(description);
    }
    line.push_str(&" ".repeat(space_left));
    line.push(sign.as_char());
    line.push_str(&amount.to_fixed());
    line
}

/// Centres `name` between two equal runs of `*`.
///
/// Each run is `(30 - len) / 2` long, so odd remainders leave the title one
/// character short of the full width.
pub fn title(name: &str) -> String {
    let stars = "*".repeat(LINE_WIDTH.saturating_sub(name.chars().count()) / 2);
    format!("{stars}{name}{stars}")
}

/// Renders the statement block of a category.
///
/// The block opens with a blank line, then the title, every action-log line
/// verbatim, and the `Total:` footer. There is no trailing newline.
pub fn render(category: &Category) -> String {
    let mut lines = Vec::with_capacity(category.actions().len() + 2);
    lines.push(title(category.name()));
    lines.extend(category.actions().iter().cloned());
    lines.push(format!("Total: {}", category.balance().to_fixed()));
    format!("\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_action_line_fills_column() {
        let line = action_line("initial deposit", Amount::from(500), Sign::Credit);
        assert_eq!(line, "initial deposit        +500.00");
        assert_eq!(line.len(), LINE_WIDTH);

        let line = action_line("groceries", Amount::from(20), Sign::Debit);
        assert_eq!(line, "groceries               -20.00");
        assert_eq!(line.len(), LINE_WIDTH);
    }

    #[test]
    fn test_action_line_at_truncation_boundary() {
        // 24 characters is still shown in full.
        let description = "abcdefghijklmnopqrstuvwx";
        let line = action_line(description, Amount::from(1), Sign::Credit);
        assert_eq!(line, "abcdefghijklmnopqrstuvwx +1.00");
    }

    #[test]
    fn test_action_line_truncates_long_description() {
        let description = "a description well over the limit";
        let line = action_line(description, Amount::from(50), Sign::Debit);
        assert_eq!(line, "a description well ...-50.00");
    }

    #[test]
    fn test_action_line_clamps_padding_at_zero() {
        let description = "exactly twenty-four char";
        assert_eq!(description.chars().count(), 24);
        let line = action_line(description, Amount::from(123456), Sign::Credit);
        assert_eq!(line, "exactly twenty-four char+123456.00");
    }

    #[test]
    fn test_action_line_measures_literal_amount() {
        let line = action_line("coffee", Amount::from_str("3.5").unwrap(), Sign::Debit);
        // 30 - 6 - 3 - 4 = 17 spaces, measured on "3.5".
        assert_eq!(line, format!("coffee{}-3.50", " ".repeat(17)));
    }

    #[test]
    fn test_action_line_counts_characters_not_bytes() {
        let line = action_line("café", Amount::from(10), Sign::Credit);
        assert_eq!(line, format!("café{}+10.00", " ".repeat(20)));
    }

    #[test]
    fn test_title_even_and_odd_names() {
        assert_eq!(title("Food"), format!("{0}Food{0}", "*".repeat(13)));
        assert_eq!(title("It"), format!("{0}It{0}", "*".repeat(14)));
        let odd = title("Clothing!");
        assert_eq!(odd, format!("{0}Clothing!{0}", "*".repeat(10)));
        assert_eq!(odd.len(), LINE_WIDTH - 1);
    }

    #[test]
    fn test_title_for_overlong_name_has_no_stars() {
        let name = "a category name that is far too long";
        assert_eq!(title(name), name);
    }

    #[test]
    fn test_render_empty_category() {
        let category = Category::new("Auto");
        assert_eq!(
            render(&category),
            format!("\n{0}Auto{0}\nTotal: 0.00", "*".repeat(13))
        );
    }
}
