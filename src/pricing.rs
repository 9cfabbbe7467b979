//! Prices

use std::num::NonZeroU32;

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::line_items::LineItem;

/// Errors that can occur while calculating totals.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// A line total did not fit in the minor-unit range.
    #[error("line total overflowed")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `unit_price * quantity`.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the product does not fit in minor units.
pub fn line_total<'a>(
    unit_price: &Money<'a, Currency>,
    quantity: NonZeroU32,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let minor_units = unit_price
        .to_minor_units()
        .checked_mul(i64::from(quantity.get()))
        .ok_or(TotalPriceError::Overflow)?;

    Ok(Money::from_minor(minor_units, unit_price.currency()))
}

/// Calculates the sum of all line totals, starting from zero in `currency`.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: a line total overflowed.
/// - [`TotalPriceError::Money`]: wrapped money arithmetic or currency mismatch error.
pub fn total_price<'a, 'b, I>(
    lines: I,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError>
where
    'a: 'b,
    I: IntoIterator<Item = &'b LineItem<'a>>,
{
    lines
        .into_iter()
        .try_fold(
            Money::from_minor(0, currency),
            |acc, line| -> Result<_, TotalPriceError> { Ok(acc.add(line.line_total()?)?) },
        )
}
