//! Line Items

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

use crate::{
    items::ItemId,
    pricing::{TotalPriceError, line_total},
};

/// One distinct entry in the cart.
///
/// The unit price and name are fixed when the line is created; only the
/// quantity changes afterwards, and it never drops below one.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem<'a> {
    id: ItemId,
    name: Option<String>,
    unit_price: Money<'a, Currency>,
    quantity: NonZeroU32,
}

impl<'a> LineItem<'a> {
    /// Creates a new line with a quantity of one.
    pub(crate) fn new(id: ItemId, name: Option<String>, unit_price: Money<'a, Currency>) -> Self {
        Self {
            id,
            name,
            unit_price,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Adds one to the quantity, returning `None` on overflow.
    pub(crate) fn increment(&mut self) -> Option<NonZeroU32> {
        self.quantity = self.quantity.checked_add(1)?;

        Some(self.quantity)
    }

    /// Returns the id of the line
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the display name of the line
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the price of a single unit
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Returns the number of units on this line
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    /// Returns `unit_price * quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if the total does not fit in minor units.
    pub fn line_total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        line_total(&self.unit_price, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_line_has_quantity_one() -> TestResult {
        let line = LineItem::new(ItemId::new("a"), None, Money::from_minor(120, GBP));

        assert_eq!(line.quantity().get(), 1);
        assert_eq!(line.line_total()?, Money::from_minor(120, GBP));

        Ok(())
    }

    #[test]
    fn increment_updates_line_total() -> TestResult {
        let mut line = LineItem::new(
            ItemId::new("a"),
            Some("Apple".to_string()),
            Money::from_minor(120, GBP),
        );

        line.increment();
        line.increment();

        assert_eq!(line.quantity().get(), 3);
        assert_eq!(line.line_total()?, Money::from_minor(360, GBP));
        assert_eq!(line.name(), Some("Apple"));

        Ok(())
    }

    #[test]
    fn increment_at_max_leaves_quantity_unchanged() {
        let mut line = LineItem::new(ItemId::new("a"), None, Money::from_minor(1, GBP));
        line.quantity = NonZeroU32::MAX;

        assert_eq!(line.increment(), None);
        assert_eq!(line.quantity(), NonZeroU32::MAX);
    }
}
