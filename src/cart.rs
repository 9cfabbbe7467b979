//! Cart

use std::num::NonZeroU32;

use indexmap::{IndexMap, map::Entry};
use rustc_hash::FxBuildHasher;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    items::{ItemDescriptor, ItemId},
    line_items::LineItem,
    pricing::{TotalPriceError, total_price},
    state::CartState,
};

/// Errors related to adding items to a cart.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// The item descriptor had an empty id.
    #[error("Item id must not be empty")]
    InvalidItem,

    /// The item's unit price was below zero.
    #[error("Item {0} has a negative unit price")]
    NegativePrice(ItemId),

    /// An item's currency differs from the cart currency (item, item currency, cart currency).
    #[error("Item {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ItemId, &'static str, &'static str),

    /// Adding another unit would overflow the line quantity.
    #[error("Quantity of item {0} cannot be incremented further")]
    QuantityOverflow(ItemId),

    /// Adding another unit would push the grand total past the minor-unit range.
    #[error("Adding item {0} would overflow the cart total")]
    TotalOverflow(ItemId),
}

/// The cart aggregate: an insertion-ordered mapping from item id to line.
///
/// Totals are never stored; [`Cart::grand_total`] derives them from the lines
/// present at the time of the call.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    items: IndexMap<ItemId, LineItem<'a>, FxBuildHasher>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create a new, empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: IndexMap::default(),
            currency,
        }
    }

    /// Add one unit of an item.
    ///
    /// A new line is created with a quantity of one if the id is not yet in the
    /// cart. Otherwise the existing line's quantity is incremented; the unit
    /// price and name given on the first add are kept.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the descriptor is invalid, or the quantity or
    /// grand total would overflow. The cart is left unchanged in that case.
    pub fn add(&mut self, item: ItemDescriptor<'a>) -> Result<&LineItem<'a>, CartError> {
        if let Err(err) = self
            .validate(&item)
            .and_then(|()| self.ensure_total_fits(&item))
        {
            warn!(item_id = %item.id(), error = %err, "rejected cart item");

            return Err(err);
        }

        let was_empty = self.is_empty();
        let (id, name, unit_price) = item.into_parts();

        let line = match self.items.entry(id) {
            Entry::Occupied(entry) => {
                let line = entry.into_mut();

                let Some(quantity) = line.increment() else {
                    return Err(CartError::QuantityOverflow(line.id().clone()));
                };

                debug!(item_id = %line.id(), quantity = quantity.get(), "incremented cart line");

                line
            }
            Entry::Vacant(entry) => {
                let line = LineItem::new(entry.key().clone(), name, unit_price);

                debug!(item_id = %line.id(), unit_price = %line.unit_price(), "added cart line");

                entry.insert(line)
            }
        };

        if was_empty {
            debug!(from = %CartState::Empty, to = %CartState::NonEmpty, "cart state changed");
        }

        Ok(&*line)
    }

    /// Remove a line entirely, whatever its quantity.
    ///
    /// Returns the removed line, or `None` if no line had this id.
    pub fn remove(&mut self, id: &str) -> Option<LineItem<'a>> {
        let Some(line) = self.items.shift_remove(id) else {
            trace!(item_id = id, "remove of unknown item ignored");

            return None;
        };

        debug!(item_id = id, quantity = line.quantity().get(), "removed cart line");

        if self.is_empty() {
            debug!(from = %CartState::NonEmpty, to = %CartState::Empty, "cart state changed");
        }

        Some(line)
    }

    /// Remove every line, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();

        self.items.clear();

        if removed > 0 {
            debug!(removed, "cleared cart");
            debug!(from = %CartState::NonEmpty, to = %CartState::Empty, "cart state changed");
        }

        removed
    }

    /// Check if a line with this id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Get a line by its id.
    pub fn get(&self, id: &str) -> Option<&LineItem<'a>> {
        self.items.get(id)
    }

    /// Get the quantity of a line, or `None` if it is not in the cart.
    pub fn quantity_of(&self, id: &str) -> Option<NonZeroU32> {
        self.get(id).map(LineItem::quantity)
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.items.values()
    }

    /// Calculate the sum of all line totals; zero in the cart currency when empty.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if a line total overflows.
    pub fn grand_total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(self.items.values(), self.currency)
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the macro-state of the cart.
    #[must_use]
    pub fn state(&self) -> CartState {
        CartState::from_len(self.items.len())
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn validate(&self, item: &ItemDescriptor<'_>) -> Result<(), CartError> {
        if item.id().is_empty() {
            return Err(CartError::InvalidItem);
        }

        let item_currency = item.unit_price().currency();

        if item_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                item.id().clone(),
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if item.unit_price().to_minor_units() < 0 {
            return Err(CartError::NegativePrice(item.id().clone()));
        }

        Ok(())
    }

    /// One more unit adds its unit price to the grand total. Prices are never
    /// negative, so every line total stays below a grand total that fits.
    fn ensure_total_fits(&self, item: &ItemDescriptor<'a>) -> Result<(), CartError> {
        let unit_price = self
            .items
            .get(item.id().as_str())
            .map_or(item.unit_price(), LineItem::unit_price);

        self.grand_total()
            .ok()
            .and_then(|total| {
                total
                    .to_minor_units()
                    .checked_add(unit_price.to_minor_units())
            })
            .map(|_total| ())
            .ok_or_else(|| CartError::TotalOverflow(item.id().clone()))
    }
}

impl<'c, 'a> IntoIterator for &'c Cart<'a> {
    type Item = &'c LineItem<'a>;
    type IntoIter = indexmap::map::Values<'c, ItemId, LineItem<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}
