//! Cart Widget
//!
//! Ties a [`Cart`] to the lifetime of the widget that displays it and routes
//! view events into it. After each event the widget pulls a fresh
//! [`CartViewModel`] from the cart; the cart itself never notifies anyone.

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    cart::{Cart, CartError},
    events::CartEvent,
    view::{CartViewModel, ViewError},
};

/// Errors raised while handling a widget event.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The cart rejected the event.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The view model could not be built.
    #[error(transparent)]
    View(#[from] ViewError),
}

/// A cart widget attached to a container.
#[derive(Debug)]
pub struct CartWidget<'a> {
    cart: Cart<'a>,
}

impl<'a> CartWidget<'a> {
    /// Attach a widget, starting with an empty cart.
    #[must_use]
    pub fn attach(currency: &'static Currency) -> Self {
        info!(currency = currency.iso_alpha_code, "cart widget attached");

        Self {
            cart: Cart::new(currency),
        }
    }

    /// Apply one event and return the refreshed view.
    ///
    /// # Errors
    ///
    /// Returns a `WidgetError` if the cart rejects the event or the view cannot
    /// be built. A rejected event leaves the cart unchanged.
    pub fn handle(&mut self, event: CartEvent<'a>) -> Result<CartViewModel, WidgetError> {
        let kind = event.kind();

        match event {
            CartEvent::Add(item) => {
                self.cart.add(item)?;
            }
            CartEvent::Remove(id) => {
                self.cart.remove(id.as_str());
            }
            CartEvent::RemoveAll => {
                self.cart.clear();
            }
        }

        debug!(event = kind, state = %self.cart.state(), lines = self.cart.len(), "handled cart event");

        Ok(self.render()?)
    }

    /// Build the view for the current cart contents.
    ///
    /// # Errors
    ///
    /// Returns a `ViewError` if a total overflows.
    pub fn render(&self) -> Result<CartViewModel, ViewError> {
        CartViewModel::from_cart(&self.cart)
    }

    /// The cart owned by this widget.
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Detach the widget, discarding its cart.
    pub fn detach(self) {
        info!(lines = self.cart.len(), "cart widget detached");
    }
}
