//! Cart View
//!
//! A render model derived from a [`Cart`] on demand. Renderers read it after
//! every mutation; nothing here is stored back into the cart.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{cart::Cart, pricing::TotalPriceError, state::CartState};

/// Message shown when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Label of the bulk-remove control.
pub const REMOVE_ALL_LABEL: &str = "[Remove all]";

/// Errors that can occur while building or writing a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A line or grand total could not be computed.
    #[error(transparent)]
    Total(#[from] TotalPriceError),

    /// The view could not be written out.
    #[error("Failed to write cart view: {0}")]
    Io(#[from] io::Error),
}

/// Render model for a single line in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    /// Item id, used as the remove target.
    pub id: String,

    /// Display name; falls back to the id.
    pub name: String,

    /// Number of units.
    pub quantity: u32,

    /// Price of one unit.
    pub unit_price: String,

    /// Unit price times quantity.
    pub line_total: String,
}

/// Render model for the whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartViewModel {
    /// Lines in insertion order.
    pub lines: Vec<LineView>,

    /// Grand total.
    pub total: String,

    /// Macro-state the flags below were derived from.
    pub state: CartState,

    /// Whether the empty-cart message is shown.
    pub empty_message_visible: bool,

    /// Whether the remove-all control is shown.
    pub remove_all_visible: bool,
}

impl CartViewModel {
    /// Project the current contents of a cart.
    ///
    /// # Errors
    ///
    /// Returns a `ViewError` if a line total or the grand total overflows.
    pub fn from_cart(cart: &Cart<'_>) -> Result<Self, ViewError> {
        let lines = cart
            .iter()
            .map(|line| -> Result<LineView, TotalPriceError> {
                Ok(LineView {
                    id: line.id().to_string(),
                    name: line
                        .name()
                        .map_or_else(|| line.id().to_string(), str::to_string),
                    quantity: line.quantity().get(),
                    unit_price: line.unit_price().to_string(),
                    line_total: line.line_total()?.to_string(),
                })
            })
            .collect::<Result<Vec<_>, TotalPriceError>>()?;

        let state = cart.state();

        Ok(Self {
            lines,
            total: cart.grand_total()?.to_string(),
            state,
            empty_message_visible: state.empty_message_visible(),
            remove_all_visible: state.remove_all_visible(),
        })
    }

    /// Writes the view as a text table.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ViewError> {
        if self.empty_message_visible {
            writeln!(out, "{EMPTY_CART_MESSAGE}")?;
        } else {
            writeln!(out, "\n{}", self.table())?;
        }

        writeln!(out, " Total: {}", self.total)?;

        if self.remove_all_visible {
            writeln!(out, " {REMOVE_ALL_LABEL}")?;
        }

        Ok(())
    }

    fn table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Qty", "Price", "Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                line.quantity.to_string(),
                line.unit_price.clone(),
                line.line_total.clone(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..5), Alignment::right());

        table.to_string()
    }
}
