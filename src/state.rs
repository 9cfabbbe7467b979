//! Cart State

use std::fmt;

/// Observable macro-state of a cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CartState {
    /// The cart holds no lines.
    Empty,

    /// The cart holds at least one line.
    NonEmpty,
}

impl CartState {
    /// Classifies a cart by its number of lines.
    pub fn from_len(len: usize) -> Self {
        if len == 0 {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Whether the "your cart is empty" message should be shown.
    pub fn empty_message_visible(self) -> bool {
        self == CartState::Empty
    }

    /// Whether the "remove all" control should be shown.
    pub fn remove_all_visible(self) -> bool {
        self == CartState::NonEmpty
    }
}

impl fmt::Display for CartState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartState::Empty => f.write_str("empty"),
            CartState::NonEmpty => f.write_str("non-empty"),
        }
    }
}
