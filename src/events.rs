//! Cart Events

use crate::items::{ItemDescriptor, ItemId};

/// A user-initiated event forwarded by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent<'a> {
    /// Add one unit of an item, e.g. from a catalog "add to cart" button.
    Add(ItemDescriptor<'a>),

    /// Remove a whole line, e.g. from its "remove" button.
    Remove(ItemId),

    /// Remove every line, from the "remove all" control.
    RemoveAll,
}

impl CartEvent<'_> {
    /// Short name of the event, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            CartEvent::Add(_) => "add",
            CartEvent::Remove(_) => "remove",
            CartEvent::RemoveAll => "remove_all",
        }
    }
}
