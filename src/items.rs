//! Items

use std::{borrow::Borrow, fmt};

use rusty_money::{Money, iso::Currency};

/// Opaque, caller-supplied identifier of a cart line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new item id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the id has no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Description of an item as handed to the cart by the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemDescriptor<'a> {
    id: ItemId,
    name: Option<String>,
    unit_price: Money<'a, Currency>,
}

impl<'a> ItemDescriptor<'a> {
    /// Creates a new descriptor with the given id and unit price.
    pub fn new(id: impl Into<ItemId>, unit_price: Money<'a, Currency>) -> Self {
        Self {
            id: id.into(),
            name: None,
            unit_price,
        }
    }

    /// Sets the display name of the item.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the item id
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the display name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the unit price
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    pub(crate) fn into_parts(self) -> (ItemId, Option<String>, Money<'a, Currency>) {
        (self.id, self.name, self.unit_price)
    }
}
