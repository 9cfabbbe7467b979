//! Products

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;

use crate::items::ItemDescriptor;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Catalog key, also used as the cart item id
    pub key: String,

    /// Product name
    pub name: String,

    /// Product price
    pub price: Money<'a, Currency>,
}

impl<'a> Product<'a> {
    /// Describe this product for adding to a cart.
    pub fn descriptor(&self) -> ItemDescriptor<'a> {
        ItemDescriptor::new(self.key.as_str(), self.price).with_name(self.name.as_str())
    }
}
