//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    catalog::{Catalog, CatalogError},
    commands::{Command, CommandError},
    events::CartEvent,
    items::{ItemDescriptor, ItemId},
    line_items::LineItem,
    pricing::TotalPriceError,
    products::{Product, ProductKey},
    state::CartState,
    view::{CartViewModel, LineView, ViewError},
    widget::{CartWidget, WidgetError},
};
