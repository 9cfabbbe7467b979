//! Trolley
//!
//! Trolley is the state core of a shopping cart widget: it owns the cart's line
//! items, applies add/remove/clear operations, and derives the running total and
//! the visibility of the empty-cart message and the remove-all control.

pub mod cart;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod events;
pub mod items;
pub mod line_items;
pub mod logging;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod state;
pub mod view;
pub mod widget;
