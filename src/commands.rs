//! Commands
//!
//! Line-oriented commands used to drive a cart widget from a script or a
//! terminal.

use std::str::FromStr;

use thiserror::Error;

use crate::{
    catalog::Catalog,
    events::CartEvent,
    items::ItemId,
};

/// Command parsing and resolution errors.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    /// The command word was not recognised.
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// The command needs an argument that was not given.
    #[error("Command `{0}` needs an item id")]
    MissingArgument(&'static str),

    /// The command was given more arguments than it takes.
    #[error("Command `{0}` was given an unexpected argument")]
    UnexpectedArgument(&'static str),

    /// An `add` referenced a key missing from the catalog.
    #[error("Product not found: {0}")]
    UnknownProduct(String),
}

/// A single cart command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <key>`
    Add(String),

    /// `remove <id>`
    Remove(String),

    /// `clear` or `remove-all`
    Clear,

    /// `show`
    Show,
}

impl Command {
    /// Parse one line of a script. Blank lines and `#` comments yield `None`.
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the line is not a valid command.
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        line.parse().map(Some)
    }

    /// Turn the command into a widget event, resolving `add` keys in the catalog.
    ///
    /// Returns `None` for commands that only read the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownProduct`] if an `add` key is not in the catalog.
    pub fn to_event<'a>(
        &self,
        catalog: &Catalog<'a>,
    ) -> Result<Option<CartEvent<'a>>, CommandError> {
        match self {
            Command::Add(key) => catalog
                .product(key)
                .map(|product| Some(CartEvent::Add(product.descriptor())))
                .ok_or_else(|| CommandError::UnknownProduct(key.clone())),
            Command::Remove(id) => Ok(Some(CartEvent::Remove(ItemId::new(id.as_str())))),
            Command::Clear => Ok(Some(CartEvent::RemoveAll)),
            Command::Show => Ok(None),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().unwrap_or_default();
        let argument = words.next();
        let extra = words.next();

        match (command, argument, extra) {
            ("add", Some(key), None) => Ok(Command::Add(key.to_string())),
            ("add", None, _) => Err(CommandError::MissingArgument("add")),
            ("remove", Some(id), None) => Ok(Command::Remove(id.to_string())),
            ("remove", None, _) => Err(CommandError::MissingArgument("remove")),
            ("add", Some(_), Some(_)) => Err(CommandError::UnexpectedArgument("add")),
            ("remove", Some(_), Some(_)) => Err(CommandError::UnexpectedArgument("remove")),
            ("clear" | "remove-all", None, _) => Ok(Command::Clear),
            ("clear" | "remove-all", Some(_), _) => Err(CommandError::UnexpectedArgument("clear")),
            ("show", None, _) => Ok(Command::Show),
            ("show", Some(_), _) => Err(CommandError::UnexpectedArgument("show")),
            (other, _, _) => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
