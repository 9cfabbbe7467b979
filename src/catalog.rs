//! Catalog
//!
//! Products the presentation layer can offer, loaded from YAML:
//!
//! ```yaml
//! products:
//!   apple:
//!     name: Apple
//!     price: 0.75 GBP
//! ```

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    items::ItemDescriptor,
    products::{Product, ProductKey},
};

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Price below zero
    #[error("Negative price: {0}")]
    NegativePrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// The catalog defines no products, so its currency is unknown
    #[error("Catalog has no products; currency unknown")]
    NoProducts,

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
struct ProductFixture {
    name: String,

    /// Price, e.g. "2.99 GBP"
    price: String,
}

/// Product catalog in a single currency.
#[derive(Debug)]
pub struct Catalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
    keys: FxHashMap<String, ProductKey>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price is invalid or negative,
    /// prices use more than one currency, or no products are defined.
    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;

        let mut products = SlotMap::with_key();
        let mut keys = FxHashMap::default();
        let mut currency: Option<&'static Currency> = None;

        for (key, product_fixture) in fixture.products {
            let (minor_units, product_currency) = parse_price(&product_fixture.price)?;

            if let Some(existing) = currency {
                if existing != product_currency {
                    return Err(CatalogError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        product_currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                currency = Some(product_currency);
            }

            let product = Product {
                key: key.clone(),
                name: product_fixture.name,
                price: Money::from_minor(minor_units, product_currency),
            };

            keys.insert(key, products.insert(product));
        }

        let currency = currency.ok_or(CatalogError::NoProducts)?;

        debug!(
            products = products.len(),
            currency = currency.iso_alpha_code,
            "loaded catalog"
        );

        Ok(Self {
            products,
            keys,
            currency,
        })
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or any error from [`Catalog::from_yaml`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Look up a product by its catalog key.
    pub fn product(&self, key: &str) -> Option<&Product<'a>> {
        self.keys
            .get(key)
            .and_then(|product_key| self.products.get(*product_key))
    }

    /// Describe a product for adding to a cart.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if no product has this key.
    pub fn descriptor(&self, key: &str) -> Result<ItemDescriptor<'a>, CatalogError> {
        self.product(key)
            .map(Product::descriptor)
            .ok_or_else(|| CatalogError::ProductNotFound(key.to_string()))
    }

    /// Catalog keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products. Always `false` for a loaded catalog.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency all products are priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal number or is negative, or if the currency
/// code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CatalogError::NegativePrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(CatalogError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
