//! In-memory shopping cart.
//!
//! Product cards add to this cart. Lines are kept in insertion order and
//! priced from the product snapshot taken when the line was created.

use rust_decimal::Decimal;
use thiserror::Error;

use vitrine_core::{CurrencyCode, Price, Product, ProductId};

/// Errors from cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Produto indisponível: {0}")]
    Unavailable(String),

    #[error("Estoque insuficiente para {name} (disponível: {stock})")]
    OutOfStock { name: String, stock: u32 },
}

/// A product and how many units of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Shopping cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    currency: CurrencyCode,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Empty cart priced in `currency`.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            currency,
            lines: Vec::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Unavailable` for inactive products and
    /// `CartError::OutOfStock` when another unit would exceed stock.
    pub fn add(&mut self, product: &Product) -> Result<u32, CartError> {
        if !product.active {
            return Err(CartError::Unavailable(product.name.clone()));
        }

        let out_of_stock = || CartError::OutOfStock {
            name: product.name.clone(),
            stock: product.stock,
        };

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            if line.quantity >= product.stock {
                return Err(out_of_stock());
            }
            line.quantity += 1;
            // Keep the freshest snapshot (stock and price may have moved).
            line.product = product.clone();
            return Ok(line.quantity);
        }

        if product.stock == 0 {
            return Err(out_of_stock());
        }
        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        Ok(1)
    }

    /// Drop the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of all line totals in the cart currency.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let amount = self.lines.iter().map(CartLine::line_total).sum();
        Price::new(amount, self.currency)
    }
}
