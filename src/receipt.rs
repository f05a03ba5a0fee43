//! Receipt

use std::io;

use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    view::{CART_TITLE, EMPTY_CART_TEXT},
};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// An amount does not fit in a signed money value.
    #[error("Amount {0} is too large for a receipt")]
    AmountOverflow(u64),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Writing the receipt failed.
    #[error("Failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// A single line of a receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine<'a> {
    /// Product name
    pub name: String,

    /// Product description, empty when none was entered
    pub description: String,

    /// Price of one unit
    pub unit_price: Money<'a, Currency>,

    /// Number of units
    pub quantity: u32,

    /// Unit price multiplied by quantity
    pub line_total: Money<'a, Currency>,
}

/// Priced snapshot of a cart.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    lines: Vec<ReceiptLine<'a>>,
    total: Money<'a, Currency>,
}

impl<'a> Receipt<'a> {
    /// Price every cart line in `currency`.
    ///
    /// # Errors
    ///
    /// - [`ReceiptError::AmountOverflow`]: a price or line total exceeds [`i64::MAX`].
    /// - [`ReceiptError::Money`]: money arithmetic failed.
    pub fn from_cart(cart: &Cart, currency: &'a Currency) -> Result<Self, ReceiptError> {
        let lines = cart
            .iter()
            .map(|item| -> Result<ReceiptLine<'a>, ReceiptError> {
                Ok(ReceiptLine {
                    name: item.name().to_string(),
                    description: item.description().unwrap_or_default().to_string(),
                    unit_price: money(item.unit_price(), currency)?,
                    quantity: item.quantity().get(),
                    line_total: money(item.line_total(), currency)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total = lines
            .iter()
            .try_fold(Money::from_major(0, currency), |acc, line| {
                acc.add(line.line_total)
            })?;

        Ok(Self { lines, total })
    }

    /// Priced lines in cart order.
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Sum of every line total.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Writes the receipt as a table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Io`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        writeln!(out, "{CART_TITLE}")?;

        if self.lines.is_empty() {
            writeln!(out, "{EMPTY_CART_TEXT}")?;
        } else {
            writeln!(out, "{}", self.table())?;
        }

        writeln!(out, "Precio total: {}", self.total)?;

        Ok(())
    }

    fn table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["", "Producto", "Descripción", "Precio", "Cantidad", "Subtotal"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                line.description.clone(),
                line.unit_price.to_string(),
                line.quantity.to_string(),
                line.line_total.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Alignment::center());
        table.modify(Columns::new(3..6), Alignment::right());

        table.to_string()
    }
}

fn money(amount: u64, currency: &Currency) -> Result<Money<'_, Currency>, ReceiptError> {
    let major = i64::try_from(amount).map_err(|_err| ReceiptError::AmountOverflow(amount))?;

    Ok(Money::from_major(major, currency))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::items::{CartItem, Quantity};

    use super::*;

    fn test_cart() -> Cart {
        [
            CartItem::new("Apple", "Green", 10).with_quantity(Quantity::new(2).unwrap_or_default()),
            CartItem::new("Pear", "", 5).with_quantity(Quantity::new(3).unwrap_or_default()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn from_cart_prices_lines() -> TestResult {
        let receipt = Receipt::from_cart(&test_cart(), iso::USD)?;

        let first = receipt.lines().first().ok_or("expected a line")?;

        assert_eq!(receipt.lines().len(), 2);
        assert_eq!(first.unit_price, Money::from_major(10, iso::USD));
        assert_eq!(first.line_total, Money::from_major(20, iso::USD));
        assert_eq!(first.quantity, 2);
        assert_eq!(receipt.total(), Money::from_major(35, iso::USD));

        Ok(())
    }

    #[test]
    fn from_empty_cart_totals_zero() -> TestResult {
        let receipt = Receipt::from_cart(&Cart::new(), iso::EUR)?;

        assert!(receipt.lines().is_empty());
        assert_eq!(receipt.total(), Money::from_major(0, iso::EUR));

        Ok(())
    }

    #[test]
    fn from_cart_rejects_unrepresentable_amounts() {
        let cart: Cart = [CartItem::new("Gold", "", u64::MAX)].into_iter().collect();

        let result = Receipt::from_cart(&cart, iso::USD);

        assert!(matches!(result, Err(ReceiptError::AmountOverflow(u64::MAX))));
    }

    #[test]
    fn write_to_renders_lines_and_total() -> TestResult {
        let receipt = Receipt::from_cart(&test_cart(), iso::USD)?;
        let mut out = Vec::new();

        receipt.write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Apple"), "missing first line:\n{text}");
        assert!(text.contains("Green"), "missing description:\n{text}");
        assert!(text.contains("Pear"), "missing second line:\n{text}");
        assert!(
            text.contains(&format!("Precio total: {}", receipt.total())),
            "missing total:\n{text}"
        );

        Ok(())
    }

    #[test]
    fn write_to_empty_cart() -> TestResult {
        let receipt = Receipt::from_cart(&Cart::new(), iso::USD)?;
        let mut out = Vec::new();

        receipt.write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains(EMPTY_CART_TEXT), "missing empty text:\n{text}");

        Ok(())
    }
}
