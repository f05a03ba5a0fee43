//! Product entry form

use tracing::{debug, trace};

use crate::{
    cart::{Cart, CartItemKey},
    items::CartItem,
    sanitize::{sanitize_description, sanitize_name, sanitize_price},
};

/// Field values of the product entry form, always stored sanitized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    name: String,
    description: String,
    price: u64,
}

impl ProductForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the name with the letters of `raw`.
    pub fn set_name(&mut self, raw: &str) {
        self.name = sanitize_name(raw);
    }

    /// Replace the description with the letters and spaces of `raw`.
    pub fn set_description(&mut self, raw: &str) {
        self.description = sanitize_description(raw);
    }

    /// Replace the price with the digits of `raw`, `0` if there are none.
    pub fn set_price(&mut self, raw: &str) {
        self.price = sanitize_price(raw);
    }

    /// Current name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current price
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Price as shown in the input: blank while zero.
    pub fn price_display(&self) -> String {
        if self.price == 0 {
            String::new()
        } else {
            self.price.to_string()
        }
    }

    /// Whether the form may be submitted: a name and a non-zero price are required.
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty() && self.price != 0
    }

    /// Append the entered product to `cart` as a single unit and clear the form.
    ///
    /// Does nothing and returns `None` while [`can_submit`](Self::can_submit) is false.
    pub fn submit(&mut self, cart: &mut Cart) -> Option<CartItemKey> {
        if !self.can_submit() {
            trace!(name = %self.name, price = self.price, "submit ignored, form incomplete");
            return None;
        }

        let ProductForm {
            name,
            description,
            price,
        } = std::mem::take(self);

        let key = cart.push(CartItem::new(name, description, price));

        debug!(?key, "submitted product form");

        Some(key)
    }
}
