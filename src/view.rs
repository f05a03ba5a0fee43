//! Render model
//!
//! Display-ready strings for the form and cart panels, built fresh from a
//! [`CartState`] on every render.

use rusty_money::iso::Currency;

use crate::{cart::CartItemKey, state::CartState};

/// Form panel title
pub const FORM_TITLE: &str = "Agregar Producto";

/// Name field label
pub const NAME_LABEL: &str = "Nombre";

/// Description field label
pub const DESCRIPTION_LABEL: &str = "Descripción";

/// Price field label
pub const PRICE_LABEL: &str = "Precio";

/// Submit button label
pub const SUBMIT_LABEL: &str = "Agregar";

/// Cart panel title
pub const CART_TITLE: &str = "Carrito";

/// Shown instead of the line list when the cart is empty
pub const EMPTY_CART_TEXT: &str = "No hay productos en el carrito";

/// Increment button label
pub const INCREMENT_LABEL: &str = "+";

/// Decrement button label
pub const DECREMENT_LABEL: &str = "-";

/// Remove button label
pub const REMOVE_LABEL: &str = "Eliminar";

/// Relative path of the cart image, bundled next to the page.
pub const CART_IMAGE_PATH: &str = "carrito.svg";

/// Format a whole-unit amount as the currency symbol followed by the number.
pub fn format_amount(amount: u64, currency: &Currency) -> String {
    format!("{}{amount}", currency.symbol)
}

/// Render model for the product entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Sanitized name
    pub name: String,

    /// Sanitized description
    pub description: String,

    /// Price input contents, blank while the price is zero
    pub price: String,

    /// Whether the submit button is enabled
    pub can_submit: bool,
}

/// Render model for a cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// Stable key of the item.
    pub key: CartItemKey,

    /// Position in the cart at render time.
    pub index: usize,

    /// Product name
    pub name: String,

    /// Description line, omitted when empty
    pub description: Option<String>,

    /// e.g. `Precio: $10`
    pub price_text: String,

    /// e.g. `Cantidad: 2`
    pub quantity_text: String,
}

/// Render model for the whole view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartViewModel {
    /// Form panel
    pub form: FormView,

    /// Cart rows in display order
    pub lines: Vec<CartLineView>,

    /// e.g. `Precio total: $35`
    pub total_text: String,
}

impl CartViewModel {
    /// Build the render model for `state`.
    pub fn build(state: &CartState, currency: &Currency) -> Self {
        let form = state.form();
        let cart = state.cart();

        let lines = cart
            .entries()
            .enumerate()
            .map(|(index, (key, item))| CartLineView {
                key,
                index,
                name: item.name().to_string(),
                description: item.description().map(str::to_string),
                price_text: format!("Precio: {}", format_amount(item.unit_price(), currency)),
                quantity_text: format!("Cantidad: {}", item.quantity().get()),
            })
            .collect();

        Self {
            form: FormView {
                name: form.name().to_string(),
                description: form.description().to_string(),
                price: form.price_display(),
                can_submit: form.can_submit(),
            },
            lines,
            total_text: format!("Precio total: {}", format_amount(cart.total(), currency)),
        }
    }

    /// Whether the empty-cart text should be shown.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
