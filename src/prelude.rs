//! Carrito prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartItemKey},
    fixtures::{FixtureError, SessionFixture},
    form::ProductForm,
    items::{CartItem, Quantity},
    receipt::{Receipt, ReceiptError, ReceiptLine},
    sanitize::{sanitize_description, sanitize_name, sanitize_price},
    state::{CartState, Event},
    view::{CartLineView, CartViewModel, FormView, format_amount},
};
