//! Carrito
//!
//! State model for a product entry form and shopping cart: sanitized form
//! input, an ordered cart with stable item keys, a derived total, and the
//! render model a front end draws from.

pub mod cart;
pub mod fixtures;
pub mod form;
pub mod items;
pub mod prelude;
pub mod receipt;
pub mod sanitize;
pub mod state;
pub mod view;
