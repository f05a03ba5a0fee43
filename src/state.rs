//! View state and events
//!
//! [`CartState`] is everything the view owns. Each user interaction is an
//! [`Event`], applied synchronously with [`CartState::apply`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{cart::Cart, form::ProductForm};

/// A discrete user interaction with the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// The name input changed to the given raw value.
    NameInput(String),

    /// The description input changed to the given raw value.
    DescriptionInput(String),

    /// The price input changed to the given raw value.
    PriceInput(String),

    /// The add button was pressed.
    Submit,

    /// The "+" button of the cart row at this position was pressed.
    Increment(usize),

    /// The "-" button of the cart row at this position was pressed.
    Decrement(usize),

    /// The remove button of the cart row at this position was pressed.
    Remove(usize),
}

/// Form and cart owned by the view.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    form: ProductForm,
    cart: Cart,
}

impl CartState {
    /// Create a state with an empty form and an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with an empty form around an existing cart.
    pub fn with_cart(cart: Cart) -> Self {
        Self {
            form: ProductForm::new(),
            cart,
        }
    }

    /// The product entry form.
    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Apply a single event. Returns whether anything changed.
    pub fn apply(&mut self, event: Event) -> bool {
        debug!(?event, "applying event");

        let changed = match event {
            Event::NameInput(raw) => self.update_form(|form| form.set_name(&raw)),
            Event::DescriptionInput(raw) => self.update_form(|form| form.set_description(&raw)),
            Event::PriceInput(raw) => self.update_form(|form| form.set_price(&raw)),
            Event::Submit => self.form.submit(&mut self.cart).is_some(),
            Event::Increment(index) => self.cart.increment(index),
            Event::Decrement(index) => self.cart.decrement(index),
            Event::Remove(index) => self.cart.remove(index).is_some(),
        };

        if !changed {
            trace!("event left state unchanged");
        }

        changed
    }

    /// Apply events in order. Returns how many of them changed the state.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = Event>) -> usize {
        events
            .into_iter()
            .map(|event| self.apply(event))
            .filter(|&changed| changed)
            .count()
    }

    fn update_form(&mut self, edit: impl FnOnce(&mut ProductForm)) -> bool {
        let before = self.form.clone();
        edit(&mut self.form);

        before != self.form
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::items::{CartItem, Quantity};

    use super::*;

    fn apple_and_bread() -> CartState {
        let mut state = CartState::new();

        state.apply_all([
            Event::NameInput("Apple".to_string()),
            Event::PriceInput("10".to_string()),
            Event::Submit,
            Event::NameInput("Bread".to_string()),
            Event::PriceInput("4".to_string()),
            Event::Submit,
        ]);

        state
    }

    #[test]
    fn input_events_store_sanitized_values() {
        let mut state = CartState::new();

        state.apply(Event::NameInput("Kiwi 2".to_string()));
        state.apply(Event::DescriptionInput("Fuzzy!".to_string()));
        state.apply(Event::PriceInput("x7".to_string()));

        assert_eq!(state.form().name(), "Kiwi");
        assert_eq!(state.form().description(), "Fuzzy");
        assert_eq!(state.form().price(), 7);
    }

    #[test]
    fn input_event_with_no_effect_reports_unchanged() {
        let mut state = CartState::new();

        assert!(state.apply(Event::NameInput("Kiwi".to_string())));
        assert!(!state.apply(Event::NameInput("Kiwi1".to_string())));
        assert!(!state.apply(Event::PriceInput("abc".to_string())));
    }

    #[test]
    fn submit_on_incomplete_form_is_unchanged() {
        let mut state = CartState::new();

        assert!(!state.apply(Event::Submit));
        assert!(state.cart().is_empty());
    }

    #[test]
    fn increment_then_remove_first_leaves_second() -> TestResult {
        let mut state = apple_and_bread();

        assert!(state.apply(Event::Increment(0)));
        assert!(state.apply(Event::Remove(0)));

        let remaining = state.cart().get(0).ok_or("expected an item")?;

        assert_eq!(state.cart().len(), 1);
        assert_eq!(remaining.name(), "Bread");
        assert_eq!(remaining.quantity().get(), 1);

        Ok(())
    }

    #[test]
    fn decrement_at_one_is_unchanged() {
        let mut state = apple_and_bread();

        assert!(!state.apply(Event::Decrement(1)));
        assert_eq!(state.cart().get(1).map(|item| item.quantity().get()), Some(1));
    }

    #[test]
    fn increment_at_max_quantity_is_unchanged() {
        let max = Quantity::new(u32::MAX).unwrap_or_default();
        let mut state =
            CartState::with_cart([CartItem::new("Rice", "", 1).with_quantity(max)].into_iter().collect());

        assert!(!state.apply(Event::Increment(0)));
        assert_eq!(state.cart().get(0).map(CartItem::quantity), Some(max));
    }

    #[test]
    fn apply_all_counts_changes() {
        let mut state = apple_and_bread();

        let changed = state.apply_all([
            Event::Increment(0),
            Event::Decrement(0),
            Event::Decrement(0),
            Event::Remove(9),
        ]);

        assert_eq!(changed, 2);
    }

    #[test]
    fn events_deserialize_from_yaml() -> TestResult {
        let yaml = r#"
- name_input: "Apple"
- description_input: "Red"
- price_input: "10"
- submit
- increment: 0
- decrement: 0
- remove: 0
"#;

        let events: Vec<Event> = serde_norway::with::singleton_map_recursive::deserialize(
            serde_norway::Deserializer::from_str(yaml),
        )?;

        assert_eq!(
            events,
            [
                Event::NameInput("Apple".to_string()),
                Event::DescriptionInput("Red".to_string()),
                Event::PriceInput("10".to_string()),
                Event::Submit,
                Event::Increment(0),
                Event::Decrement(0),
                Event::Remove(0),
            ]
        );

        Ok(())
    }
}
