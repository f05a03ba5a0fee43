//! Items

use std::num::NonZeroU32;

/// Number of units of a cart item. Never zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Creates a quantity, or `None` for zero.
    pub fn new(units: u32) -> Option<Self> {
        NonZeroU32::new(units).map(Self)
    }

    /// Number of units.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// One more unit, or `None` at [`u32::MAX`].
    #[must_use]
    pub fn incremented(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// One fewer unit, or `None` when this is the last unit.
    #[must_use]
    pub fn decremented(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

/// One product line in the cart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartItem {
    name: String,
    description: Option<String>,
    unit_price: u64,
    quantity: Quantity,
}

impl CartItem {
    /// Creates a single-unit item. An empty description is stored as none.
    pub fn new(name: impl Into<String>, description: impl Into<String>, unit_price: u64) -> Self {
        let description = description.into();

        Self {
            name: name.into(),
            description: (!description.is_empty()).then_some(description),
            unit_price,
            quantity: Quantity::ONE,
        }
    }

    /// Sets the quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product description, if one was entered
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Price of a single unit
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Number of units
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price multiplied by quantity, saturating at [`u64::MAX`].
    pub fn line_total(&self) -> u64 {
        self.unit_price
            .saturating_mul(u64::from(self.quantity.get()))
    }

    /// Returns `false` when already at the largest quantity.
    pub(crate) fn increment(&mut self) -> bool {
        match self.quantity.incremented() {
            Some(quantity) => {
                self.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Returns `false` when already at a single unit.
    pub(crate) fn decrement(&mut self) -> bool {
        match self.quantity.decremented() {
            Some(quantity) => {
                self.quantity = quantity;
                true
            }
            None => false,
        }
    }
}
