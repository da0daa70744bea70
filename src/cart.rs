//! Session-scoped cart store
//!
//! The cart is an insertion-ordered mapping from product reference to
//! requested quantity. It enforces one invariant: every stored entry has
//! `quantity >= MIN_ORDER_QTY`. Quantities below the minimum are rejected
//! outright (never clamped), and quantity zero removes the entry.
//!
//! The cart lives for one interactive session and is never persisted.

use indexmap::IndexMap;

/// Wholesale business rule: minimum units per line item
pub const MIN_ORDER_QTY: u32 = 3;

/// Outcome of a `set_quantity` transition, used by the presentation layer
/// to decide what feedback to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// Entry inserted or overwritten; `previous` distinguishes the two
    Set { previous: Option<u32> },
    /// Entry removed via quantity zero
    Removed,
    /// Quantity in `1..MIN_ORDER_QTY` rejected, state unchanged
    BelowMinimum { min: u32 },
    /// Quantity zero for an absent reference, nothing to do
    Noop,
}

/// Keyed quantity store with insertion-ordered iteration
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: IndexMap<String, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the single mutating transition of the store.
    ///
    /// State machine per reference: `ABSENT` and `PRESENT(q >= MIN_ORDER_QTY)`.
    /// Zero removes, below-minimum is rejected without touching state, and
    /// anything at or above the minimum inserts or overwrites.
    pub fn set_quantity(&mut self, reference: &str, quantity: u32) -> CartEvent {
        if quantity == 0 {
            return match self.entries.shift_remove(reference) {
                Some(_) => CartEvent::Removed,
                None => CartEvent::Noop,
            };
        }

        if quantity < MIN_ORDER_QTY {
            return CartEvent::BelowMinimum { min: MIN_ORDER_QTY };
        }

        let previous = self.entries.insert(reference.to_string(), quantity);
        CartEvent::Set { previous }
    }

    /// Current quantity for a reference, or zero if absent. No side effects.
    pub fn get_quantity(&self, reference: &str) -> u32 {
        self.entries.get(reference).copied().unwrap_or(0)
    }

    /// Empty the store unconditionally
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(r, q)| (r.as_str(), *q))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all requested quantities
    pub fn total_pieces(&self) -> u32 {
        self.entries.values().sum()
    }
}
