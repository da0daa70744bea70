//! Property tests for the cart state machine.

use proptest::prelude::*;

use vitrine::{Cart, CartEvent, MIN_ORDER_QTY};

const REFS: [&str; 5] = ["A1", "B2", "C3", "D4", "E5"];

fn ops() -> impl Strategy<Value = Vec<(usize, u32)>> {
    proptest::collection::vec((0usize..REFS.len(), 0u32..12), 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No reachable cart state holds a quantity below the minimum.
    #[test]
    fn property_cart_never_stores_below_minimum(ops in ops()) {
        let mut cart = Cart::new();
        for (r, q) in ops {
            let _ = cart.set_quantity(REFS[r], q);
            for (_, quantity) in cart.iter() {
                prop_assert!(quantity >= MIN_ORDER_QTY);
            }
        }
    }

    /// PROPERTY: The store behaves like the naive reject/remove/insert model.
    #[test]
    fn property_cart_matches_naive_model(ops in ops()) {
        let mut cart = Cart::new();
        let mut model: Vec<(usize, u32)> = Vec::new();

        for (r, q) in ops {
            let event = cart.set_quantity(REFS[r], q);
            let position = model.iter().position(|(m, _)| *m == r);

            match (q, position) {
                (0, Some(i)) => {
                    model.remove(i);
                    prop_assert_eq!(event, CartEvent::Removed);
                }
                (0, None) => prop_assert_eq!(event, CartEvent::Noop),
                (q, _) if q < MIN_ORDER_QTY => {
                    prop_assert_eq!(event, CartEvent::BelowMinimum { min: MIN_ORDER_QTY });
                }
                (q, Some(i)) => {
                    let previous = model[i].1;
                    model[i].1 = q;
                    prop_assert_eq!(event, CartEvent::Set { previous: Some(previous) });
                }
                (q, None) => {
                    model.push((r, q));
                    prop_assert_eq!(event, CartEvent::Set { previous: None });
                }
            }

            let store: Vec<(usize, u32)> = cart
                .iter()
                .map(|(reference, quantity)| {
                    (REFS.iter().position(|r| *r == reference).unwrap(), quantity)
                })
                .collect();
            prop_assert_eq!(&store, &model);
        }
    }

    /// PROPERTY: `total_pieces` is always the sum over `iter`.
    #[test]
    fn property_total_pieces_is_sum(ops in ops()) {
        let mut cart = Cart::new();
        for (r, q) in ops {
            let _ = cart.set_quantity(REFS[r], q);
        }

        let sum: u32 = cart.iter().map(|(_, q)| q).sum();
        prop_assert_eq!(cart.total_pieces(), sum);
    }

    /// PROPERTY: `clear` always lands back on the all-absent state.
    #[test]
    fn property_clear_resets_everything(ops in ops()) {
        let mut cart = Cart::new();
        for (r, q) in ops {
            let _ = cart.set_quantity(REFS[r], q);
        }

        cart.clear();

        prop_assert!(cart.is_empty());
        for reference in REFS {
            prop_assert_eq!(cart.get_quantity(reference), 0);
        }
    }
}
