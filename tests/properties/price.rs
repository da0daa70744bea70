//! Property tests for price normalization.

use proptest::prelude::*;

use vitrine::normalize_price;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Comma-decimal and dot-decimal spellings load identically.
    #[test]
    fn property_comma_equals_dot(cents in 0u64..100_000_000) {
        let comma = format!("{},{:02}", cents / 100, cents % 100);
        let dot = format!("{}.{:02}", cents / 100, cents % 100);

        let expected = cents as f64 / 100.0;
        prop_assert!((normalize_price(&comma) - expected).abs() < 1e-9);
        prop_assert_eq!(normalize_price(&comma), normalize_price(&dot));
    }

    /// PROPERTY: Normalization never panics and never produces a negative
    /// or non-finite price.
    #[test]
    fn property_result_is_always_a_valid_price(raw in "(?s).{0,64}") {
        let price = normalize_price(&raw);
        prop_assert!(price.is_finite());
        prop_assert!(price >= 0.0);
    }
}
