//! Property tests for half-even rounding and the digits it produces.
//!
//! 1. Exact halves round to the even neighbour.
//! 2. Rounding twice at the same precision changes nothing.
//! 3. The rounded value stays within half a unit of the input.
//! 4. Grouping only inserts separators.

use ldml_number_format::{LocaleSymbols, compile, format, round_half_even};
use proptest::prelude::*;

proptest! {
    #[test]
    fn halves_round_to_even(k in -1_000_000i64..1_000_000) {
        let value = k as f64 + 0.5;
        let rounded = round_half_even(value, 0);
        prop_assert_eq!(rounded % 2.0, 0.0);
        prop_assert_eq!((rounded - value).abs(), 0.5);
    }

    #[test]
    fn formatted_halves_are_even(k in 0u32..1_000_000) {
        let spec = compile("0").unwrap();
        let value = f64::from(k) + 0.5;
        let formatted = format(&spec, &LocaleSymbols::default(), value);
        let digits: u64 = formatted.parse().unwrap();
        prop_assert_eq!(digits % 2, 0);
        prop_assert!(digits == u64::from(k) || digits == u64::from(k) + 1);
    }

    #[test]
    fn rounding_is_idempotent(x in 0.0f64..1e9, places in 0i32..=6) {
        let once = round_half_even(x, places);
        prop_assert_eq!(round_half_even(once, places), once);
    }

    #[test]
    fn rounding_stays_within_half_unit(x in -1e9f64..1e9, places in 0i32..=6) {
        let rounded = round_half_even(x, places);
        let half_unit = 0.5 / 10f64.powi(places);
        prop_assert!((rounded - x).abs() <= half_unit + 1e-6);
    }

    #[test]
    fn grouping_only_inserts_separators(n in any::<u32>()) {
        let spec = compile("#,##0").unwrap();
        let formatted = format(&spec, &LocaleSymbols::default(), f64::from(n));
        prop_assert_eq!(formatted.replace(',', ""), n.to_string());
        for group in formatted.split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }
}
