//! Property-based tests using proptest.
//!
//! These check pricing invariants over random valid inputs rather than a few
//! hand-picked quotes.

use optcalc_lib::models::bs::kernel::norm_cdf;
use optcalc_lib::{bs_call, bs_prem, BsModel, OptionType, PricingError};
use proptest::prelude::*;

proptest! {
    /// Call prices are never negative for positive vol and time.
    #[test]
    fn call_price_is_non_negative(
        spot in 1.0_f64..500.0,
        strike in 1.0_f64..500.0,
        vol in 0.01_f64..2.0,
        rate in -0.05_f64..0.2,
        time in 0.01_f64..5.0,
    ) {
        let price = bs_call(spot, strike, vol, rate, time).unwrap();
        prop_assert!(price >= 0.0, "negative call {} for S={} K={}", price, spot, strike);
    }

    /// Put prices are never negative for positive vol and time.
    #[test]
    fn put_price_is_non_negative(
        spot in 1.0_f64..500.0,
        strike in 1.0_f64..500.0,
        vol in 0.01_f64..3.0,
        rate in -0.05_f64..0.2,
        time in 0.01_f64..10.0,
    ) {
        let model = BsModel::new(spot, vol);
        let price = bs_prem(model, strike, rate, time, OptionType::Put).unwrap();
        prop_assert!(price >= 0.0, "negative put {} for S={} K={}", price, spot, strike);
    }

    /// C - P = S - K·e^(-rT) within 1e-6.
    #[test]
    fn put_call_parity(
        spot in 1.0_f64..500.0,
        strike in 1.0_f64..500.0,
        vol in 0.01_f64..2.0,
        rate in -0.05_f64..0.2,
        time in 0.01_f64..5.0,
    ) {
        let model = BsModel::new(spot, vol);
        let call = bs_prem(model, strike, rate, time, OptionType::Call).unwrap();
        let put = bs_prem(model, strike, rate, time, OptionType::Put).unwrap();
        let expected = spot - strike * (-rate * time).exp();
        prop_assert!(
            ((call - put) - expected).abs() < 1e-6,
            "C - P = {} but S - K·df = {}",
            call - put,
            expected
        );
    }

    /// Call premium rises with spot, everything else fixed.
    #[test]
    fn call_is_monotone_in_spot(
        spot in 10.0_f64..200.0,
        bump in 0.5_f64..20.0,
        vol in 0.05_f64..1.0,
        time in 0.05_f64..3.0,
    ) {
        let low = bs_call(spot, 100.0, vol, 0.02, time).unwrap();
        let high = bs_call(spot + bump, 100.0, vol, 0.02, time).unwrap();
        prop_assert!(high >= low);
    }

    /// N(-x) + N(x) = 1.
    #[test]
    fn cdf_symmetry(x in -8.0_f64..8.0) {
        prop_assert!((norm_cdf(-x) + norm_cdf(x) - 1.0).abs() < 1e-9);
    }

    /// Any non-positive time fails with the typed error on both sides.
    #[test]
    fn non_positive_time_is_rejected(time in -10.0_f64..=0.0) {
        let model = BsModel::new(100.0, 0.2);
        for side in OptionType::ALL {
            let is_invalid_time = matches!(
                bs_prem(model, 100.0, 0.05, time, side),
                Err(PricingError::InvalidTimeToExpiration { .. })
            );
            prop_assert!(is_invalid_time);
        }
    }
}
