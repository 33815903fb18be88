// Numerical building blocks of the Black-Scholes formula. Callers are expected
// to pass finite inputs with `vol > 0` and `time > 0`; guarding is done by the
// pricing functions in the parent module.

use std::f64::consts::FRAC_1_SQRT_2;

/// Standard normal cumulative distribution function.
///
/// Evaluated as `0.5 * erfc(-x / sqrt(2))`, which keeps full relative
/// precision in the lower tail where `1 + erf(..)` would cancel.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
}

/// First standardized term: `(ln(S/K) + (r + σ²/2)·T) / (σ·√T)`.
pub fn d1(spot: f64, strike: f64, vol: f64, rate: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Second standardized term: `d1 - σ·√T`.
pub fn d2(spot: f64, strike: f64, vol: f64, rate: f64, time: f64) -> f64 {
    d1(spot, strike, vol, rate, time) - vol * time.sqrt()
}
