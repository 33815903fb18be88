//! Error types for the pricing engine.
//!
//! Only the time to expiration is validated. Non-positive spot, strike or
//! volatility are not rejected and surface as ordinary floating-point values
//! (NaN, infinity) in the returned price.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors raised by the pricing operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum PricingError {
    /// Time to expiration was zero, negative or NaN.
    #[error("invalid time to expiration: {time} (must be > 0 years)")]
    InvalidTimeToExpiration { time: f64 },

    /// An integer discriminant did not name an option side.
    #[error("invalid option side discriminant: {ordinal} (expected 0 = call or 1 = put)")]
    InvalidOptionSide { ordinal: i32 },
}
