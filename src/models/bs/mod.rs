// Black-Scholes pricing of European calls and puts.
//
// Only the time to expiration is validated. Spot, strike and volatility are
// passed through to the kernel untouched, so out-of-domain values come back as
// NaN or infinity rather than as an error.

pub mod kernel;

use crate::error::{PricingError, Result};
use crate::models::utils::discount_factor;
use kernel::{d1, norm_cdf};

/// Underlying state needed to price an option: spot price and annualized volatility.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BsModel {
    /// Current price of the underlying
    pub spot: f64,
    /// Annualized volatility (as decimal, e.g., 0.25 for 25%)
    pub vol: f64,
}

impl BsModel {
    pub fn new(spot: f64, vol: f64) -> Self {
        Self { spot, vol }
    }

    /// Premium of a European option on this underlying. See [`bs_prem`].
    pub fn premium(&self, strike: f64, rate: f64, time: f64, side: OptionType) -> Result<f64> {
        bs_prem(*self, strike, rate, time, side)
    }
}

/// Side of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// All sides in ordinal order.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    pub fn values() -> &'static [OptionType] {
        &Self::ALL
    }

    /// Stable discriminant used for display and across the C ABI.
    pub fn ordinal(self) -> i32 {
        match self {
            OptionType::Call => 0,
            OptionType::Put => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl TryFrom<i32> for OptionType {
    type Error = PricingError;

    fn try_from(ordinal: i32) -> Result<Self> {
        match ordinal {
            0 => Ok(OptionType::Call),
            1 => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionSide { ordinal }),
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price of a European call option from raw inputs.
///
/// `spot·N(d1) - strike·e^(-rate·time)·N(d2)`
///
/// # Errors
///
/// Returns [`PricingError::InvalidTimeToExpiration`] if `time` is not strictly positive.
pub fn bs_call(spot: f64, strike: f64, vol: f64, rate: f64, time: f64) -> Result<f64> {
    validate_time(time)?;
    Ok(call_premium(spot, strike, vol, rate, time))
}

/// Premium of a European option of either side for the given model.
///
/// - Call: `spot·N(d1) - strike·e^(-rate·time)·N(d2)`
/// - Put: `strike·e^(-rate·time)·N(-d2) - spot·N(-d1)`
///
/// # Errors
///
/// Returns [`PricingError::InvalidTimeToExpiration`] if `time` is not strictly positive.
///
/// # Example
///
/// ```rust
/// use optcalc_lib::{bs_prem, BsModel, OptionType};
///
/// let model = BsModel::new(100.0, 0.20);
/// let call = bs_prem(model, 100.0, 0.05, 1.0, OptionType::Call)?;
/// let put = bs_prem(model, 100.0, 0.05, 1.0, OptionType::Put)?;
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let rhs = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((call - put - rhs).abs() < 1e-9);
/// # Ok::<(), optcalc_lib::PricingError>(())
/// ```
pub fn bs_prem(
    model: BsModel,
    strike: f64,
    rate: f64,
    time: f64,
    side: OptionType,
) -> Result<f64> {
    validate_time(time)?;
    let price = match side {
        OptionType::Call => call_premium(model.spot, strike, model.vol, rate, time),
        OptionType::Put => put_premium(model.spot, strike, model.vol, rate, time),
    };
    Ok(price)
}

fn validate_time(time: f64) -> Result<()> {
    if time <= 0.0 || time.is_nan() {
        tracing::debug!(time, "rejecting time to expiration");
        return Err(PricingError::InvalidTimeToExpiration { time });
    }
    Ok(())
}

// d1 is evaluated once and d2 derived from it, so both sides see identical terms.
fn d_terms(spot: f64, strike: f64, vol: f64, rate: f64, time: f64) -> (f64, f64) {
    let d1 = d1(spot, strike, vol, rate, time);
    (d1, d1 - vol * time.sqrt())
}

fn call_premium(spot: f64, strike: f64, vol: f64, rate: f64, time: f64) -> f64 {
    let (d1, d2) = d_terms(spot, strike, vol, rate, time);
    let df = discount_factor(rate, time);
    floor_at_zero(spot * norm_cdf(d1) - strike * df * norm_cdf(d2))
}

fn put_premium(spot: f64, strike: f64, vol: f64, rate: f64, time: f64) -> f64 {
    let (d1, d2) = d_terms(spot, strike, vol, rate, time);
    let df = discount_factor(rate, time);
    floor_at_zero(strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1))
}

// Removes cancellation noise below zero; NaN compares false and passes through.
fn floor_at_zero(price: f64) -> f64 {
    if price < 0.0 {
        0.0
    } else {
        price
    }
}
