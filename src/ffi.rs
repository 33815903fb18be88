//! C ABI for cross-language hosts.
//!
//! Only plain-old-data crosses the boundary: `f64` scalars, the `#[repr(C)]`
//! [`BsModel`] and an `i32` discriminant for the option side (0 = call,
//! 1 = put). Every pricing function returns a status code and writes the price
//! through `out_price` only on success.

use crate::error::PricingError;
use crate::models::bs::{bs_call, bs_prem, BsModel, OptionType};

pub const OPTCALC_OK: i32 = 0;
pub const OPTCALC_INVALID_TIME: i32 = 1;
pub const OPTCALC_INVALID_SIDE: i32 = 2;
pub const OPTCALC_NULL_OUTPUT: i32 = 3;

fn status_of(err: PricingError) -> i32 {
    match err {
        PricingError::InvalidTimeToExpiration { .. } => OPTCALC_INVALID_TIME,
        PricingError::InvalidOptionSide { .. } => OPTCALC_INVALID_SIDE,
    }
}

/// # Safety
///
/// `out_price` must be non-null and valid for a single aligned `f64` write.
unsafe fn write_result(result: crate::error::Result<f64>, out_price: *mut f64) -> i32 {
    match result {
        Ok(price) => {
            *out_price = price;
            OPTCALC_OK
        }
        Err(err) => status_of(err),
    }
}

#[no_mangle]
pub extern "C" fn optcalc_bs_model_new(spot: f64, vol: f64) -> BsModel {
    BsModel::new(spot, vol)
}

/// Direct Black-Scholes call price.
///
/// # Safety
///
/// `out_price` must be null or valid for a single aligned `f64` write.
#[no_mangle]
pub unsafe extern "C" fn optcalc_bs_call(
    spot: f64,
    strike: f64,
    vol: f64,
    rate: f64,
    time: f64,
    out_price: *mut f64,
) -> i32 {
    if out_price.is_null() {
        return OPTCALC_NULL_OUTPUT;
    }
    // SAFETY: non-null checked above; validity for writes is the caller's contract.
    unsafe { write_result(bs_call(spot, strike, vol, rate, time), out_price) }
}

/// Model premium for the side given by `side` (0 = call, 1 = put).
///
/// # Safety
///
/// `out_price` must be null or valid for a single aligned `f64` write.
#[no_mangle]
pub unsafe extern "C" fn optcalc_bs_prem(
    model: BsModel,
    strike: f64,
    rate: f64,
    time: f64,
    side: i32,
    out_price: *mut f64,
) -> i32 {
    if out_price.is_null() {
        return OPTCALC_NULL_OUTPUT;
    }
    let result =
        OptionType::try_from(side).and_then(|side| bs_prem(model, strike, rate, time, side));
    // SAFETY: non-null checked above; validity for writes is the caller's contract.
    unsafe { write_result(result, out_price) }
}
