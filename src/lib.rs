//! # Optcalc-Lib: Black-Scholes Pricing for European Options
//!
//! `optcalc-lib` is a small pricing engine for European calls and puts under the
//! Black-Scholes model. It is meant to be embedded: the Rust API is a handful of
//! pure functions over plain values, and the same surface is exported through a
//! C ABI so that other languages can link against the `cdylib`.
//!
//! ## Core Features
//!
//! - **Direct call pricing**: [`bs_call`] from spot, strike, volatility, rate and time
//! - **Model-based premiums**: [`bs_prem`] for either [`OptionType`] given a [`BsModel`]
//! - **Typed failures**: a non-positive time to expiration returns
//!   [`PricingError::InvalidTimeToExpiration`] instead of NaN
//! - **Scenario runs**: TOML-configured batches with put-call parity checks and CSV export
//!
//! ## Quick Start
//!
//! ```rust
//! use optcalc_lib::{bs_call, bs_prem, BsModel, OptionType};
//!
//! let call = bs_call(100.0, 105.0, 0.25, 0.05, 0.25)?;
//!
//! let model = BsModel::new(100.0, 0.25);
//! let put = bs_prem(model, 105.0, 0.05, 0.25, OptionType::Put)?;
//!
//! assert!(call > 0.0 && put > 0.0);
//! # Ok::<(), optcalc_lib::PricingError>(())
//! ```
//!
//! ## Validation
//!
//! Only the time to expiration is checked. Non-positive spot, strike or
//! volatility are priced as given and may yield NaN or infinity.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod ffi;
pub mod models;
#[cfg(feature = "serde")]
pub mod scenario;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, Result};
pub use models::bs::{bs_call, bs_prem, BsModel, OptionType};

#[cfg(feature = "serde")]
pub use scenario::{
    config::ScenarioConfig,
    pipeline::{evaluate_scenario, run_scenarios, write_results_csv, write_results_csv_path},
    types::{Scenario, ScenarioResult},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured scenario batches.
///
/// - [`demo()`]: the calculator walkthrough (base quote plus ITM, OTM and ATM calls)
/// - [`parity_only()`]: a single at-the-money parity check
#[cfg(feature = "serde")]
pub mod default_configs {
    use crate::scenario::config::ScenarioConfig;

    /// Base quote (100/105, 25% vol, 5% rate, 3 months) followed by in-, out- and
    /// at-the-money scenarios.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optcalc_lib::{default_configs, run_scenarios};
    ///
    /// let results = run_scenarios(&default_configs::demo())?;
    /// assert_eq!(results.len(), 4);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn demo() -> ScenarioConfig {
        ScenarioConfig::demo()
    }

    pub fn parity_only() -> ScenarioConfig {
        ScenarioConfig::parity_only()
    }
}
