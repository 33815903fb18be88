use serde::{Deserialize, Serialize};

use crate::models::bs::BsModel;

/// One set of market inputs to price on both sides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Label used in logs and reports
    pub name: String,
    /// Underlying asset price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Annualized volatility (as decimal)
    pub vol: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Time to expiration in years
    pub time: f64,
}

impl Scenario {
    pub fn new(name: &str, spot: f64, strike: f64, vol: f64, rate: f64, time: f64) -> Self {
        Self {
            name: name.to_string(),
            spot,
            strike,
            vol,
            rate,
            time,
        }
    }

    pub fn model(&self) -> BsModel {
        BsModel::new(self.spot, self.vol)
    }
}

/// Call and put premiums for a scenario together with the put-call parity check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub spot: f64,
    pub strike: f64,
    pub vol: f64,
    pub rate: f64,
    pub time: f64,
    /// Model call premium
    pub call: f64,
    /// Model put premium
    pub put: f64,
    /// `|(call - put) - (spot - strike·e^(-rate·time))|`
    pub parity_gap: f64,
}

impl ScenarioResult {
    pub fn parity_holds(&self, tolerance: f64) -> bool {
        self.parity_gap <= tolerance
    }
}
