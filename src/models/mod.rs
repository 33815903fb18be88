pub mod bs;

/// Utility functions shared by pricing callers
pub mod utils {
    /// Present value of one unit paid at `time`: `e^(-rate·time)`
    pub fn discount_factor(rate: f64, time: f64) -> f64 {
        (-rate * time).exp()
    }

    /// Right-hand side of put-call parity: `spot - strike·e^(-rate·time)`
    pub fn parity_forward_value(spot: f64, strike: f64, rate: f64, time: f64) -> f64 {
        spot - strike * discount_factor(rate, time)
    }
}
