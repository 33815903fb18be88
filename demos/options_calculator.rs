// demos/options_calculator.rs

//! Black-Scholes options calculator walkthrough
//!
//! This demo shows how to:
//! 1. Price a call directly from raw inputs
//! 2. Price call and put premiums from a `BsModel`
//! 3. Check put-call parity
//! 4. Run a batch of scenarios (optionally loaded from a TOML file)
//! 5. Observe the typed failure for a negative time to expiration
//!
//! Set `RUST_LOG=debug` to see the engine's own events.

use anyhow::Result;
use optcalc_lib::{
    bs_call, bs_prem, default_configs, run_scenarios, BsModel, OptionType, ScenarioConfig,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("=== Black-Scholes Options Calculator ===");

    let spot = 100.0; // Current stock price
    let strike = 105.0; // Strike price
    let vol = 0.25; // Volatility (25%)
    let rate = 0.05; // Risk-free rate (5%)
    let time = 0.25; // Time to expiration (3 months)

    println!("\n--- Using bs_call ---");
    let call_price = bs_call(spot, strike, vol, rate, time)?;
    println!("Call option price: ${:.4}", call_price);

    println!("\n--- Using bs_prem with BsModel ---");
    let model = BsModel::new(spot, vol);
    let call_premium = bs_prem(model, strike, rate, time, OptionType::Call)?;
    let put_premium = bs_prem(model, strike, rate, time, OptionType::Put)?;
    println!("Call premium: ${:.4}", call_premium);
    println!("Put premium: ${:.4}", put_premium);

    let parity = call_premium - put_premium;
    let expected_parity = spot - strike * (-rate * time).exp();
    println!("\nCall-Put Parity Check:");
    println!("  Call - Put = {:.4}", parity);
    println!("  Expected   = {:.4}", expected_parity);
    println!("  Difference = {:.6}", (parity - expected_parity).abs());

    println!("\n--- Testing with different parameters ---");
    let config = match std::env::args().nth(1) {
        Some(path) => ScenarioConfig::from_path(path)?,
        None => default_configs::demo(),
    };
    let results = run_scenarios(&config)?;

    println!(
        "{:<18} {:>8} {:>8} {:>6} {:>6} {:>6} {:>10} {:>10}",
        "Scenario", "Spot", "Strike", "Vol%", "Rate%", "Years", "Call", "Put"
    );
    println!("{}", "-".repeat(80));
    for r in &results {
        println!(
            "{:<18} {:>8.2} {:>8.2} {:>6.1} {:>6.1} {:>6.2} {:>10.4} {:>10.4}",
            r.name,
            r.spot,
            r.strike,
            r.vol * 100.0,
            r.rate * 100.0,
            r.time,
            r.call,
            r.put
        );
    }

    println!("\n=== Negative time to expiration ===");
    match bs_prem(model, strike, rate, -1.0, OptionType::Call) {
        Ok(price) => println!("Unexpected price: {}", price),
        Err(e) => {
            tracing::error!(error = %e, "pricing rejected");
            println!("Error calculating options: {}", e);
        }
    }

    Ok(())
}
