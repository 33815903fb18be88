use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::PricingError;
use crate::models::bs::{bs_prem, OptionType};
use crate::models::utils::parity_forward_value;
use crate::scenario::config::ScenarioConfig;
use crate::scenario::types::{Scenario, ScenarioResult};

/// Price both sides of a scenario and measure the put-call parity gap.
pub fn evaluate_scenario(scenario: &Scenario) -> Result<ScenarioResult, PricingError> {
    let model = scenario.model();
    let call = bs_prem(
        model,
        scenario.strike,
        scenario.rate,
        scenario.time,
        OptionType::Call,
    )?;
    let put = bs_prem(
        model,
        scenario.strike,
        scenario.rate,
        scenario.time,
        OptionType::Put,
    )?;

    let expected = parity_forward_value(
        scenario.spot,
        scenario.strike,
        scenario.rate,
        scenario.time,
    );

    Ok(ScenarioResult {
        name: scenario.name.clone(),
        spot: scenario.spot,
        strike: scenario.strike,
        vol: scenario.vol,
        rate: scenario.rate,
        time: scenario.time,
        call,
        put,
        parity_gap: ((call - put) - expected).abs(),
    })
}

/// Evaluate every scenario in order. The first failure aborts the run.
pub fn run_scenarios(config: &ScenarioConfig) -> Result<Vec<ScenarioResult>> {
    let mut results = Vec::with_capacity(config.scenarios.len());

    for scenario in &config.scenarios {
        let result = evaluate_scenario(scenario)
            .with_context(|| format!("scenario '{}' failed", scenario.name))?;

        tracing::info!(
            scenario = %result.name,
            call = result.call,
            put = result.put,
            parity_gap = result.parity_gap,
            "priced scenario"
        );
        if !result.parity_holds(config.parity_tolerance) {
            tracing::warn!(
                scenario = %result.name,
                parity_gap = result.parity_gap,
                tolerance = config.parity_tolerance,
                "put-call parity gap above tolerance"
            );
        }

        results.push(result);
    }

    Ok(results)
}

/// Write results as CSV with a header row.
pub fn write_results_csv<W: Write>(results: &[ScenarioResult], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for result in results {
        wtr.serialize(result)
            .with_context(|| format!("failed to write result '{}'", result.name))?;
    }
    wtr.flush().context("failed to flush csv writer")?;
    Ok(())
}

pub fn write_results_csv_path<P: AsRef<Path>>(results: &[ScenarioResult], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_results_csv(results, file)
}
