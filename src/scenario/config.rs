use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::scenario::types::Scenario;

/// Scenario batch loaded from TOML
///
/// ```toml
/// parity_tolerance = 1e-6
///
/// [[scenarios]]
/// name = "at-the-money"
/// spot = 100.0
/// strike = 100.0
/// vol = 0.15
/// rate = 0.02
/// time = 1.0
/// ```
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    /// Largest acceptable `|C - P - (S - K·e^(-rT))|` before a warning is logged
    #[serde(default = "default_parity_tolerance")]
    pub parity_tolerance: f64,

    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            parity_tolerance: default_parity_tolerance(),
            scenarios: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse scenario config")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario config {}", path.display()))?;
        Self::from_toml_str(&raw)
    }

    /// The calculator walkthrough: a base quote plus in-, out- and at-the-money calls
    pub fn demo() -> Self {
        Self {
            parity_tolerance: default_parity_tolerance(),
            scenarios: vec![
                Scenario::new("base", 100.0, 105.0, 0.25, 0.05, 0.25),
                Scenario::new("in-the-money", 110.0, 100.0, 0.20, 0.03, 0.5),
                Scenario::new("out-of-the-money", 90.0, 100.0, 0.30, 0.04, 0.25),
                Scenario::new("at-the-money", 100.0, 100.0, 0.15, 0.02, 1.0),
            ],
        }
    }

    /// Single at-the-money quote used to check put-call parity
    pub fn parity_only() -> Self {
        Self {
            parity_tolerance: default_parity_tolerance(),
            scenarios: vec![Scenario::new("parity", 100.0, 100.0, 0.20, 0.05, 1.0)],
        }
    }
}

fn default_parity_tolerance() -> f64 {
    1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scenarios_and_defaults_tolerance() {
        let cfg = ScenarioConfig::from_toml_str(
            r#"
            [[scenarios]]
            name = "itm"
            spot = 110.0
            strike = 100.0
            vol = 0.2
            rate = 0.03
            time = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.parity_tolerance, 1e-6);
        assert_eq!(cfg.scenarios.len(), 1);
        assert_eq!(cfg.scenarios[0].name, "itm");
        assert_eq!(cfg.scenarios[0].model().spot, 110.0);
    }

    #[test]
    fn missing_field_is_an_error() {
        let err = ScenarioConfig::from_toml_str(
            r#"
            [[scenarios]]
            name = "broken"
            spot = 110.0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("scenario config"));
    }

    #[test]
    fn presets() {
        assert_eq!(ScenarioConfig::demo().scenarios.len(), 4);
        assert_eq!(ScenarioConfig::parity_only().scenarios.len(), 1);
        assert!(ScenarioConfig::default().scenarios.is_empty());
    }
}
