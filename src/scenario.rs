//! Scenario runner for efficient batch projections
//!
//! Pre-loads assumptions once, then allows running many projections with
//! different profiles or what-if overrides without re-reading CSV files.

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::profile::RetirementProfile;
use crate::projection::{PensionProjection, PlanningEngine};
use crate::Assumptions;

/// What-if adjustments applied on top of a base profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioOverride {
    pub label: String,
    #[serde(default)]
    pub retirement_age: Option<u32>,
    #[serde(default)]
    pub expected_annual_return: Option<f64>,
    #[serde(default)]
    pub statutory_pension_haircut: Option<f64>,
    #[serde(default)]
    pub inflation_rate: Option<f64>,
    #[serde(default)]
    pub self_contribution_rate: Option<f64>,
}

impl ScenarioOverride {
    pub fn apply(&self, profile: &RetirementProfile) -> RetirementProfile {
        let mut adjusted = profile.clone();
        if let Some(age) = self.retirement_age {
            adjusted.retirement_age = age;
        }
        if let Some(rate) = self.expected_annual_return {
            adjusted.expected_annual_return = rate;
        }
        if let Some(haircut) = self.statutory_pension_haircut {
            adjusted.statutory_pension_haircut = haircut;
        }
        if let Some(inflation) = self.inflation_rate {
            adjusted.inflation_rate = inflation;
        }
        if let Some(rate) = self.self_contribution_rate {
            adjusted.self_contribution_rate = rate;
        }
        adjusted
    }
}

/// Pre-loaded scenario runner for efficient batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv_path(Path::new("data/assumptions"))?;
///
/// let overrides: Vec<_> = [0.5, 0.8, 1.0]
///     .iter()
///     .map(|&h| ScenarioOverride { statutory_pension_haircut: Some(h), ..Default::default() })
///     .collect();
/// let results = runner.run_scenarios(&profile, &overrides);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: PlanningEngine,
}

impl ScenarioRunner {
    /// Create runner with default in-memory assumptions
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default_taiwan())
    }

    /// Create runner from specific assumptions directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?))
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            engine: PlanningEngine::new(assumptions),
        }
    }

    /// Run a single projection
    pub fn run(&self, profile: &RetirementProfile) -> Result<PensionProjection> {
        self.engine.compute(profile)
    }

    /// Run projections for many profiles in parallel, preserving input order
    pub fn run_batch(&self, profiles: &[RetirementProfile]) -> Vec<Result<PensionProjection>> {
        profiles
            .par_iter()
            .map(|profile| self.engine.compute(profile))
            .collect()
    }

    /// Run multiple what-if scenarios for a single profile
    pub fn run_scenarios(
        &self,
        profile: &RetirementProfile,
        overrides: &[ScenarioOverride],
    ) -> Vec<(String, Result<PensionProjection>)> {
        overrides
            .iter()
            .map(|o| (o.label.clone(), self.engine.compute(&o.apply(profile))))
            .collect()
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        self.engine.assumptions()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::sample_profile;

    #[test]
    fn test_scenario_runner_haircuts() {
        let runner = ScenarioRunner::new();
        let profile = sample_profile();

        let overrides: Vec<_> = [0.5, 0.8, 1.0]
            .iter()
            .map(|&haircut| ScenarioOverride {
                label: format!("haircut {:.0}%", haircut * 100.0),
                statutory_pension_haircut: Some(haircut),
                ..Default::default()
            })
            .collect();

        let results = runner.run_scenarios(&profile, &overrides);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "haircut 50%");

        // Lower confidence in the statutory annuity means a bigger contribution
        let first = results[0].1.as_ref().unwrap();
        let last = results[2].1.as_ref().unwrap();
        assert!(first.required_monthly_contribution > last.required_monthly_contribution);
    }

    #[test]
    fn test_batch_preserves_order_and_errors() {
        let runner = ScenarioRunner::new();
        let good = sample_profile();
        let mut bad = sample_profile();
        bad.region = "Nowhere".to_string();
        let mut younger = sample_profile();
        younger.current_age = 30;

        let results = runner.run_batch(&[good, bad, younger]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().years_to_retire, 35);
    }

    #[test]
    fn test_runner_from_csv_matches_defaults() {
        let from_csv = ScenarioRunner::from_csv_path(Path::new("data/assumptions")).unwrap();
        let defaults = ScenarioRunner::new();
        let profile = sample_profile();

        let a = from_csv.run(&profile).unwrap();
        let b = defaults.run(&profile).unwrap();
        assert_eq!(a.required_monthly_contribution, b.required_monthly_contribution);
        assert_eq!(from_csv.assumptions().statutory, defaults.assumptions().statutory);

        assert!(ScenarioRunner::from_csv_path(Path::new("data/does_not_exist")).is_err());
    }

    #[test]
    fn test_later_retirement_raises_annuity() {
        let runner = ScenarioRunner::new();
        let profile = sample_profile();
        let overrides = [
            ScenarioOverride { label: "60".into(), retirement_age: Some(60), ..Default::default() },
            ScenarioOverride { label: "70".into(), retirement_age: Some(70), ..Default::default() },
        ];

        let results = runner.run_scenarios(&profile, &overrides);
        let early = results[0].1.as_ref().unwrap();
        let late = results[1].1.as_ref().unwrap();
        assert!(late.statutory.adjustment_factor > early.statutory.adjustment_factor);
        assert!(late.statutory_monthly_benefit > early.statutory_monthly_benefit);
    }
}
