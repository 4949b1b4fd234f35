//! Scheme parameters: statutory annuity formulas, contribution account
//! rates, and the planning assumptions used for the gap solver
//!
//! Regulatory changes are parameter updates here (or in
//! `scheme_parameters.csv`), never edits to the formulas themselves.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::projection::DEFAULT_TARGET_RETURN_PCT;

/// Labor Insurance old-age annuity parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutoryScheme {
    /// Accrual per insured year for formula A
    pub formula_a_accrual: f64,

    /// Flat monthly amount added by formula A
    pub formula_a_flat: f64,

    /// Accrual per insured year for formula B
    pub formula_b_accrual: f64,

    /// Age at which no early/late adjustment applies
    pub normal_retirement_age: u32,

    /// Adjustment per year of early or deferred retirement
    pub adjustment_per_year: f64,

    /// Maximum number of years counted for the adjustment, either direction
    pub max_adjustment_years: u32,
}

impl Default for StatutoryScheme {
    fn default() -> Self {
        Self {
            formula_a_accrual: 0.00775,
            formula_a_flat: 3_000.0,
            formula_b_accrual: 0.0155,
            normal_retirement_age: 65,
            adjustment_per_year: 0.04,
            max_adjustment_years: 5,
        }
    }
}

/// Labor Pension individual account parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionScheme {
    /// Mandatory employer contribution as a fraction of wages
    pub employer_rate: f64,

    /// Maximum voluntary employee contribution in percentage points
    pub max_self_rate_pct: f64,

    /// Top of the monthly contribution wage table
    pub wage_ceiling: f64,
}

impl Default for ContributionScheme {
    fn default() -> Self {
        Self {
            employer_rate: 0.06,
            max_self_rate_pct: 6.0,
            wage_ceiling: 150_000.0,
        }
    }
}

/// Fixed assumptions behind the residual-gap and target-contribution steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningRates {
    /// Annual growth of savings held outside both schemes, percent
    pub savings_growth_pct: f64,

    /// Annual return assumed when solving for the required contribution, percent
    pub target_return_pct: f64,

    /// Time-deposit rate used for the comparison schedule, percent
    pub deposit_rate_pct: f64,
}

impl Default for PlanningRates {
    fn default() -> Self {
        Self {
            savings_growth_pct: 5.0,
            target_return_pct: DEFAULT_TARGET_RETURN_PCT,
            deposit_rate_pct: 1.7,
        }
    }
}

/// Apply `key,value` overrides loaded from `scheme_parameters.csv`
pub fn apply_overrides(
    overrides: &HashMap<String, f64>,
    statutory: &mut StatutoryScheme,
    contribution: &mut ContributionScheme,
    planning: &mut PlanningRates,
) -> Result<()> {
    for (key, &value) in overrides {
        match key.as_str() {
            "formula_a_accrual" => statutory.formula_a_accrual = value,
            "formula_a_flat" => statutory.formula_a_flat = value,
            "formula_b_accrual" => statutory.formula_b_accrual = value,
            "normal_retirement_age" => statutory.normal_retirement_age = whole_years(key, value)?,
            "adjustment_per_year" => statutory.adjustment_per_year = value,
            "max_adjustment_years" => statutory.max_adjustment_years = whole_years(key, value)?,
            "employer_rate" => contribution.employer_rate = value,
            "max_self_rate_pct" => contribution.max_self_rate_pct = value,
            "wage_ceiling" => contribution.wage_ceiling = value,
            "savings_growth_pct" => planning.savings_growth_pct = value,
            "target_return_pct" => planning.target_return_pct = value,
            "deposit_rate_pct" => planning.deposit_rate_pct = value,
            other => return Err(PlanError::UnknownParameter(other.to_string())),
        }
    }
    Ok(())
}

fn whole_years(key: &str, value: f64) -> Result<u32> {
    if value.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&value) {
        return Err(PlanError::Parse(format!(
            "{} must be a whole, non-negative number of years, got {}",
            key, value
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let mut statutory = StatutoryScheme::default();
        let mut contribution = ContributionScheme::default();
        let mut planning = PlanningRates::default();

        let overrides = HashMap::from([
            ("formula_b_accrual".to_string(), 0.016),
            ("normal_retirement_age".to_string(), 66.0),
            ("target_return_pct".to_string(), 5.0),
        ]);
        apply_overrides(&overrides, &mut statutory, &mut contribution, &mut planning).unwrap();

        assert_eq!(statutory.formula_b_accrual, 0.016);
        assert_eq!(statutory.normal_retirement_age, 66);
        assert_eq!(planning.target_return_pct, 5.0);
        assert_eq!(contribution, ContributionScheme::default());
    }

    #[test]
    fn test_unknown_override_rejected() {
        let overrides = HashMap::from([("rollup_rate".to_string(), 0.1)]);
        let err = apply_overrides(
            &overrides,
            &mut StatutoryScheme::default(),
            &mut ContributionScheme::default(),
            &mut PlanningRates::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::UnknownParameter(_)));
    }

    #[test]
    fn test_year_overrides_must_be_whole() {
        for (key, value) in [
            ("normal_retirement_age", -1.0),
            ("normal_retirement_age", 65.5),
            ("max_adjustment_years", f64::NAN),
        ] {
            let mut statutory = StatutoryScheme::default();
            let overrides = HashMap::from([(key.to_string(), value)]);
            let err = apply_overrides(
                &overrides,
                &mut statutory,
                &mut ContributionScheme::default(),
                &mut PlanningRates::default(),
            )
            .unwrap_err();
            assert!(matches!(err, PlanError::Parse(_)), "{} = {}", key, value);
            assert_eq!(statutory, StatutoryScheme::default());
        }
    }
}
