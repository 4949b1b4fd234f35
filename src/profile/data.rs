//! Retirement profile: everything a single projection needs from the user

use serde::{Deserialize, Serialize};

use crate::assumptions::{ContributionScheme, LifestyleTier};
use crate::error::{PlanError, Result};

/// Upper bound accepted for any age field
pub const MAX_AGE: u32 = 150;

fn default_haircut() -> f64 {
    1.0
}

/// Input record for one projection. Built once per calculation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementProfile {
    /// Current age in years
    pub current_age: u32,

    /// Planned retirement age in years
    pub retirement_age: u32,

    /// Expected age at death in years
    pub life_expectancy: u32,

    /// Actual monthly salary
    pub monthly_salary: f64,

    /// Years already insured under Labor Insurance
    pub accumulated_insurance_years: f64,

    /// Current Labor Pension individual account balance
    pub contribution_account_balance: f64,

    /// Voluntary employee contribution, percentage points (0-6)
    pub self_contribution_rate: f64,

    /// Expected annual nominal return on the pension account, percent
    pub expected_annual_return: f64,

    /// Savings held outside both government schemes
    pub other_savings: f64,

    /// Expected annual inflation, percent
    pub inflation_rate: f64,

    /// Confidence that Labor Insurance pays in full, 0..=1
    #[serde(default = "default_haircut")]
    pub statutory_pension_haircut: f64,

    /// City or county used for the cost-of-living lookup
    pub region: String,

    /// Desired standard of living
    pub lifestyle: LifestyleTier,
}

impl RetirementProfile {
    /// Years left until retirement; zero once retirement age is reached
    pub fn years_to_retire(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    /// Years of payout; at least one so annuitization never divides by zero
    pub fn payout_years(&self) -> u32 {
        self.life_expectancy.saturating_sub(self.retirement_age).max(1)
    }

    /// Whether the age fields describe a meaningful plan
    /// (`current_age < retirement_age < life_expectancy`)
    pub fn has_ordered_ages(&self) -> bool {
        self.current_age < self.retirement_age && self.retirement_age < self.life_expectancy
    }

    /// Check numeric domains. Out-of-order ages are not an error; they are
    /// clamped by `years_to_retire` and `payout_years`.
    pub fn validate(&self, contribution: &ContributionScheme) -> Result<()> {
        plausible_age("current_age", self.current_age)?;
        plausible_age("retirement_age", self.retirement_age)?;
        plausible_age("life_expectancy", self.life_expectancy)?;

        non_negative("monthly_salary", self.monthly_salary)?;
        non_negative("accumulated_insurance_years", self.accumulated_insurance_years)?;
        non_negative("contribution_account_balance", self.contribution_account_balance)?;
        non_negative("other_savings", self.other_savings)?;
        rate_percent("expected_annual_return", self.expected_annual_return)?;
        rate_percent("inflation_rate", self.inflation_rate)?;

        let rate = self.self_contribution_rate;
        if !rate.is_finite() || rate < 0.0 || rate > contribution.max_self_rate_pct {
            return Err(PlanError::InvalidInput {
                field: "self_contribution_rate",
                value: rate,
                reason: "must be between 0 and the scheme maximum",
            });
        }

        let haircut = self.statutory_pension_haircut;
        if !haircut.is_finite() || !(0.0..=1.0).contains(&haircut) {
            return Err(PlanError::InvalidInput {
                field: "statutory_pension_haircut",
                value: haircut,
                reason: "must be between 0 and 1",
            });
        }

        Ok(())
    }
}

fn plausible_age(field: &'static str, age: u32) -> Result<()> {
    if age > MAX_AGE {
        return Err(PlanError::InvalidInput {
            field,
            value: age as f64,
            reason: "age is above the supported maximum",
        });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 || value.is_infinite() {
        return Err(PlanError::InvalidInput {
            field,
            value,
            reason: "must be a finite, non-negative number",
        });
    }
    Ok(())
}

fn rate_percent(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= -100.0 {
        return Err(PlanError::InvalidInput {
            field,
            value,
            reason: "must be a finite percentage above -100",
        });
    }
    Ok(())
}
