//! Labor Pension individual account: accumulation to retirement, then a
//! level monthly payout over the payout horizon

use serde::{Deserialize, Serialize};

use super::tvm::{monthly_rate, AnnuityCalculator};
use crate::assumptions::ContributionScheme;

/// Accumulated fund and the level payment it supports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountProjection {
    /// Monthly amount paid in (employer share plus voluntary top-up)
    pub monthly_contribution: f64,

    /// Existing balance grown to retirement
    pub future_value_balance: f64,

    /// Future value of ongoing contributions at retirement
    pub future_value_contributions: f64,

    /// Lump sum available at retirement
    pub total_fund_at_retirement: f64,

    /// Level monthly payment over the payout horizon
    pub monthly_payment: f64,
}

impl ContributionScheme {
    /// Project the account to retirement and annuitize it.
    ///
    /// The fund is assumed to keep earning `annual_return_pct` while it pays
    /// out. A zero return is valid and takes the undiscounted branches.
    pub fn project(
        &self,
        current_balance: f64,
        monthly_base: f64,
        self_rate_pct: f64,
        annual_return_pct: f64,
        years_to_retire: u32,
        payout_years: u32,
    ) -> AccountProjection {
        let r = monthly_rate(annual_return_pct);
        let n = years_to_retire * 12;
        let m = payout_years * 12;

        let future_value_balance = current_balance * AnnuityCalculator::growth_factor(r, n);

        let monthly_contribution = monthly_base * (self.employer_rate + self_rate_pct / 100.0);
        let future_value_contributions =
            monthly_contribution * AnnuityCalculator::fv_annuity_factor(r, n);

        let total_fund_at_retirement = future_value_balance + future_value_contributions;
        let monthly_payment = AnnuityCalculator::payment(total_fund_at_retirement, r, m);

        AccountProjection {
            monthly_contribution,
            future_value_balance,
            future_value_contributions,
            total_fund_at_retirement,
            monthly_payment,
        }
    }

    /// Wage the contribution is assessed on
    pub fn contribution_base(&self, monthly_salary: f64) -> f64 {
        monthly_salary.min(self.wage_ceiling)
    }
}

/// Projection under the default scheme (6% employer contribution)
pub fn project_contribution_account(
    current_balance: f64,
    monthly_base: f64,
    self_rate_pct: f64,
    annual_return_pct: f64,
    years_to_retire: u32,
    payout_years: u32,
) -> AccountProjection {
    ContributionScheme::default().project(
        current_balance,
        monthly_base,
        self_rate_pct,
        annual_return_pct,
        years_to_retire,
        payout_years,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_return() {
        let projection = project_contribution_account(0.0, 10_000.0, 0.0, 0.0, 10, 20);

        assert_relative_eq!(projection.monthly_contribution, 600.0, epsilon = 1e-9);
        assert_relative_eq!(projection.total_fund_at_retirement, 72_000.0, epsilon = 1e-6);
        assert_relative_eq!(projection.monthly_payment, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_positive_return() {
        let projection = project_contribution_account(100_000.0, 40_000.0, 6.0, 6.0, 20, 20);
        let r: f64 = 0.005;
        let growth = (1.0 + r).powi(240);

        assert_relative_eq!(projection.monthly_contribution, 4_800.0, epsilon = 1e-9);
        assert_relative_eq!(projection.future_value_balance, 100_000.0 * growth, max_relative = 1e-12);
        assert_relative_eq!(
            projection.future_value_contributions,
            4_800.0 * (growth - 1.0) / r,
            max_relative = 1e-12
        );

        let fund = projection.total_fund_at_retirement;
        assert_relative_eq!(
            projection.monthly_payment,
            fund * (r * growth) / (growth - 1.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_retired_today_pays_out_current_balance() {
        let projection = project_contribution_account(1_200_000.0, 30_000.0, 0.0, 0.0, 0, 10);
        assert_relative_eq!(projection.total_fund_at_retirement, 1_200_000.0);
        assert_relative_eq!(projection.monthly_payment, 10_000.0);
    }

    #[test]
    fn test_contribution_base_capped() {
        let scheme = ContributionScheme::default();
        assert_eq!(scheme.contribution_base(42_000.0), 42_000.0);
        assert_eq!(scheme.contribution_base(250_000.0), 150_000.0);
    }
}
