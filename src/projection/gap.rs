//! Future living cost versus government income, and the capital needed to
//! cover the difference

use serde::{Deserialize, Serialize};

/// Inputs to the gap calculation, all already derived from the profile
#[derive(Debug, Clone)]
pub struct GapInputs {
    /// Monthly cost in today's money
    pub baseline_monthly_cost: f64,

    /// Annual inflation, percent
    pub inflation_pct: f64,

    pub years_to_retire: u32,

    /// Raw Labor Insurance annuity
    pub statutory_benefit: f64,

    /// Payout confidence applied to the statutory benefit, 0..=1
    pub haircut: f64,

    /// Monthly payment from the Labor Pension account
    pub contribution_benefit: f64,

    pub payout_years: u32,

    /// Savings outside both schemes, today's value
    pub other_savings: f64,

    /// Annual growth of other savings until retirement, percent
    pub savings_growth_pct: f64,
}

/// Shortfall breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// Monthly cost at retirement after inflation
    pub future_monthly_need: f64,

    /// Statutory benefit after the haircut
    pub risk_adjusted_statutory: f64,

    /// Risk-adjusted statutory benefit plus pension account payment
    pub government_monthly_total: f64,

    /// Uncovered monthly cost, never negative
    pub monthly_gap: f64,

    /// Government income in excess of need, never negative
    pub monthly_surplus: f64,

    /// Monthly gap over the whole payout horizon (no growth during payout)
    pub lifetime_asset_gap: f64,

    /// Other savings grown to the retirement date
    pub other_savings_at_retirement: f64,

    /// Lifetime gap left after other savings, never negative
    pub real_gap: f64,
}

/// Compound `baseline` forward at `inflation_pct` per year
pub fn project_future_need(baseline: f64, inflation_pct: f64, years: u32) -> f64 {
    baseline * (1.0 + inflation_pct / 100.0).powi(years as i32)
}

pub fn calculate_gap(inputs: &GapInputs) -> GapAnalysis {
    let future_monthly_need = project_future_need(
        inputs.baseline_monthly_cost,
        inputs.inflation_pct,
        inputs.years_to_retire,
    );

    let risk_adjusted_statutory = inputs.statutory_benefit * inputs.haircut;
    let government_monthly_total = risk_adjusted_statutory + inputs.contribution_benefit;

    let monthly_gap = (future_monthly_need - government_monthly_total).max(0.0);
    let monthly_surplus = (government_monthly_total - future_monthly_need).max(0.0);

    let lifetime_asset_gap = monthly_gap * 12.0 * inputs.payout_years as f64;

    let other_savings_at_retirement = inputs.other_savings
        * (1.0 + inputs.savings_growth_pct / 100.0).powi(inputs.years_to_retire as i32);
    let real_gap = (lifetime_asset_gap - other_savings_at_retirement).max(0.0);

    GapAnalysis {
        future_monthly_need,
        risk_adjusted_statutory,
        government_monthly_total,
        monthly_gap,
        monthly_surplus,
        lifetime_asset_gap,
        other_savings_at_retirement,
        real_gap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn inputs() -> GapInputs {
        GapInputs {
            baseline_monthly_cost: 30_000.0,
            inflation_pct: 2.0,
            years_to_retire: 10,
            statutory_benefit: 20_000.0,
            haircut: 0.8,
            contribution_benefit: 5_000.0,
            payout_years: 20,
            other_savings: 1_000_000.0,
            savings_growth_pct: 5.0,
        }
    }

    #[test]
    fn test_inflation_projection() {
        let need = project_future_need(30_000.0, 2.0, 10);
        assert_relative_eq!(need, 36_569.83, epsilon = 0.01);
    }

    #[test]
    fn test_gap_breakdown() {
        let gap = calculate_gap(&inputs());
        let need = 30_000.0 * 1.02f64.powi(10);

        assert_relative_eq!(gap.future_monthly_need, need, max_relative = 1e-12);
        assert_relative_eq!(gap.risk_adjusted_statutory, 16_000.0);
        assert_relative_eq!(gap.government_monthly_total, 21_000.0);
        assert_relative_eq!(gap.monthly_gap, need - 21_000.0, max_relative = 1e-12);
        assert_eq!(gap.monthly_surplus, 0.0);
        assert_relative_eq!(gap.lifetime_asset_gap, (need - 21_000.0) * 240.0, max_relative = 1e-12);

        let savings = 1_000_000.0 * 1.05f64.powi(10);
        assert_relative_eq!(gap.other_savings_at_retirement, savings, max_relative = 1e-12);
        assert_relative_eq!(gap.real_gap, gap.lifetime_asset_gap - savings, max_relative = 1e-9);
    }

    #[test]
    fn test_surplus_is_not_a_negative_gap() {
        let mut inputs = inputs();
        inputs.statutory_benefit = 60_000.0;
        inputs.haircut = 1.0;

        let gap = calculate_gap(&inputs);
        assert_eq!(gap.monthly_gap, 0.0);
        assert_eq!(gap.lifetime_asset_gap, 0.0);
        assert_eq!(gap.real_gap, 0.0);
        assert!(gap.monthly_surplus > 0.0);
    }

    #[test]
    fn test_savings_cover_gap() {
        let mut inputs = inputs();
        inputs.other_savings = 50_000_000.0;

        let gap = calculate_gap(&inputs);
        assert!(gap.lifetime_asset_gap > 0.0);
        assert_eq!(gap.real_gap, 0.0);
    }

    proptest! {
        #[test]
        fn prop_gaps_never_negative(
            cost in 0.0f64..200_000.0,
            inflation in 0.0f64..10.0,
            years in 0u32..50,
            statutory in 0.0f64..100_000.0,
            haircut in 0.0f64..=1.0,
            account in 0.0f64..100_000.0,
            payout in 1u32..50,
            savings in 0.0f64..50_000_000.0,
        ) {
            let gap = calculate_gap(&GapInputs {
                baseline_monthly_cost: cost,
                inflation_pct: inflation,
                years_to_retire: years,
                statutory_benefit: statutory,
                haircut,
                contribution_benefit: account,
                payout_years: payout,
                other_savings: savings,
                savings_growth_pct: 5.0,
            });
            prop_assert!(gap.monthly_gap >= 0.0);
            prop_assert!(gap.real_gap >= 0.0);
            prop_assert!(gap.monthly_gap == 0.0 || gap.monthly_surplus == 0.0);
        }
    }
}
