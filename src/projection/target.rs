//! Required monthly investment to close the residual gap by retirement

use super::tvm::{monthly_rate, AnnuityCalculator};

/// Annual return assumed when no other rate is configured, percent
pub const DEFAULT_TARGET_RETURN_PCT: f64 = 6.0;

/// Level monthly contribution whose future value at `assumed_annual_return_pct`
/// equals `real_gap` after `years_to_retire` years.
///
/// Returns exactly 0 when there is no gap or no time left; the annuity
/// formula is not evaluated in either case.
pub fn solve_required_monthly_contribution(
    real_gap: f64,
    years_to_retire: u32,
    assumed_annual_return_pct: f64,
) -> f64 {
    if years_to_retire == 0 || real_gap <= 0.0 {
        return 0.0;
    }

    let r = monthly_rate(assumed_annual_return_pct);
    let n = years_to_retire * 12;
    AnnuityCalculator::sinking_fund_payment(real_gap, r, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::account::project_contribution_account;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_no_gap_or_no_time() {
        assert_eq!(solve_required_monthly_contribution(0.0, 10, DEFAULT_TARGET_RETURN_PCT), 0.0);
        assert_eq!(solve_required_monthly_contribution(-5.0, 10, DEFAULT_TARGET_RETURN_PCT), 0.0);
        assert_eq!(solve_required_monthly_contribution(100_000.0, 0, DEFAULT_TARGET_RETURN_PCT), 0.0);
    }

    #[test]
    fn test_known_value() {
        // 1,000,000 in 10 years at 6%: r = 0.005, n = 120
        let r: f64 = 0.005;
        let expected = 1_000_000.0 * r / ((1.0 + r).powi(120) - 1.0);
        let payment = solve_required_monthly_contribution(1_000_000.0, 10, 6.0);
        assert_relative_eq!(payment, expected, max_relative = 1e-12);
        assert!((payment - 6_102.05).abs() < 0.01);
    }

    #[test]
    fn test_zero_assumed_return() {
        let payment = solve_required_monthly_contribution(120_000.0, 10, 0.0);
        assert_relative_eq!(payment, 1_000.0);
    }

    proptest! {
        #[test]
        fn prop_round_trip_through_account_projection(
            real_gap in 1_000.0f64..50_000_000.0,
            years in 1u32..45,
        ) {
            let payment = solve_required_monthly_contribution(real_gap, years, 6.0);

            // Feed the payment back in as the whole monthly contribution:
            // base * (employer 6% + 0% top-up) == payment
            let base = payment / 0.06;
            let projection = project_contribution_account(0.0, base, 0.0, 6.0, years, 1);

            let relative = (projection.future_value_contributions - real_gap).abs() / real_gap;
            prop_assert!(relative < 1e-9, "got {} expected {}", projection.future_value_contributions, real_gap);
        }
    }
}
