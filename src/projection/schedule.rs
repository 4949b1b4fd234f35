//! Year-by-year accumulation path of a level monthly contribution, invested
//! versus left in a time deposit

use serde::{Deserialize, Serialize};

use super::tvm::{monthly_rate, AnnuityCalculator};

/// Balances at the end of one plan year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Plan year (1-indexed)
    pub year: u32,

    /// Age at the end of the year
    pub age: u32,

    /// Sum of contributions so far, no growth
    pub contributed: f64,

    /// Balance when invested at the target return
    pub invested_balance: f64,

    /// Balance when held at the deposit rate
    pub deposit_balance: f64,
}

pub fn accumulation_schedule(
    monthly_contribution: f64,
    start_age: u32,
    years: u32,
    invest_return_pct: f64,
    deposit_rate_pct: f64,
) -> Vec<ScheduleRow> {
    let invest_rate = monthly_rate(invest_return_pct);
    let deposit_rate = monthly_rate(deposit_rate_pct);

    (1..=years)
        .map(|year| {
            let months = year * 12;
            ScheduleRow {
                year,
                age: start_age + year,
                contributed: monthly_contribution * months as f64,
                invested_balance: monthly_contribution
                    * AnnuityCalculator::fv_annuity_factor(invest_rate, months),
                deposit_balance: monthly_contribution
                    * AnnuityCalculator::fv_annuity_factor(deposit_rate, months),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_shape() {
        let rows = accumulation_schedule(10_000.0, 40, 25, 6.0, 1.7);
        assert_eq!(rows.len(), 25);
        assert_eq!(rows[0].year, 1);
        assert_eq!(rows[0].age, 41);
        assert_eq!(rows[24].age, 65);
        assert_relative_eq!(rows[24].contributed, 3_000_000.0);
    }

    #[test]
    fn test_invested_outgrows_deposit() {
        let rows = accumulation_schedule(5_000.0, 30, 10, 6.0, 1.7);
        for pair in rows.windows(2) {
            assert!(pair[1].invested_balance > pair[0].invested_balance);
        }
        for row in &rows {
            assert!(row.invested_balance > row.deposit_balance);
            assert!(row.deposit_balance > row.contributed);
        }
    }

    #[test]
    fn test_empty_when_no_years() {
        assert!(accumulation_schedule(5_000.0, 65, 0, 6.0, 1.7).is_empty());
    }
}
