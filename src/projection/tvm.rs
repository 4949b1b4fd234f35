//! Time-value-of-money helpers shared by the projectors
//!
//! All rates here are periodic (monthly) decimals. A rate within `ZERO_RATE`
//! of zero takes the explicit zero-rate branch instead of dividing by it.

const ZERO_RATE: f64 = 1e-12;

/// Monthly rate from an annual nominal percentage (e.g. 6.0 -> 0.005)
pub fn monthly_rate(annual_pct: f64) -> f64 {
    annual_pct / 100.0 / 12.0
}

/// Helper functions for level-payment annuities
pub struct AnnuityCalculator;

impl AnnuityCalculator {
    /// Compound growth factor (1 + r)^n
    pub fn growth_factor(rate: f64, periods: u32) -> f64 {
        (1.0 + rate).powi(periods as i32)
    }

    /// Future value of an ordinary annuity of 1 per period:
    /// ((1 + r)^n - 1) / r, or n when r is zero
    pub fn fv_annuity_factor(rate: f64, periods: u32) -> f64 {
        if rate.abs() < ZERO_RATE {
            return periods as f64;
        }
        (Self::growth_factor(rate, periods) - 1.0) / rate
    }

    /// Level payment that exhausts `principal` over `periods`:
    /// P * r(1 + r)^m / ((1 + r)^m - 1), or P / m when r is zero
    pub fn payment(principal: f64, rate: f64, periods: u32) -> f64 {
        if periods == 0 {
            return principal;
        }
        if rate.abs() < ZERO_RATE {
            return principal / periods as f64;
        }
        let growth = Self::growth_factor(rate, periods);
        principal * (rate * growth) / (growth - 1.0)
    }

    /// Level contribution whose ordinary-annuity future value is `target`
    pub fn sinking_fund_payment(target: f64, rate: f64, periods: u32) -> f64 {
        if periods == 0 {
            return 0.0;
        }
        target / Self::fv_annuity_factor(rate, periods)
    }
}
