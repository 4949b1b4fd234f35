//! Labor Insurance old-age annuity (dual formula, best-of)

use serde::{Deserialize, Serialize};

use crate::assumptions::StatutoryScheme;

/// Which formula produced the annuity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnuityFormula {
    /// Flat amount plus low accrual
    A,
    /// Proportional accrual
    B,
}

/// Raw regulatory estimate, before any payout-confidence haircut
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatutoryAnnuity {
    /// Insured salary the formulas were evaluated on
    pub insured_salary: f64,

    /// Total insured years counted
    pub total_years: f64,

    /// Early/deferred retirement factor (1.0 at the normal age)
    pub adjustment_factor: f64,

    pub formula_a: f64,
    pub formula_b: f64,

    /// Formula whose amount was paid
    pub formula_used: AnnuityFormula,

    /// Monthly benefit, max(formula_a, formula_b)
    pub monthly_benefit: f64,
}

impl StatutoryScheme {
    /// Early-retirement reduction / deferral increase, capped at
    /// `max_adjustment_years` in either direction
    pub fn adjustment_factor(&self, retirement_age: u32) -> f64 {
        let cap = self.max_adjustment_years as i64;
        let age_diff = (retirement_age as i64 - self.normal_retirement_age as i64).clamp(-cap, cap);
        1.0 + age_diff as f64 * self.adjustment_per_year
    }

    /// Monthly annuity for an insured salary and insured years.
    ///
    /// Both formulas are always evaluated and the larger one is paid.
    pub fn calculate(
        &self,
        insured_salary: f64,
        total_years: f64,
        retirement_age: u32,
    ) -> StatutoryAnnuity {
        let adjustment_factor = self.adjustment_factor(retirement_age);

        let formula_a = (insured_salary * total_years * self.formula_a_accrual
            + self.formula_a_flat)
            * adjustment_factor;
        let formula_b = (insured_salary * total_years * self.formula_b_accrual) * adjustment_factor;

        let (formula_used, monthly_benefit) = if formula_b > formula_a {
            (AnnuityFormula::B, formula_b)
        } else {
            (AnnuityFormula::A, formula_a)
        };

        StatutoryAnnuity {
            insured_salary,
            total_years,
            adjustment_factor,
            formula_a,
            formula_b,
            formula_used,
            monthly_benefit,
        }
    }
}

/// Annuity under the default scheme parameters
pub fn calculate_statutory_annuity(
    insured_salary: f64,
    total_years: f64,
    retirement_age: u32,
) -> StatutoryAnnuity {
    StatutoryScheme::default().calculate(insured_salary, total_years, retirement_age)
}
