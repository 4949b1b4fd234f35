//! Labor Insurance insured-salary bracket table

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Regulatory insured-salary ceilings, strictly increasing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceBrackets {
    ceilings: Vec<f64>,
}

impl InsuranceBrackets {
    /// Build a bracket table, rejecting empty or non-increasing input
    pub fn new(ceilings: Vec<f64>) -> Result<Self> {
        if ceilings.is_empty() {
            return Err(PlanError::EmptyBrackets);
        }
        for pair in ceilings.windows(2) {
            if pair[1].partial_cmp(&pair[0]) != Some(Ordering::Greater) {
                return Err(PlanError::UnorderedBrackets {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self { ceilings })
    }

    /// Labor Insurance grading table effective 2025 (minimum wage 28,590)
    pub fn labor_insurance_2025() -> Self {
        Self {
            ceilings: vec![
                28_590.0, 28_800.0, 30_300.0, 31_800.0, 33_300.0, 34_800.0,
                36_300.0, 38_200.0, 40_100.0, 42_000.0, 43_900.0, 45_800.0,
            ],
        }
    }

    /// Map a raw monthly salary onto the insured salary used for benefits.
    ///
    /// Salaries at or above the top bracket are capped at it, salaries below
    /// the bottom bracket are raised to it, and anything in between lands on
    /// the first ceiling that covers it.
    pub fn resolve(&self, raw_salary: f64) -> f64 {
        let min = self.min();
        let max = self.max();

        if raw_salary >= max {
            return max;
        }
        if raw_salary < min {
            return min;
        }

        self.ceilings
            .iter()
            .copied()
            .find(|&ceiling| ceiling >= raw_salary)
            .unwrap_or(max)
    }

    pub fn min(&self) -> f64 {
        self.ceilings[0]
    }

    pub fn max(&self) -> f64 {
        self.ceilings[self.ceilings.len() - 1]
    }

    pub fn ceilings(&self) -> &[f64] {
        &self.ceilings
    }
}

impl Default for InsuranceBrackets {
    fn default() -> Self {
        Self::labor_insurance_2025()
    }
}
