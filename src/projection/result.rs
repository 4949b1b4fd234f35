//! Projection output structures

use serde::{Deserialize, Serialize};

use super::account::AccountProjection;
use super::annuity::StatutoryAnnuity;
use super::gap::GapAnalysis;

/// How far government income goes toward the projected need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessStage {
    /// Under 30% covered
    Sprouting,
    /// 30% to under 70% covered
    Growing,
    /// 70% or more covered
    Fruiting,
}

impl ReadinessStage {
    pub fn from_coverage_pct(coverage_pct: f64) -> Self {
        if coverage_pct < 30.0 {
            ReadinessStage::Sprouting
        } else if coverage_pct < 70.0 {
            ReadinessStage::Growing
        } else {
            ReadinessStage::Fruiting
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessStage::Sprouting => "Sprouting",
            ReadinessStage::Growing => "Growing",
            ReadinessStage::Fruiting => "Fruiting",
        }
    }
}

/// Complete result of one projection. Recomputed from the profile every
/// time; carries every intermediate the reporting side shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PensionProjection {
    pub years_to_retire: u32,
    pub payout_years: u32,

    /// Monthly cost in today's money from the cost table
    pub baseline_monthly_cost: f64,

    /// Labor Insurance annuity before haircut, with formula breakdown
    pub statutory: StatutoryAnnuity,

    /// Labor Pension account accumulation and payout
    pub account: AccountProjection,

    /// Need, income and gap breakdown
    pub gap: GapAnalysis,

    pub statutory_monthly_benefit: f64,
    pub contribution_account_monthly_benefit: f64,
    pub government_monthly_total: f64,
    pub future_monthly_need: f64,
    pub monthly_gap: f64,
    pub lifetime_asset_gap: f64,
    pub real_gap: f64,

    /// Monthly investment that closes `real_gap` by retirement
    pub required_monthly_contribution: f64,

    /// Government income as a percent of need, capped at 100
    pub coverage_pct: f64,

    pub readiness: ReadinessStage,
}

impl PensionProjection {
    pub fn is_fully_covered(&self) -> bool {
        self.monthly_gap <= 0.0
    }
}

/// Percent of `need` covered by `income`, in 0..=100
pub fn coverage_pct(income: f64, need: f64) -> f64 {
    if need <= 0.0 {
        return 100.0;
    }
    (income / need * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness_thresholds() {
        assert_eq!(ReadinessStage::from_coverage_pct(0.0), ReadinessStage::Sprouting);
        assert_eq!(ReadinessStage::from_coverage_pct(29.9), ReadinessStage::Sprouting);
        assert_eq!(ReadinessStage::from_coverage_pct(30.0), ReadinessStage::Growing);
        assert_eq!(ReadinessStage::from_coverage_pct(69.9), ReadinessStage::Growing);
        assert_eq!(ReadinessStage::from_coverage_pct(70.0), ReadinessStage::Fruiting);
        assert_eq!(ReadinessStage::from_coverage_pct(100.0), ReadinessStage::Fruiting);
    }

    #[test]
    fn test_coverage_pct() {
        assert_eq!(coverage_pct(15_000.0, 30_000.0), 50.0);
        assert_eq!(coverage_pct(45_000.0, 30_000.0), 100.0);
        assert_eq!(coverage_pct(1.0, 0.0), 100.0);
    }
}
