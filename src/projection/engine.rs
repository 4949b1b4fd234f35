//! Planning engine: runs the full retirement projection pipeline for a profile

use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::profile::RetirementProfile;
use super::gap::{calculate_gap, GapInputs};
use super::result::{coverage_pct, PensionProjection, ReadinessStage};
use super::schedule::{accumulation_schedule, ScheduleRow};
use super::target::solve_required_monthly_contribution;

/// Main planning engine
#[derive(Debug, Clone)]
pub struct PlanningEngine {
    assumptions: Assumptions,
}

impl PlanningEngine {
    /// Create a new engine with the given assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run the projection for a single profile.
    ///
    /// Stages run in dependency order: bracket lookup, statutory annuity,
    /// pension account, gap, then the target contribution.
    pub fn compute(&self, profile: &RetirementProfile) -> Result<PensionProjection> {
        profile.validate(&self.assumptions.contribution)?;

        if !profile.has_ordered_ages() {
            log::warn!(
                "Ages out of order (current {}, retirement {}, life expectancy {}); durations clamped",
                profile.current_age,
                profile.retirement_age,
                profile.life_expectancy
            );
        }

        let years_to_retire = profile.years_to_retire();
        let payout_years = profile.payout_years();

        let baseline_monthly_cost = self
            .assumptions
            .cost_of_living
            .monthly_cost(&profile.region, profile.lifestyle)?;

        // Labor Insurance: contributions continue until retirement
        let insured_salary = self.assumptions.brackets.resolve(profile.monthly_salary);
        let total_years = profile.accumulated_insurance_years + years_to_retire as f64;
        let statutory =
            self.assumptions
                .statutory
                .calculate(insured_salary, total_years, profile.retirement_age);
        log::debug!(
            "Statutory annuity: insured salary {:.0}, {:.1} years, factor {:.2}, A {:.2}, B {:.2} -> {:?}",
            insured_salary,
            total_years,
            statutory.adjustment_factor,
            statutory.formula_a,
            statutory.formula_b,
            statutory.formula_used
        );

        let contribution = &self.assumptions.contribution;
        let account = contribution.project(
            profile.contribution_account_balance,
            contribution.contribution_base(profile.monthly_salary),
            profile.self_contribution_rate,
            profile.expected_annual_return,
            years_to_retire,
            payout_years,
        );
        log::debug!(
            "Pension account: fund at retirement {:.2}, monthly payment {:.2}",
            account.total_fund_at_retirement,
            account.monthly_payment
        );

        let planning = &self.assumptions.planning;
        let gap = calculate_gap(&GapInputs {
            baseline_monthly_cost,
            inflation_pct: profile.inflation_rate,
            years_to_retire,
            statutory_benefit: statutory.monthly_benefit,
            haircut: profile.statutory_pension_haircut,
            contribution_benefit: account.monthly_payment,
            payout_years,
            other_savings: profile.other_savings,
            savings_growth_pct: planning.savings_growth_pct,
        });
        log::debug!(
            "Gap: need {:.2}, income {:.2}, monthly gap {:.2}, real gap {:.2}",
            gap.future_monthly_need,
            gap.government_monthly_total,
            gap.monthly_gap,
            gap.real_gap
        );

        let required_monthly_contribution = solve_required_monthly_contribution(
            gap.real_gap,
            years_to_retire,
            planning.target_return_pct,
        );

        let coverage = coverage_pct(gap.government_monthly_total, gap.future_monthly_need);

        Ok(PensionProjection {
            years_to_retire,
            payout_years,
            baseline_monthly_cost,
            statutory_monthly_benefit: statutory.monthly_benefit,
            contribution_account_monthly_benefit: account.monthly_payment,
            government_monthly_total: gap.government_monthly_total,
            future_monthly_need: gap.future_monthly_need,
            monthly_gap: gap.monthly_gap,
            lifetime_asset_gap: gap.lifetime_asset_gap,
            real_gap: gap.real_gap,
            required_monthly_contribution,
            coverage_pct: coverage,
            readiness: ReadinessStage::from_coverage_pct(coverage),
            statutory,
            account,
            gap,
        })
    }

    /// Year-by-year growth of the required contribution until retirement
    pub fn schedule(
        &self,
        profile: &RetirementProfile,
        projection: &PensionProjection,
    ) -> Vec<ScheduleRow> {
        let planning = &self.assumptions.planning;
        accumulation_schedule(
            projection.required_monthly_contribution,
            profile.current_age,
            projection.years_to_retire,
            planning.target_return_pct,
            planning.deposit_rate_pct,
        )
    }
}

impl Default for PlanningEngine {
    fn default() -> Self {
        Self::new(Assumptions::default_taiwan())
    }
}
