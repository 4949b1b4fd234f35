//! Retirement projection: statutory annuity, pension account, gap and
//! target contribution

mod annuity;
mod account;
mod gap;
mod target;
mod schedule;
mod result;
mod engine;
pub mod tvm;

pub use annuity::{calculate_statutory_annuity, AnnuityFormula, StatutoryAnnuity};
pub use account::{project_contribution_account, AccountProjection};
pub use gap::{calculate_gap, project_future_need, GapAnalysis, GapInputs};
pub use target::{solve_required_monthly_contribution, DEFAULT_TARGET_RETURN_PCT};
pub use schedule::{accumulation_schedule, ScheduleRow};
pub use result::{coverage_pct, PensionProjection, ReadinessStage};
pub use engine::PlanningEngine;
