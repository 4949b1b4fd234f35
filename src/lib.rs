//! Retirement Planner - retirement gap projection for Taiwanese workers
//!
//! This library provides:
//! - Labor Insurance old-age annuity estimates (dual formula, best-of)
//! - Labor Pension individual account accumulation and annuitization
//! - Inflation-adjusted living cost, monthly and lifetime shortfall
//! - The monthly investment needed to close the shortfall by retirement
//! - A moving-average buy/hold/avoid signal for a single security

pub mod error;
pub mod profile;
pub mod assumptions;
pub mod projection;
pub mod scenario;
pub mod signal;

// Re-export commonly used types
pub use error::{PlanError, Result};
pub use profile::RetirementProfile;
pub use assumptions::{Assumptions, InsuranceBrackets, CostOfLivingTable, LifestyleTier};
pub use projection::{PlanningEngine, PensionProjection};
pub use scenario::{ScenarioRunner, ScenarioOverride};
