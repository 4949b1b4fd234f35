//! Error types shared across the planner

use thiserror::Error;

use crate::assumptions::LifestyleTier;

/// Errors raised by the planning pipeline and the table loaders
#[derive(Debug, Error)]
pub enum PlanError {
    /// A profile field outside its declared numeric domain
    #[error("invalid input for `{field}` ({value}): {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("no cost-of-living entry for region `{0}`")]
    UnknownRegion(String),

    #[error("no lifestyle multiplier for tier `{0}`")]
    MissingMultiplier(LifestyleTier),

    #[error("insurance bracket table is empty")]
    EmptyBrackets,

    #[error("insurance brackets must be strictly increasing (found {previous} before {next})")]
    UnorderedBrackets { previous: f64, next: f64 },

    #[error("unknown scheme parameter `{0}`")]
    UnknownParameter(String),

    #[error("need at least {needed} closing prices, got {available}")]
    InsufficientPrices { needed: usize, available: usize },

    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
