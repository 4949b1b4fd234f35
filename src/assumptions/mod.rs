//! Planning assumptions: regulatory tables and scheme parameters

mod brackets;
mod cost;
mod scheme;
pub mod loader;

pub use brackets::InsuranceBrackets;
pub use cost::{CostOfLivingTable, LifestyleTier, REGIONS};
pub use scheme::{ContributionScheme, PlanningRates, StatutoryScheme};
pub use loader::LoadedAssumptions;

use std::path::Path;

use crate::error::Result;

/// Container for all planning assumptions
#[derive(Debug, Clone, Default)]
pub struct Assumptions {
    pub brackets: InsuranceBrackets,
    pub cost_of_living: CostOfLivingTable,
    pub statutory: StatutoryScheme,
    pub contribution: ContributionScheme,
    pub planning: PlanningRates,
}

impl Assumptions {
    /// In-memory defaults matching data/assumptions/
    pub fn default_taiwan() -> Self {
        Self::default()
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Self::from_loaded(loaded)
    }

    pub fn from_loaded(loaded: LoadedAssumptions) -> Result<Self> {
        let mut statutory = StatutoryScheme::default();
        let mut contribution = ContributionScheme::default();
        let mut planning = PlanningRates::default();
        scheme::apply_overrides(
            &loaded.scheme_parameters,
            &mut statutory,
            &mut contribution,
            &mut planning,
        )?;

        // Tiers missing from the file keep their default multiplier
        let mut multipliers = CostOfLivingTable::default_multipliers();
        multipliers.extend(loaded.lifestyle_multipliers);

        Ok(Self {
            brackets: InsuranceBrackets::new(loaded.insurance_brackets)?,
            cost_of_living: CostOfLivingTable::new(loaded.cost_of_living, multipliers)?,
            statutory,
            contribution,
            planning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_matches_in_memory_defaults() {
        let from_csv = Assumptions::from_csv().expect("Failed to load assumptions");
        let defaults = Assumptions::default_taiwan();

        assert_eq!(from_csv.brackets, defaults.brackets);
        assert_eq!(from_csv.statutory, defaults.statutory);
        assert_eq!(from_csv.contribution, defaults.contribution);
        assert_eq!(from_csv.planning, defaults.planning);

        for region in REGIONS {
            for tier in [LifestyleTier::Basic, LifestyleTier::Comfortable, LifestyleTier::Affluent] {
                assert_eq!(
                    from_csv.cost_of_living.monthly_cost(region, tier).unwrap(),
                    defaults.cost_of_living.monthly_cost(region, tier).unwrap()
                );
            }
        }
    }
}
