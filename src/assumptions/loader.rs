//! CSV-based assumption loader
//!
//! Loads regulatory tables and scheme parameters from CSV files in data/assumptions/

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use super::cost::LifestyleTier;
use crate::error::{PlanError, Result};

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

fn parse_f64(field: &str, file: &str) -> Result<f64> {
    field
        .trim()
        .parse()
        .map_err(|_| PlanError::Parse(format!("{}: not a number: {:?}", file, field)))
}

fn column<'r>(record: &'r csv::StringRecord, index: usize, file: &str) -> Result<&'r str> {
    record.get(index).ok_or_else(|| {
        PlanError::Parse(format!("{}: row {:?} has no column {}", file, record, index + 1))
    })
}

/// Load insured-salary ceilings from CSV, in file order
pub fn load_insurance_brackets(path: &Path) -> Result<Vec<f64>> {
    let file = File::open(path.join("insurance_brackets.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut ceilings = Vec::new();
    for result in reader.records() {
        let record = result?;
        ceilings.push(parse_f64(column(&record, 0, "insurance_brackets.csv")?, "insurance_brackets.csv")?);
    }

    Ok(ceilings)
}

/// Load basic-tier monthly cost by region
/// Returns HashMap<region, monthly_cost>
pub fn load_cost_of_living(path: &Path) -> Result<HashMap<String, f64>> {
    let file = File::open(path.join("cost_of_living.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut costs = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let region = column(&record, 0, "cost_of_living.csv")?.trim().to_string();
        let cost = parse_f64(column(&record, 1, "cost_of_living.csv")?, "cost_of_living.csv")?;
        costs.insert(region, cost);
    }

    Ok(costs)
}

/// Load lifestyle multipliers
/// Returns HashMap<tier, multiplier>
pub fn load_lifestyle_multipliers(path: &Path) -> Result<HashMap<LifestyleTier, f64>> {
    let file = File::open(path.join("lifestyle_multipliers.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut multipliers = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let tier: LifestyleTier = column(&record, 0, "lifestyle_multipliers.csv")?.parse()?;
        let multiplier = parse_f64(
            column(&record, 1, "lifestyle_multipliers.csv")?,
            "lifestyle_multipliers.csv",
        )?;
        multipliers.insert(tier, multiplier);
    }

    Ok(multipliers)
}

/// Load scheme parameter overrides
/// Returns HashMap<parameter_name, value>
pub fn load_scheme_parameters(path: &Path) -> Result<HashMap<String, f64>> {
    let file = File::open(path.join("scheme_parameters.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut parameters = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let name = column(&record, 0, "scheme_parameters.csv")?.trim().to_string();
        let value = parse_f64(column(&record, 1, "scheme_parameters.csv")?, "scheme_parameters.csv")?;
        parameters.insert(name, value);
    }

    Ok(parameters)
}

/// Raw tables as read from an assumptions directory
pub struct LoadedAssumptions {
    pub insurance_brackets: Vec<f64>,
    pub cost_of_living: HashMap<String, f64>,
    pub lifestyle_multipliers: HashMap<LifestyleTier, f64>,
    pub scheme_parameters: HashMap<String, f64>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let loaded = Self {
            insurance_brackets: load_insurance_brackets(path)?,
            cost_of_living: load_cost_of_living(path)?,
            lifestyle_multipliers: load_lifestyle_multipliers(path)?,
            scheme_parameters: load_scheme_parameters(path)?,
        };
        log::info!(
            "Loaded assumptions from {}: {} brackets, {} regions, {} parameters",
            path.display(),
            loaded.insurance_brackets.len(),
            loaded.cost_of_living.len(),
            loaded.scheme_parameters.len()
        );
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_assumptions() {
        let result = LoadedAssumptions::load_default();
        assert!(result.is_ok(), "Failed to load assumptions: {:?}", result.err());

        let assumptions = result.unwrap();

        assert_eq!(assumptions.insurance_brackets.first().copied(), Some(28_590.0));
        assert_eq!(assumptions.insurance_brackets.last().copied(), Some(45_800.0));

        assert_eq!(assumptions.cost_of_living.len(), 22);
        assert_eq!(assumptions.cost_of_living.get("台北市").copied(), Some(45_000.0));

        assert_eq!(assumptions.lifestyle_multipliers.len(), 3);
        assert_eq!(
            assumptions.lifestyle_multipliers.get(&LifestyleTier::Affluent).copied(),
            Some(2.5)
        );

        assert_eq!(assumptions.scheme_parameters.get("formula_b_accrual").copied(), Some(0.0155));
    }

    #[test]
    fn test_short_row_is_parse_error() {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader("region,cost\n台北市\n".as_bytes());
        let record = reader.records().next().unwrap().unwrap();

        assert_eq!(column(&record, 0, "cost_of_living.csv").unwrap(), "台北市");
        assert!(matches!(column(&record, 1, "cost_of_living.csv"), Err(PlanError::Parse(_))));
    }

    #[test]
    fn test_missing_directory() {
        let result = LoadedAssumptions::load_from(Path::new("data/does_not_exist"));
        assert!(matches!(result, Err(PlanError::Io(_))));
    }
}
