//! Load retirement profiles from CSV for batch runs

use std::path::Path;

use csv::Reader;

use super::RetirementProfile;
use crate::assumptions::LifestyleTier;
use crate::error::Result;

/// Raw CSV row matching the profiles file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ProfileID")]
    profile_id: String,
    #[serde(rename = "CurrentAge")]
    current_age: u32,
    #[serde(rename = "RetirementAge")]
    retirement_age: u32,
    #[serde(rename = "LifeExpectancy")]
    life_expectancy: u32,
    #[serde(rename = "MonthlySalary")]
    monthly_salary: f64,
    #[serde(rename = "InsuredYears")]
    insured_years: f64,
    #[serde(rename = "AccountBalance")]
    account_balance: f64,
    #[serde(rename = "SelfRate")]
    self_rate: f64,
    #[serde(rename = "ExpectedReturn")]
    expected_return: f64,
    #[serde(rename = "OtherSavings")]
    other_savings: f64,
    #[serde(rename = "Inflation")]
    inflation: f64,
    #[serde(rename = "Haircut")]
    haircut: f64,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Lifestyle")]
    lifestyle: String,
}

impl CsvRow {
    fn into_profile(self) -> Result<(String, RetirementProfile)> {
        let lifestyle: LifestyleTier = self.lifestyle.parse()?;

        Ok((
            self.profile_id,
            RetirementProfile {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
                life_expectancy: self.life_expectancy,
                monthly_salary: self.monthly_salary,
                accumulated_insurance_years: self.insured_years,
                contribution_account_balance: self.account_balance,
                self_contribution_rate: self.self_rate,
                expected_annual_return: self.expected_return,
                other_savings: self.other_savings,
                inflation_rate: self.inflation,
                statutory_pension_haircut: self.haircut,
                region: self.region.trim().to_string(),
                lifestyle,
            },
        ))
    }
}

/// Load all profiles from a CSV file, keyed by their ProfileID column
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<(String, RetirementProfile)>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load profiles from any reader (e.g., string buffer, stdin)
pub fn load_profiles_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<(String, RetirementProfile)>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<(String, RetirementProfile)>> {
    let mut profiles = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.into_profile()?);
    }
    Ok(profiles)
}
