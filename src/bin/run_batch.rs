//! Run projections for every profile in a CSV file
//!
//! Usage: run_batch --input data/profiles.csv --output batch_projection_output.csv

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use retirement_planner::profile::load_profiles;
use retirement_planner::{RetirementProfile, ScenarioRunner};

#[derive(Parser)]
#[command(about = "Batch retirement projections from a profiles CSV")]
struct Cli {
    /// Profiles CSV (see data/profiles.csv for the columns)
    #[arg(long, default_value = "data/profiles.csv")]
    input: PathBuf,

    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,

    /// Directory with assumption CSV files (defaults to built-in tables)
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let loaded = load_profiles(&cli.input)
        .with_context(|| format!("Failed to load profiles from {}", cli.input.display()))?;
    log::info!("Loaded {} profiles in {:?}", loaded.len(), start.elapsed());

    let runner = match &cli.assumptions {
        Some(dir) => ScenarioRunner::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None => ScenarioRunner::new(),
    };

    let (ids, profiles): (Vec<String>, Vec<RetirementProfile>) = loaded.into_iter().unzip();

    let proj_start = Instant::now();
    let results = runner.run_batch(&profiles);
    log::info!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    writer.write_record([
        "ProfileID",
        "YearsToRetire",
        "PayoutYears",
        "InsuredSalary",
        "AdjustmentFactor",
        "FormulaUsed",
        "StatutoryBenefit",
        "AccountFund",
        "AccountBenefit",
        "GovernmentTotal",
        "FutureNeed",
        "MonthlyGap",
        "LifetimeGap",
        "RealGap",
        "RequiredMonthly",
        "CoveragePct",
        "Error",
    ])?;

    let mut failures = 0;
    for (id, result) in ids.iter().zip(&results) {
        match result {
            Ok(p) => writer.write_record([
                id.clone(),
                p.years_to_retire.to_string(),
                p.payout_years.to_string(),
                format!("{:.0}", p.statutory.insured_salary),
                format!("{:.2}", p.statutory.adjustment_factor),
                format!("{:?}", p.statutory.formula_used),
                format!("{:.2}", p.statutory_monthly_benefit),
                format!("{:.2}", p.account.total_fund_at_retirement),
                format!("{:.2}", p.contribution_account_monthly_benefit),
                format!("{:.2}", p.government_monthly_total),
                format!("{:.2}", p.future_monthly_need),
                format!("{:.2}", p.monthly_gap),
                format!("{:.2}", p.lifetime_asset_gap),
                format!("{:.2}", p.real_gap),
                format!("{:.2}", p.required_monthly_contribution),
                format!("{:.1}", p.coverage_pct),
                String::new(),
            ])?,
            Err(e) => {
                failures += 1;
                log::warn!("Profile {} failed: {}", id, e);
                let mut row = vec![id.clone()];
                row.extend(std::iter::repeat(String::new()).take(15));
                row.push(e.to_string());
                writer.write_record(&row)?;
            }
        }
    }
    writer.flush()?;

    println!(
        "{} profiles ({} failed) written to {} in {:?}",
        results.len(),
        failures,
        cli.output.display(),
        start.elapsed()
    );
    Ok(())
}
