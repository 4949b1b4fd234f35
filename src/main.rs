//! Retirement Planner CLI
//!
//! Command-line interface for running retirement gap projections

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use retirement_planner::{
    projection::PensionProjection,
    signal::{evaluate_signal, CsvPriceSource, PriceSource, DEFAULT_LONG_WINDOW, DEFAULT_SHORT_WINDOW},
    Assumptions, LifestyleTier, PlanningEngine, RetirementProfile, ScenarioOverride, ScenarioRunner,
};

#[derive(Parser)]
#[command(name = "retirement_planner", version, about = "Retirement gap projection for Taiwanese workers")]
struct Cli {
    /// Directory with assumption CSV files (defaults to built-in tables)
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project pension income, gap and required monthly investment
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the projection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Year-by-year growth of the required monthly investment
    Schedule {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Required monthly investment under several statutory haircuts
    Sensitivity {
        #[command(flatten)]
        profile: ProfileArgs,

        #[arg(long, value_delimiter = ',', default_values_t = vec![0.5, 0.7, 0.9, 1.0])]
        haircuts: Vec<f64>,
    },
    /// Moving-average signal from a CSV of closing prices
    Signal {
        /// CSV file with a Close column, oldest row first
        #[arg(long)]
        prices: PathBuf,

        #[arg(long, default_value = "")]
        symbol: String,

        #[arg(long, default_value_t = DEFAULT_SHORT_WINDOW)]
        short: usize,

        #[arg(long, default_value_t = DEFAULT_LONG_WINDOW)]
        long: usize,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ProfileArgs {
    /// JSON file holding a full profile; overrides the flags below
    #[arg(long)]
    profile: Option<PathBuf>,

    #[arg(long, default_value_t = 40)]
    current_age: u32,
    #[arg(long, default_value_t = 65)]
    retirement_age: u32,
    #[arg(long, default_value_t = 85)]
    life_expectancy: u32,
    #[arg(long, default_value_t = 42_000.0)]
    salary: f64,
    #[arg(long, default_value_t = 10.0)]
    insured_years: f64,
    #[arg(long, default_value_t = 500_000.0)]
    account_balance: f64,
    /// Voluntary pension contribution, percentage points (0-6)
    #[arg(long, default_value_t = 0.0)]
    self_rate: f64,
    /// Expected annual return on the pension account, percent
    #[arg(long, default_value_t = 3.0)]
    expected_return: f64,
    #[arg(long, default_value_t = 1_000_000.0)]
    other_savings: f64,
    /// Annual inflation, percent
    #[arg(long, default_value_t = 2.0)]
    inflation: f64,
    /// Confidence that Labor Insurance pays in full (0-1)
    #[arg(long, default_value_t = 1.0)]
    haircut: f64,
    #[arg(long, default_value = "台北市")]
    region: String,
    /// Basic, Comfortable or Affluent
    #[arg(long, default_value = "Comfortable")]
    lifestyle: LifestyleTier,
}

impl ProfileArgs {
    fn to_profile(&self) -> Result<RetirementProfile> {
        if let Some(path) = &self.profile {
            let file = File::open(path)
                .with_context(|| format!("Unable to open profile {}", path.display()))?;
            return serde_json::from_reader(file)
                .with_context(|| format!("Invalid profile JSON in {}", path.display()));
        }

        Ok(RetirementProfile {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            life_expectancy: self.life_expectancy,
            monthly_salary: self.salary,
            accumulated_insurance_years: self.insured_years,
            contribution_account_balance: self.account_balance,
            self_contribution_rate: self.self_rate,
            expected_annual_return: self.expected_return,
            other_savings: self.other_savings,
            inflation_rate: self.inflation,
            statutory_pension_haircut: self.haircut,
            region: self.region.clone(),
            lifestyle: self.lifestyle,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None => Assumptions::default_taiwan(),
    };

    match cli.command {
        Command::Plan { profile, json } => {
            let profile = profile.to_profile()?;
            let engine = PlanningEngine::new(assumptions);
            let result = engine.compute(&profile).context("Projection failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_projection(&profile, &result);
            }
        }
        Command::Schedule { profile } => {
            let profile = profile.to_profile()?;
            let engine = PlanningEngine::new(assumptions);
            let result = engine.compute(&profile).context("Projection failed")?;
            let planning = &engine.assumptions().planning;

            println!(
                "Monthly investment {:.0} ({}% invested vs {}% deposit)",
                result.required_monthly_contribution,
                planning.target_return_pct,
                planning.deposit_rate_pct
            );
            println!("{:>4} {:>4} {:>16} {:>16} {:>16}", "Year", "Age", "Contributed", "Invested", "Deposit");
            println!("{}", "-".repeat(60));
            for row in engine.schedule(&profile, &result) {
                println!(
                    "{:>4} {:>4} {:>16.0} {:>16.0} {:>16.0}",
                    row.year, row.age, row.contributed, row.invested_balance, row.deposit_balance
                );
            }
        }
        Command::Sensitivity { profile, haircuts } => {
            let profile = profile.to_profile()?;
            let runner = ScenarioRunner::with_assumptions(assumptions);
            let overrides: Vec<_> = haircuts
                .iter()
                .map(|&haircut| ScenarioOverride {
                    label: format!("{:.0}%", haircut * 100.0),
                    statutory_pension_haircut: Some(haircut),
                    ..Default::default()
                })
                .collect();

            println!("{:>8} {:>14} {:>14} {:>14}", "Haircut", "Income", "MonthlyGap", "Required");
            println!("{}", "-".repeat(54));
            for (label, result) in runner.run_scenarios(&profile, &overrides) {
                let result = result.with_context(|| format!("Scenario {} failed", label))?;
                println!(
                    "{:>8} {:>14.0} {:>14.0} {:>14.0}",
                    label,
                    result.government_monthly_total,
                    result.monthly_gap,
                    result.required_monthly_contribution
                );
            }
        }
        Command::Signal { prices, symbol, short, long, json } => {
            let source = CsvPriceSource::new(&prices);
            let closes = source.closing_prices(&symbol)?;
            let report = evaluate_signal(&closes, short, long)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} {}", symbol, report.signal);
                println!("  Last close: {:.2}", report.last_close);
                println!("  MA{}:       {:.2}", short, report.short_ma);
                println!("  MA{}:       {:.2}", long, report.long_ma);
                println!("  Score:      {}", report.score);
            }
        }
    }

    Ok(())
}

fn print_projection(profile: &RetirementProfile, result: &PensionProjection) {
    println!("Retirement Projection");
    println!("=====================\n");
    println!(
        "Age {} -> retire at {} ({} years), payout to {} ({} years)",
        profile.current_age,
        profile.retirement_age,
        result.years_to_retire,
        profile.life_expectancy,
        result.payout_years
    );
    println!();

    let statutory = &result.statutory;
    println!("Labor Insurance annuity:");
    println!("  Insured salary:    {:.0}", statutory.insured_salary);
    println!("  Insured years:     {:.1}", statutory.total_years);
    println!("  Age adjustment:    {:.2}", statutory.adjustment_factor);
    println!("  Formula A:         {:.0}", statutory.formula_a);
    println!("  Formula B:         {:.0}", statutory.formula_b);
    println!("  Formula used:      {:?}", statutory.formula_used);
    println!(
        "  Monthly benefit:   {:.0} (x{:.2} confidence = {:.0})",
        statutory.monthly_benefit, profile.statutory_pension_haircut, result.gap.risk_adjusted_statutory
    );
    println!();

    let account = &result.account;
    println!("Labor Pension account:");
    println!("  Monthly contribution: {:.0}", account.monthly_contribution);
    println!("  Fund at retirement:   {:.0}", account.total_fund_at_retirement);
    println!("  Monthly payment:      {:.0}", account.monthly_payment);
    println!();

    println!("Needs and gap:");
    println!("  Cost today:          {:.0}", result.baseline_monthly_cost);
    println!("  Cost at retirement:  {:.0}", result.future_monthly_need);
    println!("  Government income:   {:.0}", result.government_monthly_total);
    if result.is_fully_covered() {
        println!("  Monthly surplus:     {:.0}", result.gap.monthly_surplus);
    } else {
        println!("  Monthly gap:         {:.0}", result.monthly_gap);
    }
    println!("  Lifetime gap:        {:.0}", result.lifetime_asset_gap);
    println!("  Savings at retire:   {:.0}", result.gap.other_savings_at_retirement);
    println!("  Remaining gap:       {:.0}", result.real_gap);
    println!();
    println!("Coverage: {:.1}% ({})", result.coverage_pct, result.readiness.as_str());
    println!("Required monthly investment: {:.0}", result.required_monthly_contribution);
}
