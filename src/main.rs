//! Hospital Cover CLI
//!
//! Command-line front end for the delay-cost engine. Profile values can be
//! given as flags or through `HOSPITAL_COVER_*` environment variables.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hospital_cover::advice::Assessment;
use hospital_cover::format::format_years;
use hospital_cover::{
    format_currency, format_percentage, AdviceConfig, DelayCostInput, DelayCostResult, Evaluation,
    MlsTier, ScenarioComparison, ScenarioRunner,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "hospital-cover",
    version,
    about = "Should I buy hospital cover now? MLS and LHC delay-cost calculator (2024-25)"
)]
struct Cli {
    /// JSON advice config (recommendation ceiling, comparison horizons)
    #[arg(long, env = "HOSPITAL_COVER_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Net cost of delaying purchase, with recommendation and warnings
    Calc(ProfileArgs),
    /// Compare net cost across the configured delay horizons
    Compare(ProfileArgs),
    /// Income above which delaying costs money
    BreakEven(ProfileArgs),
}

#[derive(Debug, Args)]
struct ProfileArgs {
    /// Current age
    #[arg(long, env = "HOSPITAL_COVER_AGE", allow_negative_numbers = true)]
    age: i32,

    /// Annual taxable income
    #[arg(long, env = "HOSPITAL_COVER_INCOME", allow_negative_numbers = true)]
    income: f64,

    /// Base annual premium
    #[arg(long, env = "HOSPITAL_COVER_PREMIUM", default_value_t = 2000.0)]
    premium: f64,

    /// Years to delay purchase
    #[arg(
        long,
        env = "HOSPITAL_COVER_DELAY_YEARS",
        default_value_t = 1.0,
        allow_negative_numbers = true
    )]
    delay_years: f64,

    /// Use family MLS thresholds
    #[arg(long)]
    family: bool,

    /// Dependent children (family thresholds only)
    #[arg(long, env = "HOSPITAL_COVER_CHILDREN", default_value_t = 0)]
    children: u32,

    /// Arrived in Australia as an adult
    #[arg(long, requires = "medicare_age")]
    immigrant: bool,

    /// Age when enrolled in Medicare
    #[arg(long, env = "HOSPITAL_COVER_MEDICARE_AGE")]
    medicare_age: Option<i32>,
}

impl ProfileArgs {
    fn to_input(&self) -> DelayCostInput {
        DelayCostInput {
            age: self.age,
            income: self.income,
            premium: self.premium,
            delay_years: self.delay_years,
            is_family: self.family,
            is_immigrant: self.immigrant,
            medicare_age: self.medicare_age,
            num_children: self.children,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AdviceConfig::load(cli.config.as_deref())?;
    let runner = ScenarioRunner::with_config(config);

    match &cli.command {
        Command::Calc(profile) => {
            let evaluation = runner.evaluate(&profile.to_input())?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&evaluation)?);
            } else {
                print_evaluation(&evaluation);
            }
        }
        Command::Compare(profile) => {
            let input = profile.to_input();
            let comparison = runner.compare(&input)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print_comparison(&input, &comparison);
            }
        }
        Command::BreakEven(profile) => {
            let evaluation = runner.evaluate(&profile.to_input())?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "mls_rate": evaluation.result.mls_rate,
                        "current_loading": evaluation.result.current_loading,
                        "break_even_income": evaluation.break_even_income,
                    })
                );
            } else {
                print_break_even(&evaluation);
            }
        }
    }

    Ok(())
}

fn signed_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}

fn describe_tier(tier: &MlsTier) -> String {
    let range = if tier.range_end.is_infinite() {
        format!("{} and above", format_currency(tier.range_start))
    } else {
        format!(
            "{} - {}",
            format_currency(tier.range_start),
            format_currency(tier.range_end)
        )
    };
    format!(
        "{} (Tier {}: {})",
        format_percentage(tier.rate, false),
        tier.tier_index,
        range
    )
}

fn print_profile(input: &DelayCostInput) {
    println!("Profile:");
    println!("  Age:          {}", input.age);
    println!("  Household:    {}", input.household().as_str());
    if input.is_family {
        println!("  Children:     {}", input.num_children);
    }
    if let Some(medicare_age) = input.medicare_age.filter(|_| input.is_immigrant) {
        println!("  Medicare age: {}", medicare_age);
    }
    println!("  Income:       {}", format_currency(input.income));
    println!("  Premium:      {}", format_currency(input.premium));
    println!("  Delay:        {}", format_years(input.delay_years));
    println!();
}

fn print_breakdown(result: &DelayCostResult) {
    println!("Net additional cost: {}", signed_currency(result.net_cost));
    println!("  Loading increase cost: {:>10}", format_currency(result.loading_cost));
    println!("  MLS paid:              {:>10}", format_currency(result.mls_cost));
    println!(
        "  Premium saved:         {:>10}",
        format!("-{}", format_currency(result.saved_premium))
    );
}

fn print_assessment(assessment: &Assessment) {
    println!();
    println!(
        "Recommendation [{}]: {}",
        assessment.recommendation.as_str(),
        assessment.recommendation.message()
    );
    println!("Age note: {}", assessment.age_warning.message());

    let risks = &assessment.risk_factors;
    println!();
    println!("Risk factors:");
    println!(
        "  MLS paid over {}: {}",
        format_years(risks.delay_years),
        format_currency(risks.mls_cost)
    );
    println!(
        "  Loading increase: {}",
        format_percentage(risks.loading_increase, true)
    );
    println!("  {}", risks.waiting_period_note);
}

fn print_evaluation(evaluation: &Evaluation) {
    println!("Hospital Cover Delay Calculator (2024-25)");
    println!("=========================================\n");

    print_profile(&evaluation.input);

    if !evaluation.validation.is_empty() {
        println!("Input warnings:");
        for finding in &evaluation.validation {
            println!("  - {}", finding);
        }
        println!();
    }

    println!("MLS rate:        {}", describe_tier(&evaluation.mls_tier));
    println!(
        "Current loading: {}",
        format_percentage(evaluation.result.current_loading, true)
    );
    println!();

    print_breakdown(&evaluation.result);
    println!();
    println!("{}", evaluation.assessment.message);

    print_assessment(&evaluation.assessment);
}

fn print_comparison(input: &DelayCostInput, comparison: &ScenarioComparison) {
    print_profile(input);

    println!(
        "{:>10} {:>14} {:>12} {:>12}  {}",
        "Delay", "Net cost", "MLS", "Saved", "Recommendation"
    );
    println!("{}", "-".repeat(70));

    for (i, row) in comparison.rows.iter().enumerate() {
        let marker = if comparison.best_index == Some(i) { "  <- best" } else { "" };
        println!(
            "{:>10} {:>14} {:>12} {:>12}  {}{}",
            row.label,
            signed_currency(row.result.net_cost),
            format_currency(row.result.mls_cost),
            format_currency(row.result.saved_premium),
            row.recommendation.as_str(),
            marker,
        );
    }
}

fn print_break_even(evaluation: &Evaluation) {
    println!("MLS rate:        {}", describe_tier(&evaluation.mls_tier));
    println!(
        "Current loading: {}",
        format_percentage(evaluation.result.current_loading, true)
    );

    match evaluation.break_even_income {
        Some(income) => println!("Break-even income: {}", format_currency(income)),
        None => println!("Break-even income: never (no MLS applies at this income)"),
    }
}
