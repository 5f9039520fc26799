//! Command-line entry point: loads the household configuration, prints the
//! plan comparison report, and optionally exports it as JSON.

use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use healthplan_engine::calculation::calculate_hsa_position;
use healthplan_engine::comparison::{compare, recommend, save_report, ComparisonReport};
use healthplan_engine::config::ConfigLoader;
use healthplan_engine::error::EngineResult;

#[derive(Parser, Debug)]
#[clap(version, about = "Compare health-insurance plan costs across usage scenarios")]
struct Args {
    /// Path to the household configuration directory.
    #[arg(long, default_value = "config/household")]
    config: PathBuf,

    /// Expected pre-insurance medical spend for the recommendation.
    #[arg(long, default_value = "5000", value_parser = parse_spend)]
    expected_spend: Decimal,

    /// Write the full comparison report to this path as JSON.
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> EngineResult<()> {
    println!("{}", "=".repeat(60));
    println!("Healthcare Plan Comparison");
    println!("{}", "=".repeat(60));
    println!();

    let loader = ConfigLoader::load(&args.config)?;
    info!(config = %args.config.display(), "Configuration loaded");

    print_plans(&loader);
    print_scenarios(&loader);

    let report = compare(loader.plans(), loader.scenarios(), loader.prices())?;
    print_cost_table(&report);
    print_breakevens(&report);
    print_recommendation(&report, args.expected_spend)?;

    if let Some(path) = &args.export {
        save_report(path, &report)?;
        println!("Report written to {}", path.display());
    }

    println!();
    println!("Analysis complete.");
    Ok(())
}

fn money(amount: Decimal) -> String {
    format!("${}", amount.round_dp(2))
}

fn print_plans(loader: &ConfigLoader) {
    println!("Plans");
    println!("{}", "-".repeat(60));
    for plan in loader.plans() {
        println!("{plan}");
        println!("  Monthly premium:     {}", money(plan.monthly_premium));
        println!(
            "  Annual premium cost: {}",
            money(plan.annual_premium_cost())
        );
        println!("  Deductible:          {}", money(plan.deductible));
        println!("  Out-of-pocket max:   {}", money(plan.out_of_pocket_max));

        let hsa = calculate_hsa_position(plan);
        if hsa.eligible {
            println!("  HSA (kept invested, not spent):");
            println!(
                "    Employer contribution: {}",
                money(hsa.employer_contribution)
            );
            println!(
                "    Employee contribution: {}",
                money(hsa.employee_contribution)
            );
            println!(
                "    Balance end of year:   {}",
                money(hsa.balance_end_of_year)
            );
        }
        println!();
    }
}

fn print_scenarios(loader: &ConfigLoader) {
    println!("Scenarios");
    println!("{}", "-".repeat(60));
    for scenario in loader.scenarios() {
        println!("{scenario}");
        println!("  Total visits: {}", scenario.total_visits());
        println!(
            "  Medical cost before insurance: {}",
            money(scenario.total_medical_cost_before_insurance(loader.prices()))
        );
    }
    println!();
}

fn print_cost_table(report: &ComparisonReport) {
    println!("Total annual cost (net premium + out-of-pocket)");
    println!("{}", "-".repeat(60));

    print!("{:<20}", "Scenario");
    for plan in &report.plans {
        print!("{:>20}", plan.name);
    }
    println!();

    for scenario in &report.scenarios {
        print!("{:<20}", scenario.name);
        for plan in &report.plans {
            let cell = report
                .result_for(&plan.name, &scenario.name)
                .map(|r| money(r.total_annual_cost))
                .unwrap_or_default();
            print!("{cell:>20}");
        }
        println!();
    }
    println!();
}

fn print_breakevens(report: &ComparisonReport) {
    println!("Breakeven analysis");
    println!("{}", "-".repeat(60));
    for entry in &report.breakevens {
        match entry.breakeven_spend {
            Some(spend) => println!(
                "{} vs {}: equal cost at {} of medical spend",
                entry.plan_a,
                entry.plan_b,
                money(spend)
            ),
            None => println!(
                "{} vs {}: one plan is cheaper at every spend level",
                entry.plan_a, entry.plan_b
            ),
        }
    }
    println!();
}

fn print_recommendation(report: &ComparisonReport, expected_spend: Decimal) -> EngineResult<()> {
    let recommendation = recommend(report, expected_spend)?;

    println!(
        "Recommendation at {} expected medical spend",
        money(expected_spend)
    );
    println!("{}", "-".repeat(60));
    for total in &recommendation.totals {
        println!("{:<20} {}", total.plan, money(total.total_cost));
    }
    println!("Recommended: {}", recommendation.recommended_plan);
    Ok(())
}

fn parse_spend(raw: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw).map_err(|e| e.to_string())
}
