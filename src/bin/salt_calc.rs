//! Command-line salt calculator
//! Usage: cargo run --bin salt-calc -- --weight 5 --rub-sodium 110 [--target 1000]

use std::process::ExitCode;

use bbq_salt::error::InputError;
use bbq_salt::models::{parse_sodium_target, CalculationInput, SaltResult};
use bbq_salt::sodium::{SodiumCalculator, SodiumConstants};
use clap::Parser;

/// Sodium per teaspoon of table salt (mg), for the tips list
const TABLE_SALT_MG_PER_TSP: f64 = 2320.0;

#[derive(Debug, Parser)]
#[command(name = "salt-calc", version, about = "How much kosher salt to add to rubbed ribs")]
struct Args {
    /// Weight of the ribs in pounds
    #[arg(long, allow_hyphen_values = true)]
    weight: String,

    /// Sodium in milligrams per 1/4 tsp of rub (see the rub's nutrition label)
    #[arg(long, allow_hyphen_values = true)]
    rub_sodium: String,

    /// Target sodium in milligrams per pound (defaults to the standard target)
    #[arg(long, allow_hyphen_values = true, value_name = "MG_PER_LB")]
    target: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (calculator, input) = match validate(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{} ({})", err.user_message(), err);
            return ExitCode::FAILURE;
        }
    };

    let result = calculator.calculate(&input);

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Failed to serialize result: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_results(&calculator, &input, &result);
        print_tips(&calculator);
    }

    ExitCode::SUCCESS
}

fn validate(args: &Args) -> Result<(SodiumCalculator, CalculationInput), InputError> {
    let calculator = build_calculator(args.target.as_deref())?;
    let input = CalculationInput::parse(&args.weight, &args.rub_sodium)?;
    Ok((calculator, input))
}

/// Standard calculator, or one aimed at a custom sodium target
fn build_calculator(target: Option<&str>) -> Result<SodiumCalculator, InputError> {
    let Some(raw) = target else {
        return Ok(SodiumCalculator::default());
    };

    Ok(SodiumCalculator::new(SodiumConstants {
        recommended_sodium_per_lb: parse_sodium_target(raw)?,
        ..SodiumConstants::default()
    }))
}

fn print_results(calculator: &SodiumCalculator, input: &CalculationInput, result: &SaltResult) {
    let rub = &result.rub_calculation;

    println!("\n=== BBQ Salt Calculator Results ===");
    println!("Rib weight: {} lbs ({} racks)", input.rib_weight(), rub.number_of_racks);
    println!(
        "BBQ rub: {} tbsp = {} tsp = {} x 1/4 tsp",
        rub.total_rub_tbsp, rub.total_rub_tsp, rub.total_quarter_tsp
    );
    println!(
        "Recommended total sodium: {} mg ({} mg per lb)",
        result.recommended_total_sodium,
        calculator.constants().recommended_sodium_per_lb
    );
    println!("Sodium from BBQ rub: {} mg", rub.total_rub_sodium);
    println!("Additional sodium needed: {} mg", result.additional_sodium_needed);

    println!("\n--- Additional Kosher Salt Needed ---");
    println!("Teaspoons: {} tsp", result.additional_salt_tsp);
    println!("Quarter-teaspoons: {} (1/4 tsp)", result.additional_salt_quarter_tsp);

    println!("\n{}", result.advice_message());
}

fn print_tips(calculator: &SodiumCalculator) {
    println!("\n--- Tips ---");
    println!(
        "- Kosher salt: ~{} mg sodium per tsp",
        calculator.constants().kosher_salt_mg_per_tsp
    );
    println!("- Table salt: ~{} mg sodium per tsp", TABLE_SALT_MG_PER_TSP);
    println!("- Apply salt 40+ minutes before cooking for best results");
    println!("- Consider the saltiness of your BBQ sauce too!");
}
