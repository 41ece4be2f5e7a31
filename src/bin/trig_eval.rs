//! Evaluate the six trigonometric functions at one or more angles
//!
//! Angles are read the same way the guide reads them: a bare number is in
//! degrees, anything mentioning π (or suffixed `rad`) is in radians.
//!
//! Usage:
//!   cargo run --bin trig_eval -- [--json] [--precision 4] 45 pi/6 "3pi/2"

use clap::{ArgAction, Parser};
use precalc_guide::parse::parse_angle;
use precalc_guide::{evaluate, TrigResult};
use serde::Serialize;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Trigonometric function evaluator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Evaluates sin, cos, tan, csc, sec and cot at exact angles",
    long_about = None
)]
struct Args {
    /// Emit a JSON array instead of a table
    #[arg(short, long, action = ArgAction::SetTrue)]
    json: bool,

    /// Decimal places in table output
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Angles to evaluate (e.g. 45, pi/4, 2π/3)
    #[arg(required = true, allow_hyphen_values = true)]
    angles: Vec<String>,
}

#[derive(Serialize)]
struct Evaluation {
    input: String,
    degrees: f64,
    exact: String,
    values: TrigResult,
}

fn print_section_header(title: &str) {
    println!("\n{title}:");
    println!("----------------------------------------");
}

fn print_table(evaluation: &Evaluation, precision: usize) {
    print_section_header(&format!(
        "{} = {} = {:.2}°",
        evaluation.input, evaluation.exact, evaluation.degrees
    ));
    for (name, value) in evaluation.values.entries() {
        println!("  {name:<4} {value:.precision$}");
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut evaluations = Vec::with_capacity(args.angles.len());
    for input in &args.angles {
        let angle = parse_angle(input)?;
        let radians = angle.to_radians();
        log::debug!("{input} parsed as {radians} rad");
        evaluations.push(Evaluation {
            input: input.clone(),
            degrees: angle.to_degrees(),
            exact: angle.pi_notation(),
            values: evaluate(radians),
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluations)?);
    } else {
        for evaluation in &evaluations {
            print_table(evaluation, args.precision);
        }
    }
    Ok(())
}
