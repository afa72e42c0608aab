//! Sweep one input of the new scenario against a fixed current scenario
//!
//! Usage: cargo run --bin growth_sweep -- --from 0 --to 10 --steps 21
//!
//! Writes one CSV row per swept value with both 24-month totals and the
//! difference, and prints the best value found.

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;
use telecom_economics::{
    format_currency,
    params::load_scenarios,
    scenario::linspace,
    ScenarioPair, ScenarioParameters, ScenarioRunner, SweepParameter,
};

#[derive(Parser, Debug)]
#[command(name = "growth_sweep", about = "Parallel sensitivity sweep of the new scenario")]
struct Cli {
    /// CSV scenario file; defaults to the standard scenario on both sides
    #[arg(long, env = "TELECOM_SCENARIOS")]
    scenarios: Option<PathBuf>,

    /// Input to vary: growth, churn, arpu, cac or users
    #[arg(long, default_value = "growth")]
    parameter: SweepParameter,

    /// First value (percent for growth and churn)
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last value (inclusive)
    #[arg(long, default_value_t = 10.0)]
    to: f64,

    /// Number of evenly spaced values
    #[arg(long, default_value_t = 21)]
    steps: usize,

    /// Output CSV path
    #[arg(long, env = "TELECOM_SWEEP_OUTPUT", default_value = "sweep_output.csv")]
    output: PathBuf,
}

#[derive(serde::Serialize)]
struct SweepRow {
    value: f64,
    current_total: f64,
    new_total: f64,
    difference: f64,
    outcome: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();

    let baseline = match &cli.scenarios {
        Some(path) => load_scenarios(path)
            .with_context(|| format!("Failed to load scenarios from {}", path.display()))?,
        None => ScenarioPair::new(
            ScenarioParameters::default_pricing(),
            ScenarioParameters::default_pricing(),
        ),
    };
    let runner = ScenarioRunner::new(baseline)?;

    let values = linspace(cli.from, cli.to, cli.steps);
    println!("Sweeping {} over {} values...", cli.parameter, values.len());
    let points = runner.sweep(cli.parameter, &values);

    let file = File::create(&cli.output)
        .with_context(|| format!("Unable to create {}", cli.output.display()))?;
    let mut wtr = csv::Writer::from_writer(file);
    for point in &points {
        wtr.serialize(SweepRow {
            value: point.value,
            current_total: point.summary.current_total,
            new_total: point.summary.new_total,
            difference: point.summary.difference,
            outcome: point.summary.outcome.to_string(),
        })?;
    }
    wtr.flush()?;
    println!("Output written to {}", cli.output.display());

    let best = points
        .iter()
        .max_by(|a, b| a.summary.new_total.total_cmp(&b.summary.new_total));
    if let Some(best) = best {
        println!(
            "Best {} = {}: new total {} ({} vs current)",
            cli.parameter,
            best.value,
            format_currency(best.summary.new_total),
            format_currency(best.summary.difference),
        );
    }

    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
