//! Telecom Economics Simulator CLI
//!
//! Compares a current and a new subscriber scenario over 24 months.
//! Scenario values come from flags (or `TELECOM_*` environment variables) or
//! from a CSV scenario file. New-scenario flags default to the matching
//! current value, so only the inputs that change need to be given.

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use telecom_economics::{
    chart::{redraw, ChartSurface, JsonFileSurface, MemorySurface},
    params::load_scenarios,
    Field, ProfitSeries, Report, ScenarioForm, Simulator,
};

#[derive(Parser, Debug)]
#[command(name = "telecom-sim", version, about = "Compare two telecom subscriber scenarios over 24 months")]
struct Cli {
    /// Operator name shown in the title
    #[arg(long, env = "TELECOM_OPERATOR", default_value = "")]
    operator: String,

    /// CSV file with `current` and `new` rows
    /// (Scenario,TotalUsers,ChurnRatePct,ARPU,CAC,GrowthRatePct)
    #[arg(
        long,
        env = "TELECOM_SCENARIOS",
        conflicts_with_all = [
            "total_users", "churn_rate", "arpu", "cac", "growth_rate",
            "new_total_users", "new_churn_rate", "new_arpu", "new_cac", "new_growth_rate",
        ]
    )]
    scenarios: Option<PathBuf>,

    /// Current subscriber count
    #[arg(long, env = "TELECOM_TOTAL_USERS")]
    total_users: Option<String>,

    /// Current monthly churn (%)
    #[arg(long, env = "TELECOM_CHURN_RATE")]
    churn_rate: Option<String>,

    /// Current average revenue per user per month
    #[arg(long, env = "TELECOM_ARPU")]
    arpu: Option<String>,

    /// Current customer acquisition cost
    #[arg(long, env = "TELECOM_CAC")]
    cac: Option<String>,

    /// Current monthly growth of new users (%)
    #[arg(long, env = "TELECOM_GROWTH_RATE")]
    growth_rate: Option<String>,

    /// New subscriber count
    #[arg(long, env = "TELECOM_NEW_TOTAL_USERS")]
    new_total_users: Option<String>,

    /// New monthly churn (%)
    #[arg(long, env = "TELECOM_NEW_CHURN_RATE")]
    new_churn_rate: Option<String>,

    /// New average revenue per user per month
    #[arg(long, env = "TELECOM_NEW_ARPU")]
    new_arpu: Option<String>,

    /// New customer acquisition cost
    #[arg(long, env = "TELECOM_NEW_CAC")]
    new_cac: Option<String>,

    /// New monthly growth of new users (%)
    #[arg(long, env = "TELECOM_NEW_GROWTH_RATE")]
    new_growth_rate: Option<String>,

    /// Write the chart specification as JSON to this path
    #[arg(long, env = "TELECOM_CHART_JSON")]
    chart_json: Option<PathBuf>,

    /// Write monthly rows for both scenarios as CSV into this directory
    #[arg(long, env = "TELECOM_CSV_DIR")]
    csv_dir: Option<PathBuf>,

    /// Print the month-by-month table
    #[arg(long)]
    table: bool,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn build_form(&self) -> ScenarioForm {
        let mut form = ScenarioForm::default_pricing();
        form.set_operator_name(&self.operator);

        let current = [
            (Field::TotalUsers, &self.total_users),
            (Field::ChurnRatePct, &self.churn_rate),
            (Field::Arpu, &self.arpu),
            (Field::Cac, &self.cac),
            (Field::GrowthRatePct, &self.growth_rate),
        ];
        for (field, value) in current {
            if let Some(text) = value {
                form.set_current(field, text);
            }
        }

        let new = [
            (Field::TotalUsers, &self.new_total_users),
            (Field::ChurnRatePct, &self.new_churn_rate),
            (Field::Arpu, &self.new_arpu),
            (Field::Cac, &self.new_cac),
            (Field::GrowthRatePct, &self.new_growth_rate),
        ];
        for (field, value) in new {
            if let Some(text) = value {
                form.set_new(field, text);
            }
        }

        form
    }

    fn surface(&self) -> Box<dyn ChartSurface> {
        match &self.chart_json {
            Some(path) => Box::new(JsonFileSurface::new(path)),
            None => Box::new(MemorySurface::new()),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = match &cli.scenarios {
        Some(path) => {
            let pair = load_scenarios(path)
                .with_context(|| format!("Failed to load scenarios from {}", path.display()))?;
            let mut form = ScenarioForm::new();
            form.set_operator_name(&cli.operator);
            let report = Report::from_pair(&form.title(), pair)?;
            redraw(&mut cli.surface(), None, &report.chart)?;
            report
        }
        None => {
            let mut simulator = Simulator::new(cli.build_form(), cli.surface());
            simulator.generate()?
        }
    };

    if let Some(dir) = &cli.csv_dir {
        write_series_csv(&dir.join("current_projection.csv"), &report.current)?;
        write_series_csv(&dir.join("new_projection.csv"), &report.new)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.title);
    println!("{}\n", "=".repeat(report.title.len()));

    if cli.table {
        print_table(&report);
    }

    print!("{}", report.summary);
    Ok(())
}

fn write_series_csv(path: &Path, series: &ProfitSeries) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Unable to create CSV file {}", path.display()))?;
    series.write_csv(file)?;
    log::info!("monthly rows written to {}", path.display());
    Ok(())
}

fn print_table(report: &Report) {
    let scale = report.chart.y_axis.ticks;

    println!("Profit by month ({}):", report.chart.y_axis.title);
    println!(
        "{:>8} {:>12} {:>16} {:>12} {:>16}",
        "Month", "Cur Users", "Current", "New Users", "New"
    );
    println!("{}", "-".repeat(68));

    for (cur, new) in report.current.rows.iter().zip(&report.new.rows) {
        println!(
            "{:>8} {:>12.0} {:>16} {:>12.0} {:>16}",
            cur.month,
            cur.bop_users,
            scale.tick_label(cur.profit),
            new.bop_users,
            scale.tick_label(new.profit),
        );
    }
    println!();
}
