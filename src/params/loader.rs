//! Load scenario pairs from CSV
//!
//! Expected columns:
//! `Scenario,TotalUsers,ChurnRatePct,ARPU,CAC,GrowthRatePct`
//!
//! Churn and growth are percentages. Cells are read as text and parsed the same
//! way form fields are, so a blank or malformed cell yields NaN and the pair
//! fails validation instead of failing the load.

use super::parse::parse_float;
use super::{ScenarioPair, ScenarioParameters, Side};
use crate::error::{SimResult, SimulatorError};
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "TotalUsers", default)]
    total_users: String,
    #[serde(rename = "ChurnRatePct", default)]
    churn_rate_pct: String,
    #[serde(rename = "ARPU", default)]
    arpu: String,
    #[serde(rename = "CAC", default)]
    cac: String,
    #[serde(rename = "GrowthRatePct", default)]
    growth_rate_pct: String,
}

impl CsvRow {
    fn side(&self) -> SimResult<Side> {
        match self.scenario.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(Side::Current),
            "new" => Ok(Side::New),
            _ => Err(SimulatorError::UnknownScenario {
                name: self.scenario.clone(),
            }),
        }
    }

    fn to_params(&self) -> ScenarioParameters {
        ScenarioParameters::from_percentages(
            parse_float(&self.total_users),
            parse_float(&self.churn_rate_pct),
            parse_float(&self.arpu),
            parse_float(&self.cac),
            parse_float(&self.growth_rate_pct),
        )
    }
}

/// Load a scenario pair from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> SimResult<ScenarioPair> {
    let reader = Reader::from_path(path)?;
    read_pair(reader)
}

/// Load a scenario pair from any reader (e.g., string buffer)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> SimResult<ScenarioPair> {
    read_pair(Reader::from_reader(reader))
}

fn read_pair<R: std::io::Read>(mut reader: Reader<R>) -> SimResult<ScenarioPair> {
    let mut current = None;
    let mut new = None;

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let params = row.to_params();
        // Later rows override earlier ones for the same side
        match row.side()? {
            Side::Current => current = Some(params),
            Side::New => new = Some(params),
        }
    }

    let current = current.ok_or_else(|| SimulatorError::MissingScenario {
        side: Side::Current.to_string(),
    })?;
    let new = new.ok_or_else(|| SimulatorError::MissingScenario {
        side: Side::New.to_string(),
    })?;

    Ok(ScenarioPair::new(current, new))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Scenario,TotalUsers,ChurnRatePct,ARPU,CAC,GrowthRatePct
current,1000,5,20,50,2
New,1000,4,22,50,3
";

    #[test]
    fn test_load_pair() {
        let pair = load_scenarios_from_reader(SAMPLE.as_bytes()).expect("Failed to load scenarios");
        assert_eq!(pair.current.total_users, 1000.0);
        assert!((pair.current.churn_rate - 0.05).abs() < 1e-15);
        assert_eq!(pair.new.arpu, 22.0);
        assert!((pair.new.growth_rate - 0.03).abs() < 1e-15);
        assert!(pair.validate());
    }

    #[test]
    fn test_blank_cell_fails_validation_not_load() {
        let csv = "\
Scenario,TotalUsers,ChurnRatePct,ARPU,CAC,GrowthRatePct
current,1000,5,,50,2
new,1000,5,20,50,2
";
        let pair = load_scenarios_from_reader(csv.as_bytes()).expect("Failed to load scenarios");
        assert!(pair.current.arpu.is_nan());
        assert!(!pair.validate());
    }

    #[test]
    fn test_unknown_scenario() {
        let csv = "\
Scenario,TotalUsers,ChurnRatePct,ARPU,CAC,GrowthRatePct
proposed,1000,5,20,50,2
";
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SimulatorError::UnknownScenario { .. }));
    }

    #[test]
    fn test_missing_side() {
        let csv = "\
Scenario,TotalUsers,ChurnRatePct,ARPU,CAC,GrowthRatePct
current,1000,5,20,50,2
";
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            SimulatorError::MissingScenario { side } => assert_eq!(side, "new"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join("telecom_economics_loader_test.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let pair = load_scenarios(&path).expect("Failed to load scenarios");
        assert_eq!(pair.new.cac, 50.0);
        std::fs::remove_file(&path).ok();
    }
}
