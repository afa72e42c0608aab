//! Input form model: ten numeric fields, the operator label and page title
//!
//! Field values are kept as the raw text the user typed. Each new-scenario
//! field follows its current-scenario counterpart until the user edits the new
//! field directly; from then on it keeps its own value.

use crate::params::{parse_float, ScenarioPair, ScenarioParameters, Side};

/// Title shown when no operator name is entered
pub const DEFAULT_TITLE: &str = "Telecom Economics Simulator";

/// Initial text of the new-scenario growth field
pub const DEFAULT_NEW_GROWTH_PCT: &str = "2";

/// One of the five numeric inputs of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TotalUsers,
    ChurnRatePct,
    Arpu,
    Cac,
    GrowthRatePct,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::TotalUsers,
        Field::ChurnRatePct,
        Field::Arpu,
        Field::Cac,
        Field::GrowthRatePct,
    ];

    fn index(self) -> usize {
        match self {
            Field::TotalUsers => 0,
            Field::ChurnRatePct => 1,
            Field::Arpu => 2,
            Field::Cac => 3,
            Field::GrowthRatePct => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldSet {
    values: [String; 5],
}

impl FieldSet {
    fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    fn set(&mut self, field: Field, text: &str) {
        self.values[field.index()] = text.to_string();
    }

    /// Parse into parameters, converting churn and growth from percentages
    fn to_params(&self) -> ScenarioParameters {
        let [users, churn, arpu, cac, growth] = &self.values;
        ScenarioParameters::from_percentages(
            parse_float(users),
            parse_float(churn),
            parse_float(arpu),
            parse_float(cac),
            parse_float(growth),
        )
    }
}

/// State of the simulator's input form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioForm {
    current: FieldSet,
    new: FieldSet,
    /// Per-field flag: the user edited the new field, so stop mirroring
    new_touched: [bool; 5],
    operator_name: String,
}

impl ScenarioForm {
    /// Empty form, except for the new growth rate which starts at 2%
    pub fn new() -> Self {
        let mut new = FieldSet::default();
        new.set(Field::GrowthRatePct, DEFAULT_NEW_GROWTH_PCT);
        Self {
            current: FieldSet::default(),
            new,
            new_touched: [false; 5],
            operator_name: String::new(),
        }
    }

    /// Form pre-filled with the default scenario on both sides
    pub fn default_pricing() -> Self {
        let mut form = Self::new();
        let defaults = ["1000", "5", "20", "50", "2"];
        for (field, text) in Field::ALL.iter().zip(defaults) {
            form.set_current(*field, text);
        }
        form
    }

    /// User edit of a current-scenario field. Mirrors into the new field
    /// unless that field has been touched.
    pub fn set_current(&mut self, field: Field, text: &str) {
        self.current.set(field, text);
        if !self.new_touched[field.index()] {
            self.new.set(field, text);
        }
    }

    /// User edit of a new-scenario field. Stops mirroring for this field.
    pub fn set_new(&mut self, field: Field, text: &str) {
        self.new.set(field, text);
        self.new_touched[field.index()] = true;
    }

    /// Re-link a new field to its current counterpart
    pub fn relink(&mut self, field: Field) {
        self.new_touched[field.index()] = false;
        let text = self.current.get(field).to_string();
        self.new.set(field, &text);
    }

    pub fn value(&self, side: Side, field: Field) -> &str {
        match side {
            Side::Current => self.current.get(field),
            Side::New => self.new.get(field),
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.new_touched[field.index()]
    }

    pub fn set_operator_name(&mut self, name: &str) {
        self.operator_name = name.to_string();
    }

    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }

    /// Page title for the current operator label
    pub fn title(&self) -> String {
        let name = self.operator_name.trim();
        if name.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            format!("{} {}", name, DEFAULT_TITLE)
        }
    }

    /// Read one scenario. Blank or malformed fields come back as NaN.
    pub fn read(&self, side: Side) -> ScenarioParameters {
        match side {
            Side::Current => self.current.to_params(),
            Side::New => self.new.to_params(),
        }
    }

    pub fn read_pair(&self) -> ScenarioPair {
        ScenarioPair::new(self.read(Side::Current), self.read(Side::New))
    }
}

impl Default for ScenarioForm {
    fn default() -> Self {
        Self::new()
    }
}
