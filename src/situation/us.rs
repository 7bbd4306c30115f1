//! US household situation builders
//!
//! Situations are keyed by the engine's five US entity groups (people,
//! families, marital_units, tax_units, spm_units, households) with every
//! variable nested under the tax year. State codes are validated against the
//! fixed allow-list; an unrecognized code is a descriptive error, never
//! silently corrected.

use crate::core::error::{RelError, RelResult, SituationError};
use crate::situation::resolve_child_ages;
use serde_json::{Value, json};

/// Two-letter state codes accepted by the engine: the 50 states plus DC
pub const STATE_CODES: [&str; 51] = [
  "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
  "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM",
  "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
  "WV", "WI", "WY",
];

/// Validate a state code against the allow-list
pub fn validate_state(code: &str) -> RelResult<()> {
  if STATE_CODES.contains(&code) {
    return Ok(());
  }
  Err(RelError::Situation(SituationError::UnknownCode {
    kind: "state",
    code: code.to_string(),
    choices: STATE_CODES.to_vec(),
  }))
}

fn dated(year: i32, value: Value) -> Value {
  json!({ year.to_string(): value })
}

/// Situation for a single tax filer
pub fn single_filer(income: f64, state: &str, age: u32, year: i32) -> RelResult<Value> {
  validate_state(state)?;

  Ok(json!({
    "people": {
      "person": {
        "age": dated(year, json!(age)),
        "employment_income": dated(year, json!(income)),
      }
    },
    "families": { "family": { "members": ["person"] } },
    "marital_units": { "marital_unit": { "members": ["person"] } },
    "tax_units": { "tax_unit": { "members": ["person"] } },
    "spm_units": { "spm_unit": { "members": ["person"] } },
    "households": {
      "household": {
        "members": ["person"],
        "state_name": dated(year, json!(state)),
      }
    }
  }))
}

/// Situation for a married couple filing jointly
pub fn married_couple(
  income_1: f64,
  income_2: f64,
  state: &str,
  age_1: u32,
  age_2: u32,
  year: i32,
) -> RelResult<Value> {
  validate_state(state)?;
  let members = json!(["spouse_1", "spouse_2"]);

  Ok(json!({
    "people": {
      "spouse_1": {
        "age": dated(year, json!(age_1)),
        "employment_income": dated(year, json!(income_1)),
      },
      "spouse_2": {
        "age": dated(year, json!(age_2)),
        "employment_income": dated(year, json!(income_2)),
      }
    },
    "families": { "family": { "members": members } },
    "marital_units": { "marital_unit": { "members": members } },
    "tax_units": { "tax_unit": { "members": members } },
    "spm_units": { "spm_unit": { "members": members } },
    "households": {
      "household": {
        "members": members,
        "state_name": dated(year, json!(state)),
      }
    }
  }))
}

/// Parameters for a family situation
#[derive(Debug, Clone)]
pub struct FamilyParams {
  pub parent_income: f64,
  pub num_children: usize,
  pub child_ages: Option<Vec<u32>>,
  pub state: String,
  pub parent_age: u32,
  pub married: bool,
  pub spouse_income: f64,
  pub year: i32,
}

impl FamilyParams {
  #[allow(dead_code)] // Used in tests
  pub fn new(parent_income: f64, year: i32) -> Self {
    Self {
      parent_income,
      num_children: 1,
      child_ages: None,
      state: "CA".to_string(),
      parent_age: 35,
      married: false,
      spouse_income: 0.0,
      year,
    }
  }
}

/// Situation for a family with children
pub fn family_with_children(params: FamilyParams) -> RelResult<Value> {
  validate_state(&params.state)?;
  let ages = resolve_child_ages(params.num_children, params.child_ages)?;
  let year = params.year;

  let mut people = serde_json::Map::new();
  people.insert(
    "parent".to_string(),
    json!({
      "age": dated(year, json!(params.parent_age)),
      "employment_income": dated(year, json!(params.parent_income)),
    }),
  );

  let mut members = vec!["parent".to_string()];

  if params.married {
    people.insert(
      "spouse".to_string(),
      json!({
        "age": dated(year, json!(params.parent_age)),
        "employment_income": dated(year, json!(params.spouse_income)),
      }),
    );
    members.push("spouse".to_string());
  }

  for (i, age) in ages.iter().enumerate() {
    let child_id = format!("child_{}", i + 1);
    people.insert(child_id.clone(), json!({ "age": dated(year, json!(age)) }));
    members.push(child_id);
  }

  let marital_members: Vec<String> = if params.married {
    members.clone()
  } else {
    vec!["parent".to_string()]
  };

  Ok(json!({
    "people": people,
    "families": { "family": { "members": members } },
    "marital_units": { "marital_unit": { "members": marital_members } },
    "tax_units": { "tax_unit": { "members": members } },
    "spm_units": { "spm_unit": { "members": members } },
    "households": {
      "household": {
        "members": members,
        "state_name": dated(year, json!(params.state)),
      }
    }
  }))
}

/// Itemized deduction amounts; zero entries are omitted from the situation
#[allow(dead_code)] // Library surface, not yet wired to a subcommand
#[derive(Debug, Clone, Default)]
pub struct ItemizedDeductions {
  pub charitable_donations: f64,
  pub mortgage_interest: f64,
  pub real_estate_taxes: f64,
  pub medical_expenses: f64,
  pub casualty_losses: f64,
}

/// Attach itemized deductions to the situation's primary adult.
///
/// The people map is alphabetically keyed, so the conventional primary-adult
/// ids are probed instead of taking the first entry (which could be a child).
#[allow(dead_code)] // Library surface, not yet wired to a subcommand
pub fn add_itemized_deductions(situation: &mut Value, deductions: &ItemizedDeductions, year: i32) {
  let Some(people) = situation.get_mut("people").and_then(|p| p.as_object_mut()) else {
    return;
  };

  let primary = ["person", "parent", "spouse_1"]
    .iter()
    .find(|id| people.contains_key(**id))
    .map(|id| id.to_string())
    .or_else(|| people.keys().next().cloned());

  let Some(primary) = primary else {
    return;
  };
  let Some(person) = people.get_mut(&primary).and_then(|p| p.as_object_mut()) else {
    return;
  };

  let fields = [
    ("charitable_cash_donations", deductions.charitable_donations),
    ("mortgage_interest", deductions.mortgage_interest),
    ("real_estate_taxes", deductions.real_estate_taxes),
    ("medical_expense", deductions.medical_expenses),
    ("casualty_loss", deductions.casualty_losses),
  ];

  for (field, amount) in fields {
    if amount > 0.0 {
      person.insert(field.to_string(), dated(year, json!(amount)));
    }
  }
}

/// Attach a parameter-sweep axis to a situation
#[allow(dead_code)] // Library surface, not yet wired to a subcommand
pub fn add_axes(situation: &mut Value, variable: &str, min: f64, max: f64, count: u32, year: i32) {
  situation["axes"] = json!([[{
    "name": variable,
    "count": count,
    "min": min,
    "max": max,
    "period": year,
  }]]);
}
