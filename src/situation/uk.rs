//! UK household situation builders
//!
//! Situations use the engine's three UK entity groups (people, benunits,
//! households) with variables nested under the tax year. Regions are the
//! twelve ITL 1 regions and are validated on every entry point that takes one.

use crate::core::error::{RelError, RelResult, SituationError};
use crate::situation::resolve_child_ages;
use serde_json::{Value, json};

/// UK ITL 1 regions
pub const VALID_REGIONS: [&str; 12] = [
  "NORTH_EAST",
  "NORTH_WEST",
  "YORKSHIRE",
  "EAST_MIDLANDS",
  "WEST_MIDLANDS",
  "EAST_OF_ENGLAND",
  "LONDON",
  "SOUTH_EAST",
  "SOUTH_WEST",
  "WALES",
  "SCOTLAND",
  "NORTHERN_IRELAND",
];

/// Validate a region against the allow-list
pub fn validate_region(region: &str) -> RelResult<()> {
  if VALID_REGIONS.contains(&region) {
    return Ok(());
  }
  Err(RelError::Situation(SituationError::UnknownCode {
    kind: "region",
    code: region.to_string(),
    choices: VALID_REGIONS.to_vec(),
  }))
}

fn dated(year: i32, value: Value) -> Value {
  json!({ year.to_string(): value })
}

/// Situation for a single-person household
pub fn single_person(income: f64, region: &str, age: u32, year: i32) -> RelResult<Value> {
  validate_region(region)?;

  Ok(json!({
    "people": {
      "person": {
        "age": dated(year, json!(age)),
        "employment_income": dated(year, json!(income)),
      }
    },
    "benunits": { "benunit": { "members": ["person"] } },
    "households": {
      "household": {
        "members": ["person"],
        "region": dated(year, json!(region)),
      }
    }
  }))
}

/// Situation for a couple without children
pub fn couple(
  income_1: f64,
  income_2: f64,
  region: &str,
  age_1: u32,
  age_2: u32,
  year: i32,
) -> RelResult<Value> {
  validate_region(region)?;
  let members = json!(["person_1", "person_2"]);

  Ok(json!({
    "people": {
      "person_1": {
        "age": dated(year, json!(age_1)),
        "employment_income": dated(year, json!(income_1)),
      },
      "person_2": {
        "age": dated(year, json!(age_2)),
        "employment_income": dated(year, json!(income_2)),
      }
    },
    "benunits": { "benunit": { "members": members } },
    "households": {
      "household": {
        "members": members,
        "region": dated(year, json!(region)),
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
  pub region: String,
  pub parent_age: u32,
  pub couple: bool,
  pub partner_income: f64,
  pub year: i32,
}

impl FamilyParams {
  #[allow(dead_code)] // Used in tests
  pub fn new(parent_income: f64, year: i32) -> Self {
    Self {
      parent_income,
      num_children: 1,
      child_ages: None,
      region: "LONDON".to_string(),
      parent_age: 35,
      couple: false,
      partner_income: 0.0,
      year,
    }
  }
}

/// Situation for a family with children
pub fn family_with_children(params: FamilyParams) -> RelResult<Value> {
  validate_region(&params.region)?;
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

  if params.couple {
    people.insert(
      "partner".to_string(),
      json!({
        "age": dated(year, json!(params.parent_age)),
        "employment_income": dated(year, json!(params.partner_income)),
      }),
    );
    members.push("partner".to_string());
  }

  for (i, age) in ages.iter().enumerate() {
    let child_id = format!("child_{}", i + 1);
    people.insert(child_id.clone(), json!({ "age": dated(year, json!(age)) }));
    members.push(child_id);
  }

  Ok(json!({
    "people": people,
    "benunits": { "benunit": { "members": members } },
    "households": {
      "household": {
        "members": members,
        "region": dated(year, json!(params.region)),
      }
    }
  }))
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

/// Set or change the household's region
#[allow(dead_code)] // Library surface, not yet wired to a subcommand
pub fn set_region(situation: &mut Value, region: &str, year: i32) -> RelResult<()> {
  validate_region(region)?;

  if let Some(households) = situation.get_mut("households").and_then(|h| h.as_object_mut()) {
    if let Some(household) = households.values_mut().next() {
      household["region"] = dated(year, json!(region));
    }
  }
  Ok(())
}
