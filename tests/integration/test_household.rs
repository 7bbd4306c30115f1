//! Integration tests for `relkit household`

use crate::helpers::{TestRepo, run_relkit, run_relkit_raw, stderr_of};
use anyhow::Result;
use serde_json::Value;

fn stdout_json(output: &std::process::Output) -> Result<Value> {
  Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_us_single_filer() -> Result<()> {
  let repo = TestRepo::new()?;
  let output = run_relkit(
    &repo.path,
    &["household", "us", "single", "--income", "50000", "--state", "CA"],
  )?;

  let situation = stdout_json(&output)?;
  assert_eq!(situation["people"]["person"]["employment_income"]["2026"], 50000.0);
  assert_eq!(situation["households"]["household"]["state_name"]["2026"], "CA");
  assert_eq!(situation["tax_units"]["tax_unit"]["members"][0], "person");
  Ok(())
}

#[test]
fn test_us_family_with_explicit_child_ages() -> Result<()> {
  let repo = TestRepo::new()?;
  let output = run_relkit(
    &repo.path,
    &[
      "household", "us", "family",
      "--income", "55000",
      "--children", "2",
      "--child-ages", "2,16",
      "--married",
      "--spouse-income", "20000",
      "--state", "NY",
    ],
  )?;

  let situation = stdout_json(&output)?;
  assert_eq!(situation["people"]["child_1"]["age"]["2026"], 2);
  assert_eq!(situation["people"]["child_2"]["age"]["2026"], 16);
  assert_eq!(situation["people"]["spouse"]["employment_income"]["2026"], 20000.0);
  assert_eq!(situation["households"]["household"]["state_name"]["2026"], "NY");
  Ok(())
}

#[test]
fn test_us_invalid_state_rejected() -> Result<()> {
  let repo = TestRepo::new()?;
  let output = run_relkit_raw(
    &repo.path,
    &["household", "us", "single", "--income", "50000", "--state", "ZZ"],
  )?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = stderr_of(&output);
  assert!(stderr.contains("Invalid state 'ZZ'"));
  assert!(stderr.contains("Must be one of"));
  Ok(())
}

#[test]
fn test_uk_single_person() -> Result<()> {
  let repo = TestRepo::new()?;
  let output = run_relkit(
    &repo.path,
    &["household", "uk", "single", "--income", "30000", "--region", "SCOTLAND"],
  )?;

  let situation = stdout_json(&output)?;
  assert_eq!(situation["people"]["person"]["employment_income"]["2026"], 30000.0);
  assert_eq!(situation["households"]["household"]["region"]["2026"], "SCOTLAND");
  assert_eq!(situation["benunits"]["benunit"]["members"][0], "person");
  Ok(())
}

#[test]
fn test_uk_invalid_region_rejected() -> Result<()> {
  let repo = TestRepo::new()?;
  let output = run_relkit_raw(
    &repo.path,
    &["household", "uk", "single", "--income", "30000", "--region", "ZZ"],
  )?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = stderr_of(&output);
  assert!(stderr.contains("Invalid region 'ZZ'"));
  assert!(stderr.contains("NORTHERN_IRELAND"));
  Ok(())
}

#[test]
fn test_uk_family_child_ages_mismatch_rejected() -> Result<()> {
  let repo = TestRepo::new()?;
  let output = run_relkit_raw(
    &repo.path,
    &[
      "household", "uk", "family",
      "--income", "26000",
      "--children", "2",
      "--child-ages", "4",
    ],
  )?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("must match num_children"));
  Ok(())
}

#[test]
fn test_household_output_file() -> Result<()> {
  let repo = TestRepo::new()?;
  run_relkit(
    &repo.path,
    &[
      "household", "uk", "couple",
      "--income-1", "28000",
      "--income-2", "15000",
      "--region", "WALES",
      "--output", "situation.json",
    ],
  )?;

  let situation: Value = serde_json::from_str(&repo.read_file("situation.json")?)?;
  assert_eq!(situation["people"]["person_2"]["employment_income"]["2026"], 15000.0);
  assert_eq!(situation["households"]["household"]["region"]["2026"], "WALES");
  Ok(())
}

#[test]
fn test_household_year_from_config() -> Result<()> {
  let repo = TestRepo::new()?;
  std::fs::write(repo.path.join("relkit.toml"), "default_year = 2027\n")?;

  let output = run_relkit(&repo.path, &["household", "us", "single", "--income", "1000"])?;
  let situation = stdout_json(&output)?;
  assert_eq!(situation["people"]["person"]["age"]["2027"], 35);
  Ok(())
}
