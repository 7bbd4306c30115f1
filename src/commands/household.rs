//! Household command: build situation JSON for the simulation engine

use crate::core::config::RelkitConfig;
use crate::core::error::{RelResult, ResultExt};
use crate::situation::{uk, us};
use clap::Subcommand;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum HouseholdCommands {
  /// US household situations (states + DC)
  #[command(subcommand)]
  Us(UsHousehold),

  /// UK household situations (ITL 1 regions)
  #[command(subcommand)]
  Uk(UkHousehold),
}

#[derive(Subcommand)]
pub enum UsHousehold {
  /// Single tax filer
  Single {
    /// Employment income
    #[arg(long)]
    income: f64,
    /// Two-letter state code
    #[arg(long, default_value = "CA")]
    state: String,
    /// Person's age
    #[arg(long, default_value_t = 35)]
    age: u32,
    /// Tax year (default from relkit.toml)
    #[arg(long)]
    year: Option<i32>,
    /// Write JSON here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
  },

  /// Married couple filing jointly
  Couple {
    /// First spouse's employment income
    #[arg(long)]
    income_1: f64,
    /// Second spouse's employment income
    #[arg(long, default_value_t = 0.0)]
    income_2: f64,
    #[arg(long, default_value = "CA")]
    state: String,
    #[arg(long, default_value_t = 35)]
    age_1: u32,
    #[arg(long, default_value_t = 35)]
    age_2: u32,
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    output: Option<PathBuf>,
  },

  /// Family with children
  Family {
    /// Primary parent's employment income
    #[arg(long)]
    income: f64,
    /// Number of children
    #[arg(long, default_value_t = 1)]
    children: usize,
    /// Comma-separated child ages (defaults to 5,8,11,...)
    #[arg(long, value_delimiter = ',')]
    child_ages: Option<Vec<u32>>,
    #[arg(long, default_value = "CA")]
    state: String,
    #[arg(long, default_value_t = 35)]
    parent_age: u32,
    /// Parents are married (filing jointly)
    #[arg(long)]
    married: bool,
    /// Spouse's income if married
    #[arg(long, default_value_t = 0.0)]
    spouse_income: f64,
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    output: Option<PathBuf>,
  },
}

#[derive(Subcommand)]
pub enum UkHousehold {
  /// Single-person household
  Single {
    /// Employment income
    #[arg(long)]
    income: f64,
    /// ITL 1 region
    #[arg(long, default_value = "LONDON")]
    region: String,
    /// Person's age
    #[arg(long, default_value_t = 30)]
    age: u32,
    /// Tax year (default from relkit.toml)
    #[arg(long)]
    year: Option<i32>,
    /// Write JSON here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
  },

  /// Couple without children
  Couple {
    #[arg(long)]
    income_1: f64,
    #[arg(long, default_value_t = 0.0)]
    income_2: f64,
    #[arg(long, default_value = "LONDON")]
    region: String,
    #[arg(long, default_value_t = 35)]
    age_1: u32,
    #[arg(long, default_value_t = 35)]
    age_2: u32,
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    output: Option<PathBuf>,
  },

  /// Family with children
  Family {
    #[arg(long)]
    income: f64,
    #[arg(long, default_value_t = 1)]
    children: usize,
    #[arg(long, value_delimiter = ',')]
    child_ages: Option<Vec<u32>>,
    #[arg(long, default_value = "LONDON")]
    region: String,
    #[arg(long, default_value_t = 35)]
    parent_age: u32,
    /// Two-adult household
    #[arg(long)]
    couple: bool,
    /// Partner's income if a couple
    #[arg(long, default_value_t = 0.0)]
    partner_income: f64,
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    output: Option<PathBuf>,
  },
}

/// Run the household command: build the situation and emit it as JSON
pub fn run_household(command: HouseholdCommands) -> RelResult<()> {
  let root = env::current_dir()?;
  let config = RelkitConfig::load(&root)?;
  let default_year = config.default_year;

  let (situation, output) = match command {
    HouseholdCommands::Us(us_cmd) => match us_cmd {
      UsHousehold::Single { income, state, age, year, output } => (
        us::single_filer(income, &state, age, year.unwrap_or(default_year))?,
        output,
      ),
      UsHousehold::Couple {
        income_1,
        income_2,
        state,
        age_1,
        age_2,
        year,
        output,
      } => (
        us::married_couple(income_1, income_2, &state, age_1, age_2, year.unwrap_or(default_year))?,
        output,
      ),
      UsHousehold::Family {
        income,
        children,
        child_ages,
        state,
        parent_age,
        married,
        spouse_income,
        year,
        output,
      } => {
        let params = us::FamilyParams {
          parent_income: income,
          num_children: children,
          child_ages,
          state,
          parent_age,
          married,
          spouse_income,
          year: year.unwrap_or(default_year),
        };
        (us::family_with_children(params)?, output)
      }
    },
    HouseholdCommands::Uk(uk_cmd) => match uk_cmd {
      UkHousehold::Single { income, region, age, year, output } => (
        uk::single_person(income, &region, age, year.unwrap_or(default_year))?,
        output,
      ),
      UkHousehold::Couple {
        income_1,
        income_2,
        region,
        age_1,
        age_2,
        year,
        output,
      } => (
        uk::couple(income_1, income_2, &region, age_1, age_2, year.unwrap_or(default_year))?,
        output,
      ),
      UkHousehold::Family {
        income,
        children,
        child_ages,
        region,
        parent_age,
        couple,
        partner_income,
        year,
        output,
      } => {
        let params = uk::FamilyParams {
          parent_income: income,
          num_children: children,
          child_ages,
          region,
          parent_age,
          couple,
          partner_income,
          year: year.unwrap_or(default_year),
        };
        (uk::family_with_children(params)?, output)
      }
    },
  };

  emit(&situation, output)
}

fn emit(situation: &Value, output: Option<PathBuf>) -> RelResult<()> {
  let json = serde_json::to_string_pretty(situation)?;
  match output {
    Some(path) => {
      fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
      println!("Wrote situation to {}", path.display());
    }
    None => println!("{}", json),
  }
  Ok(())
}
