//! Household situation builders
//!
//! Pure constructors for the nested entity maps an external tax-and-benefit
//! microsimulation engine expects as input. No simulation happens here; these
//! functions only shape data and validate enumerated fields against fixed
//! allow-lists.

pub mod uk;
pub mod us;

use crate::core::error::{RelError, RelResult, SituationError};

/// Resolve child ages, defaulting to 5, 8, 11, ... when unspecified
pub(crate) fn resolve_child_ages(num_children: usize, child_ages: Option<Vec<u32>>) -> RelResult<Vec<u32>> {
  match child_ages {
    None => Ok((0..num_children).map(|i| 5 + 3 * i as u32).collect()),
    Some(ages) if ages.len() == num_children => Ok(ages),
    Some(ages) => Err(RelError::Situation(SituationError::ChildAgesMismatch {
      expected: num_children,
      actual: ages.len(),
    })),
  }
}
