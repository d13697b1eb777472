//! Calculation result models
//!
//! Derived value records produced by the sodium calculator. Never persisted.

use serde::Serialize;

use super::Fixed;

/// Below this many teaspoons the additional salt is "just a pinch"
pub const PINCH_THRESHOLD_TSP: f64 = 0.25;

/// Rub quantities and the sodium they carry, each with one fractional digit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RubCalculation {
    pub number_of_racks: Fixed,
    pub total_rub_tbsp: Fixed,
    pub total_rub_tsp: Fixed,
    pub total_quarter_tsp: Fixed,
    pub total_rub_sodium: Fixed,
}

/// Suggested action for the cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaltAdvice {
    /// The rub already carries enough sodium
    NoneNeeded,
    /// Less than a quarter teaspoon
    Pinch,
    Add,
}

impl SaltAdvice {
    /// Classify a (formatted) teaspoon amount
    pub fn for_tsp(additional_salt_tsp: f64) -> Self {
        if additional_salt_tsp <= 0.0 {
            SaltAdvice::NoneNeeded
        } else if additional_salt_tsp < PINCH_THRESHOLD_TSP {
            SaltAdvice::Pinch
        } else {
            SaltAdvice::Add
        }
    }

    /// Human-readable message for the given teaspoon text
    pub fn message(&self, additional_salt_tsp: &Fixed) -> String {
        match self {
            SaltAdvice::NoneNeeded => "No additional salt needed! Your rub has enough sodium.".to_string(),
            SaltAdvice::Pinch => "Just a pinch of kosher salt needed!".to_string(),
            SaltAdvice::Add => format!("Add {} tsp of kosher salt", additional_salt_tsp),
        }
    }
}

/// Top-level calculator output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaltResult {
    pub recommended_total_sodium: Fixed,
    /// Re-parsed from `rub_calculation.total_rub_sodium`, unformatted
    pub sodium_from_rub: f64,
    pub additional_sodium_needed: Fixed,
    pub additional_salt_tsp: Fixed,
    pub additional_salt_quarter_tsp: Fixed,
    pub advice: SaltAdvice,
    pub rub_calculation: RubCalculation,
}

impl SaltResult {
    pub fn advice_message(&self) -> String {
        self.advice.message(&self.additional_salt_tsp)
    }
}
