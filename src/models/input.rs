//! Calculator input model
//!
//! The validation boundary: free text in, a checked `CalculationInput` out.

use serde::Serialize;

use crate::error::InputError;

pub const RIB_WEIGHT_FIELD: &str = "ribWeight";
pub const RUB_SODIUM_FIELD: &str = "rubSodium";
pub const TARGET_FIELD: &str = "target";

/// Validated calculator input
///
/// `rib_weight` is in pounds and strictly positive; `rub_sodium_per_quarter_tsp`
/// is in milligrams and non-negative. Both are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    rib_weight: f64,
    rub_sodium_per_quarter_tsp: f64,
}

impl CalculationInput {
    /// Validate already-numeric input
    pub fn new(rib_weight: f64, rub_sodium_per_quarter_tsp: f64) -> Result<Self, InputError> {
        if !rib_weight.is_finite() {
            return Err(InputError::NotFinite { field: RIB_WEIGHT_FIELD });
        }
        if !rub_sodium_per_quarter_tsp.is_finite() {
            return Err(InputError::NotFinite { field: RUB_SODIUM_FIELD });
        }
        if rib_weight <= 0.0 {
            return Err(InputError::NonPositiveRibWeight(rib_weight));
        }
        if rub_sodium_per_quarter_tsp < 0.0 {
            return Err(InputError::NegativeRubSodium(rub_sodium_per_quarter_tsp));
        }

        Ok(Self {
            rib_weight,
            rub_sodium_per_quarter_tsp,
        })
    }

    /// Parse and validate raw text fields
    pub fn parse(rib_weight: &str, rub_sodium: &str) -> Result<Self, InputError> {
        let rib_weight = parse_number(RIB_WEIGHT_FIELD, rib_weight)?;
        let rub_sodium = parse_number(RUB_SODIUM_FIELD, rub_sodium)?;
        Self::new(rib_weight, rub_sodium)
    }

    pub fn rib_weight(&self) -> f64 {
        self.rib_weight
    }

    pub fn rub_sodium_per_quarter_tsp(&self) -> f64 {
        self.rub_sodium_per_quarter_tsp
    }
}

/// Parse a recommended sodium target (mg per lb); must be finite and positive
pub fn parse_sodium_target(raw: &str) -> Result<f64, InputError> {
    let target = parse_number(TARGET_FIELD, raw)?;
    if !target.is_finite() {
        return Err(InputError::NotFinite { field: TARGET_FIELD });
    }
    if target <= 0.0 {
        return Err(InputError::NonPositiveTarget(target));
    }
    Ok(target)
}

/// Parse a whole (trimmed) field as a number
fn parse_number(field: &'static str, raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field,
            raw: raw.to_string(),
        })
}
