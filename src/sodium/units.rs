//! Unit constants and conversions
//!
//! Kitchen measure conversions and the fixed seasoning constants the
//! calculator works from. Imperial units only.

use serde::Serialize;

// ============================================================================
// Seasoning Constants
// ============================================================================

/// Milligrams of sodium per teaspoon of kosher salt
pub const KOSHER_SALT_MG_PER_TSP: f64 = 480.0;
/// Recommended sodium per pound of baby back ribs (mg)
pub const RECOMMENDED_SODIUM_PER_LB: f64 = 400.0;
/// Tablespoons of dry rub applied to one rack
pub const RUB_TBSP_PER_RACK: f64 = 4.0;
/// Average rack weight (lbs)
pub const AVERAGE_RACK_WEIGHT: f64 = 2.0;

// ============================================================================
// Volume Conversion Constants
// ============================================================================

/// Teaspoons per tablespoon
pub const TSP_PER_TBSP: f64 = 3.0;
/// Quarter teaspoons per teaspoon
pub const QUARTER_TSP_PER_TSP: f64 = 4.0;

/// Convert teaspoons to tablespoons
pub fn tsp_to_tbsp(tsp: f64) -> f64 {
    tsp / TSP_PER_TBSP
}

/// Convert tablespoons to teaspoons
pub fn tbsp_to_tsp(tbsp: f64) -> f64 {
    tbsp * TSP_PER_TBSP
}

/// Convert teaspoons to quarter teaspoons
pub fn tsp_to_quarter_tsp(tsp: f64) -> f64 {
    tsp * QUARTER_TSP_PER_TSP
}

/// The constant set a calculator is built from
///
/// `Default` yields the standard imperial constants. There is no way to
/// mutate a record once a calculator holds it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SodiumConstants {
    pub kosher_salt_mg_per_tsp: f64,
    pub recommended_sodium_per_lb: f64,
    pub rub_tbsp_per_rack: f64,
    pub average_rack_weight: f64,
}

impl SodiumConstants {
    pub const STANDARD: SodiumConstants = SodiumConstants {
        kosher_salt_mg_per_tsp: KOSHER_SALT_MG_PER_TSP,
        recommended_sodium_per_lb: RECOMMENDED_SODIUM_PER_LB,
        rub_tbsp_per_rack: RUB_TBSP_PER_RACK,
        average_rack_weight: AVERAGE_RACK_WEIGHT,
    };
}

impl Default for SodiumConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}
