//! Sodium calculation module
//!
//! Handles the rub sodium and additional salt calculations and the kitchen
//! unit conversions they rely on.

pub mod calculator;
pub mod units;

pub use calculator::{compute_additional_salt, compute_rub_sodium, SodiumCalculator};
pub use units::{
    tbsp_to_tsp, tsp_to_quarter_tsp, tsp_to_tbsp, SodiumConstants, AVERAGE_RACK_WEIGHT,
    KOSHER_SALT_MG_PER_TSP, RECOMMENDED_SODIUM_PER_LB, RUB_TBSP_PER_RACK,
};
