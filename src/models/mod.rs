//! Data models
//!
//! Value records passed between the validation boundary, the calculator,
//! and the view layer.

mod calculation;
mod fixed;
mod input;

pub use calculation::{RubCalculation, SaltAdvice, SaltResult, PINCH_THRESHOLD_TSP};
pub use fixed::Fixed;
pub use input::{
    parse_sodium_target, CalculationInput, RIB_WEIGHT_FIELD, RUB_SODIUM_FIELD, TARGET_FIELD,
};
