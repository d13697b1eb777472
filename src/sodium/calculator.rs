//! Sodium calculator
//!
//! Works out how much sodium a dry rub contributes to a batch of ribs and
//! how much kosher salt is still needed to reach the recommended level.

use crate::models::{CalculationInput, Fixed, RubCalculation, SaltAdvice, SaltResult};

use super::units::{tbsp_to_tsp, tsp_to_quarter_tsp, SodiumConstants};

/// Calculator over a fixed constant set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SodiumCalculator {
    constants: SodiumConstants,
}

impl SodiumCalculator {
    pub fn new(constants: SodiumConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &SodiumConstants {
        &self.constants
    }

    /// Sodium contributed by the rub for `rib_weight` pounds of ribs
    ///
    /// Expects `rub_sodium_per_quarter_tsp >= 0` and `rib_weight > 0`.
    pub fn compute_rub_sodium(&self, rub_sodium_per_quarter_tsp: f64, rib_weight: f64) -> RubCalculation {
        let number_of_racks = rib_weight / self.constants.average_rack_weight;
        let total_rub_tbsp = number_of_racks * self.constants.rub_tbsp_per_rack;
        let total_rub_tsp = tbsp_to_tsp(total_rub_tbsp);
        let total_quarter_tsp = tsp_to_quarter_tsp(total_rub_tsp);
        let total_rub_sodium = total_quarter_tsp * rub_sodium_per_quarter_tsp;

        RubCalculation {
            number_of_racks: Fixed::one(number_of_racks),
            total_rub_tbsp: Fixed::one(total_rub_tbsp),
            total_rub_tsp: Fixed::one(total_rub_tsp),
            total_quarter_tsp: Fixed::one(total_quarter_tsp),
            total_rub_sodium: Fixed::one(total_rub_sodium),
        }
    }

    /// Kosher salt needed on top of the rub to reach the recommended sodium
    ///
    /// The rub's sodium is taken from its one-decimal text, not the
    /// unrounded product. Negative shortfalls clamp to zero.
    pub fn compute_additional_salt(&self, rib_weight: f64, rub_sodium_per_quarter_tsp: f64) -> SaltResult {
        let recommended_total_sodium = rib_weight * self.constants.recommended_sodium_per_lb;

        let rub_calculation = self.compute_rub_sodium(rub_sodium_per_quarter_tsp, rib_weight);
        let sodium_from_rub = rub_calculation.total_rub_sodium.to_f64();

        let additional_sodium_needed = recommended_total_sodium - sodium_from_rub;
        let additional_salt_tsp = additional_sodium_needed / self.constants.kosher_salt_mg_per_tsp;

        let additional_salt_tsp_fixed = Fixed::two(additional_salt_tsp.max(0.0));
        let advice = SaltAdvice::for_tsp(additional_salt_tsp_fixed.to_f64());

        tracing::debug!(
            rib_weight,
            rub_sodium_per_quarter_tsp,
            sodium_from_rub,
            additional_sodium_needed,
            "Computed additional salt"
        );

        SaltResult {
            recommended_total_sodium: Fixed::one(recommended_total_sodium),
            sodium_from_rub,
            additional_sodium_needed: Fixed::one(additional_sodium_needed.max(0.0)),
            additional_salt_tsp: additional_salt_tsp_fixed,
            additional_salt_quarter_tsp: Fixed::two(tsp_to_quarter_tsp(additional_salt_tsp).max(0.0)),
            advice,
            rub_calculation,
        }
    }

    /// Run the full calculation on validated input
    pub fn calculate(&self, input: &CalculationInput) -> SaltResult {
        self.compute_additional_salt(input.rib_weight(), input.rub_sodium_per_quarter_tsp())
    }
}

/// [`SodiumCalculator::compute_rub_sodium`] with the standard constants
pub fn compute_rub_sodium(rub_sodium_per_quarter_tsp: f64, rib_weight: f64) -> RubCalculation {
    SodiumCalculator::default().compute_rub_sodium(rub_sodium_per_quarter_tsp, rib_weight)
}

/// [`SodiumCalculator::compute_additional_salt`] with the standard constants
pub fn compute_additional_salt(rib_weight: f64, rub_sodium_per_quarter_tsp: f64) -> SaltResult {
    SodiumCalculator::default().compute_additional_salt(rib_weight, rub_sodium_per_quarter_tsp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rub_strings(rub: &RubCalculation) -> [&str; 5] {
        [
            rub.number_of_racks.as_str(),
            rub.total_rub_tbsp.as_str(),
            rub.total_rub_tsp.as_str(),
            rub.total_quarter_tsp.as_str(),
            rub.total_rub_sodium.as_str(),
        ]
    }

    #[test]
    fn test_no_sodium_rub() {
        // 2 lbs = 1 rack, 4 tbsp = 12 tsp = 48 quarter tsp
        let result = compute_additional_salt(2.0, 0.0);
        assert_eq!(rub_strings(&result.rub_calculation), ["1.0", "4.0", "12.0", "48.0", "0.0"]);
        assert_eq!(result.recommended_total_sodium.as_str(), "800.0");
        assert_eq!(result.sodium_from_rub, 0.0);
        assert_eq!(result.additional_sodium_needed.as_str(), "800.0");
        assert_eq!(result.additional_salt_tsp.as_str(), "1.67");
        assert_eq!(result.additional_salt_quarter_tsp.as_str(), "6.67");
        assert_eq!(result.advice, SaltAdvice::Add);
    }

    #[test]
    fn test_partial_sodium_from_rub() {
        let result = compute_additional_salt(4.0, 10.0);
        assert_eq!(rub_strings(&result.rub_calculation), ["2.0", "8.0", "24.0", "96.0", "960.0"]);
        assert_eq!(result.recommended_total_sodium.as_str(), "1600.0");
        assert_eq!(result.sodium_from_rub, 960.0);
        assert_eq!(result.additional_sodium_needed.as_str(), "640.0");
        assert_eq!(result.additional_salt_tsp.as_str(), "1.33");
    }

    #[test]
    fn test_rub_exceeds_target() {
        let result = compute_additional_salt(1.0, 200.0);
        assert_eq!(result.rub_calculation.total_rub_sodium.as_str(), "4800.0");
        assert_eq!(result.recommended_total_sodium.as_str(), "400.0");
        assert_eq!(result.additional_sodium_needed.as_str(), "0.0");
        assert_eq!(result.additional_salt_tsp.as_str(), "0.00");
        assert_eq!(result.additional_salt_quarter_tsp.as_str(), "0.00");
        assert_eq!(result.advice, SaltAdvice::NoneNeeded);
    }

    #[test]
    fn test_pinch_advice() {
        // 1 lb needs 400 mg; rub 1.5 mg * 24 quarter tsp = 36 mg; 364 / 480 = 0.76
        assert_eq!(compute_additional_salt(1.0, 1.5).advice, SaltAdvice::Add);
        // 1 lb, rub 16 mg * 24 = 384 mg; 16 / 480 = 0.03
        let result = compute_additional_salt(1.0, 16.0);
        assert_eq!(result.additional_salt_tsp.as_str(), "0.03");
        assert_eq!(result.advice, SaltAdvice::Pinch);
    }

    #[test]
    fn test_racks_are_half_the_weight() {
        for weight in [0.5, 1.0, 3.0, 7.25, 12.0] {
            let rub = compute_rub_sodium(0.0, weight);
            assert_eq!(rub.number_of_racks, Fixed::one(weight / 2.0));
        }
    }

    #[test]
    fn test_rub_sodium_scales_linearly() {
        for weight in [1.0, 2.0, 5.5] {
            let single = compute_rub_sodium(10.0, weight).total_rub_sodium.to_f64();
            let double = compute_rub_sodium(20.0, weight).total_rub_sodium.to_f64();
            assert!((double - 2.0 * single).abs() <= 0.1);
        }
    }

    #[test]
    fn test_additional_never_negative() {
        for (weight, rub) in [(0.1, 1000.0), (1.0, 200.0), (50.0, 1e6), (3.0, 16.7)] {
            let result = compute_additional_salt(weight, rub);
            assert!(result.additional_sodium_needed.to_f64() >= 0.0);
            assert!(result.additional_salt_tsp.to_f64() >= 0.0);
            assert!(!result.additional_salt_tsp.as_str().starts_with('-'));
        }
    }

    #[test]
    fn test_sodium_from_rub_uses_rounded_value() {
        // 1 lb: 24 quarter tsp * 0.0021 = 0.0504 mg, formatted "0.1"
        let result = compute_additional_salt(1.0, 0.0021);
        assert_eq!(result.rub_calculation.total_rub_sodium.as_str(), "0.1");
        assert_eq!(result.sodium_from_rub, 0.1);
        assert_eq!(result.additional_sodium_needed.as_str(), "399.9");
    }

    #[test]
    fn test_rack_count_rounds_stored_value() {
        // 0.3 / 2 is stored just below 0.15
        let rub = compute_rub_sodium(0.0, 0.3);
        assert_eq!(rub.number_of_racks.as_str(), "0.1");
        assert_eq!(rub.total_rub_tbsp.as_str(), "0.6");
    }

    #[test]
    fn test_huge_weight_stays_finite() {
        let rub = compute_rub_sodium(0.0, 1e308);
        assert_ne!(rub.number_of_racks.as_str(), "inf");
        assert_eq!(rub.number_of_racks.to_f64(), 5e307);
    }

    #[test]
    fn test_idempotent() {
        let first = compute_additional_salt(3.3, 47.0);
        let second = compute_additional_salt(3.3, 47.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_constants() {
        let calculator = SodiumCalculator::new(SodiumConstants {
            recommended_sodium_per_lb: 1000.0,
            ..SodiumConstants::default()
        });
        let result = calculator.compute_additional_salt(2.0, 0.0);
        assert_eq!(result.recommended_total_sodium.as_str(), "2000.0");
        assert_eq!(result.additional_salt_tsp.as_str(), "4.17");
    }

    #[test]
    fn test_calculate_from_input() {
        let input = CalculationInput::new(4.0, 10.0).unwrap();
        let result = SodiumCalculator::default().calculate(&input);
        assert_eq!(result, compute_additional_salt(4.0, 10.0));
    }
}
