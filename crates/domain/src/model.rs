use crate::Height;

/// Step length in meters used for day records, independent of height.
pub const FIXED_STEP_LENGTH_M: f32 = 0.65;

/// Step length as a fraction of body height used for training records.
pub const STEP_LENGTH_COEFFICIENT: f32 = 0.45;

/// Fraction of the running calorie burn attributed to walking.
pub const WALKING_CALORIES_FACTOR: f32 = 0.5;

/// Tuned distance-based coefficients for walking.
pub const WALKING_DISTANCE_COEFFICIENTS: DistanceCoefficients = DistanceCoefficients {
    per_km: 0.53,
    per_step: 0.02,
};

/// Tuned distance-based coefficients for running.
pub const RUNNING_DISTANCE_COEFFICIENTS: DistanceCoefficients = DistanceCoefficients {
    per_km: 1.036,
    per_step: 0.03,
};

/// How the per-step distance is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrideModel {
    /// A fixed step length in meters.
    Fixed(f32),
    /// Step length as body height times a coefficient.
    HeightBased(f32),
}

impl StrideModel {
    #[must_use]
    pub fn step_length_m(self, height: Height) -> f32 {
        match self {
            StrideModel::Fixed(meters) => meters,
            StrideModel::HeightBased(coefficient) => f32::from(height) * coefficient,
        }
    }
}

/// Per-activity coefficients of the distance-based calorie formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceCoefficients {
    /// kcal per kg of body weight per km.
    pub per_km: f32,
    /// kcal per step.
    pub per_step: f32,
}

/// The calorie formula family.
///
/// A config carries exactly one family. The two families are not
/// numerically equivalent and must not be mixed within one pipeline; the
/// enum makes mixing unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalorieModel {
    /// kcal = weight × speed × minutes ÷ 60, scaled by `walking_factor`
    /// for walking.
    SpeedBased { walking_factor: f32 },
    /// kcal = weight × distance × `per_km` + steps × `per_step`.
    DistanceBased {
        walking: DistanceCoefficients,
        running: DistanceCoefficients,
    },
}

impl CalorieModel {
    /// The distance-based family with the tuned default coefficients.
    #[must_use]
    pub fn distance_based() -> Self {
        CalorieModel::DistanceBased {
            walking: WALKING_DISTANCE_COEFFICIENTS,
            running: RUNNING_DISTANCE_COEFFICIENTS,
        }
    }
}

/// Tunable model parameters shared by all calculations of one pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    pub stride: StrideModel,
    pub calories: CalorieModel,
}

impl ModelConfig {
    /// Model for day summaries: fixed step length, speed-based calories.
    #[must_use]
    pub fn day() -> Self {
        Self {
            stride: StrideModel::Fixed(FIXED_STEP_LENGTH_M),
            calories: CalorieModel::SpeedBased {
                walking_factor: WALKING_CALORIES_FACTOR,
            },
        }
    }

    /// Model for training summaries: height-based step length, speed-based
    /// calories.
    #[must_use]
    pub fn training() -> Self {
        Self {
            stride: StrideModel::HeightBased(STEP_LENGTH_COEFFICIENT),
            calories: CalorieModel::SpeedBased {
                walking_factor: WALKING_CALORIES_FACTOR,
            },
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::training()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn height(value: f32) -> Height {
        Height::new(value).unwrap()
    }

    #[rstest]
    #[case(StrideModel::Fixed(0.65), 1.75, 0.65)]
    #[case(StrideModel::Fixed(0.65), 1.2, 0.65)]
    #[case(StrideModel::HeightBased(0.45), 1.75, 0.7875)]
    #[case(StrideModel::HeightBased(0.45), 1.6, 0.72)]
    fn test_step_length_m(
        #[case] stride: StrideModel,
        #[case] height_m: f32,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(stride.step_length_m(height(height_m)), expected);
    }

    #[test]
    fn test_model_config_presets() {
        assert_eq!(
            ModelConfig::day().stride,
            StrideModel::Fixed(FIXED_STEP_LENGTH_M)
        );
        assert_eq!(
            ModelConfig::training().stride,
            StrideModel::HeightBased(STEP_LENGTH_COEFFICIENT)
        );
        assert_eq!(ModelConfig::default(), ModelConfig::training());
    }
}
