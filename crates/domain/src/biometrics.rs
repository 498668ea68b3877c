use derive_more::{Display, Into};

/// Body weight in kilograms.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if value <= 0.0 || value >= 1000.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be greater than 0 and less than 1000 kg")]
    OutOfRange,
}

/// Body height in meters.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Height(f32);

impl Height {
    pub fn new(value: f32) -> Result<Self, HeightError> {
        if value <= 0.0 || value >= 3.0 {
            return Err(HeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HeightError {
    #[error("Height must be greater than 0 and less than 3 m")]
    OutOfRange,
}

/// Caller-supplied body measurements used for the derived metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    pub weight: Weight,
    pub height: Height,
}

impl Biometrics {
    pub fn new(weight_kg: f32, height_m: f32) -> Result<Self, BiometricsError> {
        Ok(Self {
            weight: Weight::new(weight_kg)?,
            height: Height::new(height_m)?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BiometricsError {
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error(transparent)]
    Height(#[from] HeightError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(70.0, Ok(Weight(70.0)))]
    #[case(0.1, Ok(Weight(0.1)))]
    #[case(999.9, Ok(Weight(999.9)))]
    #[case(0.0, Err(WeightError::OutOfRange))]
    #[case(-70.0, Err(WeightError::OutOfRange))]
    #[case(1000.0, Err(WeightError::OutOfRange))]
    fn test_weight_new(#[case] value: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(value), expected);
    }

    #[rstest]
    #[case(1.75, Ok(Height(1.75)))]
    #[case(0.5, Ok(Height(0.5)))]
    #[case(0.0, Err(HeightError::OutOfRange))]
    #[case(-1.75, Err(HeightError::OutOfRange))]
    #[case(3.0, Err(HeightError::OutOfRange))]
    fn test_height_new(#[case] value: f32, #[case] expected: Result<Height, HeightError>) {
        assert_eq!(Height::new(value), expected);
    }

    #[rstest]
    #[case(70.0, 1.75, Ok(Biometrics { weight: Weight(70.0), height: Height(1.75) }))]
    #[case(0.0, 1.75, Err(BiometricsError::Weight(WeightError::OutOfRange)))]
    #[case(70.0, 0.0, Err(BiometricsError::Height(HeightError::OutOfRange)))]
    fn test_biometrics_new(
        #[case] weight_kg: f32,
        #[case] height_m: f32,
        #[case] expected: Result<Biometrics, BiometricsError>,
    ) {
        assert_eq!(Biometrics::new(weight_kg, height_m), expected);
    }

    #[rstest]
    #[case(Weight(70.0), "70")]
    #[case(Weight(70.5), "70.5")]
    fn test_weight_display(#[case] weight: Weight, #[case] expected: &str) {
        assert_eq!(weight.to_string(), expected);
    }
}
