#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Fitness-activity summaries from comma-separated text records.
//!
//! A raw record line is parsed into an [`ActivityRecord`], derived metrics
//! (distance, mean speed, calories) are computed under a [`ModelConfig`]
//! and rendered as a fixed-order text report. [`day_info`] handles the
//! two-field day form, [`training_info`] the three-field training form.

pub mod activity;
pub mod biometrics;
pub mod duration;
pub mod model;
pub mod record;
pub mod report;

pub use activity::{Activity, ActivityError};
pub use biometrics::{Biometrics, BiometricsError, Height, HeightError, Weight, WeightError};
pub use duration::{DurationError, parse_duration};
pub use model::{CalorieModel, DistanceCoefficients, ModelConfig, StrideModel};
pub use record::{ActivityRecord, RecordError, Steps, StepsError};
pub use report::{
    ActivityReport, ReportError, day_info, distance_km, mean_speed_kmh, spent_calories,
    training_info,
};
