use std::fmt;

use chrono::Duration;
use log::{debug, warn};

use crate::{
    Activity, ActivityError, ActivityRecord, Biometrics, CalorieModel, Height, ModelConfig,
    RecordError, Steps, StrideModel,
};

const M_IN_KM: f32 = 1000.0;
const MIN_IN_H: f32 = 60.0;
const MS_IN_H: f32 = 3_600_000.0;

/// Distance in kilometers covered by `steps` under the given stride model.
#[must_use]
pub fn distance_km(steps: Steps, height: Height, stride: StrideModel) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let steps = steps.count() as f32;
    steps * stride.step_length_m(height) / M_IN_KM
}

/// Mean speed in km/h.
///
/// Returns 0 for non-positive durations instead of failing.
#[must_use]
pub fn mean_speed_kmh(
    steps: Steps,
    height: Height,
    stride: StrideModel,
    duration: Duration,
) -> f32 {
    let hours = duration_hours(duration);

    if hours <= 0.0 {
        return 0.0;
    }

    distance_km(steps, height, stride) / hours
}

/// Calories burned during one activity under the configured model.
#[must_use]
pub fn spent_calories(
    activity: Activity,
    steps: Steps,
    biometrics: Biometrics,
    duration: Duration,
    config: &ModelConfig,
) -> f32 {
    let weight = f32::from(biometrics.weight);

    match config.calories {
        CalorieModel::SpeedBased { walking_factor } => {
            let speed = mean_speed_kmh(steps, biometrics.height, config.stride, duration);
            let calories = weight * speed * duration_minutes(duration) / MIN_IN_H;
            match activity {
                Activity::Walking => walking_factor * calories,
                Activity::Running => calories,
            }
        }
        CalorieModel::DistanceBased { walking, running } => {
            let coefficients = match activity {
                Activity::Walking => walking,
                Activity::Running => running,
            };
            #[allow(clippy::cast_precision_loss)]
            let step_calories = steps.count() as f32 * coefficients.per_step;
            weight * distance_km(steps, biometrics.height, config.stride) * coefficients.per_km
                + step_calories
        }
    }
}

/// Derived metrics of one record, rounded for presentation.
///
/// All quantities are rounded to 2 decimal places, half away from zero,
/// before being stored; `Display` renders the fixed-order report.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityReport {
    pub activity: Option<Activity>,
    pub steps: Steps,
    pub duration_h: f32,
    pub distance_km: f32,
    pub mean_speed_kmh: Option<f32>,
    pub calories_kcal: f32,
}

impl ActivityReport {
    /// Day summary: steps, distance and walking calorie burn. No speed
    /// line.
    #[must_use]
    pub fn day(record: &ActivityRecord, biometrics: Biometrics, config: &ModelConfig) -> Self {
        Self {
            activity: None,
            steps: record.steps,
            duration_h: round2(duration_hours(record.duration)),
            distance_km: round2(distance_km(record.steps, biometrics.height, config.stride)),
            mean_speed_kmh: None,
            calories_kcal: round2(spent_calories(
                Activity::Walking,
                record.steps,
                biometrics,
                record.duration,
                config,
            )),
        }
    }

    /// Training summary for a record with a recognized activity label.
    pub fn training(
        record: &ActivityRecord,
        biometrics: Biometrics,
        config: &ModelConfig,
    ) -> Result<Self, ActivityError> {
        let activity = Activity::try_from(record.label.as_deref().unwrap_or_default())?;

        Ok(Self {
            activity: Some(activity),
            steps: record.steps,
            duration_h: round2(duration_hours(record.duration)),
            distance_km: round2(distance_km(record.steps, biometrics.height, config.stride)),
            mean_speed_kmh: Some(round2(mean_speed_kmh(
                record.steps,
                biometrics.height,
                config.stride,
                record.duration,
            ))),
            calories_kcal: round2(spent_calories(
                activity,
                record.steps,
                biometrics,
                record.duration,
                config,
            )),
        })
    }
}

impl fmt::Display for ActivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(activity) = self.activity {
            writeln!(f, "Тип тренировки: {activity}")?;
            writeln!(f, "Длительность: {:.2} ч.", self.duration_h)?;
            writeln!(f, "Дистанция: {:.2} км.", self.distance_km)?;
            if let Some(speed) = self.mean_speed_kmh {
                writeln!(f, "Скорость: {speed:.2} км/ч")?;
            }
            writeln!(f, "Сожгли калорий: {:.2}", self.calories_kcal)
        } else {
            writeln!(f, "Количество шагов: {}.", self.steps)?;
            writeln!(f, "Дистанция составила {:.2} км.", self.distance_km)?;
            writeln!(f, "Вы сожгли {:.2} ккал.", self.calories_kcal)
        }
    }
}

/// Builds the formatted day summary for a two-field record.
pub fn day_info(
    raw: &str,
    biometrics: Biometrics,
    config: &ModelConfig,
) -> Result<String, ReportError> {
    let record = ActivityRecord::parse_day(raw)
        .inspect_err(|err| warn!("rejected day record {raw:?}: {err}"))?;
    let report = ActivityReport::day(&record, biometrics, config);

    debug!("day report for {} steps", report.steps);

    Ok(report.to_string())
}

/// Builds the formatted training summary for a three-field record.
pub fn training_info(
    raw: &str,
    biometrics: Biometrics,
    config: &ModelConfig,
) -> Result<String, ReportError> {
    let record = ActivityRecord::parse_training(raw)
        .inspect_err(|err| warn!("rejected training record {raw:?}: {err}"))?;
    let report = ActivityReport::training(&record, biometrics, config)
        .inspect_err(|err| warn!("rejected training record {raw:?}: {err}"))?;

    debug!("training report for {} steps", report.steps);

    Ok(report.to_string())
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ReportError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Activity(#[from] ActivityError),
}

#[allow(clippy::cast_precision_loss)]
fn duration_hours(duration: Duration) -> f32 {
    duration.num_milliseconds() as f32 / MS_IN_H
}

#[allow(clippy::cast_precision_loss)]
fn duration_minutes(duration: Duration) -> f32 {
    duration.num_milliseconds() as f32 / MS_IN_H * MIN_IN_H
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
