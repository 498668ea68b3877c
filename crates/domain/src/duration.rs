use chrono::Duration;

/// Parses a compound duration literal such as `"40m"` or `"1h20m"`.
///
/// A literal is a sequence of `<number><unit>` components with units `h`,
/// `m`, `s` and `ms`. Numbers may carry a decimal fraction (`"1.5h"`). The
/// total span must be positive.
pub fn parse_duration(value: &str) -> Result<Duration, DurationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total_ms = 0.0_f64;
    let mut rest = value;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(|| DurationError::MissingUnit(rest.to_string()))?;

        if number_len == 0 {
            return Err(DurationError::Syntax(value.to_string()));
        }

        let (number, after_number) = rest.split_at(number_len);
        let number = number
            .parse::<f64>()
            .map_err(|_| DurationError::Syntax(value.to_string()))?;

        let unit_len = after_number
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after_number.len());
        let (unit, after_unit) = after_number.split_at(unit_len);

        let unit_ms = match unit {
            "h" => 3_600_000.0,
            "m" => 60_000.0,
            "s" => 1_000.0,
            "ms" => 1.0,
            _ => return Err(DurationError::UnknownUnit(unit.to_string())),
        };

        total_ms += number * unit_ms;
        rest = after_unit;
    }

    #[allow(clippy::cast_possible_truncation)]
    let duration = Duration::milliseconds(total_ms.round() as i64);

    if duration <= Duration::zero() {
        return Err(DurationError::NotPositive);
    }

    Ok(duration)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DurationError {
    #[error("Duration must not be empty")]
    Empty,
    #[error("Invalid duration literal: {0}")]
    Syntax(String),
    #[error("Missing unit in duration literal: {0}")]
    MissingUnit(String),
    #[error("Unknown duration unit: {0}")]
    UnknownUnit(String),
    #[error("Duration must be positive")]
    NotPositive,
}
