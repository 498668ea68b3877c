use std::fmt;

/// Supported training kinds.
///
/// The labels in the record format are Russian ("Ходьба", "Бег"), matching
/// the tracker's input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Walking,
    Running,
}

impl TryFrom<&str> for Activity {
    type Error = ActivityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Ходьба" => Ok(Activity::Walking),
            "Бег" => Ok(Activity::Running),
            unknown => Err(ActivityError::Unknown(unknown.to_string())),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Activity::Walking => "Ходьба",
                Activity::Running => "Бег",
            }
        )
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ActivityError {
    #[error("Unknown training type: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Ходьба", Ok(Activity::Walking))]
    #[case("Бег", Ok(Activity::Running))]
    #[case("Плавание", Err(ActivityError::Unknown("Плавание".to_string())))]
    #[case("walking", Err(ActivityError::Unknown("walking".to_string())))]
    #[case("", Err(ActivityError::Unknown(String::new())))]
    fn test_activity_from_str(
        #[case] label: &str,
        #[case] expected: Result<Activity, ActivityError>,
    ) {
        assert_eq!(Activity::try_from(label), expected);
    }

    #[rstest]
    #[case(Activity::Walking, "Ходьба")]
    #[case(Activity::Running, "Бег")]
    fn test_activity_display(#[case] activity: Activity, #[case] expected: &str) {
        assert_eq!(activity.to_string(), expected);
    }
}
