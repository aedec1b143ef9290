use crate::config::{MAX_MINUTES_INPUT, MAX_SECONDS_INPUT, PROGRESS_DANGER, PROGRESS_WARN};

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Validate the minutes field of the settings form
pub fn validate_minutes(input: &str) -> Result<u32, String> {
    validate_numeric_input(input, Some(0), Some(MAX_MINUTES_INPUT), "Minutes")
}

/// Validate the seconds field of the settings form
pub fn validate_seconds(input: &str) -> Result<u32, String> {
    validate_numeric_input(input, Some(0), Some(MAX_SECONDS_INPUT), "Seconds")
}

/// Replace the minutes part of `duration`, keeping its seconds.
pub fn with_minutes(duration: u32, minutes: u32) -> u32 {
    minutes * 60 + duration % 60
}

/// Replace the seconds part of `duration`, keeping its minutes.
pub fn with_seconds(duration: u32, seconds: u32) -> u32 {
    (duration / 60) * 60 + seconds
}

/// Colour class for the progress ring.
pub fn progress_class(progress: f64) -> &'static str {
    if progress > PROGRESS_WARN {
        "progress-ok"
    } else if progress > PROGRESS_DANGER {
        "progress-warn"
    } else {
        "progress-danger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_and_seconds_are_bounded() {
        assert_eq!(validate_minutes(" 5 "), Ok(5));
        assert_eq!(validate_minutes("61"), Err("Minutes cannot exceed 60".to_string()));
        assert_eq!(validate_seconds("59"), Ok(59));
        assert_eq!(validate_seconds("60"), Err("Seconds cannot exceed 59".to_string()));
        assert_eq!(validate_seconds(""), Err("Seconds cannot be empty".to_string()));
        assert_eq!(validate_seconds("-1"), Err("Seconds must be a valid number".to_string()));
    }

    #[test]
    fn duration_parts_are_replaced_independently() {
        assert_eq!(with_minutes(125, 3), 185);
        assert_eq!(with_seconds(125, 30), 150);
        assert_eq!(with_minutes(59, 0), 59);
    }

    #[test]
    fn progress_classes_follow_thresholds() {
        assert_eq!(progress_class(1.0), "progress-ok");
        assert_eq!(progress_class(0.5), "progress-warn");
        assert_eq!(progress_class(0.25), "progress-danger");
        assert_eq!(progress_class(0.0), "progress-danger");
    }
}
