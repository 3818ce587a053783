use crate::errors::AppResult;
use crate::models::clock::ClockInput;
use crate::utils::time::round2;
use chrono::{NaiveTime, TimeDelta};
use tracing::warn;

/// Net duration in hours between `start` and `end`, minus `break_minutes`.
///
/// Times are taken on the same reference day; an end earlier than the start
/// crosses midnight. The result is rounded to two decimals and never
/// negative: a break longer than the interval yields `0.0`.
pub fn calculate_hours(
    start: impl Into<ClockInput>,
    end: impl Into<ClockInput>,
    break_minutes: u32,
) -> AppResult<f64> {
    let start = start.into().resolve()?;
    let end = end.into().resolve()?;
    Ok(net_hours(start, end, break_minutes))
}

fn net_hours(start: NaiveTime, end: NaiveTime, break_minutes: u32) -> f64 {
    let elapsed: TimeDelta = if end < start {
        end - start + TimeDelta::hours(24)
    } else {
        end - start
    };

    let net = elapsed - TimeDelta::minutes(i64::from(break_minutes));

    // clamp on the unrounded value
    if net < TimeDelta::zero() {
        warn!(
            %start,
            %end,
            break_minutes,
            computed = net.num_seconds() as f64 / 3600.0,
            "break exceeds elapsed time, duration clamped to 0"
        );
        return 0.0;
    }
    round2(net.num_seconds() as f64 / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn plain_day() {
        assert_eq!(calculate_hours("08:30", "17:00", 0).unwrap(), 8.5);
        assert_eq!(calculate_hours("08:30", "17:00", 45).unwrap(), 7.75);
    }

    #[test]
    fn overnight_session() {
        assert_eq!(calculate_hours("23:00", "01:00", 0).unwrap(), 2.0);
        assert_eq!(calculate_hours("22:15", "06:45", 30).unwrap(), 8.0);
    }

    #[test]
    fn break_longer_than_interval_clamps_to_zero() {
        assert_eq!(calculate_hours("09:00", "09:30", 60).unwrap(), 0.0);
    }

    #[test]
    fn break_barely_longer_than_interval_is_positive_zero() {
        let h = calculate_hours("09:00:00", "09:59:50", 60).unwrap();
        assert_eq!(h, 0.0);
        assert!(!h.is_sign_negative());
        assert_eq!(crate::utils::time::format_hours(h), "0.00");
    }

    #[test]
    fn zero_length_is_zero() {
        assert_eq!(calculate_hours("09:00", "09:00", 0).unwrap(), 0.0);
    }

    #[test]
    fn rounds_thirds_of_an_hour() {
        assert_eq!(calculate_hours("08:00", "08:20", 0).unwrap(), 0.33);
        assert_eq!(calculate_hours("08:00", "08:40", 0).unwrap(), 0.67);
    }

    #[test]
    fn accepts_text_and_structured_times() {
        let start = NaiveTime::from_hms_opt(7, 45, 0).unwrap();
        assert_eq!(calculate_hours(start, "16:15:00", 30).unwrap(), 8.0);
        assert_eq!(
            calculate_hours("07:45:00", String::from("16:15"), 30).unwrap(),
            8.0
        );
    }

    #[test]
    fn seconds_count_toward_duration() {
        assert_eq!(calculate_hours("08:00:00", "08:00:36", 0).unwrap(), 0.01);
    }

    #[test]
    fn malformed_text_fails() {
        assert!(matches!(
            calculate_hours("8h", "17:00", 0),
            Err(AppError::InvalidTime(_))
        ));
        assert!(matches!(
            calculate_hours("08:00", "", 0),
            Err(AppError::InvalidTime(_))
        ));
    }

    #[test]
    fn matches_linear_formula_when_end_after_start() {
        for (s, e, b) in [(6u32, 19u32, 0u32), (7, 12, 15), (9, 18, 90), (0, 23, 5)] {
            let start = NaiveTime::from_hms_opt(s, 0, 0).unwrap();
            let end = NaiveTime::from_hms_opt(e, 0, 0).unwrap();
            let expected = round2((e - s) as f64 - b as f64 / 60.0).max(0.0);
            assert_eq!(calculate_hours(start, end, b).unwrap(), expected);
        }
    }
}
