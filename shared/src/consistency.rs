//! Consistency windowing and streak metrics
//!
//! Operates on the N most recent workout samples (newest first, as the
//! backend query returns them) and produces the chronological display
//! sequence plus summary metrics shown on the dashboard.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default dashboard window: one week of workouts.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One workout sample fed into the computation.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutSample {
    pub recorded_at: DateTime<Utc>,
    pub reps: i32,
}

/// A display point: short weekday label and the sample's rep count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsistencyPoint {
    pub label: String,
    pub value: i32,
}

/// Summary metrics over the window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsistencyMetrics {
    pub total_workouts: u32,
    pub average_reps: i32,
    pub streak_days: u32,
    pub max_day_value: i32,
}

/// Short weekday name used as the display label.
fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Map newest-first samples into a chronological (oldest first) display
/// sequence. Count and relative order of the input are preserved.
pub fn window_points(samples: &[WorkoutSample]) -> Vec<ConsistencyPoint> {
    samples
        .iter()
        .rev()
        .map(|s| ConsistencyPoint {
            label: weekday_label(s.recorded_at.date_naive().weekday()).to_string(),
            value: s.reps,
        })
        .collect()
}

/// Compute summary metrics for the window ending at `today`.
///
/// `streak_days` walks backward from `today` across at most `window_days`
/// calendar days: days more recent than the latest workout are skipped,
/// then consecutive workout days are counted until the first gap.
/// Day matching is by full calendar date, so a workout from a previous
/// week cannot satisfy this week's slot for the same weekday.
pub fn compute_metrics(
    samples: &[WorkoutSample],
    today: NaiveDate,
    window_days: u32,
) -> ConsistencyMetrics {
    if samples.is_empty() {
        return ConsistencyMetrics::default();
    }

    let total_workouts = samples.len() as u32;
    let total_reps: i64 = samples.iter().map(|s| s.reps as i64).sum();
    let average_reps = (total_reps as f64 / total_workouts as f64).round() as i32;
    let max_day_value = samples.iter().map(|s| s.reps).max().unwrap_or(0);

    let workout_days: HashSet<NaiveDate> =
        samples.iter().map(|s| s.recorded_at.date_naive()).collect();

    let mut streak_days = 0u32;
    for offset in 0..window_days {
        let day = today - chrono::Duration::days(offset as i64);
        if workout_days.contains(&day) {
            streak_days += 1;
        } else if streak_days > 0 {
            break;
        }
    }

    ConsistencyMetrics {
        total_workouts,
        average_reps,
        streak_days,
        max_day_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn sample(days_ago: i64, reps: i32) -> WorkoutSample {
        let base = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        WorkoutSample {
            recorded_at: base - chrono::Duration::days(days_ago),
            reps,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_empty_input_yields_zero_metrics() {
        let metrics = compute_metrics(&[], today(), DEFAULT_WINDOW_DAYS);
        assert_eq!(metrics, ConsistencyMetrics::default());
        assert!(window_points(&[]).is_empty());
    }

    #[test]
    fn test_metrics_for_full_week() {
        // One workout per day for seven days, newest first
        let samples: Vec<_> = (0..7).map(|d| sample(d, 10 + d as i32)).collect();
        let metrics = compute_metrics(&samples, today(), 7);

        assert_eq!(metrics.total_workouts, 7);
        assert_eq!(metrics.streak_days, 7);
        assert_eq!(metrics.max_day_value, 16);
        // round((10+11+...+16)/7) = round(13.0)
        assert_eq!(metrics.average_reps, 13);
    }

    #[test]
    fn test_streak_stops_at_first_gap() {
        // Workouts today, yesterday, then a gap, then four days ago
        let samples = vec![sample(0, 20), sample(1, 15), sample(4, 30)];
        let metrics = compute_metrics(&samples, today(), 7);

        assert_eq!(metrics.streak_days, 2);
        assert_eq!(metrics.total_workouts, 3);
        assert_eq!(metrics.max_day_value, 30);
    }

    #[test]
    fn test_leading_rest_days_do_not_break_streak() {
        // No workout today or yesterday; streak ran the three days before
        let samples = vec![sample(2, 10), sample(3, 10), sample(4, 10)];
        let metrics = compute_metrics(&samples, today(), 7);

        assert_eq!(metrics.streak_days, 3);
    }

    #[test]
    fn test_last_week_same_weekday_does_not_count() {
        // A workout exactly seven days ago shares today's weekday name but
        // must not extend a streak that includes today.
        let samples = vec![sample(0, 12), sample(7, 12)];
        let metrics = compute_metrics(&samples, today(), 7);

        assert_eq!(metrics.streak_days, 1);
    }

    #[test]
    fn test_window_points_are_chronological() {
        let samples = vec![sample(0, 30), sample(1, 20), sample(2, 10)];
        let points = window_points(&samples);

        assert_eq!(points.len(), 3);
        // Oldest first after the reversal
        assert_eq!(points[0].value, 10);
        assert_eq!(points[2].value, 30);
        assert_eq!(points[2].label, "Fri"); // 2026-08-07
    }

    #[test]
    fn test_multiple_workouts_same_day_count_once_for_streak() {
        let samples = vec![sample(0, 10), sample(0, 20), sample(1, 5)];
        let metrics = compute_metrics(&samples, today(), 7);

        assert_eq!(metrics.total_workouts, 3);
        assert_eq!(metrics.streak_days, 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Metrics follow directly from the sample set: exact count, exact
        /// rounded average, max bounded by inputs.
        #[test]
        fn prop_metrics_match_inputs(
            reps in prop::collection::vec(1i32..=999, 1..7),
            offsets in prop::collection::vec(0i64..7, 1..7)
        ) {
            let n = reps.len().min(offsets.len());
            let samples: Vec<_> = (0..n).map(|i| sample(offsets[i], reps[i])).collect();

            let metrics = compute_metrics(&samples, today(), DEFAULT_WINDOW_DAYS);

            prop_assert_eq!(metrics.total_workouts as usize, n);

            let sum: i64 = samples.iter().map(|s| s.reps as i64).sum();
            let expected_avg = (sum as f64 / n as f64).round() as i32;
            prop_assert_eq!(metrics.average_reps, expected_avg);

            let expected_max = samples.iter().map(|s| s.reps).max().unwrap();
            prop_assert_eq!(metrics.max_day_value, expected_max);
        }

        /// The streak never exceeds the window size, nor the number of
        /// distinct workout days.
        #[test]
        fn prop_streak_bounded(
            offsets in prop::collection::vec(0i64..30, 0..20),
            window in 1u32..14
        ) {
            let samples: Vec<_> = offsets.iter().map(|&d| sample(d, 10)).collect();
            let metrics = compute_metrics(&samples, today(), window);

            prop_assert!(metrics.streak_days <= window);

            let distinct: HashSet<_> =
                samples.iter().map(|s| s.recorded_at.date_naive()).collect();
            prop_assert!(metrics.streak_days as usize <= distinct.len());
        }

        /// Windowing preserves record count and relative chronological order.
        #[test]
        fn prop_window_round_trip(
            reps in prop::collection::vec(1i32..=999, 0..7)
        ) {
            // Newest first: day offsets ascend with index
            let samples: Vec<_> = reps
                .iter()
                .enumerate()
                .map(|(i, &r)| sample(i as i64, r))
                .collect();

            let points = window_points(&samples);

            prop_assert_eq!(points.len(), samples.len());
            for (point, original) in points.iter().zip(samples.iter().rev()) {
                prop_assert_eq!(point.value, original.reps);
            }
        }
    }
}
