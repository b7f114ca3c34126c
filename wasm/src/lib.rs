//! FitLikeUs WASM Module
//!
//! WebAssembly bindings so a browser client can run the consistency and
//! streak calculations locally, against whatever workout window it has
//! already fetched.

use chrono::{DateTime, NaiveDate, Utc};
use fitlikeus_shared::consistency::{self, WorkoutSample};
use fitlikeus_shared::streaks;
use fitlikeus_shared::types::ConsistencyResponse;
use wasm_bindgen::prelude::*;

fn build_samples(timestamps_ms: &[f64], reps: &[i32]) -> Vec<WorkoutSample> {
    timestamps_ms
        .iter()
        .zip(reps.iter())
        .filter_map(|(&ts, &r)| {
            DateTime::<Utc>::from_timestamp_millis(ts as i64).map(|recorded_at| WorkoutSample {
                recorded_at,
                reps: r,
            })
        })
        .collect()
}

/// Compute the consistency snapshot for workout samples given as parallel
/// arrays of epoch-millisecond timestamps (newest first) and rep counts.
///
/// Returns the snapshot (display points plus metrics) serialized as JSON.
#[wasm_bindgen]
pub fn consistency_snapshot(
    timestamps_ms: &[f64],
    reps: &[i32],
    now_ms: f64,
    window_days: u32,
) -> String {
    let samples = build_samples(timestamps_ms, reps);
    let today = DateTime::<Utc>::from_timestamp_millis(now_ms as i64)
        .map(|now| now.date_naive())
        .unwrap_or_default();

    let response = ConsistencyResponse {
        points: consistency::window_points(&samples),
        metrics: consistency::compute_metrics(&samples, today, window_days),
    };

    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

/// Count consecutive workout days walking back from "now"
#[wasm_bindgen]
pub fn streak_days(timestamps_ms: &[f64], now_ms: f64, window_days: u32) -> u32 {
    let reps = vec![1; timestamps_ms.len()];
    let samples = build_samples(timestamps_ms, &reps);
    let today = DateTime::<Utc>::from_timestamp_millis(now_ms as i64)
        .map(|now| now.date_naive())
        .unwrap_or_default();

    consistency::compute_metrics(&samples, today, window_days).streak_days
}

/// Apply the habit completion rule to a stored streak
///
/// Dates are YYYY-MM-DD strings. Returns `{count, last_completed_date,
/// change}` as JSON, or an empty object when a date fails to parse.
#[wasm_bindgen]
pub fn advance_streak(count: i32, last_completed_date: &str, today: &str) -> String {
    let (Ok(last), Ok(today)) = (
        last_completed_date.parse::<NaiveDate>(),
        today.parse::<NaiveDate>(),
    ) else {
        return "{}".to_string();
    };

    let advanced = streaks::advance(count, last, today);
    serde_json::json!({
        "count": advanced.count,
        "last_completed_date": advanced.last_completed_date.to_string(),
        "change": advanced.change,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: f64 = 86_400_000.0;

    #[test]
    fn test_consistency_snapshot_json() {
        let now = 1_786_000_000_000.0;
        let timestamps = [now, now - DAY_MS, now - 2.0 * DAY_MS];
        let reps = [30, 20, 10];

        let json = consistency_snapshot(&timestamps, &reps, now, 7);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["metrics"]["total_workouts"], 3);
        assert_eq!(parsed["metrics"]["average_reps"], 20);
        assert_eq!(parsed["metrics"]["streak_days"], 3);
        assert_eq!(parsed["points"].as_array().unwrap().len(), 3);
        // Chronological: oldest first
        assert_eq!(parsed["points"][0]["value"], 10);
    }

    #[test]
    fn test_streak_days_stops_at_gap() {
        let now = 1_786_000_000_000.0;
        // Today, yesterday, then a gap before the fourth day back
        let timestamps = [now, now - DAY_MS, now - 4.0 * DAY_MS];

        assert_eq!(streak_days(&timestamps, now, 7), 2);
    }

    #[test]
    fn test_advance_streak_increments() {
        let json = advance_streak(5, "2026-08-06", "2026-08-07");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["count"], 6);
        assert_eq!(parsed["last_completed_date"], "2026-08-07");
        assert_eq!(parsed["change"], "incremented");
    }

    #[test]
    fn test_advance_streak_resets_on_gap() {
        let json = advance_streak(5, "2026-08-01", "2026-08-07");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["count"], 1);
        assert_eq!(parsed["change"], "reset");
    }

    #[test]
    fn test_advance_streak_bad_date_yields_empty_object() {
        assert_eq!(advance_streak(5, "not-a-date", "2026-08-07"), "{}");
    }
}
