//! Habit streak advancement
//!
//! A streak records a count and the last completed calendar date. Marking a
//! habit complete compares the stored date with "today" and either leaves
//! the record alone, extends it, or restarts it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What happened to the streak when it was advanced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// Already completed today, nothing changed.
    Unchanged,
    /// Completed on the day after the previous completion.
    Incremented,
    /// Gap of two or more days (or a backwards clock), restarted at 1.
    Reset,
}

/// Result of applying a completion to a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakAdvance {
    pub count: i32,
    pub last_completed_date: NaiveDate,
    pub change: StreakChange,
}

/// Apply a completion for `today` against the stored streak state.
///
/// Same day is a no-op, exactly one day later increments, anything else
/// resets the count to 1. A negative gap from clock skew falls into the
/// reset branch rather than being rejected.
pub fn advance(count: i32, last_completed_date: NaiveDate, today: NaiveDate) -> StreakAdvance {
    let gap_days = (today - last_completed_date).num_days();

    match gap_days {
        0 => StreakAdvance {
            count,
            last_completed_date,
            change: StreakChange::Unchanged,
        },
        1 => StreakAdvance {
            count: count + 1,
            last_completed_date: today,
            change: StreakChange::Incremented,
        },
        _ => StreakAdvance {
            count: 1,
            last_completed_date: today,
            change: StreakChange::Reset,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(5, date(2026, 8, 6), date(2026, 8, 7), 6, StreakChange::Incremented)]
    #[case(5, date(2026, 8, 7), date(2026, 8, 7), 5, StreakChange::Unchanged)]
    #[case(5, date(2026, 8, 5), date(2026, 8, 7), 1, StreakChange::Reset)]
    #[case(5, date(2026, 7, 1), date(2026, 8, 7), 1, StreakChange::Reset)]
    // Clock skew: "today" earlier than the stored date restarts the streak
    #[case(5, date(2026, 8, 8), date(2026, 8, 7), 1, StreakChange::Reset)]
    fn test_advance_cases(
        #[case] count: i32,
        #[case] last: NaiveDate,
        #[case] today: NaiveDate,
        #[case] expected_count: i32,
        #[case] expected_change: StreakChange,
    ) {
        let advanced = advance(count, last, today);
        assert_eq!(advanced.count, expected_count);
        assert_eq!(advanced.change, expected_change);
    }

    #[test]
    fn test_increment_moves_date_forward() {
        let today = date(2026, 8, 7);
        let advanced = advance(3, date(2026, 8, 6), today);
        assert_eq!(advanced.last_completed_date, today);
    }

    #[test]
    fn test_same_day_keeps_stored_date() {
        let today = date(2026, 8, 7);
        let advanced = advance(3, today, today);
        assert_eq!(advanced.last_completed_date, today);
        assert_eq!(advanced.count, 3);
    }

    #[test]
    fn test_month_boundary_increment() {
        let advanced = advance(9, date(2026, 7, 31), date(2026, 8, 1));
        assert_eq!(advanced.count, 10);
        assert_eq!(advanced.change, StreakChange::Incremented);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// The advanced count is always positive and at most one more than
        /// the stored count.
        #[test]
        fn prop_count_stays_positive(
            count in 1i32..10_000,
            last_offset in -400i64..400
        ) {
            let today = date(2026, 8, 7);
            let last = today - chrono::Duration::days(last_offset);
            let advanced = advance(count, last, today);

            prop_assert!(advanced.count >= 1);
            prop_assert!(advanced.count <= count + 1);
        }

        /// After any advance, the stored date is never in the future
        /// relative to "today" unless the record was left untouched.
        #[test]
        fn prop_date_lands_on_today_unless_unchanged(
            count in 1i32..10_000,
            last_offset in -400i64..400
        ) {
            let today = date(2026, 8, 7);
            let last = today - chrono::Duration::days(last_offset);
            let advanced = advance(count, last, today);

            if advanced.change != StreakChange::Unchanged {
                prop_assert_eq!(advanced.last_completed_date, today);
            }
        }
    }
}
