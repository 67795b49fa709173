//! Property tests for shift pay and conflict detection.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use shift_engine::availability::{InMemoryCommitmentStore, check_conflicts};
use shift_engine::calculation::compute_shift;
use shift_engine::models::{Commitment, CommitmentKind};

fn clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn time(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

/// Rates between 0.000 and 999.999.
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|milli| Decimal::new(milli, 3))
}

proptest! {
    #[test]
    fn same_day_shift_hours_match_elapsed_minutes(
        (start, len) in (0u32..1440).prop_flat_map(|start| (Just(start), 0..1440 - start)),
        rate in rate(),
    ) {
        let end = start + len;

        let result = compute_shift(&clock(start), &clock(end), 0, rate).unwrap();
        let expected = (Decimal::from(len) / Decimal::from(60))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(result.total_hours, expected);
    }

    #[test]
    fn hours_and_amount_are_never_negative(
        start in 0u32..1440,
        end in 0u32..1440,
        break_minutes in 0i64..2000,
        rate in rate(),
    ) {
        let result = compute_shift(&clock(start), &clock(end), break_minutes, rate).unwrap();
        prop_assert!(result.total_hours >= Decimal::ZERO);
        prop_assert!(result.total_amount >= Decimal::ZERO);
        prop_assert!(result.total_hours < Decimal::from(24));
    }

    #[test]
    fn amount_is_rounded_hours_times_rate(
        start in 0u32..1440,
        end in 0u32..1440,
        rate in rate(),
    ) {
        let result = compute_shift(&clock(start), &clock(end), 0, rate).unwrap();
        let expected = (result.total_hours * rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(result.total_amount, expected);
        prop_assert_eq!(result.total_amount.scale(), 2);
    }

    #[test]
    fn shift_and_its_complement_cover_a_day(
        start in 0u32..1440,
        end in 0u32..1440,
    ) {
        prop_assume!(start != end);
        let forward = compute_shift(&clock(start), &clock(end), 0, Decimal::ONE).unwrap();
        let backward = compute_shift(&clock(end), &clock(start), 0, Decimal::ONE).unwrap();

        // Each side rounds to the nearest 0.01h, so together they are within
        // one hundredth of 24h.
        let sum = forward.total_hours + backward.total_hours;
        prop_assert!((sum - Decimal::from(24)).abs() <= Decimal::new(1, 2));
    }

    #[test]
    fn back_to_back_windows_never_conflict(
        start in 0u32..1380,
        len in 1u32..60,
        next_len in 1u32..60,
    ) {
        let boundary = start + len;
        let next_end = (boundary + next_len).min(1439);
        prop_assume!(next_end > boundary);

        let store = InMemoryCommitmentStore::with_commitments(vec![Commitment::timed(
            "bk_1",
            "staff_1",
            date(),
            CommitmentKind::Booking,
            time(start),
            time(boundary),
        )]);

        let after = check_conflicts(&store, "staff_1", date(), Some(&clock(boundary)), Some(&clock(next_end))).unwrap();
        prop_assert!(!after.has_conflict);

        let before_start = start.saturating_sub(next_len);
        prop_assume!(before_start < start);
        let before = check_conflicts(&store, "staff_1", date(), Some(&clock(before_start)), Some(&clock(start))).unwrap();
        prop_assert!(!before.has_conflict);
    }

    #[test]
    fn overlap_rule_matches_half_open_intervals(
        c_start in 0u32..1439,
        c_len in 1u32..600,
        r_start in 0u32..1439,
        r_len in 1u32..600,
    ) {
        let c_end = (c_start + c_len).min(1439);
        let r_end = (r_start + r_len).min(1439);
        prop_assume!(c_end > c_start && r_end > r_start);

        let store = InMemoryCommitmentStore::with_commitments(vec![Commitment::timed(
            "bk_1",
            "staff_1",
            date(),
            CommitmentKind::Booking,
            time(c_start),
            time(c_end),
        )]);
        let result = check_conflicts(&store, "staff_1", date(), Some(&clock(r_start)), Some(&clock(r_end))).unwrap();

        let expected = r_start < c_end && c_start < r_end;
        prop_assert_eq!(result.has_conflict, expected);
        if expected {
            let overlap = r_end.min(c_end) - r_start.max(c_start);
            prop_assert_eq!(result.conflicts[0].overlap_minutes, Some(overlap));
        }
    }
}
