// Property-based tests for report aggregation

use build_report::record::{BuildRecord, CacheOutcome};
use build_report::report::Report;
use proptest::prelude::*;
use std::time::Duration;

fn arb_record() -> impl Strategy<Value = BuildRecord> {
    (
        "[a-z]{1,8}\\.cpp",
        0u64..600_000,
        any::<bool>(),
        proptest::option::of(-1i32..=255),
    )
        .prop_map(|(unit, millis, hit, exit_status)| BuildRecord {
            unit,
            elapsed: Duration::from_millis(millis),
            cache: if hit {
                CacheOutcome::Hit
            } else {
                CacheOutcome::Miss
            },
            exit_status,
        })
}

proptest! {
    /// Total elapsed time equals the sum of individual elapsed times
    #[test]
    fn prop_total_is_additive(records in proptest::collection::vec(arb_record(), 0..50)) {
        let expected: Duration = records.iter().map(|r| r.elapsed).sum();
        let report = Report::from_records(records);
        prop_assert_eq!(report.total_elapsed, expected);
    }

    /// Hit rate is in [0, 1] when records exist, undefined otherwise
    #[test]
    fn prop_hit_rate_bounds(records in proptest::collection::vec(arb_record(), 0..50)) {
        let count = records.len();
        let report = Report::from_records(records);
        match report.hit_rate() {
            Some(rate) => {
                prop_assert!(count > 0);
                prop_assert!((0.0..=1.0).contains(&rate));
            }
            None => prop_assert_eq!(count, 0),
        }
    }

    /// Hits and misses partition the record set
    #[test]
    fn prop_hits_and_misses_partition(records in proptest::collection::vec(arb_record(), 0..50)) {
        let count = records.len();
        let report = Report::from_records(records);
        prop_assert_eq!(report.hits + report.misses, count);
        prop_assert_eq!(report.count, count);
    }

    /// Ranking is descending by elapsed time with lexical tiebreak
    #[test]
    fn prop_ranking_is_ordered(records in proptest::collection::vec(arb_record(), 0..50)) {
        let report = Report::from_records(records);
        for pair in report.ranked().windows(2) {
            let ordered = pair[0].elapsed > pair[1].elapsed
                || (pair[0].elapsed == pair[1].elapsed && pair[0].unit <= pair[1].unit);
            prop_assert!(ordered, "ranking violated between {:?} and {:?}", pair[0], pair[1]);
        }
    }

    /// Aggregation is deterministic regardless of input order
    #[test]
    fn prop_aggregation_is_order_independent(records in proptest::collection::vec(arb_record(), 0..50)) {
        let mut reversed = records.clone();
        reversed.reverse();

        let forward = Report::from_records(records);
        let backward = Report::from_records(reversed);

        prop_assert_eq!(forward.total_elapsed, backward.total_elapsed);
        prop_assert_eq!(forward.hits, backward.hits);
        prop_assert_eq!(forward.misses, backward.misses);

        // Compare the ranking keys; two records may share unit and elapsed
        // while differing in cache outcome, and those are interchangeable
        let forward_keys: Vec<_> =
            forward.ranked().iter().map(|r| (r.elapsed, r.unit.clone())).collect();
        let backward_keys: Vec<_> =
            backward.ranked().iter().map(|r| (r.elapsed, r.unit.clone())).collect();
        prop_assert_eq!(forward_keys, backward_keys);
    }

    /// slowest(n) never exceeds n or the record count
    #[test]
    fn prop_slowest_is_clamped(
        records in proptest::collection::vec(arb_record(), 0..50),
        n in 0usize..100,
    ) {
        let count = records.len();
        let report = Report::from_records(records);
        prop_assert_eq!(report.slowest(n).len(), n.min(count));
    }
}
