//! Property tests for the score formula: bounds, monotonic combination,
//! and count conservation through the fold.

use jsc_report::{pct_tenths, ScoreCounts};
use proptest::prelude::*;

fn counts_strategy() -> impl Strategy<Value = ScoreCounts> {
    (0u64..10_000, 0u64..10_000, 0u64..10_000, 0u64..10_000).prop_map(
        |(req_total, req_sub, opt_total, opt_sub)| {
            // pass <= total by construction.
            let req_pass = if req_total == 0 { 0 } else { req_sub % (req_total + 1) };
            let opt_pass = if opt_total == 0 { 0 } else { opt_sub % (opt_total + 1) };
            ScoreCounts::from_counts(req_pass, req_total, opt_pass, opt_total)
        },
    )
}

proptest! {
    #[test]
    fn score_is_bounded(counts in counts_strategy()) {
        prop_assert!(counts.score_tenths() <= 1000);
    }

    #[test]
    fn all_pass_scores_exactly_100(req in 1u64..10_000, opt in 1u64..10_000) {
        let counts = ScoreCounts::from_counts(req, req, opt, opt);
        prop_assert_eq!(counts.score_tenths(), 1000);
    }

    #[test]
    fn all_fail_scores_exactly_0(req in 1u64..10_000, opt in 1u64..10_000) {
        let counts = ScoreCounts::from_counts(0, req, 0, opt);
        prop_assert_eq!(counts.score_tenths(), 0);
    }

    #[test]
    fn pct_is_bounded(value in 0u64..10_000, extra in 0u64..10_000) {
        let total = value + extra;
        prop_assert!(pct_tenths(value, total) <= 1000);
    }

    #[test]
    fn combine_conserves_counts(a in counts_strategy(), b in counts_strategy()) {
        let combined = a.combine(b);
        prop_assert_eq!(combined.total(), a.total() + b.total());
        prop_assert_eq!(combined.req_fail(), a.req_fail() + b.req_fail());
        prop_assert_eq!(combined.opt_fail(), a.opt_fail() + b.opt_fail());
    }

    #[test]
    fn more_passes_never_lower_the_score(counts in counts_strategy()) {
        if counts.req_pass() < counts.req_total() {
            let better = ScoreCounts::from_counts(
                counts.req_pass() + 1,
                counts.req_total(),
                counts.opt_pass(),
                counts.opt_total(),
            );
            prop_assert!(better.score_tenths() >= counts.score_tenths());
        }
    }
}
