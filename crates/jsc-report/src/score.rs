//! # Score Counts
//!
//! Per (implementation, draft) tallies of required and optional test
//! outcomes, and the weighted conformance score derived from them.
//!
//! ## Score formula
//!
//! With `REQUIRED_WEIGHT = 3`:
//!
//! ```text
//! score = 100 * (reqPassRatio * 3 + optPassRatio) / W
//! ```
//!
//! where `W` sums the weights of the buckets that were actually measured
//! (3 when any required case ran, +1 when any optional case ran). A bucket
//! with zero coverage contributes 0 to the ratios and 0 to `W`, never NaN:
//! a draft measured only on required cases can still score 100.
//!
//! All rendered figures use half-even rounding to one decimal place,
//! computed with integer arithmetic so ties round exactly.

use std::cmp::Ordering;

use jsc_engine::TestResult;

/// Required-case conformance counts this many times an optional pass.
pub const REQUIRED_WEIGHT: u64 = 3;

/// Outcome tallies for one (implementation, draft) bucket. Derived by a
/// fold over [`TestResult`]s; never persisted independently of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCounts {
    req_pass: u64,
    req_total: u64,
    opt_pass: u64,
    opt_total: u64,
}

impl ScoreCounts {
    pub fn from_counts(req_pass: u64, req_total: u64, opt_pass: u64, opt_total: u64) -> Self {
        Self {
            req_pass,
            req_total,
            opt_pass,
            opt_total,
        }
    }

    /// Tally one result into the appropriate bucket.
    pub fn record(&mut self, result: &TestResult) {
        if result.optional() {
            self.opt_total += 1;
            if result.passed() {
                self.opt_pass += 1;
            }
        } else {
            self.req_total += 1;
            if result.passed() {
                self.req_pass += 1;
            }
        }
    }

    /// Element-wise sum. Used to build the Overall bucket, which is scored
    /// from summed counts rather than averaged per-draft scores.
    pub fn combine(self, other: Self) -> Self {
        Self {
            req_pass: self.req_pass + other.req_pass,
            req_total: self.req_total + other.req_total,
            opt_pass: self.opt_pass + other.opt_pass,
            opt_total: self.opt_total + other.opt_total,
        }
    }

    pub fn req_pass(&self) -> u64 {
        self.req_pass
    }

    pub fn req_total(&self) -> u64 {
        self.req_total
    }

    pub fn req_fail(&self) -> u64 {
        self.req_total - self.req_pass
    }

    pub fn opt_pass(&self) -> u64 {
        self.opt_pass
    }

    pub fn opt_total(&self) -> u64 {
        self.opt_total
    }

    pub fn opt_fail(&self) -> u64 {
        self.opt_total - self.opt_pass
    }

    pub fn total(&self) -> u64 {
        self.req_total + self.opt_total
    }

    /// The weighted score in tenths of a point, range `0..=1000`.
    pub fn score_tenths(&self) -> u64 {
        let weight = |total: u64, w: u64| if total == 0 { 0 } else { w };
        let denominator_weight =
            weight(self.req_total, REQUIRED_WEIGHT) + weight(self.opt_total, 1);
        if denominator_weight == 0 {
            return 0;
        }

        // score = 1000 * (3 * rp + op) / W in tenths, as one exact rational.
        // Totals of zero are normalized to 1 so the term contributes 0/1.
        let req_den = self.req_total.max(1) as u128;
        let opt_den = self.opt_total.max(1) as u128;
        let numerator = 1000
            * (REQUIRED_WEIGHT as u128 * self.req_pass as u128 * opt_den
                + self.opt_pass as u128 * req_den);
        let denominator = denominator_weight as u128 * req_den * opt_den;
        div_tenths_half_even(numerator, denominator)
    }

    pub fn req_pass_pct_tenths(&self) -> u64 {
        pct_tenths(self.req_pass, self.req_total)
    }

    pub fn req_fail_pct_tenths(&self) -> u64 {
        pct_tenths(self.req_fail(), self.req_total)
    }

    pub fn opt_pass_pct_tenths(&self) -> u64 {
        pct_tenths(self.opt_pass, self.opt_total)
    }

    pub fn opt_fail_pct_tenths(&self) -> u64 {
        pct_tenths(self.opt_fail(), self.opt_total)
    }

    /// Dense human-readable cell content. Empty when nothing was measured.
    pub fn cell_text(&self) -> String {
        if self.total() == 0 {
            return String::new();
        }
        format!(
            "score: {}<br>pass: r:{} ({}%) o:{} ({}%)<br>fail: r:{} ({}%) o:{} ({}%)",
            format_tenths(self.score_tenths()),
            self.req_pass,
            format_tenths(self.req_pass_pct_tenths()),
            self.opt_pass,
            format_tenths(self.opt_pass_pct_tenths()),
            self.req_fail(),
            format_tenths(self.req_fail_pct_tenths()),
            self.opt_fail(),
            format_tenths(self.opt_fail_pct_tenths()),
        )
    }

    /// Machine-readable form carrying raw counts, not formatted strings.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "requiredPass": self.req_pass,
            "requiredFail": self.req_fail(),
            "requiredTotal": self.req_total,
            "optionalPass": self.opt_pass,
            "optionalFail": self.opt_fail(),
            "optionalTotal": self.opt_total,
            "requiredPassPct": tenths_as_f64(self.req_pass_pct_tenths()),
            "optionalPassPct": tenths_as_f64(self.opt_pass_pct_tenths()),
            "score": tenths_as_f64(self.score_tenths()),
        })
    }
}

/// `value / total * 100` in tenths of a percent, half-even; 0 when `total == 0`.
pub fn pct_tenths(value: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    div_tenths_half_even(1000 * value as u128, total as u128)
}

/// Exact round-half-even of `numerator / denominator` (already scaled to
/// tenths by the caller).
fn div_tenths_half_even(numerator: u128, denominator: u128) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let rounded = match (2 * remainder).cmp(&denominator) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => {
            if quotient % 2 == 0 {
                quotient
            } else {
                quotient + 1
            }
        }
    };
    rounded as u64
}

/// Render tenths as a one-decimal figure, e.g. `956 -> "95.6"`.
pub fn format_tenths(tenths: u64) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

fn tenths_as_f64(tenths: u64) -> f64 {
    tenths as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_required_only_scores_100() {
        let counts = ScoreCounts::from_counts(2, 2, 0, 0);
        assert_eq!(counts.score_tenths(), 1000);
        assert_eq!(format_tenths(counts.score_tenths()), "100.0");
    }

    #[test]
    fn test_half_required_only_scores_50() {
        let counts = ScoreCounts::from_counts(1, 2, 0, 0);
        assert_eq!(format_tenths(counts.score_tenths()), "50.0");
    }

    #[test]
    fn test_required_weighted_three_to_one() {
        // Full required, zero optional: 100 * 3/4 = 75.
        let counts = ScoreCounts::from_counts(10, 10, 0, 10);
        assert_eq!(format_tenths(counts.score_tenths()), "75.0");

        // Zero required, full optional: 100 * 1/4 = 25.
        let counts = ScoreCounts::from_counts(0, 10, 10, 10);
        assert_eq!(format_tenths(counts.score_tenths()), "25.0");
    }

    #[test]
    fn test_zero_coverage_scores_zero_not_nan() {
        let counts = ScoreCounts::default();
        assert_eq!(counts.score_tenths(), 0);
    }

    #[test]
    fn test_pct_half_even_rounding() {
        // 1/16 = 6.25% -> 6.2 (round to even), 3/16 = 18.75% -> 18.8.
        assert_eq!(pct_tenths(1, 16), 62);
        assert_eq!(pct_tenths(3, 16), 188);
        // 1/3 = 33.333..% -> 33.3.
        assert_eq!(pct_tenths(1, 3), 333);
        assert_eq!(pct_tenths(0, 0), 0);
    }

    #[test]
    fn test_combine_is_elementwise() {
        let a = ScoreCounts::from_counts(1, 2, 3, 4);
        let b = ScoreCounts::from_counts(10, 20, 30, 40);
        assert_eq!(a.combine(b), ScoreCounts::from_counts(11, 22, 33, 44));
    }

    #[test]
    fn test_cell_text_empty_when_unmeasured() {
        assert_eq!(ScoreCounts::default().cell_text(), "");
    }

    #[test]
    fn test_cell_text_dense_format() {
        let counts = ScoreCounts::from_counts(3, 4, 1, 2);
        // score = 100 * (3*0.75 + 0.5) / 4 = 68.75 -> 68.8 (half-even, odd up).
        assert_eq!(
            counts.cell_text(),
            "score: 68.8<br>pass: r:3 (75.0%) o:1 (50.0%)<br>fail: r:1 (25.0%) o:1 (50.0%)"
        );
    }

    #[test]
    fn test_json_carries_raw_counts() {
        let json = ScoreCounts::from_counts(3, 4, 1, 2).to_json();
        assert_eq!(json["requiredPass"], 3);
        assert_eq!(json["requiredFail"], 1);
        assert_eq!(json["optionalTotal"], 2);
        assert_eq!(json["score"], 68.8);
    }
}
