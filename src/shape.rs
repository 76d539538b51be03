// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Operations on the shape of runs: bounding span, gaps, shrinking and growing.

use crate::span::{run_len, IntSpan};

impl IntSpan {
    /// Returns a single run from [min](IntSpan::min) to [max](IntSpan::max).
    pub fn cover(&self) -> Self {
        let mut cover = Self::new();
        if let (Some(min), Some(max)) = (self.edges.first(), self.edges.last()) {
            cover.add_run(min, max);
        }
        cover
    }

    /// Returns the integers lying between the runs of `self`.
    ///
    /// Only gaps bounded by runs on both sides count, so empty and universal sets have no holes.
    pub fn holes(&self) -> Self {
        let mut holes = Self::new();
        if self.is_empty() || self.is_universal() {
            return holes;
        }

        let complement = self.complement();
        // Unbounded arms of the complement lie outside of `self`, not between its runs.
        let skip = usize::from(complement.is_neg_inf());
        let take = complement
            .span_len()
            .saturating_sub(skip + usize::from(complement.is_pos_inf()));
        for (lower, upper) in complement.runs().skip(skip).take(take) {
            holes.add_run(lower, upper);
        }
        holes
    }

    /// Removes `n` integers from each end of each run, or adds `-n` when `n` is negative.
    ///
    /// Infinite ends stay where they are. Runs shrinking below one member vanish; growing runs
    /// merge when they meet and stop at the infinity sentinels.
    pub fn inset(&self, n: i32) -> Self {
        self.inset_by(i64::from(n))
    }

    /// Same as [inset](IntSpan::inset).
    pub fn trim(&self, n: i32) -> Self {
        self.inset(n)
    }

    /// Adds `n` integers to each end of each run, same as `inset(-n)`.
    pub fn pad(&self, n: i32) -> Self {
        self.inset_by(-i64::from(n))
    }

    fn inset_by(&self, n: i64) -> Self {
        let mut inset = Self::new();
        for (lower, upper) in self.runs() {
            let lower = if lower == Self::NEG_INF {
                i64::from(lower)
            } else {
                i64::from(lower) + n
            };
            let upper = if upper == Self::POS_INF {
                i64::from(upper)
            } else {
                i64::from(upper) - n
            };
            // Collapsed runs are dropped before clamping, so none survive as a sentinel.
            if lower <= upper {
                inset.add_run(clamp_to_domain(lower), clamp_to_domain(upper));
            }
        }
        inset
    }

    /// Returns the runs of `self` holding at least `min_length` members.
    pub fn excise(&self, min_length: u64) -> Self {
        let mut excised = Self::new();
        for (lower, upper) in self.runs() {
            if run_len(lower, upper) >= min_length {
                excised.add_run(lower, upper);
            }
        }
        excised
    }

    /// Returns `self` with every hole of at most `max_length` members filled in.
    pub fn fill(&self, max_length: u64) -> Self {
        let mut filled = self.clone();
        let holes = self.holes();
        let mut count = 0;
        for (lower, upper) in holes.runs() {
            if run_len(lower, upper) <= max_length {
                filled.add_run(lower, upper);
                count += 1;
            }
        }
        log::trace!(
            "filled {count} of {} holes no longer than {max_length}",
            holes.span_len()
        );
        filled
    }
}

fn clamp_to_domain(value: i64) -> i32 {
    value.clamp(i64::from(IntSpan::NEG_INF), i64::from(IntSpan::POS_INF)) as i32
}
