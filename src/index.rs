// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cardinality, extrema and 1-based positional access.
//!
//! All of these walk runs, never individual members, so they stay cheap on wide or infinite
//! sets.

use crate::error::IntSpanError;
use crate::span::{run_len, IntSpan};

impl IntSpan {
    /// Number of members.
    pub fn cardinality(&self) -> u64 {
        self.runs().map(|(lower, upper)| run_len(lower, upper)).sum()
    }

    /// Smallest member.
    pub fn min(&self) -> Result<i32, IntSpanError> {
        self.edges.first().ok_or(IntSpanError::EmptySet)
    }

    /// Largest member.
    pub fn max(&self) -> Result<i32, IntSpanError> {
        self.edges.last().ok_or(IntSpanError::EmptySet)
    }

    /// Returns the member at a 1-based position.
    ///
    /// Negative positions count from the end, so `-1` is the largest member. Position `0` is
    /// never valid.
    pub fn at(&self, index: i64) -> Result<i32, IntSpanError> {
        if self.is_empty() {
            return Err(IntSpanError::EmptySet);
        }
        let cardinality = self.cardinality();
        let target = index.unsigned_abs();
        if target == 0 || target > cardinality {
            return Err(IntSpanError::OutOfRange { index, cardinality });
        }

        // Members skipped in the runs already walked.
        let mut skipped = 0;
        if index > 0 {
            for (lower, upper) in self.runs() {
                let len = run_len(lower, upper);
                if target <= skipped + len {
                    return Ok(shift(lower, (target - skipped - 1) as i64));
                }
                skipped += len;
            }
        } else {
            for (lower, upper) in self.runs().rev() {
                let len = run_len(lower, upper);
                if target <= skipped + len {
                    return Ok(shift(upper, -((target - skipped - 1) as i64)));
                }
                skipped += len;
            }
        }
        Err(IntSpanError::OutOfRange { index, cardinality })
    }

    /// Returns the 1-based position of a member.
    pub fn index(&self, element: i32) -> Result<u64, IntSpanError> {
        if self.is_empty() {
            return Err(IntSpanError::EmptySet);
        }
        let mut before = 0;
        for (lower, upper) in self.runs() {
            if element < lower {
                break;
            }
            if element <= upper {
                return Ok(before + run_len(lower, element));
            }
            before += run_len(lower, upper);
        }
        Err(IntSpanError::NotAMember { element })
    }
}

/// `value + offset`, where the caller guarantees the result stays inside a run.
fn shift(value: i32, offset: i64) -> i32 {
    (i64::from(value) + offset) as i32
}
