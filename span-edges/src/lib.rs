// SPDX-License-Identifier: MPL-2.0

//! This crate contains a performance-optimized boundary list for sets of integers made of runs.
//!
//! [`Edges`] stores a set of `i32` as a strictly increasing sequence of boundaries. Boundaries at
//! even positions start a run, boundaries at odd positions are one past the run's inclusive upper
//! bound. The set `{1, 3, 4, 5, 6, 7, 9, 11, 12}` is stored as `[1, 2, 3, 8, 9, 10, 11, 13]`.
//!
//! Because the representation is canonical (runs are maximal, never empty and never touch), two
//! [`Edges`] are equal exactly when they hold the same integers.
//!
//! Unbounded sets are expressed with two sentinels, [`Edges::NEG_INF`] and [`Edges::POS_INF`].
//! They are the smallest and largest members any set may hold. Both are one step inside the
//! `i32` range (two on the positive side) so that the exclusive-end arithmetic never overflows.
//!
//! All mutation funnels through two primitives:
//!  - [find_pos(v, from)](Edges::find_pos): binary search for the first boundary `>= v`. An odd
//!    result means `v` lies strictly inside a run.
//!  - [add_pair(lower, upper)](Edges::add_pair): replaces the boundaries covered by
//!    `lower..=upper` (widened to any run it overlaps or touches) with a single run.
//!
//! Removal and complement reuse them: [invert](Edges::invert) toggles the sentinels at both ends,
//! and [remove_pair](Edges::remove_pair) is `invert`, `add_pair`, `invert`.
//!
//! ## Optional features
//!
//! * `proptest`: Exports a proptest strategy for [`Edges`].

use std::ops::Range;

#[cfg(any(feature = "proptest", test))]
use proptest::prelude::*;
use smallvec::{smallvec, SmallVec};

/// A set of integers stored as sorted half-open run boundaries.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Edges {
    /// Always of even length and strictly increasing.
    edges: SmallVec<[i32; 4]>,
}

impl Edges {
    /// Smallest representable member, also the first boundary of a negative-infinite set.
    pub const NEG_INF: i32 = i32::MIN + 1;

    /// Largest representable member.
    pub const POS_INF: i32 = i32::MAX - 2;

    /// Exclusive boundary closing a positive-infinite set.
    const POS_EDGE: i32 = Self::POS_INF + 1;

    /// Empty set.
    pub fn empty() -> Self {
        Self {
            edges: SmallVec::new(),
        }
    }

    /// Set of every integer from [`Edges::NEG_INF`] to [`Edges::POS_INF`].
    pub fn universal() -> Self {
        Self {
            edges: smallvec![Self::NEG_INF, Self::POS_EDGE],
        }
    }

    /// Whether `value` may be stored in a set.
    pub fn in_domain(value: i32) -> bool {
        (Self::NEG_INF..=Self::POS_INF).contains(&value)
    }

    /// Whether the set has no runs.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of boundaries, twice the number of runs.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Number of runs.
    pub fn span_len(&self) -> usize {
        self.edges.len() / 2
    }

    /// The raw boundaries.
    pub fn as_slice(&self) -> &[i32] {
        self.edges.as_slice()
    }

    /// Whether the first run starts at [`Edges::NEG_INF`].
    pub fn is_neg_inf(&self) -> bool {
        self.edges.first() == Some(&Self::NEG_INF)
    }

    /// Whether the last run ends at [`Edges::POS_INF`].
    pub fn is_pos_inf(&self) -> bool {
        self.edges.last() == Some(&Self::POS_EDGE)
    }

    /// Whether the set holds every representable integer.
    pub fn is_universal(&self) -> bool {
        self.edges.as_slice() == [Self::NEG_INF, Self::POS_EDGE]
    }

    /// Smallest member, if any.
    pub fn first(&self) -> Option<i32> {
        self.edges.first().copied()
    }

    /// Largest member, if any.
    pub fn last(&self) -> Option<i32> {
        self.edges.last().map(|end| end - 1)
    }

    /// Iterate over the runs as inclusive `(lower, upper)` pairs, in ascending order.
    pub fn runs(&self) -> impl DoubleEndedIterator<Item = (i32, i32)> + ExactSizeIterator + '_ {
        self.edges
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1] - 1))
    }

    /// Returns the index of the first boundary at or after `from` that is `>= value`, or the
    /// number of boundaries if there is none.
    ///
    /// With `from` at 0, an odd result means that `value` is inside a run without being its
    /// start, so `find_pos(v + 1, 0)` is odd exactly when `v` is a member.
    pub fn find_pos(&self, value: i32, from: usize) -> usize {
        let from = from.min(self.edges.len());
        from + self.edges[from..].partition_point(|&edge| edge < value)
    }

    /// Returns true if `value` is a member of the set.
    pub fn contains(&self, value: i32) -> bool {
        Self::in_domain(value) && self.find_pos(value + 1, 0) % 2 == 1
    }

    /// Adds every integer in `lower..=upper`, merging with overlapping or adjacent runs.
    ///
    /// Returns false and leaves the set untouched if `lower > upper` or either bound is outside
    /// `NEG_INF..=POS_INF`.
    #[must_use = "an invalid pair leaves the set untouched"]
    pub fn add_pair(&mut self, lower: i32, upper: i32) -> bool {
        if !Self::valid_pair(lower, upper) {
            return false;
        }

        let mut start = lower;
        let mut end = upper + 1;
        let mut start_pos = self.find_pos(start, 0);
        let mut end_pos = self.find_pos(end + 1, start_pos);

        // Landing inside a run (or on its exclusive end) means the new run swallows it.
        if start_pos % 2 == 1 {
            start_pos -= 1;
            start = self.edges[start_pos];
        }
        if end_pos % 2 == 1 {
            end = self.edges[end_pos];
            end_pos += 1;
        }

        self.splice(start_pos..end_pos, start, end);
        self.check_invariants();
        true
    }

    /// Removes every integer in `lower..=upper`.
    ///
    /// Returns false and leaves the set untouched under the same conditions as
    /// [add_pair](Edges::add_pair).
    #[must_use = "an invalid pair leaves the set untouched"]
    pub fn remove_pair(&mut self, lower: i32, upper: i32) -> bool {
        if !Self::valid_pair(lower, upper) {
            return false;
        }
        self.invert();
        let added = self.add_pair(lower, upper);
        self.invert();
        added
    }

    /// Complements the set in place.
    ///
    /// Only the sentinels at both ends are touched: each one is dropped if present and inserted
    /// otherwise.
    pub fn invert(&mut self) {
        if self.edges.is_empty() {
            self.edges.extend([Self::NEG_INF, Self::POS_EDGE]);
            return;
        }

        if self.is_neg_inf() {
            self.edges.remove(0);
        } else {
            self.edges.insert(0, Self::NEG_INF);
        }

        if self.is_pos_inf() {
            self.edges.pop();
        } else {
            self.edges.push(Self::POS_EDGE);
        }

        self.check_invariants();
    }

    /// Removes every run.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    fn valid_pair(lower: i32, upper: i32) -> bool {
        lower <= upper && Self::in_domain(lower) && Self::in_domain(upper)
    }

    /// Replace the boundaries in `range` with the single run `start..end`.
    ///
    /// `range` always has an even length, so it either is empty or holds a slot for both new
    /// boundaries.
    fn splice(&mut self, range: Range<usize>, start: i32, end: i32) {
        if range.is_empty() {
            self.edges.insert_many(range.start, [start, end]);
        } else {
            self.edges[range.start] = start;
            self.edges[range.start + 1] = end;
            self.edges.drain(range.start + 2..range.end);
        }
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            assert_eq!(self.edges.len() % 2, 0);
            for p in self.edges.windows(2) {
                assert!(p[0] < p[1]);
            }
            if let (Some(first), Some(last)) = (self.edges.first(), self.edges.last()) {
                assert!(*first >= Self::NEG_INF);
                assert!(*last <= Self::POS_EDGE);
            }
        }
    }
}

/// Generate sets from a sorted, deduplicated list of boundaries, optionally anchored at either
/// sentinel.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl Strategy<Value = Edges> {
    (
        any::<bool>(),
        prop::collection::vec(-500i32..500, 0..12),
    )
        .prop_map(|(neg_inf, mut boundaries)| {
            boundaries.sort_unstable();
            boundaries.dedup();
            if neg_inf {
                boundaries.insert(0, Edges::NEG_INF);
            }
            // An odd count leaves the last run open towards +∞.
            if boundaries.len() % 2 == 1 {
                boundaries.push(Edges::POS_EDGE);
            }
            let edges = Edges {
                edges: boundaries.into_iter().collect(),
            };
            edges.check_invariants();
            edges
        })
}
