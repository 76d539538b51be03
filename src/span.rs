// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The [IntSpan] set type, its constructors and its in-place operations.
//!
//! Mutators work on the receiver and hand it back, so calls can be chained:
//! ```
//! # use intspan::IntSpan;
//! # fn main() -> Result<(), intspan::IntSpanError> {
//! let mut set = IntSpan::new();
//! set.add_pair(1, 3)?.add(5)?.add_pair(100, 10000)?.remove(1000)?;
//! assert_eq!(set.to_string(), "1-3,5,100-999,1001-10000");
//! # Ok(())
//! # }
//! ```
//! Fallible mutators check all of their input before touching the set.

use span_edges::Edges;

use crate::error::IntSpanError;
use crate::runlist;

/// A set of integers held as maximal runs.
///
/// Equality compares the boundary lists, which is exact since every set has a single canonical
/// representation.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct IntSpan {
    pub(crate) edges: Edges,
}

impl IntSpan {
    /// Negative infinity: the smallest integer a set can hold.
    pub const NEG_INF: i32 = Edges::NEG_INF;

    /// Positive infinity: the largest integer a set can hold.
    pub const POS_INF: i32 = Edges::POS_INF;

    /// Runlist of the empty set.
    pub const EMPTY_RUNLIST: &'static str = "-";

    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set of all integers from [IntSpan::NEG_INF] to [IntSpan::POS_INF].
    pub fn universal() -> Self {
        Self {
            edges: Edges::universal(),
        }
    }

    /// Set containing exactly one integer.
    pub fn from_value(value: i32) -> Result<Self, IntSpanError> {
        Self::from_pair(value, value)
    }

    /// Set of the integers `lower..=upper`.
    pub fn from_pair(lower: i32, upper: i32) -> Result<Self, IntSpanError> {
        let mut set = Self::new();
        set.add_pair(lower, upper)?;
        Ok(set)
    }

    /// Set of the given integers, in any order and possibly repeated.
    pub fn from_values(values: impl IntoIterator<Item = i32>) -> Result<Self, IntSpanError> {
        let mut set = Self::new();
        set.add_values(values)?;
        Ok(set)
    }

    /// Union of inclusive `(lower, upper)` pairs.
    pub fn from_ranges(ranges: impl IntoIterator<Item = (i32, i32)>) -> Result<Self, IntSpanError> {
        let mut set = Self::new();
        set.add_ranges(ranges)?;
        Ok(set)
    }

    /// The underlying boundary list.
    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    /// Number of boundaries, twice the number of runs.
    pub fn edge_len(&self) -> usize {
        self.edges.len()
    }

    /// Number of runs.
    pub fn span_len(&self) -> usize {
        self.edges.span_len()
    }

    /// Iterate over the runs as inclusive `(lower, upper)` pairs, in ascending order.
    pub fn runs(&self) -> impl DoubleEndedIterator<Item = (i32, i32)> + ExactSizeIterator + '_ {
        self.edges.runs()
    }

    /// The runs as inclusive `(lower, upper)` pairs.
    pub fn ranges(&self) -> Vec<(i32, i32)> {
        self.runs().collect()
    }

    /// Iterate over every member in ascending order.
    ///
    /// Infinite sets yield billions of values; prefer [runs](IntSpan::runs) for those.
    pub fn elements(&self) -> impl Iterator<Item = i32> + '_ {
        self.runs().flat_map(|(lower, upper)| lower..=upper)
    }

    /// Every member in ascending order.
    pub fn to_vec(&self) -> Vec<i32> {
        self.elements().collect()
    }

    // Predicates ##############################################################

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the set extends down to [IntSpan::NEG_INF].
    pub fn is_neg_inf(&self) -> bool {
        self.edges.is_neg_inf()
    }

    /// Whether the set extends up to [IntSpan::POS_INF].
    pub fn is_pos_inf(&self) -> bool {
        self.edges.is_pos_inf()
    }

    /// Whether the set is unbounded on either side.
    pub fn is_infinite(&self) -> bool {
        self.is_neg_inf() || self.is_pos_inf()
    }

    /// Whether the set is bounded on both sides. The empty set is finite.
    pub fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    /// Whether the set holds every representable integer.
    pub fn is_universal(&self) -> bool {
        self.edges.is_universal()
    }

    /// Returns true if `value` is a member.
    pub fn contains(&self, value: i32) -> bool {
        self.edges.contains(value)
    }

    /// Returns true if at least one of `values` is a member.
    pub fn contains_any(&self, values: impl IntoIterator<Item = i32>) -> bool {
        values.into_iter().any(|v| self.contains(v))
    }

    /// Returns true if every one of `values` is a member.
    pub fn contains_all(&self, values: impl IntoIterator<Item = i32>) -> bool {
        values.into_iter().all(|v| self.contains(v))
    }

    // Adding ##################################################################

    /// Adds a single integer.
    pub fn add(&mut self, value: i32) -> Result<&mut Self, IntSpanError> {
        self.add_pair(value, value)
    }

    /// Adds the integers `lower..=upper`.
    pub fn add_pair(&mut self, lower: i32, upper: i32) -> Result<&mut Self, IntSpanError> {
        check_pair(lower, upper)?;
        self.add_run(lower, upper);
        Ok(self)
    }

    /// Adds every inclusive `(lower, upper)` pair.
    ///
    /// If any pair is invalid, nothing is added.
    pub fn add_ranges(
        &mut self,
        ranges: impl IntoIterator<Item = (i32, i32)>,
    ) -> Result<&mut Self, IntSpanError> {
        let ranges = checked_ranges(ranges)?;
        for (lower, upper) in ranges {
            self.add_run(lower, upper);
        }
        Ok(self)
    }

    /// Adds the given integers, in any order and possibly repeated.
    pub fn add_values(
        &mut self,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<&mut Self, IntSpanError> {
        let ranges = values_to_ranges(values)?;
        self.add_ranges(ranges)
    }

    /// Adds the integers described by a runlist such as `1-3,5`.
    pub fn add_runlist(&mut self, runlist: &str) -> Result<&mut Self, IntSpanError> {
        let ranges = runlist::parse(runlist)?;
        self.add_ranges(ranges)
    }

    /// Adds every member of `other`.
    pub fn merge(&mut self, other: &IntSpan) -> &mut Self {
        for (lower, upper) in other.runs() {
            self.add_run(lower, upper);
        }
        self
    }

    // Removing ################################################################

    /// Removes a single integer.
    pub fn remove(&mut self, value: i32) -> Result<&mut Self, IntSpanError> {
        self.remove_pair(value, value)
    }

    /// Removes the integers `lower..=upper`.
    pub fn remove_pair(&mut self, lower: i32, upper: i32) -> Result<&mut Self, IntSpanError> {
        check_pair(lower, upper)?;
        let removed = self.edges.remove_pair(lower, upper);
        debug_assert!(removed);
        Ok(self)
    }

    /// Removes every inclusive `(lower, upper)` pair.
    ///
    /// If any pair is invalid, nothing is removed.
    pub fn remove_ranges(
        &mut self,
        ranges: impl IntoIterator<Item = (i32, i32)>,
    ) -> Result<&mut Self, IntSpanError> {
        let ranges = checked_ranges(ranges)?;
        if ranges.is_empty() {
            return Ok(self);
        }
        // Removing from a set is adding to its complement.
        self.edges.invert();
        for (lower, upper) in ranges {
            self.add_run(lower, upper);
        }
        self.edges.invert();
        Ok(self)
    }

    /// Removes the given integers, in any order and possibly repeated.
    pub fn remove_values(
        &mut self,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<&mut Self, IntSpanError> {
        let ranges = values_to_ranges(values)?;
        self.remove_ranges(ranges)
    }

    /// Removes the integers described by a runlist such as `1-3,5`.
    pub fn remove_runlist(&mut self, runlist: &str) -> Result<&mut Self, IntSpanError> {
        let ranges = runlist::parse(runlist)?;
        self.remove_ranges(ranges)
    }

    /// Removes every member of `other`.
    pub fn subtract(&mut self, other: &IntSpan) -> &mut Self {
        if self.is_empty() || other.is_empty() {
            return self;
        }
        self.edges.invert();
        for (lower, upper) in other.runs() {
            self.add_run(lower, upper);
        }
        self.edges.invert();
        self
    }

    // Whole set ###############################################################

    /// Complements the set in place.
    ///
    /// The complement of the empty set is [IntSpan::universal].
    pub fn invert(&mut self) -> &mut Self {
        self.edges.invert();
        self
    }

    /// Removes every member.
    pub fn clear(&mut self) -> &mut Self {
        self.edges.clear();
        self
    }

    /// Adds a run whose bounds are already known to be valid.
    pub(crate) fn add_run(&mut self, lower: i32, upper: i32) {
        let added = self.edges.add_pair(lower, upper);
        debug_assert!(added, "invalid run {lower}..={upper}");
    }
}

impl From<Edges> for IntSpan {
    fn from(edges: Edges) -> Self {
        Self { edges }
    }
}

/// Number of integers in `lower..=upper`.
pub(crate) fn run_len(lower: i32, upper: i32) -> u64 {
    (i64::from(upper) - i64::from(lower) + 1) as u64
}

fn check_value(value: i32) -> Result<(), IntSpanError> {
    if Edges::in_domain(value) {
        Ok(())
    } else {
        Err(IntSpanError::OutOfDomain { value })
    }
}

fn check_pair(lower: i32, upper: i32) -> Result<(), IntSpanError> {
    if lower > upper {
        return Err(IntSpanError::InvalidRange { lower, upper });
    }
    check_value(lower)?;
    check_value(upper)
}

fn checked_ranges(
    ranges: impl IntoIterator<Item = (i32, i32)>,
) -> Result<Vec<(i32, i32)>, IntSpanError> {
    let ranges: Vec<_> = ranges.into_iter().collect();
    for &(lower, upper) in &ranges {
        check_pair(lower, upper)?;
    }
    Ok(ranges)
}

/// Group integers into runs of consecutive values.
///
/// ```text
/// [9, 1, 2, 3, 5, 2] -> [(1, 3), (5, 5), (9, 9)]
/// ```
fn values_to_ranges(
    values: impl IntoIterator<Item = i32>,
) -> Result<Vec<(i32, i32)>, IntSpanError> {
    let mut values: Vec<_> = values.into_iter().collect();
    for &v in &values {
        check_value(v)?;
    }
    values.sort_unstable();

    let mut ranges: Vec<(i32, i32)> = Vec::new();
    for v in values {
        match ranges.last_mut() {
            Some((_, upper)) if v <= *upper + 1 => *upper = v,
            _ => ranges.push((v, v)),
        }
    }
    Ok(ranges)
}
