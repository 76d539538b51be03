// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Set algebra producing new sets.
//!
//! Everything here is built from [merge](IntSpan::merge) and [invert](IntSpan::invert): the
//! intersection is the complement of the union of complements, and a difference is a union into
//! a complement. Operands are never modified and results never share storage with them.

use crate::span::IntSpan;

impl IntSpan {
    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        let mut union = self.clone();
        union.merge(other);
        union
    }

    /// Returns the complement, which contains everything not included in `self`.
    pub fn complement(&self) -> Self {
        let mut complement = self.clone();
        complement.invert();
        complement
    }

    /// Returns the members of `self` that are not in `other`.
    pub fn diff(&self, other: &Self) -> Self {
        if self.is_empty() {
            return Self::new();
        }
        let mut diff = self.clone();
        diff.subtract(other);
        diff
    }

    /// Returns the intersection of `self` and `other`.
    pub fn intersect(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::new();
        }
        // ¬(¬A ∪ ¬B)
        let mut intersection = self.complement();
        intersection.merge(&other.complement());
        intersection.invert();
        intersection
    }

    /// Returns the members that are in exactly one of `self` and `other`.
    pub fn xor(&self, other: &Self) -> Self {
        let mut xor = self.union(other);
        xor.subtract(&self.intersect(other));
        xor
    }

    /// Returns true if every member of `self` is also in `other`.
    pub fn subset(&self, other: &Self) -> bool {
        self.diff(other).is_empty()
    }

    /// Returns true if every member of `other` is also in `self`.
    pub fn superset(&self, other: &Self) -> bool {
        other.diff(self).is_empty()
    }
}
