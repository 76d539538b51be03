// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Handling intspan errors.

use thiserror::Error;

use crate::runlist::RunlistError;
use crate::span::IntSpan;

/// Errors that may occur while building, mutating or querying an [IntSpan].
///
/// A failing call never leaves the set half-modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntSpanError {
    /// A pair was given with its bounds in the wrong order.
    #[error("invalid range: lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange {
        /// Lower bound as given.
        lower: i32,
        /// Upper bound as given.
        upper: i32,
    },

    /// A value cannot be stored because it lies beyond the infinity sentinels.
    #[error("{value} is outside of the representable range {min}..={max}", min = IntSpan::NEG_INF, max = IntSpan::POS_INF)]
    OutOfDomain {
        /// The offending value.
        value: i32,
    },

    /// Extrema or positional access on a set without elements.
    #[error("the set is empty")]
    EmptySet,

    /// A positional index is zero or larger in magnitude than the cardinality.
    #[error("index {index} is out of range for a set of {cardinality} elements")]
    OutOfRange {
        /// The requested 1-based index.
        index: i64,
        /// Number of elements in the set.
        cardinality: u64,
    },

    /// An inverse index lookup on a value the set does not hold.
    #[error("{element} is not a member of the set")]
    NotAMember {
        /// The value that was looked up.
        element: i32,
    },

    /// The runlist string could not be parsed.
    #[error(transparent)]
    Runlist(#[from] RunlistError),
}
