// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sets of integers as runs of inclusive spans.
//!
//! An [IntSpan] holds a set of `i32` such as `{1, 2, 3, 5, 7, 8, 9}` as its maximal runs
//! `1-3, 5, 7-9`. The cost of every operation grows with the number of runs, never with the
//! number of members, which makes it a good fit for large sparse sets like genomic coordinates
//! or id ranges.
//!
//! # Building sets
//!
//! Sets are built empty, from a value, a pair, a list of values or pairs, or from their runlist
//! notation, and are then grown or shrunk in place:
//! ```
//! use intspan::IntSpan;
//!
//! # fn main() -> Result<(), intspan::IntSpanError> {
//! let mut set: IntSpan = "1-3,5,7-9".parse()?;
//! assert_eq!(set.cardinality(), 7);
//!
//! set.add(4)?.remove_pair(8, 9)?;
//! assert_eq!(set.to_string(), "1-5,7");
//! # Ok(())
//! # }
//! ```
//!
//! # Set algebra
//!
//! [union](IntSpan::union), [intersect](IntSpan::intersect), [diff](IntSpan::diff),
//! [xor](IntSpan::xor) and [complement](IntSpan::complement) return new sets and leave their
//! operands alone.
//! ```
//! # use intspan::IntSpan;
//! # fn main() -> Result<(), intspan::IntSpanError> {
//! let a: IntSpan = "3-9".parse()?;
//! let b: IntSpan = "1-5".parse()?;
//! assert_eq!(a.union(&b).to_string(), "1-9");
//! assert_eq!(a.intersect(&b).to_string(), "3-5");
//! assert_eq!(a.xor(&b).to_string(), "1-2,6-9");
//! assert_eq!(a.diff(&b).to_string(), "6-9");
//! # Ok(())
//! # }
//! ```
//!
//! # Infinity
//!
//! The domain is bounded by [IntSpan::NEG_INF] and [IntSpan::POS_INF], which stand in for the
//! infinities. The complement of the empty set is the universal set running from one to the
//! other, and one-sided infinite sets are built with them directly:
//! ```
//! # use intspan::IntSpan;
//! # fn main() -> Result<(), intspan::IntSpanError> {
//! let positive = IntSpan::from_pair(1, IntSpan::POS_INF)?;
//! assert!(positive.is_pos_inf() && !positive.is_neg_inf());
//! assert_eq!(positive.complement().max()?, 0);
//! assert!(IntSpan::new().complement().is_universal());
//! # Ok(())
//! # }
//! ```
//!
//! The edge-list representation itself lives in the [span_edges] crate, re-exported here as
//! [Edges].
//!
//! ## Optional features
//!
//! * `serde`: serialization and deserialization of [IntSpan] as its runlist string.

#![warn(missing_docs)]

pub mod error;
pub mod runlist;

mod algebra;
mod index;
mod shape;
mod span;

pub use error::IntSpanError;
pub use runlist::RunlistError;
pub use span::IntSpan;
pub use span_edges::Edges;
